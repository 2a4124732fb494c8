//! Schema-less template documents.
//!
//! Both on-disk formats load into a `serde_json::Value` tree so the rewrite
//! rules never depend on the serialization. Helpers here address that tree by
//! key path.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};

use super::AppError;

/// On-disk serialization of a template document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Infer the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Some(DocumentFormat::Json),
            Some("yml" | "yaml") => Some(DocumentFormat::Yaml),
            _ => None,
        }
    }

    pub fn parse(&self, content: &str) -> Result<Value, String> {
        let value = match self {
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
            DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string())?,
        };
        Ok(value)
    }

    pub fn render(&self, value: &Value) -> Result<String, String> {
        match self {
            DocumentFormat::Json => {
                let mut buffer = Vec::new();
                let formatter = PrettyFormatter::with_indent(b"    ");
                let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
                value.serialize(&mut serializer).map_err(|e| e.to_string())?;
                buffer.push(b'\n');
                String::from_utf8(buffer).map_err(|e| e.to_string())
            }
            DocumentFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        }
    }
}

/// A template document loaded from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    path: PathBuf,
    format: DocumentFormat,
    /// Parsed tree; rules mutate it directly.
    pub root: Value,
}

impl Document {
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let format = DocumentFormat::from_path(path)
            .ok_or_else(|| AppError::transform(path, "unrecognized document extension"))?;
        let content = fs::read_to_string(path).map_err(|e| AppError::transform(path, e))?;
        let root = format.parse(&content).map_err(|e| AppError::transform(path, e))?;
        Ok(Self { path: path.to_path_buf(), format, root })
    }

    pub fn save(&self) -> Result<(), AppError> {
        let rendered =
            self.format.render(&self.root).map_err(|e| AppError::transform(&self.path, e))?;
        fs::write(&self.path, rendered).map_err(|e| AppError::transform(&self.path, e))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Mutable mapping at a key path, if every segment exists and the target is a mapping.
pub fn section_mut<'a>(root: &'a mut Value, path: &[&str]) -> Option<&'a mut Map<String, Value>> {
    path.iter().try_fold(root, |node, key| node.get_mut(*key))?.as_object_mut()
}

/// Set a value at a key path, creating intermediate mappings.
///
/// Non-mapping intermediates are replaced by empty mappings.
pub fn set_path(root: &mut Value, path: &[&str], value: Value) {
    let Some((last, parents)) = path.split_last() else {
        *root = value;
        return;
    };
    let mut node = root;
    for key in parents {
        node = ensure_object(node).entry(key.to_string()).or_insert_with(|| Value::Object(Map::new()));
    }
    ensure_object(node).insert(last.to_string(), value);
}

/// Assign several keys of one mapping at once.
pub fn set_fields<I>(section: &mut Map<String, Value>, fields: I)
where
    I: IntoIterator<Item = (&'static str, Value)>,
{
    for (key, value) in fields {
        section.insert(key.to_string(), value);
    }
}

fn ensure_object(node: &mut Value) -> &mut Map<String, Value> {
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => map,
        _ => unreachable!("node was just replaced by a mapping"),
    }
}
