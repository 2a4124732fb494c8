//! Template retrieval into the installation directory.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, InstallLayout, ServiceName, TemplateCatalog, TemplateKind};
use crate::ports::TemplateSource;

/// A template written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedTemplate {
    pub kind: TemplateKind,
    pub path: PathBuf,
}

/// Downloads the templates an installation needs.
pub struct TemplateFetcher<'a, S: TemplateSource> {
    source: &'a S,
    catalog: &'a TemplateCatalog,
}

impl<'a, S: TemplateSource> TemplateFetcher<'a, S> {
    pub fn new(source: &'a S, catalog: &'a TemplateCatalog) -> Self {
        Self { source, catalog }
    }

    /// Create the needed directories and download every needed template.
    ///
    /// Stops at the first failure; nothing already written is removed.
    pub fn fetch(
        &self,
        layout: &InstallLayout,
        enabled: &BTreeSet<ServiceName>,
    ) -> Result<Vec<FetchedTemplate>, AppError> {
        create_directory(layout.root())?;

        let mut fetched = Vec::new();
        for kind in TemplateKind::ALL {
            if let Some(owner) = kind.owner() {
                if !enabled.contains(&owner) {
                    continue;
                }
                for dir in layout.service_directories(owner) {
                    create_directory(&dir)?;
                }
            }

            let url = self.catalog.url(kind)?;
            let path = layout.template_path(kind);
            self.source.fetch(&url, &path).map_err(|err| match err {
                AppError::Fetch { details, .. } => {
                    AppError::Fetch { what: kind.label().to_string(), details }
                }
                other => AppError::Fetch { what: kind.label().to_string(), details: other.to_string() },
            })?;
            tracing::info!(template = kind.label(), path = %path.display(), "template downloaded");
            fetched.push(FetchedTemplate { kind, path });
        }
        Ok(fetched)
    }
}

fn create_directory(path: &Path) -> Result<(), AppError> {
    fs::create_dir_all(path).map_err(|e| AppError::Fetch {
        what: format!("directory {}", path.display()),
        details: e.to_string(),
    })
}
