use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use url::Url;

use crate::domain::AppError;
use crate::ports::TemplateSource;

/// Serves documents from memory, keyed by the last URL path segment.
#[derive(Debug, Default)]
pub struct FakeTemplateSource {
    documents: HashMap<String, String>,
    pub requested: RefCell<Vec<String>>,
}

impl FakeTemplateSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for any URL whose path ends with `suffix`.
    pub fn with(mut self, suffix: &str, body: &str) -> Self {
        self.documents.insert(suffix.to_string(), body.to_string());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.borrow().clone()
    }
}

impl TemplateSource for FakeTemplateSource {
    fn fetch(&self, url: &Url, destination: &Path) -> Result<(), AppError> {
        self.requested.borrow_mut().push(url.path().to_string());
        let body = self
            .documents
            .iter()
            .find(|(suffix, _)| url.path().ends_with(suffix.as_str()))
            .map(|(_, body)| body)
            .ok_or_else(|| AppError::Fetch {
                what: url.to_string(),
                details: "server responded with 404 Not Found".to_string(),
            })?;
        fs::write(destination, body)?;
        Ok(())
    }
}
