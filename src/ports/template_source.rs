//! Template download port definition.

use std::path::Path;

use url::Url;

use crate::domain::AppError;

/// Port for retrieving a remote document into a local file.
pub trait TemplateSource {
    /// Download `url` and write its bytes to `destination`, replacing any existing file.
    fn fetch(&self, url: &Url, destination: &Path) -> Result<(), AppError>;
}
