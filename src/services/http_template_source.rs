//! Template downloads over HTTP using reqwest.

use std::fs;
use std::path::Path;
use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::domain::AppError;
use crate::ports::TemplateSource;

/// Timeout applied to each template download.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 60;

/// Blocking HTTP client for raw template files.
#[derive(Debug, Clone)]
pub struct HttpTemplateSource {
    client: Client,
}

impl HttpTemplateSource {
    pub fn new(timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                AppError::invalid_configuration(format!("Failed to create HTTP client: {}", e))
            })?;
        Ok(Self { client })
    }
}

impl TemplateSource for HttpTemplateSource {
    fn fetch(&self, url: &Url, destination: &Path) -> Result<(), AppError> {
        let fetch_error = |details: String| AppError::Fetch { what: url.to_string(), details };

        tracing::debug!(%url, destination = %destination.display(), "downloading template");
        let response = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| fetch_error(format!("HTTP request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("server responded with {}", status)));
        }

        let body = response
            .bytes()
            .map_err(|e| fetch_error(format!("Failed to read response body: {}", e)))?;
        fs::write(destination, &body).map_err(|e| {
            fetch_error(format!("Failed to write {}: {}", destination.display(), e))
        })?;
        Ok(())
    }
}
