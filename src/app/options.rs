//! Run-level configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Repository the templates are published from.
pub const DEFAULT_REPOSITORY: &str = "ChocoMeow/Vocard";
/// Host serving raw repository files.
pub const DEFAULT_TEMPLATE_HOST: &str = "https://raw.githubusercontent.com";
/// Upper bound for long orchestrator operations (pull, up).
pub const DEFAULT_TIMEOUT_SECS: u64 = 1800;
/// Directory name proposed under the current directory.
pub const DEFAULT_INSTALL_DIR_NAME: &str = "vocard";

/// Options for one installer run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOptions {
    /// `OWNER/NAME` of the bot repository.
    pub repository: String,
    pub template_host: String,
    /// Skips the installation-directory prompt when set.
    pub install_dir: Option<PathBuf>,
    /// Launch services after configuring them.
    pub start_services: bool,
    pub timeout: Duration,
}

impl Default for InstallOptions {
    fn default() -> Self {
        Self {
            repository: DEFAULT_REPOSITORY.to_string(),
            template_host: DEFAULT_TEMPLATE_HOST.to_string(),
            install_dir: None,
            start_services: true,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl InstallOptions {
    /// Support page shown at the end of a run.
    pub fn support_url(&self) -> String {
        format!("https://github.com/{}", self.repository)
    }
}
