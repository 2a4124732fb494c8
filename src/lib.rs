//! vocard-installer: configure and launch a Vocard deployment with Docker Compose.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

use std::time::Duration;

use app::{AppContext, commands::install};
use services::{
    DEFAULT_FETCH_TIMEOUT_SECS, HttpTemplateSource, SystemCommandRunner, TerminalConsole,
};

pub use app::commands::install::InstallOutcome;
pub use app::options::InstallOptions;
pub use domain::{AppError, ConfigurationRecord, ServiceName, TransformReport};

/// Run an interactive installation on the current terminal.
pub fn install(options: &InstallOptions) -> Result<InstallOutcome, AppError> {
    let templates = HttpTemplateSource::new(Duration::from_secs(DEFAULT_FETCH_TIMEOUT_SECS))?;
    let mut ctx = AppContext::new(TerminalConsole::new(), templates, SystemCommandRunner::new());

    install::execute(&mut ctx, options)
}
