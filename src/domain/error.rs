use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for installer operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration record is incomplete or inconsistent.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Reading interactive input failed.
    #[error("Failed to read input: {0}")]
    Prompt(String),

    /// The user interrupted the run.
    #[error("Installation cancelled by user")]
    Cancelled,

    /// Template retrieval or directory creation failed.
    #[error("Failed to fetch {what}: {details}")]
    Fetch { what: String, details: String },

    /// A template document could not be read, parsed, or written.
    #[error("Failed to update {}: {details}", file.display())]
    Transform { file: PathBuf, details: String },

    /// Some entries kept their previous access mode.
    #[error("Could not adjust permissions for {failed} entries under {}", path.display())]
    PermissionsPartial { path: PathBuf, failed: usize },

    /// The container orchestrator is not installed or not reachable.
    #[error("{0}")]
    OrchestratorUnavailable(String),

    /// The orchestrator refused access to the current user.
    #[error("Permission denied while talking to Docker. {remedy}")]
    OrchestratorPermission { remedy: String },

    /// An external command exited unsuccessfully.
    #[error("Command '{command}' failed: {details}")]
    CommandFailed { command: String, details: String },

    /// An external command exceeded its time budget.
    #[error("Command '{command}' timed out after {timeout_secs}s")]
    CommandTimedOut { command: String, timeout_secs: u64 },
}

impl AppError {
    pub fn invalid_configuration<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfiguration(message.into())
    }

    pub(crate) fn transform<P: Into<PathBuf>, S: ToString>(file: P, details: S) -> Self {
        AppError::Transform { file: file.into(), details: details.to_string() }
    }

    /// Process exit status used when this error ends the run.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Cancelled => 130,
            _ => 1,
        }
    }
}
