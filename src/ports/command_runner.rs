//! External command port definition.

use std::time::Duration;

use crate::domain::AppError;

/// Captured result of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Whether the process exited with status zero.
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// Trimmed stderr, falling back to stdout when stderr is empty.
    pub fn diagnostics(&self) -> String {
        let stderr = self.stderr.trim();
        if stderr.is_empty() { self.stdout.trim().to_string() } else { stderr.to_string() }
    }
}

/// Port for running external programs.
pub trait CommandRunner {
    /// Run `program` with `args` in the current working directory.
    ///
    /// A process that exits unsuccessfully is still `Ok`; errors are reserved for
    /// spawn failures (`Io`) and exceeding `timeout` (`CommandTimedOut`).
    fn run(&self, program: &str, args: &[&str], timeout: Duration)
    -> Result<CommandOutput, AppError>;
}
