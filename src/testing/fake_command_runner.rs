use std::cell::RefCell;
use std::path::PathBuf;
use std::time::Duration;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner};
use crate::services::display_command;

/// Scripted response for commands starting with a prefix.
type Responder = Box<dyn Fn() -> Result<CommandOutput, AppError>>;

/// Command runner that answers from a script and records calls.
///
/// Unscripted commands succeed with empty output.
#[derive(Default)]
pub struct FakeCommandRunner {
    responses: Vec<(String, Responder)>,
    pub calls: RefCell<Vec<String>>,
    /// Working directory observed at each call.
    pub directories: RefCell<Vec<PathBuf>>,
}

impl FakeCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(
        mut self,
        prefix: &str,
        responder: impl Fn() -> Result<CommandOutput, AppError> + 'static,
    ) -> Self {
        self.responses.push((prefix.to_string(), Box::new(responder)));
        self
    }

    /// Make commands starting with `prefix` exit unsuccessfully.
    pub fn fail(self, prefix: &str, stderr: &str) -> Self {
        let stderr = stderr.to_string();
        self.respond(prefix, move || {
            Ok(CommandOutput { success: false, stdout: String::new(), stderr: stderr.clone() })
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for FakeCommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        _timeout: Duration,
    ) -> Result<CommandOutput, AppError> {
        let command = display_command(program, args);
        self.calls.borrow_mut().push(command.clone());
        if let Ok(dir) = std::env::current_dir() {
            self.directories.borrow_mut().push(dir);
        }
        match self.responses.iter().find(|(prefix, _)| command.starts_with(prefix.as_str())) {
            Some((_, responder)) => responder(),
            None => Ok(CommandOutput { success: true, stdout: String::new(), stderr: String::new() }),
        }
    }
}
