use std::cell::RefCell;
use std::time::Duration;

use vocard_installer::AppError;
use vocard_installer::ports::{CommandOutput, CommandRunner};

/// Command runner that never spawns anything.
///
/// Commands succeed unless a failure was registered for a matching prefix.
#[derive(Debug, Default)]
pub(crate) struct RecordingRunner {
    failures: Vec<(String, String)>,
    calls: RefCell<Vec<String>>,
}

impl RecordingRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fail(mut self, prefix: &str, stderr: &str) -> Self {
        self.failures.push((prefix.to_string(), stderr.to_string()));
        self
    }

    pub(crate) fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        _timeout: Duration,
    ) -> Result<CommandOutput, AppError> {
        let command = std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ");
        self.calls.borrow_mut().push(command.clone());
        let failure = self.failures.iter().find(|(prefix, _)| command.starts_with(prefix.as_str()));
        Ok(match failure {
            Some((_, stderr)) => {
                CommandOutput { success: false, stdout: String::new(), stderr: stderr.clone() }
            }
            None => CommandOutput { success: true, stdout: String::new(), stderr: String::new() },
        })
    }
}
