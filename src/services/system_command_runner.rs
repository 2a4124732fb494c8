//! External commands via `std::process` with a polling timeout.

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs programs as child processes of the installer.
#[derive(Debug, Clone, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(
        &self,
        program: &str,
        args: &[&str],
        timeout: Duration,
    ) -> Result<CommandOutput, AppError> {
        let command_line = display_command(program, args);
        tracing::debug!(command = %command_line, timeout_secs = timeout.as_secs(), "running");

        let mut command = Command::new(program);
        command.args(args).stdin(Stdio::null()).stdout(Stdio::piped()).stderr(Stdio::piped());
        // Own process group, so a timeout also reaches plugin grandchildren.
        #[cfg(unix)]
        std::os::unix::process::CommandExt::process_group(&mut command, 0);
        let mut child = command.spawn()?;

        // Drain pipes concurrently so chatty commands cannot block on a full buffer.
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let started = Instant::now();
        let status = loop {
            if let Some(status) = child.try_wait()? {
                break status;
            }
            if started.elapsed() >= timeout {
                terminate(&mut child);
                // Pipes close once the whole group is gone.
                for handle in [stdout, stderr].into_iter().flatten() {
                    collect(handle);
                }
                tracing::warn!(command = %command_line, "timed out");
                return Err(AppError::CommandTimedOut {
                    command: command_line,
                    timeout_secs: timeout.as_secs(),
                });
            }
            thread::sleep(POLL_INTERVAL);
        };

        let output = CommandOutput {
            success: status.success(),
            stdout: stdout.map(collect).unwrap_or_default(),
            stderr: stderr.map(collect).unwrap_or_default(),
        };
        tracing::debug!(command = %command_line, %status, "finished");
        Ok(output)
    }
}

#[cfg(unix)]
fn terminate(child: &mut Child) {
    use nix::sys::signal::{Signal, killpg};
    use nix::unistd::Pid;

    if let Err(err) = killpg(Pid::from_raw(child.id() as i32), Signal::SIGKILL) {
        tracing::debug!(%err, "killpg failed; killing the child only");
        let _ = child.kill();
    }
    let _ = child.wait();
}

#[cfg(not(unix))]
fn terminate(child: &mut Child) {
    let _ = child.kill();
    let _ = child.wait();
}

pub(crate) fn display_command(program: &str, args: &[&str]) -> String {
    std::iter::once(program).chain(args.iter().copied()).collect::<Vec<_>>().join(" ")
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buffer = Vec::new();
        let _ = pipe.read_to_end(&mut buffer);
        String::from_utf8_lossy(&buffer).into_owned()
    })
}

fn collect(handle: thread::JoinHandle<String>) -> String {
    handle.join().unwrap_or_default()
}
