//! Docker preflight checks and the compose launch sequence.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::AppError;
use crate::ports::{CommandOutput, CommandRunner};

/// Time allowed for version and daemon probes.
pub const CHECK_TIMEOUT: Duration = Duration::from_secs(120);

/// Which compose front-end is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComposeFlavor {
    /// `docker compose` (v2 CLI plugin).
    Plugin,
    /// `docker-compose` (v1 standalone binary).
    Standalone,
}

impl ComposeFlavor {
    fn program(&self) -> &'static str {
        match self {
            ComposeFlavor::Plugin => "docker",
            ComposeFlavor::Standalone => "docker-compose",
        }
    }

    fn args<'a>(&self, args: &[&'a str]) -> Vec<&'a str> {
        match self {
            ComposeFlavor::Plugin => std::iter::once("compose").chain(args.iter().copied()).collect(),
            ComposeFlavor::Standalone => args.to_vec(),
        }
    }

    /// Full command line for a compose subcommand, as shown to users.
    pub fn command(&self, args: &[&str]) -> String {
        format!("{} {}", self, args.join(" "))
    }

    fn run<R: CommandRunner>(
        &self,
        runner: &R,
        args: &[&str],
        timeout: Duration,
    ) -> Result<CommandOutput, AppError> {
        runner.run(self.program(), &self.args(args), timeout)
    }
}

impl fmt::Display for ComposeFlavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComposeFlavor::Plugin => write!(f, "docker compose"),
            ComposeFlavor::Standalone => write!(f, "docker-compose"),
        }
    }
}

fn probe<R: CommandRunner>(runner: &R, program: &str, args: &[&str]) -> bool {
    match runner.run(program, args, CHECK_TIMEOUT) {
        Ok(output) => output.success,
        Err(err) => {
            tracing::debug!(program, error = %err, "probe failed");
            false
        }
    }
}

/// Verify Docker is installed and pick the compose flavor to use.
pub fn check_orchestrator<R: CommandRunner>(runner: &R) -> Result<ComposeFlavor, AppError> {
    if !probe(runner, "docker", &["--version"]) {
        return Err(AppError::OrchestratorUnavailable(
            "Docker is not installed. Please install Docker manually.".into(),
        ));
    }
    if probe(runner, "docker", &["compose", "version"]) {
        return Ok(ComposeFlavor::Plugin);
    }
    if probe(runner, "docker-compose", &["--version"]) {
        return Ok(ComposeFlavor::Standalone);
    }
    Err(AppError::OrchestratorUnavailable(
        "Docker Compose is not available. Please install it manually.".into(),
    ))
}

/// Verify the current user can reach the Docker daemon.
///
/// `os` follows `std::env::consts::OS` and selects the remedy text.
pub fn check_daemon_access<R: CommandRunner>(runner: &R, os: &str) -> Result<(), AppError> {
    let output = runner.run("docker", &["info"], CHECK_TIMEOUT).map_err(|err| {
        AppError::OrchestratorUnavailable(format!("Docker daemon is not reachable: {err}"))
    })?;
    if output.success {
        return Ok(());
    }
    let diagnostics = output.diagnostics();
    if diagnostics.to_lowercase().contains("permission denied") {
        return Err(AppError::OrchestratorPermission { remedy: permission_remedy(os).to_string() });
    }
    Err(AppError::OrchestratorUnavailable(format!("Docker daemon is not reachable: {diagnostics}")))
}

fn permission_remedy(os: &str) -> &'static str {
    match os {
        "linux" => {
            "Add your user to the docker group with `sudo usermod -aG docker $USER`, then log out and back in."
        }
        "macos" | "windows" => "Make sure Docker Desktop is running.",
        _ => "Make sure your user is allowed to access the Docker daemon.",
    }
}

/// Switches the process working directory and restores it on drop.
pub struct WorkingDirGuard {
    previous: PathBuf,
}

impl WorkingDirGuard {
    pub fn enter(dir: &Path) -> Result<Self, AppError> {
        let previous = env::current_dir()?;
        env::set_current_dir(dir)?;
        Ok(Self { previous })
    }
}

impl Drop for WorkingDirGuard {
    fn drop(&mut self) {
        if let Err(err) = env::set_current_dir(&self.previous) {
            tracing::warn!(dir = %self.previous.display(), error = %err, "could not restore working directory");
        }
    }
}

/// What happened while starting the stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchReport {
    /// Set when refreshing images failed; the start went ahead anyway.
    pub pull_warning: Option<String>,
    /// Output of the status query, when it succeeded.
    pub status: Option<String>,
}

/// Pulls images and starts the compose project in the install directory.
pub struct OrchestratorLauncher<'a, R: CommandRunner> {
    runner: &'a R,
    flavor: ComposeFlavor,
    timeout: Duration,
}

impl<'a, R: CommandRunner> OrchestratorLauncher<'a, R> {
    pub fn new(runner: &'a R, flavor: ComposeFlavor, timeout: Duration) -> Self {
        Self { runner, flavor, timeout }
    }

    pub fn start(&self, install_dir: &Path) -> Result<LaunchReport, AppError> {
        let _cwd = WorkingDirGuard::enter(install_dir)?;

        let pull_warning = match self.flavor.run(self.runner, &["pull"], self.timeout) {
            Ok(output) if output.success => None,
            Ok(output) => Some(output.diagnostics()),
            Err(err) => Some(err.to_string()),
        };
        if let Some(warning) = &pull_warning {
            tracing::warn!(warning = %warning, "image pull failed");
        }

        let up = self.flavor.run(self.runner, &["up", "-d"], self.timeout)?;
        if !up.success {
            return Err(AppError::CommandFailed {
                command: self.flavor.command(&["up", "-d"]),
                details: up.diagnostics(),
            });
        }

        let status = match self.flavor.run(self.runner, &["ps"], self.timeout) {
            Ok(output) if output.success => Some(output.stdout.trim_end().to_string()),
            Ok(output) => {
                tracing::debug!(details = %output.diagnostics(), "status query failed");
                None
            }
            Err(err) => {
                tracing::debug!(error = %err, "status query failed");
                None
            }
        };

        Ok(LaunchReport { pull_warning, status })
    }
}
