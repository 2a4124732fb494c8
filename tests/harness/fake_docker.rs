use std::ffi::OsString;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Shell stand-ins for `docker` and `docker-compose`, placed first on `PATH`.
///
/// Every invocation is appended to a log as `<cwd>|<command line>`.
pub(crate) struct FakeDocker {
    original_path: Option<OsString>,
    pub(crate) root: TempDir,
    pub(crate) bin_dir: PathBuf,
    pub(crate) log_file: PathBuf,
}

impl FakeDocker {
    /// Docker with the compose plugin and a reachable daemon.
    pub(crate) fn install() -> Self {
        Self::build(true, false, true)
    }

    /// Docker without the plugin, plus a standalone `docker-compose`.
    pub(crate) fn with_standalone_compose() -> Self {
        Self::build(false, true, true)
    }

    /// Docker whose daemon socket refuses the current user.
    pub(crate) fn with_permission_denied() -> Self {
        Self::build(true, false, false)
    }

    fn build(plugin: bool, standalone: bool, daemon_ok: bool) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir for fake docker");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create bin dir");
        let log_file = root.path().join("docker.log");

        let info = if daemon_ok {
            "echo \"Server Version: 27.0.3\""
        } else {
            "echo \"permission denied while trying to connect to the Docker daemon socket at unix:///var/run/docker.sock\" >&2; exit 1"
        };
        let compose = if plugin {
            compose_body("$2")
        } else {
            "echo \"docker: 'compose' is not a docker command.\" >&2; exit 1".to_string()
        };
        let docker = format!(
            r#"#!/bin/sh
echo "$(pwd -P)|docker $*" >> "{log}"
case "$1" in
    --version) echo "Docker version 27.0.3, build 7d4bcd8" ;;
    info) {info} ;;
    compose) {compose} ;;
    *) exit 1 ;;
esac
"#,
            log = log_file.display(),
        );
        write_script(&bin_dir.join("docker"), &docker);

        if standalone {
            let script = format!(
                r#"#!/bin/sh
echo "$(pwd -P)|docker-compose $*" >> "{log}"
case "$1" in
    --version) echo "docker-compose version 1.29.2" ;;
    *) {body} ;;
esac
"#,
                log = log_file.display(),
                body = compose_body("$1"),
            );
            write_script(&bin_dir.join("docker-compose"), &script);
        }

        let original_path = std::env::var_os("PATH");
        unsafe { std::env::set_var("PATH", &bin_dir) };

        Self { original_path, root, bin_dir, log_file }
    }

    /// Logged invocations, in order.
    pub(crate) fn log(&self) -> Vec<(PathBuf, String)> {
        fs::read_to_string(&self.log_file)
            .unwrap_or_default()
            .lines()
            .filter_map(|line| line.split_once('|'))
            .map(|(dir, command)| (PathBuf::from(dir), command.to_string()))
            .collect()
    }

    pub(crate) fn commands(&self) -> Vec<String> {
        self.log().into_iter().map(|(_, command)| command).collect()
    }
}

impl Drop for FakeDocker {
    fn drop(&mut self) {
        match self.original_path.as_ref() {
            Some(original) => unsafe { std::env::set_var("PATH", original) },
            None => unsafe { std::env::remove_var("PATH") },
        }
    }
}

fn compose_body(subcommand: &str) -> String {
    format!(
        r#"case "{subcommand}" in
        version) echo "Docker Compose version v2.29.1" ;;
        ps) echo "NAME     STATUS"; echo "vocard   Up 2 seconds" ;;
        *) ;;
    esac"#
    )
}

fn write_script(path: &Path, content: &str) {
    fs::write(path, content).expect("Failed to write fake script");
    let mut perms = fs::metadata(path).expect("Failed to stat fake script").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).expect("Failed to make fake script executable");
}
