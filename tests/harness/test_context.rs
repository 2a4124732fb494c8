//! Shared testing harness for `vocard-installer` integration tests.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::Value;
use tempfile::TempDir;
use vocard_installer::app::AppContext;
use vocard_installer::app::commands::install;
use vocard_installer::ports::CommandRunner;
use vocard_installer::services::HttpTemplateSource;
use vocard_installer::{AppError, InstallOptions, InstallOutcome};

use super::ScriptedConsole;

pub(crate) const COMPOSE_TEMPLATE: &str = include_str!("../fixtures/docker-compose.yml");
pub(crate) const BOT_TEMPLATE: &str = include_str!("../fixtures/bot-settings.json");
pub(crate) const LAVALINK_TEMPLATE: &str = include_str!("../fixtures/application.yml");
pub(crate) const DASHBOARD_TEMPLATE: &str = include_str!("../fixtures/dashboard-settings.json");

/// Bodies served for each template; `None` answers 404.
pub(crate) struct TemplateSet {
    pub(crate) compose: Option<String>,
    pub(crate) bot: Option<String>,
    pub(crate) lavalink: Option<String>,
    pub(crate) dashboard: Option<String>,
}

impl Default for TemplateSet {
    fn default() -> Self {
        Self {
            compose: Some(COMPOSE_TEMPLATE.to_string()),
            bot: Some(BOT_TEMPLATE.to_string()),
            lavalink: Some(LAVALINK_TEMPLATE.to_string()),
            dashboard: Some(DASHBOARD_TEMPLATE.to_string()),
        }
    }
}

/// Everything left behind by one installer run.
pub(crate) struct InstallRun<R> {
    pub(crate) result: Result<InstallOutcome, AppError>,
    pub(crate) console: ScriptedConsole,
    pub(crate) runner: R,
}

/// Isolated install directory plus a local template server.
pub(crate) struct TestContext {
    root: TempDir,
    server: ServerGuard,
    mocks: Vec<Mock>,
}

impl TestContext {
    /// Serve the stock fixtures.
    pub(crate) fn new() -> Self {
        Self::serving(TemplateSet::default())
    }

    pub(crate) fn serving(templates: TemplateSet) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let mut server = Server::new();
        let routes = [
            (Matcher::Exact("/ChocoMeow/Vocard-Installer/main/docker-compose.yml".into()), templates.compose),
            (Matcher::Regex(r"^/ChocoMeow/Vocard/main/settings(%20| )Example\.json$".into()), templates.bot),
            (
                Matcher::Exact("/ChocoMeow/Vocard-Installer/main/lavalink/application.yml".into()),
                templates.lavalink,
            ),
            (
                Matcher::Regex(r"^/ChocoMeow/Vocard-Dashboard/main/settings(%20| )Example\.json$".into()),
                templates.dashboard,
            ),
        ];
        let mocks = routes
            .into_iter()
            .map(|(path, body)| match body {
                Some(body) => server.mock("GET", path).with_status(200).with_body(body).create(),
                None => server.mock("GET", path).with_status(404).with_body("404: Not Found").create(),
            })
            .collect();
        Self { root, server, mocks }
    }

    pub(crate) fn install_dir(&self) -> PathBuf {
        self.root.path().join("vocard")
    }

    pub(crate) fn path(&self, relative: &str) -> PathBuf {
        self.install_dir().join(relative)
    }

    pub(crate) fn options(&self, start_services: bool) -> InstallOptions {
        InstallOptions {
            template_host: self.server.url(),
            install_dir: Some(self.install_dir()),
            start_services,
            ..InstallOptions::default()
        }
    }

    /// Run the installer with scripted answers and without starting services.
    pub(crate) fn install<R: CommandRunner>(&self, answers: &[&str], runner: R) -> InstallRun<R> {
        self.install_with(answers, runner, self.options(false))
    }

    pub(crate) fn install_with<R: CommandRunner>(
        &self,
        answers: &[&str],
        runner: R,
        options: InstallOptions,
    ) -> InstallRun<R> {
        let templates = HttpTemplateSource::new(Duration::from_secs(5))
            .expect("Failed to build HTTP template source");
        let mut ctx = AppContext::new(ScriptedConsole::new(answers), templates, runner);
        let result = install::execute(&mut ctx, &options);
        let (console, _, runner) = ctx.into_parts();
        InstallRun { result, console, runner }
    }

    pub(crate) fn read_json(&self, relative: &str) -> Value {
        let content = fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"));
        serde_json::from_str(&content).unwrap_or_else(|e| panic!("{relative} is not JSON: {e}"))
    }

    pub(crate) fn read_yaml(&self, relative: &str) -> Value {
        let content = fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative}: {e}"));
        serde_yaml::from_str(&content).unwrap_or_else(|e| panic!("{relative} is not YAML: {e}"))
    }

    pub(crate) fn service_keys(&self) -> Vec<String> {
        let compose = self.read_yaml("docker-compose.yml");
        compose["services"].as_object().map(|s| s.keys().cloned().collect()).unwrap_or_default()
    }
}

/// Answers for the basic section: token, client id, default prefix.
pub(crate) const BASIC: [&str; 3] = ["bot-token", "123456789012345678", ""];

pub(crate) fn is_within(path: &Path, dir: &Path) -> bool {
    match (path.canonicalize(), dir.canonicalize()) {
        (Ok(path), Ok(dir)) => path.starts_with(dir),
        _ => false,
    }
}
