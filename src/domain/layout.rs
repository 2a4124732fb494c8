use std::path::{Path, PathBuf};

use url::Url;

use super::{AppError, ServiceName};

pub const COMPOSE_FILE: &str = "docker-compose.yml";
pub const BOT_SETTINGS_FILE: &str = "settings.json";
pub const LAVALINK_DIR: &str = "lavalink";
pub const DASHBOARD_DIR: &str = "dashboard";
/// Host side of the MongoDB data volume, relative to the install directory.
pub const DATABASE_DATA_DIR: &str = "data/mongodb";

/// Template documents fetched for an installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKind {
    Compose,
    BotSettings,
    LavalinkSettings,
    DashboardSettings,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Compose,
        TemplateKind::BotSettings,
        TemplateKind::LavalinkSettings,
        TemplateKind::DashboardSettings,
    ];

    /// Service that must be enabled for this template to be needed.
    pub fn owner(&self) -> Option<ServiceName> {
        match self {
            TemplateKind::Compose | TemplateKind::BotSettings => None,
            TemplateKind::LavalinkSettings => Some(ServiceName::AudioServer),
            TemplateKind::DashboardSettings => Some(ServiceName::Dashboard),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemplateKind::Compose => "docker-compose.yml",
            TemplateKind::BotSettings => "bot settings",
            TemplateKind::LavalinkSettings => "lavalink settings",
            TemplateKind::DashboardSettings => "dashboard settings",
        }
    }

    /// Location relative to the raw-content host.
    fn remote_path(&self, repository: &str) -> String {
        match self {
            TemplateKind::Compose => format!("{repository}-Installer/main/docker-compose.yml"),
            TemplateKind::BotSettings => format!("{repository}/main/settings%20Example.json"),
            TemplateKind::LavalinkSettings => {
                format!("{repository}-Installer/main/lavalink/application.yml")
            }
            TemplateKind::DashboardSettings => {
                format!("{repository}-Dashboard/main/settings%20Example.json")
            }
        }
    }
}

/// Paths of everything the installer writes under the install directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    root: PathBuf,
}

impl InstallLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn lavalink_dir(&self) -> PathBuf {
        self.root.join(LAVALINK_DIR)
    }

    pub fn dashboard_dir(&self) -> PathBuf {
        self.root.join(DASHBOARD_DIR)
    }

    pub fn database_data_dir(&self) -> PathBuf {
        self.root.join(DATABASE_DATA_DIR)
    }

    /// Local file for a template.
    pub fn template_path(&self, kind: TemplateKind) -> PathBuf {
        match kind {
            TemplateKind::Compose => self.root.join(COMPOSE_FILE),
            TemplateKind::BotSettings => self.root.join(BOT_SETTINGS_FILE),
            TemplateKind::LavalinkSettings => self.lavalink_dir().join("application.yml"),
            TemplateKind::DashboardSettings => self.dashboard_dir().join("settings.json"),
        }
    }

    /// Directories a service needs before its files are written.
    pub fn service_directories(&self, service: ServiceName) -> Vec<PathBuf> {
        match service {
            ServiceName::AudioServer => {
                let lavalink = self.lavalink_dir();
                vec![lavalink.clone(), lavalink.join("plugins"), lavalink.join("logs")]
            }
            ServiceName::Dashboard => vec![self.dashboard_dir()],
            ServiceName::Database => vec![self.database_data_dir()],
            ServiceName::TokenService => Vec::new(),
        }
    }
}

/// Remote URLs of the template documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateCatalog {
    host: Url,
    repository: String,
}

impl TemplateCatalog {
    pub fn new(host: &str, repository: &str) -> Result<Self, AppError> {
        let mut host = Url::parse(host).map_err(|e| {
            AppError::invalid_configuration(format!("Invalid template host '{}': {}", host, e))
        })?;
        if !host.path().ends_with('/') {
            let path = format!("{}/", host.path());
            host.set_path(&path);
        }
        let repository = repository.trim_matches('/');
        if repository.split('/').filter(|part| !part.is_empty()).count() != 2 {
            return Err(AppError::invalid_configuration(format!(
                "Repository must look like OWNER/NAME, got '{}'",
                repository
            )));
        }
        Ok(Self { host, repository: repository.to_string() })
    }

    pub fn url(&self, kind: TemplateKind) -> Result<Url, AppError> {
        self.host.join(&kind.remote_path(&self.repository)).map_err(|e| AppError::Fetch {
            what: kind.label().to_string(),
            details: format!("invalid template URL: {e}"),
        })
    }
}
