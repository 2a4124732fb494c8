use std::fmt;

use super::field_spec::{AUDIO_SERVER_FIELDS, DASHBOARD_FIELDS, DATABASE_FIELDS, FieldSpec};

/// Optional services a user may enable on top of the bot itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServiceName {
    /// Lavalink audio node.
    AudioServer,
    /// Spotify anonymous token helper. Toggle only.
    TokenService,
    /// MongoDB instance backing the bot.
    Database,
    /// Web dashboard talking to the bot over IPC.
    Dashboard,
}

impl ServiceName {
    /// Catalog in prompt order.
    pub const ALL: [ServiceName; 4] = [
        ServiceName::AudioServer,
        ServiceName::TokenService,
        ServiceName::Database,
        ServiceName::Dashboard,
    ];

    /// Key of this service in the compose document.
    pub fn compose_key(&self) -> &'static str {
        match self {
            ServiceName::AudioServer => "lavalink",
            ServiceName::TokenService => "spotify-tokener",
            ServiceName::Database => "vocard-db",
            ServiceName::Dashboard => "vocard-dashboard",
        }
    }

    /// Human-readable display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ServiceName::AudioServer => "Lavalink",
            ServiceName::TokenService => "Spotify Tokener",
            ServiceName::Database => "MongoDB",
            ServiceName::Dashboard => "Dashboard",
        }
    }

    /// Service whose compose key is exactly `key`.
    pub fn from_compose_key(key: &str) -> Option<ServiceName> {
        ServiceName::ALL.into_iter().find(|service| service.compose_key() == key)
    }

    /// Statically declared settings fields. Empty for toggle-only services.
    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            ServiceName::AudioServer => AUDIO_SERVER_FIELDS,
            ServiceName::TokenService => &[],
            ServiceName::Database => DATABASE_FIELDS,
            ServiceName::Dashboard => DASHBOARD_FIELDS,
        }
    }

    pub fn has_settings(&self) -> bool {
        !self.fields().is_empty()
    }
}

impl fmt::Display for ServiceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compose_key())
    }
}
