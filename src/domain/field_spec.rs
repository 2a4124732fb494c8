//! Per-service settings catalogs.
//!
//! Shared by the input collector (what to ask) and the configuration record
//! (what must be present before documents are rewritten).

/// Value type of a settings field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
}

/// Declaration of a single configurable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Key in `ServiceSettings`.
    pub name: &'static str,
    /// Prompt label.
    pub label: &'static str,
    pub kind: FieldKind,
    pub default: Option<&'static str>,
    /// Without a default, an empty answer is stored as `""` instead of re-prompting.
    pub empty_allowed: bool,
}

impl FieldSpec {
    const fn text(name: &'static str, label: &'static str, default: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Text, default: Some(default), empty_allowed: false }
    }

    const fn integer(name: &'static str, label: &'static str, default: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Integer, default: Some(default), empty_allowed: false }
    }

    const fn required(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Text, default: None, empty_allowed: false }
    }

    const fn optional(name: &'static str, label: &'static str) -> Self {
        Self { name, label, kind: FieldKind::Text, default: None, empty_allowed: true }
    }

    /// A field with no default that may not be left empty.
    pub fn is_required(&self) -> bool {
        self.default.is_none() && !self.empty_allowed
    }
}

pub const DATABASE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("username", "MongoDB Username", "admin"),
    FieldSpec::text("password", "MongoDB Password", "admin"),
    FieldSpec::text("dbname", "MongoDB Database Name", "Vocard"),
];

pub const AUDIO_SERVER_FIELDS: &[FieldSpec] = &[
    FieldSpec::integer("port", "Lavalink Port", "2333"),
    FieldSpec::text("password", "Lavalink Password", "youshallnotpass"),
    FieldSpec::optional("spotify_client_id", "Spotify Client ID"),
    FieldSpec::optional("spotify_client_secret", "Spotify Client Secret"),
];

pub const DASHBOARD_FIELDS: &[FieldSpec] = &[
    FieldSpec::text("host", "Dashboard Host", "0.0.0.0"),
    FieldSpec::integer("port", "Dashboard Port", "8080"),
    FieldSpec::text("password", "Dashboard Password", "admin"),
    FieldSpec::required("oauth_client_secret", "Dashboard OAuth Client Secret"),
    FieldSpec::required("session_secret_key", "Dashboard Secret Key (random string)"),
    FieldSpec::text("redirect_url", "Dashboard Redirect URI", "http://localhost:8080/callback"),
];
