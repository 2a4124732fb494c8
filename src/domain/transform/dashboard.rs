//! Rules for the dashboard's `settings.json`.

use serde_json::{Value, json};

use crate::domain::document::set_fields;
use crate::domain::{AppError, ServiceSettings};

/// Overwrite every dashboard field in one pass.
///
/// The dashboard logs in through the bot's OAuth application, so `client_id`
/// is the bot's.
pub fn apply(root: &mut Value, settings: &ServiceSettings, client_id: &str) -> Result<(), AppError> {
    let fields = [
        ("host", json!(settings.text("host")?)),
        ("port", json!(settings.integer("port")?)),
        ("password", json!(settings.text("password")?)),
        ("client_id", json!(client_id)),
        ("client_secret_id", json!(settings.text("oauth_client_secret")?)),
        ("redirect_url", json!(settings.text("redirect_url")?)),
        ("secret_key", json!(settings.text("session_secret_key")?)),
    ];
    let section = root
        .as_object_mut()
        .ok_or_else(|| AppError::invalid_configuration("dashboard settings must be a mapping"))?;
    set_fields(section, fields);
    Ok(())
}
