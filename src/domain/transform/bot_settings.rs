//! Rules for the bot's `settings.json`.

use serde_json::{Value, json};

use crate::domain::document::{section_mut, set_fields};
use crate::domain::{AppError, ConfigurationRecord, ServiceName};

/// MongoDB is always reached through its compose service on the default port.
const MONGO_PORT: u16 = 27017;

pub fn apply(root: &mut Value, record: &ConfigurationRecord) -> Result<(), AppError> {
    let Some(settings) = root.as_object_mut() else {
        return Err(AppError::invalid_configuration("bot settings must be a mapping"));
    };
    set_fields(
        settings,
        [
            ("token", json!(record.bot_token)),
            ("client_id", json!(record.client_id)),
            ("prefix", json!(record.prefix)),
        ],
    );

    if let Some(db) = record.settings(ServiceName::Database) {
        let url = format!(
            "mongodb://{}:{}@{}:{}",
            db.text("username")?,
            db.text("password")?,
            ServiceName::Database.compose_key(),
            MONGO_PORT
        );
        set_fields(settings, [("mongodb_url", json!(url)), ("mongodb_name", json!(db.text("dbname")?))]);
    }

    if let Some(lavalink) = record.settings(ServiceName::AudioServer)
        && let Some(node) = section_mut(root, &["nodes", "DEFAULT"])
    {
        set_fields(
            node,
            [("port", json!(lavalink.integer("port")?)), ("password", json!(lavalink.text("password")?))],
        );
    }

    if let Some(ipc) = section_mut(root, &["ipc_client"]) {
        match record.settings(ServiceName::Dashboard) {
            Some(dashboard) => set_fields(
                ipc,
                [
                    ("enabled", json!(true)),
                    ("host", json!(ServiceName::Dashboard.compose_key())),
                    ("port", json!(dashboard.integer("port")?)),
                    ("password", json!(dashboard.text("password")?)),
                ],
            ),
            None => set_fields(ipc, [("enabled", json!(false))]),
        }
    }

    Ok(())
}
