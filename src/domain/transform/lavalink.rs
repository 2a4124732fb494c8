//! Rules for Lavalink's `application.yml`.

use serde_json::{Value, json};

use crate::domain::document::{section_mut, set_fields, set_path};
use crate::domain::{AppError, ServiceSettings};

const SPOTIFY_SECTION: [&str; 3] = ["plugins", "lavasrc", "spotify"];

pub fn apply(root: &mut Value, settings: &ServiceSettings) -> Result<(), AppError> {
    set_path(root, &["server", "port"], json!(settings.integer("port")?));
    set_path(root, &["server", "password"], json!(settings.text("password")?));

    // The anonymous token fallback is always switched off.
    match section_mut(root, &SPOTIFY_SECTION) {
        Some(spotify) => set_fields(
            spotify,
            [
                ("clientId", json!(settings.text("spotify_client_id")?)),
                ("clientSecret", json!(settings.text("spotify_client_secret")?)),
                ("preferAnonymousToken", json!(false)),
            ],
        ),
        None => tracing::debug!("no plugins.lavasrc.spotify section; Spotify credentials not written"),
    }
    Ok(())
}
