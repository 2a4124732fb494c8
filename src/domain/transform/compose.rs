//! Rules for `docker-compose.yml`.

use serde_json::{Map, Value, json};

use crate::domain::layout::DATABASE_DATA_DIR;
use crate::domain::{AppError, ConfigurationRecord, ServiceName, ServiceSettings};

/// Container path MongoDB keeps its data in.
const MONGO_DATA_PATH: &str = "/data/db";

/// Rewrite the compose document for the enabled services.
///
/// Returns the compose keys that were removed.
pub fn apply(root: &mut Value, record: &ConfigurationRecord) -> Result<Vec<String>, AppError> {
    let disabled: Vec<&'static str> =
        record.disabled_services().map(|service| service.compose_key()).collect();

    let Some(services) = root.get_mut("services").and_then(Value::as_object_mut) else {
        return Ok(Vec::new());
    };

    let removed = prune_services(services, &disabled);

    for (name, definition) in services.iter_mut() {
        prune_dependencies(definition, &disabled);

        match ServiceName::from_compose_key(name) {
            Some(ServiceName::AudioServer) => {
                configure_lavalink(definition, record.require_settings(ServiceName::AudioServer)?)?
            }
            Some(ServiceName::Database) => {
                configure_database(definition, record.require_settings(ServiceName::Database)?)?
            }
            Some(ServiceName::Dashboard) => {
                configure_dashboard(definition, record.require_settings(ServiceName::Dashboard)?)?
            }
            _ => {}
        }
    }

    Ok(removed)
}

/// Drop every service whose key is disabled.
fn prune_services(services: &mut Map<String, Value>, disabled: &[&str]) -> Vec<String> {
    let snapshot: Vec<String> = services.keys().cloned().collect();
    let mut removed = Vec::new();
    for name in snapshot {
        if disabled.contains(&name.as_str()) {
            services.remove(&name);
            removed.push(name);
        }
    }
    removed
}

/// Remove `depends_on` entries naming a disabled service.
///
/// Handles both the list and the mapping form; an emptied `depends_on` is dropped.
fn prune_dependencies(definition: &mut Value, disabled: &[&str]) {
    let Some(definition) = definition.as_object_mut() else {
        return;
    };
    let now_empty = match definition.get_mut("depends_on") {
        Some(Value::Array(list)) => {
            list.retain(|dep| dep.as_str().is_none_or(|name| !disabled.contains(&name)));
            list.is_empty()
        }
        Some(Value::Object(map)) => {
            map.retain(|name, _| !disabled.contains(&name.as_str()));
            map.is_empty()
        }
        _ => false,
    };
    if now_empty {
        definition.remove("depends_on");
    }
}

fn configure_lavalink(definition: &mut Value, settings: &ServiceSettings) -> Result<(), AppError> {
    let port = settings.integer("port")?;
    let password = settings.text("password")?;
    if let Some(definition) = definition.as_object_mut() {
        definition.insert(
            "environment".into(),
            json!([format!("SERVER_PORT={port}"), format!("LAVALINK_SERVER_PASSWORD={password}")]),
        );
        definition.insert("expose".into(), json!([port]));
    }
    Ok(())
}

fn configure_database(definition: &mut Value, settings: &ServiceSettings) -> Result<(), AppError> {
    let username = settings.text("username")?;
    let password = settings.text("password")?;
    let Some(definition) = definition.as_object_mut() else {
        return Ok(());
    };
    definition.insert(
        "environment".into(),
        json!([
            format!("MONGO_INITDB_ROOT_USERNAME={username}"),
            format!("MONGO_INITDB_ROOT_PASSWORD={password}")
        ]),
    );

    let mount = format!("./{DATABASE_DATA_DIR}:{MONGO_DATA_PATH}");
    let volumes = definition.entry("volumes").or_insert_with(|| Value::Array(Vec::new()));
    if !volumes.is_array() {
        *volumes = Value::Array(Vec::new());
    }
    if let Value::Array(list) = volumes
        && !list.iter().any(|entry| entry.as_str() == Some(mount.as_str()))
    {
        list.push(Value::String(mount));
    }
    Ok(())
}

fn configure_dashboard(definition: &mut Value, settings: &ServiceSettings) -> Result<(), AppError> {
    let port = settings.integer("port")?;
    if let Some(definition) = definition.as_object_mut() {
        definition.insert("ports".into(), json!([format!("{port}:{port}")]));
    }
    Ok(())
}
