use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::PathBuf;

use serde_json::Value;

use super::field_spec::{FieldKind, FieldSpec};
use super::{AppError, ServiceName};

/// Prefix used when the user leaves the bot prefix empty.
pub const DEFAULT_PREFIX: &str = "?";

/// A collected settings value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Integer(i64),
}

impl FieldValue {
    /// Build a value of the declared kind from raw text.
    pub fn parse(kind: FieldKind, raw: &str) -> Result<Self, std::num::ParseIntError> {
        match kind {
            FieldKind::Text => Ok(FieldValue::Text(raw.to_string())),
            FieldKind::Integer => raw.trim().parse().map(FieldValue::Integer),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(text) => write!(f, "{text}"),
            FieldValue::Integer(number) => write!(f, "{number}"),
        }
    }
}

impl From<&FieldValue> for Value {
    fn from(value: &FieldValue) -> Self {
        match value {
            FieldValue::Text(text) => Value::String(text.clone()),
            FieldValue::Integer(number) => Value::from(*number),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

/// Collected settings for one service, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceSettings {
    service: Option<ServiceName>,
    values: BTreeMap<String, FieldValue>,
}

impl ServiceSettings {
    pub fn new(service: ServiceName) -> Self {
        Self { service: Some(service), values: BTreeMap::new() }
    }

    /// Settings pre-filled with every declared default.
    ///
    /// Empty-allowed fields start as `""`; required fields stay unset.
    pub fn from_defaults(service: ServiceName) -> Self {
        let mut settings = Self::new(service);
        for spec in service.fields() {
            if let Some(default) = spec.default {
                let value = FieldValue::parse(spec.kind, default)
                    .unwrap_or_else(|_| FieldValue::Text(default.to_string()));
                settings.insert(spec.name, value);
            } else if spec.empty_allowed {
                settings.insert(spec.name, FieldValue::Text(String::new()));
            }
        }
        settings
    }

    /// Builder-style setter.
    pub fn with(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value.into());
        self
    }

    pub fn insert(&mut self, name: &str, value: FieldValue) {
        self.values.insert(name.to_string(), value);
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// Text view of a field. Integers are rendered in decimal.
    pub fn text(&self, name: &str) -> Result<String, AppError> {
        self.get(name).map(ToString::to_string).ok_or_else(|| self.missing(name))
    }

    /// Integer view of a field; numeric text is coerced.
    pub fn integer(&self, name: &str) -> Result<i64, AppError> {
        match self.get(name) {
            Some(FieldValue::Integer(number)) => Ok(*number),
            Some(FieldValue::Text(text)) => text.trim().parse().map_err(|_| {
                AppError::invalid_configuration(format!(
                    "{} field '{}' must be a number, got '{}'",
                    self.label(),
                    name,
                    text
                ))
            }),
            None => Err(self.missing(name)),
        }
    }

    fn label(&self) -> &'static str {
        self.service.map(|service| service.compose_key()).unwrap_or("service")
    }

    fn missing(&self, name: &str) -> AppError {
        AppError::invalid_configuration(format!("{} field '{}' is not set", self.label(), name))
    }

    fn validate_against(&self, specs: &[FieldSpec]) -> Result<(), AppError> {
        for spec in specs {
            match self.get(spec.name) {
                None if spec.is_required() || spec.default.is_some() => {
                    return Err(self.missing(spec.name));
                }
                None => {}
                Some(FieldValue::Text(text)) if text.is_empty() && spec.is_required() => {
                    return Err(AppError::invalid_configuration(format!(
                        "{} field '{}' is required",
                        self.label(),
                        spec.name
                    )));
                }
                Some(_) if spec.kind == FieldKind::Integer => {
                    self.integer(spec.name)?;
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Everything collected from the user in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationRecord {
    pub bot_token: String,
    pub client_id: String,
    pub prefix: String,
    pub install_dir: PathBuf,
    pub enabled_services: BTreeSet<ServiceName>,
    pub service_configs: BTreeMap<ServiceName, ServiceSettings>,
}

impl ConfigurationRecord {
    /// Record with no optional services enabled.
    pub fn new(bot_token: &str, client_id: &str, install_dir: impl Into<PathBuf>) -> Self {
        Self {
            bot_token: bot_token.to_string(),
            client_id: client_id.to_string(),
            prefix: DEFAULT_PREFIX.to_string(),
            install_dir: install_dir.into(),
            enabled_services: BTreeSet::new(),
            service_configs: BTreeMap::new(),
        }
    }

    /// Enable a service, attaching its settings when it has any.
    pub fn enable(&mut self, service: ServiceName, settings: Option<ServiceSettings>) {
        self.enabled_services.insert(service);
        if let Some(settings) = settings {
            self.service_configs.insert(service, settings);
        }
    }

    pub fn is_enabled(&self, service: ServiceName) -> bool {
        self.enabled_services.contains(&service)
    }

    /// Settings of an enabled service.
    pub fn settings(&self, service: ServiceName) -> Option<&ServiceSettings> {
        if !self.is_enabled(service) {
            return None;
        }
        self.service_configs.get(&service)
    }

    /// Settings of an enabled service, failing when they were never collected.
    pub fn require_settings(&self, service: ServiceName) -> Result<&ServiceSettings, AppError> {
        self.settings(service).ok_or_else(|| {
            AppError::invalid_configuration(format!("{} is enabled but has no settings", service))
        })
    }

    /// Catalog services the user did not enable.
    pub fn disabled_services(&self) -> impl Iterator<Item = ServiceName> + '_ {
        ServiceName::ALL.into_iter().filter(|service| !self.is_enabled(*service))
    }

    /// Check the record before any document is touched.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.bot_token.trim().is_empty() {
            return Err(AppError::invalid_configuration("bot token is required"));
        }
        if self.client_id.trim().is_empty() {
            return Err(AppError::invalid_configuration("client id is required"));
        }
        for service in &self.enabled_services {
            if service.has_settings() {
                self.require_settings(*service)?.validate_against(service.fields())?;
            }
        }
        Ok(())
    }
}
