//! Interactive collection of the configuration record.
//!
//! Every malformed answer is handled here by asking again; only console
//! failures and interruption reach the caller.

use std::path::{Path, PathBuf};

use crate::domain::{
    AppError, ConfigurationRecord, DEFAULT_PREFIX, FieldKind, FieldSpec, FieldValue, ServiceName,
    ServiceSettings,
};
use crate::ports::{Console, Tone};

/// Prompts for configuration values and validates them.
pub struct InputCollector<'a, C: Console> {
    console: &'a mut C,
}

impl<'a, C: Console> InputCollector<'a, C> {
    pub fn new(console: &'a mut C) -> Self {
        Self { console }
    }

    /// Ask until a non-empty value is entered.
    pub fn request_required(&mut self, label: &str) -> Result<String, AppError> {
        loop {
            let value = self.console.read_line(label)?.trim().to_string();
            if !value.is_empty() {
                return Ok(value);
            }
            self.console.say(Tone::Warning, "This field is required. Please enter a value.");
        }
    }

    /// Ask once; an empty answer yields `default`.
    pub fn request_optional(&mut self, label: &str, default: &str) -> Result<String, AppError> {
        let prompt = if default.is_empty() {
            format!("{label} (optional)")
        } else {
            format!("{label} [{default}]")
        };
        let value = self.console.read_line(&prompt)?.trim().to_string();
        Ok(if value.is_empty() { default.to_string() } else { value })
    }

    /// Ask until the answer is one of y/yes/n/no (any case) or empty for `default`.
    pub fn request_yes_no(&mut self, label: &str, default: bool) -> Result<bool, AppError> {
        let hint = if default { "Y/n" } else { "y/N" };
        let prompt = format!("{label} ({hint})");
        loop {
            let answer = self.console.read_line(&prompt)?.trim().to_lowercase();
            match answer.as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.console.say(Tone::Warning, "Please enter 'y' or 'n'"),
            }
        }
    }

    /// Ask for every declared field of `service`.
    pub fn collect_service(&mut self, service: ServiceName) -> Result<ServiceSettings, AppError> {
        self.console.say(Tone::Heading, &format!("{} Configuration", service.display_name()));
        let mut settings = ServiceSettings::new(service);
        for spec in service.fields() {
            let value = self.request_field(spec)?;
            settings.insert(spec.name, value);
        }
        Ok(settings)
    }

    fn request_field(&mut self, spec: &FieldSpec) -> Result<FieldValue, AppError> {
        loop {
            let raw = match spec.default {
                Some(default) => self.request_optional(spec.label, default)?,
                None if spec.empty_allowed => self.request_optional(spec.label, "")?,
                None => self.request_required(spec.label)?,
            };
            match FieldValue::parse(spec.kind, &raw) {
                Ok(value) => return Ok(value),
                Err(_) => {
                    debug_assert_eq!(spec.kind, FieldKind::Integer);
                    self.console.say(
                        Tone::Warning,
                        &format!(
                            "Invalid number format for {}. Please enter a valid number.",
                            spec.label
                        ),
                    );
                }
            }
        }
    }

    /// Ask for the installation directory, resolving relative answers.
    pub fn collect_install_dir(&mut self, default: &Path) -> Result<PathBuf, AppError> {
        let answer = self.request_optional("Installation directory", &default.to_string_lossy())?;
        Ok(std::path::absolute(answer)?)
    }

    /// Run the full question sequence.
    ///
    /// `install_dir` skips the directory prompt when already known.
    pub fn collect_record(
        &mut self,
        install_dir: Option<PathBuf>,
        default_dir: &Path,
    ) -> Result<ConfigurationRecord, AppError> {
        let install_dir = match install_dir {
            Some(dir) => std::path::absolute(dir)?,
            None => self.collect_install_dir(default_dir)?,
        };

        self.console.say(Tone::Heading, "Basic Configuration");
        let bot_token = self.request_required("Discord Bot Token")?;
        let client_id = self.request_required("Discord Client ID")?;
        let mut record = ConfigurationRecord::new(&bot_token, &client_id, install_dir);
        record.prefix = self.request_optional("Bot Prefix", DEFAULT_PREFIX)?;

        self.console.say(Tone::Heading, "Optional Services Configuration");
        for service in ServiceName::ALL {
            if self.request_yes_no(&format!("Enable {}?", service.compose_key()), true)? {
                let settings =
                    if service.has_settings() { Some(self.collect_service(service)?) } else { None };
                record.enable(service, settings);
            }
        }

        Ok(record)
    }
}
