//! Rewrites fetched templates so they agree with the collected configuration.
//!
//! Documents are processed in a fixed order (compose, bot settings, Lavalink,
//! dashboard). The first failure stops the run; documents already written stay
//! written.

mod bot_settings;
mod compose;
mod dashboard;
mod lavalink;

use serde_json::Value;

use super::document::Document;
use super::layout::{InstallLayout, TemplateKind};
use super::{AppError, ConfigurationRecord, ServiceName};

/// Summary of a completed transform.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformReport {
    /// Compose services dropped because they were disabled.
    pub removed_services: Vec<String>,
    /// Documents rewritten, in order.
    pub updated: Vec<TemplateKind>,
}

/// Rewrite every template needed by `record` under its install directory.
pub fn transform(record: &ConfigurationRecord) -> Result<TransformReport, AppError> {
    record.validate()?;
    let layout = InstallLayout::new(&record.install_dir);
    let mut report = TransformReport::default();

    rewrite(&layout, TemplateKind::Compose, |root| {
        report.removed_services = compose::apply(root, record)?;
        Ok(())
    })?;
    report.updated.push(TemplateKind::Compose);

    rewrite(&layout, TemplateKind::BotSettings, |root| bot_settings::apply(root, record))?;
    report.updated.push(TemplateKind::BotSettings);

    if let Some(settings) = record.settings(ServiceName::AudioServer) {
        rewrite(&layout, TemplateKind::LavalinkSettings, |root| lavalink::apply(root, settings))?;
        report.updated.push(TemplateKind::LavalinkSettings);
    }

    if let Some(settings) = record.settings(ServiceName::Dashboard) {
        rewrite(&layout, TemplateKind::DashboardSettings, |root| {
            dashboard::apply(root, settings, &record.client_id)
        })?;
        report.updated.push(TemplateKind::DashboardSettings);
    }

    Ok(report)
}

/// Load one document, apply `rule`, and persist it.
fn rewrite<F>(layout: &InstallLayout, kind: TemplateKind, rule: F) -> Result<(), AppError>
where
    F: FnOnce(&mut Value) -> Result<(), AppError>,
{
    let mut document = Document::load(&layout.template_path(kind))?;
    rule(&mut document.root).map_err(|err| match err {
        AppError::Transform { .. } => err,
        other => AppError::transform(document.path(), other),
    })?;
    document.save()?;
    tracing::debug!(file = %document.path().display(), "template rewritten");
    Ok(())
}
