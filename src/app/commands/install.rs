//! End-to-end installation run.

use std::collections::BTreeSet;
use std::env;
use std::path::{Path, PathBuf};

use crate::app::AppContext;
use crate::app::options::{DEFAULT_INSTALL_DIR_NAME, InstallOptions};
use crate::domain::{AppError, InstallLayout, ServiceName, TemplateCatalog, transform};
use crate::ports::{CommandRunner, Console, TemplateSource, Tone};

use super::collect::InputCollector;
use super::fetch::TemplateFetcher;
use super::orchestrator::{
    ComposeFlavor, OrchestratorLauncher, check_daemon_access, check_orchestrator,
};
use super::permissions::{
    NormalizeReport, PermissionFailure, create_service_directories, normalize,
};

/// Result of a completed installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    pub install_dir: PathBuf,
    pub enabled_services: BTreeSet<ServiceName>,
    pub flavor: ComposeFlavor,
    /// Whether `up -d` was issued and succeeded.
    pub started: bool,
    /// Entries whose access mode could not be adjusted.
    pub permission_failures: Vec<PermissionFailure>,
}

/// Run every installation step in order.
pub fn execute<C, S, R>(
    ctx: &mut AppContext<C, S, R>,
    options: &InstallOptions,
) -> Result<InstallOutcome, AppError>
where
    C: Console,
    S: TemplateSource,
    R: CommandRunner,
{
    let catalog = TemplateCatalog::new(&options.template_host, &options.repository)?;

    print_banner(ctx.console());

    let flavor = {
        let (console, runner) = ctx.console_and_runner();
        console.say(Tone::Info, "Checking Docker installation...");
        let flavor = check_orchestrator(runner)?;
        check_daemon_access(runner, env::consts::OS)?;
        console.say(Tone::Success, &format!("Docker and Docker Compose are available ({flavor})"));
        flavor
    };

    let default_dir = env::current_dir()?.join(DEFAULT_INSTALL_DIR_NAME);
    let record =
        InputCollector::new(ctx.console()).collect_record(options.install_dir.clone(), &default_dir)?;
    let layout = InstallLayout::new(&record.install_dir);

    ctx.console().say(Tone::Heading, "Setting up configuration files");
    let fetched =
        TemplateFetcher::new(ctx.templates(), &catalog).fetch(&layout, &record.enabled_services)?;
    for template in &fetched {
        ctx.console().say(Tone::Success, &format!("Downloaded {}", template.kind.label()));
    }

    let report = transform(&record)?;
    if !report.removed_services.is_empty() {
        ctx.console().say(
            Tone::Info,
            &format!("Removed disabled services: {}", report.removed_services.join(", ")),
        );
    }
    for kind in &report.updated {
        ctx.console().say(Tone::Success, &format!("Updated {}", kind.label()));
    }

    create_service_directories(&layout, &record.enabled_services)?;
    let permissions = normalize(layout.root(), true);
    warn_on_partial_permissions(ctx.console(), layout.root(), &permissions);

    let started = if options.start_services {
        let (console, runner) = ctx.console_and_runner();
        console.say(Tone::Heading, "Starting Vocard services");
        let launch = OrchestratorLauncher::new(runner, flavor, options.timeout).start(layout.root())?;
        if let Some(warning) = &launch.pull_warning {
            console.say(Tone::Warning, &format!("Pull failed: {warning}"));
        }
        console.say(Tone::Success, "Vocard services started successfully!");
        if let Some(status) = &launch.status {
            console.say(Tone::Info, "Service Status:");
            console.say(Tone::Info, status);
        }
        true
    } else {
        ctx.console().say(Tone::Info, "Services were not started.");
        false
    };

    print_summary(ctx.console(), &layout, flavor, options);

    Ok(InstallOutcome {
        install_dir: record.install_dir,
        enabled_services: record.enabled_services,
        flavor,
        started,
        permission_failures: permissions.failures,
    })
}

/// Downgrade failed mode changes to a warning with a manual remedy.
fn warn_on_partial_permissions<C: Console>(
    console: &mut C,
    root: &Path,
    report: &NormalizeReport,
) {
    if report.is_complete() {
        return;
    }
    let partial =
        AppError::PermissionsPartial { path: root.to_path_buf(), failed: report.failures.len() };
    console.say(
        Tone::Warning,
        &format!("{partial}. Fix them manually with: sudo chmod -R a+rwX {}", root.display()),
    );
}

fn print_banner<C: Console>(console: &mut C) {
    console.say(Tone::Heading, "VOCARD INSTALLER");
    console.say(Tone::Info, &format!("System: {}", env::consts::OS));
    console.say(Tone::Info, &format!("Architecture: {}", env::consts::ARCH));
}

fn print_summary<C: Console>(
    console: &mut C,
    layout: &InstallLayout,
    flavor: ComposeFlavor,
    options: &InstallOptions,
) {
    console.say(Tone::Heading, "VOCARD INSTALLATION COMPLETED!");
    console.say(Tone::Info, &format!("Installation directory: {}", layout.root().display()));
    console.say(Tone::Info, "Management Commands:");
    console.say(Tone::Info, &format!("  cd {}", layout.root().display()));
    for (args, purpose) in [
        (&["up", "-d"][..], "Start services"),
        (&["down"][..], "Stop services"),
        (&["logs", "-f"][..], "View logs"),
        (&["pull"][..], "Update images"),
    ] {
        console.say(Tone::Info, &format!("  {:<24}# {purpose}", flavor.command(args)));
    }
    console.say(Tone::Info, &format!("For support, visit: {}", options.support_url()));
}
