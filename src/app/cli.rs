//! CLI Adapter.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::app::options::{
    DEFAULT_REPOSITORY, DEFAULT_TEMPLATE_HOST, DEFAULT_TIMEOUT_SECS, InstallOptions,
};
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "vocard-installer")]
#[command(version)]
#[command(
    about = "Interactively configure and launch a Vocard Docker deployment",
    long_about = None
)]
struct Cli {
    /// Installation directory (skips the directory prompt)
    #[arg(short = 'd', long)]
    install_dir: Option<PathBuf>,
    /// Repository the templates are downloaded from (OWNER/NAME)
    #[arg(long, default_value = DEFAULT_REPOSITORY)]
    repository: String,
    /// Base URL serving raw repository files
    #[arg(long, default_value = DEFAULT_TEMPLATE_HOST)]
    template_host: String,
    /// Write the configuration without starting the services
    #[arg(long)]
    no_start: bool,
    /// Timeout in seconds for pulling images and starting services
    #[arg(
        long,
        default_value_t = DEFAULT_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    timeout: u64,
}

impl Cli {
    fn into_options(self) -> InstallOptions {
        InstallOptions {
            repository: self.repository,
            template_host: self.template_host,
            install_dir: self.install_dir,
            start_services: !self.no_start,
            timeout: Duration::from_secs(self.timeout),
        }
    }
}

pub fn run() {
    let options = Cli::parse().into_options();

    if let Err(err) = ctrlc::set_handler(|| {
        println!();
        println!("⚠️  {}", AppError::Cancelled);
        std::process::exit(AppError::Cancelled.exit_code());
    }) {
        tracing::warn!(error = %err, "could not install Ctrl-C handler");
    }

    match crate::install(&options) {
        Ok(_) => {}
        Err(AppError::Cancelled) => {
            println!();
            println!("⚠️  {}", AppError::Cancelled);
            std::process::exit(AppError::Cancelled.exit_code());
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}
