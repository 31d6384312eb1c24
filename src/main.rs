use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use regdash::config::{Cli, Settings};
use regdash::remote::{FleetClient, RegistryClient};
use regdash::tui::{self, TuiRunOptions};
use regdash::usage::UsageChecker;

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let debug = std::env::var_os("DEBUG").is_some();
    let settings = Settings::from_cli(cli, debug)?;

    if let Some(path) = &settings.log_file {
        regdash::logging::init_file_logging(path, debug)?;
    }
    tracing::debug!(registry = ?settings.registry, fleet = ?settings.fleet, "configuration loaded");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;

    let registry = Arc::new(RegistryClient::new(settings.registry.clone())?);
    let registry_url = registry.base_url().to_string();
    let fleet = Arc::new(FleetClient::new(settings.fleet.clone())?);
    let checker = Arc::new(UsageChecker::new(fleet));

    let res = tui::run(TuiRunOptions {
        registry_url,
        registry,
        checker,
        runtime: runtime.handle().clone(),
    });

    runtime.shutdown_background();
    res
}
