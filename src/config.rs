//! Startup configuration: CLI flags with environment fallbacks.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "regdash")]
#[command(about = "Browse a container registry and safely delete unused artifacts", long_about = None)]
pub struct Cli {
    /// Registry base URL
    #[arg(long, env = "HARBOR_BASEURL")]
    pub registry_url: Option<String>,

    /// Fleet manager base URL
    #[arg(long, env = "PORTAINER_BASEURL")]
    pub fleet_url: Option<String>,

    /// Username for both services (basic auth on the registry)
    #[arg(long, env = "LDAP_USERNAME")]
    pub username: Option<String>,

    #[arg(long, env = "LDAP_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Fleet manager username, if it differs from --username
    #[arg(long, env = "PORTAINER_USERNAME")]
    pub fleet_username: Option<String>,

    #[arg(long, env = "PORTAINER_PASSWORD", hide_env_values = true)]
    pub fleet_password: Option<String>,

    /// Write logs to this file (the terminal is owned by the dashboard)
    #[arg(long, env = "REGDASH_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

/// Base URL plus the principal used against one service.
#[derive(Clone)]
pub struct ServiceAccess {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for ServiceAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceAccess")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub registry: ServiceAccess,
    pub fleet: ServiceAccess,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Validates the parsed flags. `debug_env` mirrors whether `DEBUG` is set, which
    /// defaults the log file to `debug.log`.
    pub fn from_cli(cli: Cli, debug_env: bool) -> Result<Self> {
        let registry_url = base_url(required(cli.registry_url, "HARBOR_BASEURL", "--registry-url")?)
            .context("invalid registry URL")?;
        let fleet_url = base_url(required(cli.fleet_url, "PORTAINER_BASEURL", "--fleet-url")?)
            .context("invalid fleet URL")?;
        let username = required(cli.username, "LDAP_USERNAME", "--username")?;
        let password = required(cli.password, "LDAP_PASSWORD", "--password")?;

        let fleet_username = non_empty(cli.fleet_username).unwrap_or_else(|| username.clone());
        let fleet_password = non_empty(cli.fleet_password).unwrap_or_else(|| password.clone());

        let log_file = cli
            .log_file
            .or_else(|| debug_env.then(|| PathBuf::from("debug.log")));

        Ok(Self {
            registry: ServiceAccess {
                base_url: registry_url,
                username,
                password,
            },
            fleet: ServiceAccess {
                base_url: fleet_url,
                username: fleet_username,
                password: fleet_password,
            },
            log_file,
        })
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn required(v: Option<String>, env: &str, flag: &str) -> Result<String> {
    match non_empty(v) {
        Some(s) => Ok(s),
        None => anyhow::bail!("missing configuration: {} (or {})", env, flag),
    }
}

fn base_url(raw: String) -> Result<String> {
    let url = reqwest::Url::parse(&raw).with_context(|| format!("parse {}", raw))?;
    if url.scheme() != "http" && url.scheme() != "https" {
        anyhow::bail!("unsupported scheme {} in {}", url.scheme(), raw);
    }
    Ok(raw.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
