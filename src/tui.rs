use std::sync::Arc;

use anyhow::Result;
use tokio::runtime::Handle;

use crate::remote::RegistryGateway;
use crate::usage::UsageChecker;

/// Everything the dashboard needs from startup.
#[derive(Clone)]
pub struct TuiRunOptions {
    /// Shown in the header.
    pub registry_url: String,
    pub registry: Arc<dyn RegistryGateway>,
    pub checker: Arc<UsageChecker>,
    /// Runtime the remote calls are spawned on; the UI loop itself stays on the calling thread.
    pub runtime: Handle,
}

pub fn run(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(opts)
}
