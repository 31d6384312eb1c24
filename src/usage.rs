//! Decides whether an artifact digest is referenced by any running container in the fleet.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::sync::OnceCell;
use tracing::{debug, info};

use crate::model::{Digest, RunningContainer};
use crate::remote::{FleetGateway, SessionToken};

/// Scans every endpoint's running containers for a digest.
///
/// The fleet session is established on first use and reused for the checker's lifetime. A
/// failed authentication leaves the cell empty, so the next check tries again.
pub struct UsageChecker {
    fleet: Arc<dyn FleetGateway>,
    session: OnceCell<SessionToken>,
}

impl UsageChecker {
    pub fn new(fleet: Arc<dyn FleetGateway>) -> Self {
        Self {
            fleet,
            session: OnceCell::new(),
        }
    }

    async fn session(&self) -> Result<&SessionToken> {
        self.session
            .get_or_try_init(|| self.fleet.authenticate())
            .await
            .context("authenticate with fleet manager")
    }

    /// First running container whose image reference pins `digest`.
    ///
    /// Stops at the first match. Any failed fleet call fails the whole check: an endpoint
    /// that could not be listed might be the one running the image.
    pub async fn find_usage(&self, digest: &Digest) -> Result<Option<RunningContainer>> {
        let session = self.session().await?;
        let endpoints = self
            .fleet
            .list_endpoints(session)
            .await
            .context("list fleet endpoints")?;

        for endpoint in &endpoints {
            debug!(digest = %digest, endpoint = %endpoint.name, "scanning endpoint");
            let containers = self
                .fleet
                .list_running_containers(session, endpoint.id)
                .await
                .with_context(|| format!("list containers on {}", endpoint.name))?;

            if let Some(hit) = containers
                .into_iter()
                .find(|c| c.image_digest() == Some(digest.as_str()))
            {
                info!(
                    digest = %digest,
                    endpoint = %endpoint.name,
                    image = %hit.image_reference,
                    "digest is in use"
                );
                return Ok(Some(hit));
            }
        }

        debug!(digest = %digest, endpoints = endpoints.len(), "digest not referenced");
        Ok(None)
    }

    pub async fn is_in_use(&self, digest: &Digest) -> Result<bool> {
        Ok(self.find_usage(digest).await?.is_some())
    }
}

#[cfg(test)]
#[path = "tests/usage_tests.rs"]
mod tests;
