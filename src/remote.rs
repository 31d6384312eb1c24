//! Registry and fleet-manager collaborators.
//!
//! The navigation core only sees the two gateway traits; `RegistryClient` and
//! `FleetClient` are the HTTP implementations.

use anyhow::Result;
use async_trait::async_trait;

use crate::model::{Artifact, Digest, Endpoint, Project, RepoName, Repository, RunningContainer};

mod fleet;
mod http_client;
mod registry;
mod types;

pub use self::fleet::FleetClient;
pub use self::registry::RegistryClient;

/// Maximum number of entries requested from any listing; only the first page is read.
pub const PAGE_SIZE: u32 = 100;

#[async_trait]
pub trait RegistryGateway: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>>;

    async fn list_repositories(&self, project: &str) -> Result<Vec<Repository>>;

    async fn list_artifacts(
        &self,
        project: &str,
        repository: &RepoName,
    ) -> Result<Vec<Artifact>>;

    async fn delete_artifact(
        &self,
        project: &str,
        repository: &RepoName,
        digest: &Digest,
    ) -> Result<()>;
}

/// Bearer session issued by the fleet manager.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(jwt: impl Into<String>) -> Self {
        Self(jwt.into())
    }

    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(..)")
    }
}

#[async_trait]
pub trait FleetGateway: Send + Sync {
    async fn authenticate(&self) -> Result<SessionToken>;

    async fn list_endpoints(&self, session: &SessionToken) -> Result<Vec<Endpoint>>;

    async fn list_running_containers(
        &self,
        session: &SessionToken,
        endpoint: i64,
    ) -> Result<Vec<RunningContainer>>;
}
