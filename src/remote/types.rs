//! Wire DTOs for the registry and fleet-manager APIs.
//!
//! Only the fields the dashboard reads are declared; everything else in the payloads is
//! ignored by serde.

use tracing::warn;

use crate::model::{
    Artifact, Digest, Endpoint, Project, RepoName, Repository, RowStatus, RunningContainer,
};

pub(super) const UNTAGGED: &str = "<untagged>";

#[derive(Debug, serde::Deserialize)]
pub(super) struct ProjectRecord {
    pub(super) name: String,
    #[serde(default)]
    pub(super) repo_count: u64,
}

impl From<ProjectRecord> for Project {
    fn from(p: ProjectRecord) -> Self {
        Project {
            name: p.name,
            repository_count: p.repo_count,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct RepositoryRecord {
    pub(super) name: String,
    #[serde(default)]
    pub(super) artifact_count: u64,
}

impl RepositoryRecord {
    /// `None` when the listing name has nothing after the project segment.
    pub(super) fn into_repository(self, project: &str) -> Option<Repository> {
        let Some(name) = RepoName::from_listing(&self.name) else {
            warn!(project, listing = %self.name, "skipping repository without a path");
            return None;
        };
        Some(Repository {
            project: project.to_string(),
            name,
            artifact_count: self.artifact_count,
        })
    }
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct TagRecord {
    pub(super) name: String,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct ArtifactRecord {
    pub(super) digest: String,
    #[serde(default)]
    pub(super) size: u64,
    #[serde(default)]
    pub(super) pull_time: Option<String>,
    #[serde(default)]
    pub(super) push_time: Option<String>,
    #[serde(default)]
    pub(super) tags: Option<Vec<TagRecord>>,
}

impl ArtifactRecord {
    pub(super) fn into_artifact(self, project: &str, repository: &RepoName) -> Artifact {
        let display_name = self
            .tags
            .and_then(|tags| tags.into_iter().next())
            .map(|t| t.name)
            .unwrap_or_else(|| UNTAGGED.to_string());
        Artifact {
            project: project.to_string(),
            repository: repository.clone(),
            display_name,
            digest: Digest::new(self.digest),
            size_bytes: self.size,
            pulled_at: self.pull_time,
            pushed_at: self.push_time,
            selected: false,
            status: RowStatus::Idle,
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub(super) struct AuthRequest<'a> {
    pub(super) username: &'a str,
    pub(super) password: &'a str,
}

#[derive(Debug, serde::Deserialize)]
pub(super) struct AuthResponse {
    pub(super) jwt: String,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct EndpointRecord {
    pub(super) id: i64,
    pub(super) name: String,
}

impl From<EndpointRecord> for Endpoint {
    fn from(e: EndpointRecord) -> Self {
        Endpoint {
            id: e.id,
            name: e.name,
        }
    }
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "PascalCase")]
pub(super) struct ContainerRecord {
    #[serde(default)]
    pub(super) image: String,
    #[serde(default)]
    pub(super) state: Option<String>,
}

/// Engine states of a container with no live process. Paused and restarting containers
/// still pin their image and are kept; so is any state the engine adds later.
const STOPPED_STATES: &[&str] = &["exited", "dead", "created", "removing"];

impl ContainerRecord {
    pub(super) fn into_running(self, endpoint: i64) -> Option<RunningContainer> {
        if let Some(state) = self.state.as_deref() {
            if STOPPED_STATES.contains(&state.to_ascii_lowercase().as_str()) {
                return None;
            }
        }
        Some(RunningContainer {
            endpoint,
            image_reference: self.image,
        })
    }
}

#[cfg(test)]
#[path = "../tests/remote/types_tests.rs"]
mod tests;
