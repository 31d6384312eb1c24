//! Registry and fleet entities shared by the gateways, the navigation state and the UI.

mod ids;
mod timestamps;

pub use self::ids::{Digest, RepoName};
pub use self::timestamps::{TimestampMode, fmt_ts};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Project {
    pub name: String,
    pub repository_count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Repository {
    pub project: String,
    pub name: RepoName,
    pub artifact_count: u64,
}

/// Where a row sits in a deletion batch.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum RowStatus {
    #[default]
    Idle,
    Checking,
    Removed,
    InUse,
    Unconfirmed(String),
    Failed(String),
}

impl RowStatus {
    pub fn label(&self) -> String {
        match self {
            RowStatus::Idle => "-".to_string(),
            RowStatus::Checking => "checking".to_string(),
            RowStatus::Removed => "deleted".to_string(),
            RowStatus::InUse => "in use".to_string(),
            RowStatus::Unconfirmed(_) => "unconfirmed".to_string(),
            RowStatus::Failed(reason) => format!("failed: {}", reason),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub project: String,
    pub repository: RepoName,
    pub display_name: String,
    pub digest: Digest,
    pub size_bytes: u64,
    pub pulled_at: Option<String>,
    pub pushed_at: Option<String>,
    pub selected: bool,
    pub status: RowStatus,
}

impl Artifact {
    pub fn size_mib(&self) -> f64 {
        self.size_bytes as f64 / 1024.0 / 1024.0
    }

    pub fn is_removed(&self) -> bool {
        self.status == RowStatus::Removed
    }

    pub fn target(&self) -> DeleteTarget {
        DeleteTarget {
            project: self.project.clone(),
            repository: self.repository.clone(),
            digest: self.digest.clone(),
        }
    }
}

/// Everything a registry delete call needs; no display data.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DeleteTarget {
    pub project: String,
    pub repository: RepoName,
    pub digest: Digest,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunningContainer {
    pub endpoint: i64,
    pub image_reference: String,
}

impl RunningContainer {
    /// Digest suffix of the image reference (`repo:tag@sha256:…`), split on the last `@`.
    pub fn image_digest(&self) -> Option<&str> {
        let (_, digest) = self.image_reference.rsplit_once('@')?;
        if digest.is_empty() {
            return None;
        }
        Some(digest)
    }
}
