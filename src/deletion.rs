//! Safe-delete procedure and per-batch bookkeeping.

use std::collections::HashSet;

use tracing::{info, warn};

use crate::model::{Digest, DeleteTarget, RowStatus};
use crate::remote::RegistryGateway;
use crate::usage::UsageChecker;

/// Result of running the safe-delete procedure on one artifact.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// A running container references the digest; nothing was deleted.
    InUse,
    /// The fleet could not be checked; nothing was deleted.
    Unconfirmed(String),
    /// The registry refused or failed the delete.
    Failed(String),
}

impl DeleteOutcome {
    pub fn row_status(&self) -> RowStatus {
        match self {
            DeleteOutcome::Deleted => RowStatus::Removed,
            DeleteOutcome::InUse => RowStatus::InUse,
            DeleteOutcome::Unconfirmed(e) => RowStatus::Unconfirmed(e.clone()),
            DeleteOutcome::Failed(e) => RowStatus::Failed(e.clone()),
        }
    }
}

/// Checks the fleet for `target.digest` and deletes only when nothing runs it.
pub async fn safe_delete(
    registry: &dyn RegistryGateway,
    checker: &UsageChecker,
    target: &DeleteTarget,
) -> DeleteOutcome {
    match checker.is_in_use(&target.digest).await {
        Ok(true) => {
            info!(digest = %target.digest, "skipping delete: image in use");
            return DeleteOutcome::InUse;
        }
        Ok(false) => {}
        Err(err) => {
            let reason = format!("{:#}", err);
            warn!(digest = %target.digest, error = %reason, "cannot confirm usage");
            return DeleteOutcome::Unconfirmed(reason);
        }
    }

    match registry
        .delete_artifact(&target.project, &target.repository, &target.digest)
        .await
    {
        Ok(()) => {
            info!(
                project = %target.project,
                repository = %target.repository,
                digest = %target.digest,
                "artifact deleted"
            );
            DeleteOutcome::Deleted
        }
        Err(err) => {
            let reason = format!("{:#}", err);
            warn!(digest = %target.digest, error = %reason, "delete failed");
            DeleteOutcome::Failed(reason)
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BatchTally {
    pub deleted: usize,
    pub in_use: usize,
    pub unconfirmed: usize,
    pub failed: usize,
}

impl BatchTally {
    fn add(&mut self, outcome: &DeleteOutcome) {
        match outcome {
            DeleteOutcome::Deleted => self.deleted += 1,
            DeleteOutcome::InUse => self.in_use += 1,
            DeleteOutcome::Unconfirmed(_) => self.unconfirmed += 1,
            DeleteOutcome::Failed(_) => self.failed += 1,
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "deleted {}, in use {}, unconfirmed {}, failed {}",
            self.deleted, self.in_use, self.unconfirmed, self.failed
        )
    }
}

/// One `delete selected` request on the artifacts page.
///
/// Outcomes arrive in any order and are attributed by digest.
#[derive(Clone, Debug)]
pub struct DeletionBatch {
    id: u64,
    members: HashSet<Digest>,
    pending: HashSet<Digest>,
    tally: BatchTally,
}

impl DeletionBatch {
    pub fn new(id: u64, digests: impl IntoIterator<Item = Digest>) -> Self {
        let members: HashSet<Digest> = digests.into_iter().collect();
        Self {
            id,
            pending: members.clone(),
            members,
            tally: BatchTally::default(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn contains(&self, digest: &Digest) -> bool {
        self.members.contains(digest)
    }

    /// Returns false for a digest that is not pending (unknown or already reported).
    pub fn record(&mut self, digest: &Digest, outcome: &DeleteOutcome) -> bool {
        if !self.pending.remove(digest) {
            return false;
        }
        self.tally.add(outcome);
        true
    }

    pub fn is_complete(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn tally(&self) -> BatchTally {
        self.tally
    }
}

#[cfg(test)]
#[path = "tests/deletion_tests.rs"]
mod tests;
