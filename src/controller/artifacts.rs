use tracing::{debug, info};

use super::{Input, Notice, Step, Task, back, reload};
use crate::deletion::{DeleteOutcome, DeletionBatch};
use crate::model::{Digest, RowStatus};
use crate::nav::{ArtifactsPage, NavigationState, PageState};

const NOTHING_SELECTED: &str = "nothing selected";
const BATCH_IN_FLIGHT: &str = "deletion already in progress";

fn page_mut(nav: &mut NavigationState) -> Option<&mut ArtifactsPage> {
    match nav.page_mut() {
        PageState::Artifacts(page) => Some(page),
        _ => None,
    }
}

pub(super) fn on_input(nav: &mut NavigationState, input: Input, next_batch: &mut u64) -> Step {
    match input {
        Input::ToggleSelect => {
            if let Some(artifact) = page_mut(nav).and_then(|p| p.listing.current_mut()) {
                // Removed rows and rows still being checked keep their selection.
                if !artifact.is_removed() && artifact.status != RowStatus::Checking {
                    artifact.selected = !artifact.selected;
                }
            }
            Step::default()
        }
        Input::ClearSelection => {
            if let Some(page) = page_mut(nav) {
                page.clear_selection();
            }
            Step::default()
        }
        Input::DeleteSelected => start_batch(nav, next_batch),
        Input::Reload => {
            let busy = page_mut(nav).is_some_and(|p| p.batch.is_some());
            if busy {
                return Step::notice(Notice::info(BATCH_IN_FLIGHT));
            }
            reload(nav)
        }
        Input::Back => back(nav),
        Input::Enter => Step::default(),
        // Shared across pages; PageController::on_input consumes these before dispatch.
        Input::Up | Input::Down | Input::ToggleTimestamps | Input::Quit => Step::default(),
    }
}

/// Marks every selected, not-yet-removed row as checking and issues one safe-delete task each.
fn start_batch(nav: &mut NavigationState, next_batch: &mut u64) -> Step {
    let ticket = nav.ticket();
    let Some(page) = page_mut(nav) else {
        return Step::default();
    };
    if page.batch.is_some() {
        return Step::notice(Notice::info(BATCH_IN_FLIGHT));
    }
    let targets: Vec<_> = page.selected().map(|a| a.target()).collect();
    if targets.is_empty() {
        return Step::notice(Notice::info(NOTHING_SELECTED));
    }

    let id = *next_batch;
    *next_batch += 1;
    for artifact in page.listing.items_mut() {
        if artifact.selected && !artifact.is_removed() {
            artifact.status = RowStatus::Checking;
        }
    }
    page.batch = Some(DeletionBatch::new(
        id,
        targets.iter().map(|t| t.digest.clone()),
    ));
    info!(
        batch = id,
        count = targets.len(),
        project = %page.project,
        repository = %page.repository,
        "deleting selected artifacts"
    );

    Step {
        tasks: targets
            .into_iter()
            .map(|target| Task::SafeDelete {
                ticket: ticket.clone(),
                batch: id,
                target,
            })
            .collect(),
        notice: None,
    }
}

/// Applies one safe-delete outcome. Returns the batch summary once the last outcome arrives.
pub(super) fn on_outcome(
    nav: &mut NavigationState,
    batch_id: u64,
    digest: &Digest,
    outcome: &DeleteOutcome,
) -> Option<Notice> {
    let page = page_mut(nav)?;
    let Some(batch) = page.batch.as_mut().filter(|b| b.id() == batch_id) else {
        debug!(batch = batch_id, digest = %digest, "outcome for unknown batch");
        return None;
    };
    if !batch.record(digest, outcome) {
        debug!(batch = batch_id, digest = %digest, "duplicate outcome");
        return None;
    }

    if let Some(artifact) = page
        .listing
        .items_mut()
        .iter_mut()
        .find(|a| &a.digest == digest)
    {
        artifact.status = outcome.row_status();
        if matches!(outcome, DeleteOutcome::Deleted) {
            artifact.selected = false;
        }
    }

    if !batch.is_complete() {
        return None;
    }

    let tally = batch.tally();
    let batch = page.batch.take()?;
    for artifact in page.listing.items_mut() {
        if batch.contains(&artifact.digest) {
            artifact.selected = false;
        }
    }
    info!(batch = batch_id, summary = %tally.summary(), "deletion batch finished");
    if tally.failed + tally.unconfirmed > 0 {
        Some(Notice::error(tally.summary()))
    } else {
        Some(Notice::info(tally.summary()))
    }
}
