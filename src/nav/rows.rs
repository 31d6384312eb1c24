use time::OffsetDateTime;

use super::{Listing, NavigationState, PageState};
use crate::model::{Artifact, Project, Repository, TimestampMode, fmt_ts};

const PROJECT_COLUMNS: &[&str] = &["Project", "Repositories"];
const REPOSITORY_COLUMNS: &[&str] = &["Repository", "Artifacts"];
const ARTIFACT_COLUMNS: &[&str] = &["Sel", "Tag", "Digest", "Size", "Pulled", "Pushed", "Status"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub cells: Vec<String>,
    pub selected: bool,
    pub removed: bool,
}

/// Read-only view of the current page for the rendering layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowProjection {
    pub title: String,
    pub columns: &'static [&'static str],
    pub rows: Vec<Row>,
    pub cursor: Option<usize>,
    pub placeholder: Option<String>,
}

fn project_row(p: &Project) -> Row {
    Row {
        cells: vec![p.name.clone(), p.repository_count.to_string()],
        selected: false,
        removed: false,
    }
}

fn repository_row(r: &Repository) -> Row {
    Row {
        cells: vec![r.name.display(), r.artifact_count.to_string()],
        selected: false,
        removed: false,
    }
}

fn artifact_row(a: &Artifact, mode: TimestampMode, now: OffsetDateTime) -> Row {
    let check = if a.is_removed() {
        "[-]"
    } else if a.selected {
        "[x]"
    } else {
        "[ ]"
    };
    Row {
        cells: vec![
            check.to_string(),
            a.display_name.clone(),
            a.digest.short().to_string(),
            format!("{:.2} MiB", a.size_mib()),
            fmt_ts(a.pulled_at.as_deref(), mode, now),
            fmt_ts(a.pushed_at.as_deref(), mode, now),
            a.status.label(),
        ],
        selected: a.selected,
        removed: a.is_removed(),
    }
}

fn project<T>(
    title: String,
    columns: &'static [&'static str],
    listing: &Listing<T>,
    row: impl Fn(&T) -> Row,
) -> RowProjection {
    let rows: Vec<Row> = listing.items().iter().map(row).collect();
    RowProjection {
        title,
        columns,
        cursor: (!rows.is_empty()).then_some(listing.cursor()),
        rows,
        placeholder: listing.state().placeholder(),
    }
}

impl NavigationState {
    /// Row projection of the current page, derived from the snapshot on every call.
    pub fn rows(&self, now: OffsetDateTime) -> RowProjection {
        let title = self.page.key().breadcrumb();
        match &self.page {
            PageState::Projects(listing) => project(title, PROJECT_COLUMNS, listing, project_row),
            PageState::Repositories { listing, .. } => {
                project(title, REPOSITORY_COLUMNS, listing, repository_row)
            }
            PageState::Artifacts(page) => {
                let mode = self.ts_mode;
                let title = match &page.batch {
                    Some(batch) => format!("{}  (deleting, {} pending)", title, batch.pending()),
                    None => title,
                };
                project(title, ARTIFACT_COLUMNS, &page.listing, |a| {
                    artifact_row(a, mode, now)
                })
            }
        }
    }
}
