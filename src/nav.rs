//! Page-navigation state: the current page, its data snapshot and cursor.
//!
//! The hierarchy is fixed (projects → repositories → artifacts) so there is no stack; the
//! parent of a page is derived from its own parameters.

use crate::deletion::DeletionBatch;
use crate::model::{Artifact, Project, RepoName, Repository, TimestampMode};

mod rows;

pub use self::rows::{Row, RowProjection};

/// Page identity plus parameters.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PageKey {
    Projects,
    Repositories { project: String },
    Artifacts { project: String, repository: RepoName },
}

impl PageKey {
    pub fn depth(&self) -> usize {
        match self {
            PageKey::Projects => 1,
            PageKey::Repositories { .. } => 2,
            PageKey::Artifacts { .. } => 3,
        }
    }

    /// Parent page plus the name of this page inside the parent's listing.
    pub fn parent(&self) -> Option<(PageKey, String)> {
        match self {
            PageKey::Projects => None,
            PageKey::Repositories { project } => Some((PageKey::Projects, project.clone())),
            PageKey::Artifacts {
                project,
                repository,
            } => Some((
                PageKey::Repositories {
                    project: project.clone(),
                },
                repository.as_routable().to_string(),
            )),
        }
    }

    pub fn breadcrumb(&self) -> String {
        match self {
            PageKey::Projects => "projects".to_string(),
            PageKey::Repositories { project } => format!("projects / {}", project),
            PageKey::Artifacts {
                project,
                repository,
            } => format!("projects / {} / {}", project, repository.display()),
        }
    }
}

/// Identifies one entry into a page. Completions carry the ticket they were issued for and
/// are applied only while it is still current.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageTicket {
    pub key: PageKey,
    pub entry: u64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchState<T> {
    Loading,
    Ready(Vec<T>),
    Empty,
    Failed(String),
}

impl<T> FetchState<T> {
    pub fn from_result(result: Result<Vec<T>, String>) -> Self {
        match result {
            Ok(items) if items.is_empty() => FetchState::Empty,
            Ok(items) => FetchState::Ready(items),
            Err(err) => FetchState::Failed(err),
        }
    }

    pub fn items(&self) -> &[T] {
        match self {
            FetchState::Ready(items) => items,
            _ => &[],
        }
    }

    pub fn items_mut(&mut self) -> &mut [T] {
        match self {
            FetchState::Ready(items) => items,
            _ => &mut [],
        }
    }

    pub fn placeholder(&self) -> Option<String> {
        match self {
            FetchState::Loading => Some("loading…".to_string()),
            FetchState::Ready(_) => None,
            FetchState::Empty => Some("(no data)".to_string()),
            FetchState::Failed(err) => Some(format!("(no data: {})", err)),
        }
    }
}

/// One page's snapshot and cursor.
#[derive(Clone, Debug)]
pub struct Listing<T> {
    state: FetchState<T>,
    cursor: usize,
    focus: Option<String>,
}

impl<T> Listing<T> {
    fn loading(focus: Option<String>) -> Self {
        Self {
            state: FetchState::Loading,
            cursor: 0,
            focus,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn items(&self) -> &[T] {
        self.state.items()
    }

    pub fn items_mut(&mut self) -> &mut [T] {
        self.state.items_mut()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn current(&self) -> Option<&T> {
        self.items().get(self.cursor)
    }

    pub fn current_mut(&mut self) -> Option<&mut T> {
        let cursor = self.cursor;
        self.items_mut().get_mut(cursor)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let len = self.items().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = (self.cursor + 1).min(len - 1);
    }

    /// Installs the fetched snapshot, placing the cursor on the focused row if present.
    pub fn fill(&mut self, result: Result<Vec<T>, String>, name_of: impl Fn(&T) -> &str) {
        self.state = FetchState::from_result(result);
        let focus = self.focus.take();
        self.cursor = focus
            .and_then(|f| self.items().iter().position(|item| name_of(item) == f))
            .unwrap_or(0);
    }
}

#[derive(Clone, Debug)]
pub struct ArtifactsPage {
    pub project: String,
    pub repository: RepoName,
    pub listing: Listing<Artifact>,
    pub batch: Option<DeletionBatch>,
}

impl ArtifactsPage {
    pub fn selected(&self) -> impl Iterator<Item = &Artifact> {
        self.listing
            .items()
            .iter()
            .filter(|a| a.selected && !a.is_removed())
    }

    pub fn clear_selection(&mut self) {
        for a in self.listing.items_mut() {
            a.selected = false;
        }
    }
}

#[derive(Clone, Debug)]
pub enum PageState {
    Projects(Listing<Project>),
    Repositories {
        project: String,
        listing: Listing<Repository>,
    },
    Artifacts(ArtifactsPage),
}

impl PageState {
    fn enter(key: &PageKey, focus: Option<String>) -> Self {
        match key {
            PageKey::Projects => PageState::Projects(Listing::loading(focus)),
            PageKey::Repositories { project } => PageState::Repositories {
                project: project.clone(),
                listing: Listing::loading(focus),
            },
            PageKey::Artifacts {
                project,
                repository,
            } => PageState::Artifacts(ArtifactsPage {
                project: project.clone(),
                repository: repository.clone(),
                listing: Listing::loading(focus),
                batch: None,
            }),
        }
    }

    pub fn key(&self) -> PageKey {
        match self {
            PageState::Projects(_) => PageKey::Projects,
            PageState::Repositories { project, .. } => PageKey::Repositories {
                project: project.clone(),
            },
            PageState::Artifacts(page) => PageKey::Artifacts {
                project: page.project.clone(),
                repository: page.repository.clone(),
            },
        }
    }

    fn move_up(&mut self) {
        match self {
            PageState::Projects(l) => l.move_up(),
            PageState::Repositories { listing, .. } => listing.move_up(),
            PageState::Artifacts(page) => page.listing.move_up(),
        }
    }

    fn move_down(&mut self) {
        match self {
            PageState::Projects(l) => l.move_down(),
            PageState::Repositories { listing, .. } => listing.move_down(),
            PageState::Artifacts(page) => page.listing.move_down(),
        }
    }
}

#[derive(Debug)]
pub struct NavigationState {
    page: PageState,
    entry: u64,
    ts_mode: TimestampMode,
}

impl NavigationState {
    /// Starts on the projects page; the returned ticket is for the initial fetch.
    pub fn new() -> (Self, PageTicket) {
        let mut nav = Self {
            page: PageState::enter(&PageKey::Projects, None),
            entry: 0,
            ts_mode: TimestampMode::default(),
        };
        let ticket = nav.enter(PageKey::Projects, None);
        (nav, ticket)
    }

    /// Replaces the current page with a fresh, loading entry of `key`.
    pub fn enter(&mut self, key: PageKey, focus: Option<String>) -> PageTicket {
        self.entry += 1;
        self.page = PageState::enter(&key, focus);
        PageTicket {
            key,
            entry: self.entry,
        }
    }

    /// Enters the parent page, keeping the cursor on the page being left.
    /// `None` on the projects page.
    pub fn back(&mut self) -> Option<PageTicket> {
        let (parent, focus) = self.page.key().parent()?;
        Some(self.enter(parent, Some(focus)))
    }

    pub fn reload(&mut self) -> PageTicket {
        let focus = self.current_name();
        let key = self.page.key();
        self.enter(key, focus)
    }

    fn current_name(&self) -> Option<String> {
        match &self.page {
            PageState::Projects(l) => l.current().map(|p| p.name.clone()),
            PageState::Repositories { listing, .. } => listing
                .current()
                .map(|r| r.name.as_routable().to_string()),
            PageState::Artifacts(page) => {
                page.listing.current().map(|a| a.digest.as_str().to_string())
            }
        }
    }

    pub fn ticket(&self) -> PageTicket {
        PageTicket {
            key: self.page.key(),
            entry: self.entry,
        }
    }

    pub fn is_current(&self, ticket: &PageTicket) -> bool {
        ticket.entry == self.entry && ticket.key == self.page.key()
    }

    pub fn page(&self) -> &PageState {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut PageState {
        &mut self.page
    }

    pub fn depth(&self) -> usize {
        self.page.key().depth()
    }

    pub fn move_up(&mut self) {
        self.page.move_up();
    }

    pub fn move_down(&mut self) {
        self.page.move_down();
    }

    pub fn ts_mode(&self) -> TimestampMode {
        self.ts_mode
    }

    pub fn toggle_ts_mode(&mut self) {
        self.ts_mode = self.ts_mode.toggle();
    }
}

#[cfg(test)]
#[path = "tests/nav_tests.rs"]
mod tests;
