//! Routes input and completion events to the current page's handler.
//!
//! The controller never performs I/O. Handlers mutate [`NavigationState`] and return
//! [`Task`]s; the caller schedules them (see [`TaskRunner`]) and feeds their results back as
//! [`Completion`] events.

use tracing::{debug, info, warn};

use crate::deletion::DeleteOutcome;
use crate::model::{Artifact, DeleteTarget, Digest, Project, Repository};
use crate::nav::{NavigationState, PageKey, PageState, PageTicket, RowProjection};

mod artifacts;
mod projects;
mod repositories;
mod runner;

pub use self::runner::{TaskRunner, execute};

/// Keyboard intents, already decoded from raw key events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Input {
    Up,
    Down,
    Enter,
    Back,
    ToggleSelect,
    ClearSelection,
    DeleteSelected,
    Reload,
    ToggleTimestamps,
    Quit,
}

/// Result of a [`Task`], tagged with the ticket it was issued for.
#[derive(Clone, Debug)]
pub enum Completion {
    Projects {
        ticket: PageTicket,
        result: Result<Vec<Project>, String>,
    },
    Repositories {
        ticket: PageTicket,
        result: Result<Vec<Repository>, String>,
    },
    Artifacts {
        ticket: PageTicket,
        result: Result<Vec<Artifact>, String>,
    },
    Deletion {
        ticket: PageTicket,
        batch: u64,
        digest: Digest,
        outcome: DeleteOutcome,
    },
}

#[derive(Clone, Debug)]
pub enum Event {
    Input(Input),
    Completed(Completion),
}

/// Remote work requested by a handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Task {
    /// Load the listing for `ticket.key`.
    Fetch { ticket: PageTicket },
    SafeDelete {
        ticket: PageTicket,
        batch: u64,
        target: DeleteTarget,
    },
}

impl Task {
    fn fetch(ticket: PageTicket) -> Self {
        Task::Fetch { ticket }
    }
}

#[derive(Debug, Default)]
pub struct Dispatch {
    pub tasks: Vec<Task>,
    pub quit: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line message shown under the table until the next key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// What a page handler produced for one input.
#[derive(Debug, Default)]
struct Step {
    tasks: Vec<Task>,
    notice: Option<Notice>,
}

impl Step {
    fn task(task: Task) -> Self {
        Self {
            tasks: vec![task],
            notice: None,
        }
    }

    fn notice(notice: Notice) -> Self {
        Self {
            tasks: Vec::new(),
            notice: Some(notice),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PageKind {
    Projects,
    Repositories,
    Artifacts,
}

fn page_kind(page: &PageState) -> PageKind {
    match page {
        PageState::Projects(_) => PageKind::Projects,
        PageState::Repositories { .. } => PageKind::Repositories,
        PageState::Artifacts(_) => PageKind::Artifacts,
    }
}

#[derive(Debug)]
pub struct PageController {
    nav: NavigationState,
    notice: Option<Notice>,
    next_batch: u64,
}

impl PageController {
    /// Opens the projects page; the returned task loads it.
    pub fn start() -> (Self, Vec<Task>) {
        let (nav, ticket) = NavigationState::new();
        let ctl = Self {
            nav,
            notice: None,
            next_batch: 1,
        };
        (ctl, vec![Task::fetch(ticket)])
    }

    pub fn nav(&self) -> &NavigationState {
        &self.nav
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn rows(&self, now: time::OffsetDateTime) -> RowProjection {
        self.nav.rows(now)
    }

    pub fn handle(&mut self, event: Event) -> Dispatch {
        match event {
            Event::Input(Input::Quit) => Dispatch {
                tasks: Vec::new(),
                quit: true,
            },
            Event::Input(input) => Dispatch {
                tasks: self.on_input(input),
                quit: false,
            },
            Event::Completed(completion) => {
                self.on_completion(completion);
                Dispatch::default()
            }
        }
    }

    fn on_input(&mut self, input: Input) -> Vec<Task> {
        self.notice = None;
        let step = match (page_kind(self.nav.page()), input) {
            (_, Input::Quit) => Step::default(),
            (_, Input::Up) => {
                self.nav.move_up();
                Step::default()
            }
            (_, Input::Down) => {
                self.nav.move_down();
                Step::default()
            }
            (_, Input::ToggleTimestamps) => {
                self.nav.toggle_ts_mode();
                Step::default()
            }
            (PageKind::Projects, input) => projects::on_input(&mut self.nav, input),
            (PageKind::Repositories, input) => repositories::on_input(&mut self.nav, input),
            (PageKind::Artifacts, input) => {
                artifacts::on_input(&mut self.nav, input, &mut self.next_batch)
            }
        };
        if step.notice.is_some() {
            self.notice = step.notice;
        }
        step.tasks
    }

    fn on_completion(&mut self, completion: Completion) {
        let ticket = match &completion {
            Completion::Projects { ticket, .. }
            | Completion::Repositories { ticket, .. }
            | Completion::Artifacts { ticket, .. }
            | Completion::Deletion { ticket, .. } => ticket,
        };
        if !self.nav.is_current(ticket) {
            match &completion {
                Completion::Deletion { digest, outcome, .. } => {
                    info!(digest = %digest, ?outcome, "deletion finished after leaving the page")
                }
                _ => debug!(page = ?ticket.key, entry = ticket.entry, "dropping stale completion"),
            }
            return;
        }

        match completion {
            Completion::Projects { result, .. } => {
                log_fetch(&self.nav, &result);
                if let PageState::Projects(listing) = self.nav.page_mut() {
                    listing.fill(result, |p| p.name.as_str());
                }
            }
            Completion::Repositories { result, .. } => {
                log_fetch(&self.nav, &result);
                if let PageState::Repositories { listing, .. } = self.nav.page_mut() {
                    listing.fill(result, |r| r.name.as_routable());
                }
            }
            Completion::Artifacts { result, .. } => {
                log_fetch(&self.nav, &result);
                if let PageState::Artifacts(page) = self.nav.page_mut() {
                    page.listing.fill(result, |a| a.digest.as_str());
                }
            }
            Completion::Deletion {
                batch,
                digest,
                outcome,
                ..
            } => {
                if let Some(notice) = artifacts::on_outcome(&mut self.nav, batch, &digest, &outcome)
                {
                    self.notice = Some(notice);
                }
            }
        }
    }
}

fn log_fetch<T>(nav: &NavigationState, result: &Result<Vec<T>, String>) {
    let page = nav.page().key().breadcrumb();
    match result {
        Ok(items) => debug!(page = %page, count = items.len(), "listing loaded"),
        Err(err) => warn!(page = %page, error = %err, "listing failed"),
    }
}

/// Enters `key` and requests its listing.
fn open(nav: &mut NavigationState, key: PageKey) -> Step {
    info!(page = %key.breadcrumb(), "open page");
    Step::task(Task::fetch(nav.enter(key, None)))
}

fn back(nav: &mut NavigationState) -> Step {
    match nav.back() {
        Some(ticket) => {
            info!(page = %ticket.key.breadcrumb(), "back");
            Step::task(Task::fetch(ticket))
        }
        None => Step::default(),
    }
}

fn reload(nav: &mut NavigationState) -> Step {
    let ticket = nav.reload();
    debug!(page = %ticket.key.breadcrumb(), entry = ticket.entry, "reload");
    Step::task(Task::fetch(ticket))
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
