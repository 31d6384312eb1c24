use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event as TermEvent};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use time::OffsetDateTime;
use tokio::sync::mpsc::{self, UnboundedReceiver};

use crate::controller::{Event, NoticeKind, PageController, TaskRunner};

use super::keymap;
use super::{render_page, render_view_chrome};

mod event_loop;
mod render;
mod runtime;

pub(super) use runtime::run;

pub(super) struct App {
    ctl: PageController,
    runner: TaskRunner,
    completions: UnboundedReceiver<Event>,
    registry_url: String,
    quit: bool,
}

impl App {
    fn load(opts: crate::tui::TuiRunOptions) -> Self {
        let (tx, completions) = mpsc::unbounded_channel();
        let runner = TaskRunner::new(opts.registry, opts.checker, tx, opts.runtime);
        let (ctl, tasks) = PageController::start();
        for task in tasks {
            runner.spawn(task);
        }
        Self {
            ctl,
            runner,
            completions,
            registry_url: opts.registry_url,
            quit: false,
        }
    }

    fn dispatch(&mut self, event: Event) {
        let dispatch = self.ctl.handle(event);
        for task in dispatch.tasks {
            self.runner.spawn(task);
        }
        if dispatch.quit {
            self.quit = true;
        }
    }

    /// Applies every completion that arrived since the last frame.
    fn drain_completions(&mut self) {
        while let Ok(event) = self.completions.try_recv() {
            self.dispatch(event);
        }
    }
}
