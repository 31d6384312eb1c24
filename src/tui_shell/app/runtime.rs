use std::io::{self, IsTerminal, Stdout};

use anyhow::{Context, Result};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::{App, event_loop};

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode plus alternate screen; both are undone on drop, including on panic unwind.
struct TerminalSession {
    terminal: Term,
}

impl TerminalSession {
    fn open() -> Result<Self> {
        enable_raw_mode().context("enable raw mode")?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen) {
            disable_raw_mode().ok();
            return Err(err).context("enter alternate screen");
        }
        let terminal = match Terminal::new(CrosstermBackend::new(stdout)) {
            Ok(t) => t,
            Err(err) => {
                restore(&mut io::stdout());
                return Err(err).context("create terminal");
            }
        };
        let mut session = Self { terminal };
        session.terminal.clear().ok();
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore(self.terminal.backend_mut());
        self.terminal.show_cursor().ok();
    }
}

fn restore(out: &mut impl io::Write) {
    disable_raw_mode().ok();
    execute!(out, LeaveAlternateScreen).ok();
}

fn ensure_interactive(stdin_tty: bool, stdout_tty: bool) -> Result<()> {
    match (stdin_tty, stdout_tty) {
        (true, true) => Ok(()),
        (false, _) => {
            anyhow::bail!("dashboard requires an interactive terminal (stdin is not a TTY)")
        }
        (_, false) => {
            anyhow::bail!("dashboard requires an interactive terminal (stdout is not a TTY)")
        }
    }
}

pub(in crate::tui_shell) fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    ensure_interactive(io::stdin().is_terminal(), io::stdout().is_terminal())?;

    let mut session = TerminalSession::open()?;
    tracing::info!(registry = %opts.registry_url, "dashboard started");
    let mut app = App::load(opts);
    let res = event_loop::run_loop(&mut session.terminal, &mut app);
    drop(session);

    match &res {
        Ok(()) => tracing::info!("dashboard closed"),
        Err(err) => {
            let reason = format!("{:#}", err);
            tracing::error!(error = %reason, "dashboard stopped");
        }
    }
    res
}

#[cfg(test)]
#[path = "../../tests/tui_shell/runtime_tests.rs"]
mod tests;
