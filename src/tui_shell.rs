use anyhow::Result;

mod app;
mod keymap;
mod view;

use view::{render_page, render_view_chrome};

pub fn run(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
