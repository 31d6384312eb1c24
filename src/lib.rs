pub mod config;
pub mod controller;
pub mod deletion;
pub mod logging;
pub mod model;
pub mod nav;
pub mod remote;
pub mod tui;
pub mod usage;

mod tui_shell;

#[cfg(test)]
#[path = "tests/fakes.rs"]
mod fakes;
