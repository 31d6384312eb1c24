use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::controller::Input;

/// Maps a key press to a dashboard input; releases and unbound keys map to nothing.
pub(super) fn input_for(key: KeyEvent) -> Option<Input> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    let input = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Input::Quit,
        KeyCode::Char('q') => Input::Quit,
        KeyCode::Up | KeyCode::Char('k') => Input::Up,
        KeyCode::Down | KeyCode::Char('j') => Input::Down,
        KeyCode::Enter => Input::Enter,
        KeyCode::Char('-') | KeyCode::Esc | KeyCode::Backspace => Input::Back,
        KeyCode::Char(' ') => Input::ToggleSelect,
        KeyCode::Char('c') => Input::ClearSelection,
        KeyCode::Char('d') => Input::DeleteSelected,
        KeyCode::Char('r') => Input::Reload,
        KeyCode::Char('t') => Input::ToggleTimestamps,
        _ => return None,
    };
    Some(input)
}

#[cfg(test)]
#[path = "../tests/tui_shell/keymap_tests.rs"]
mod tests;
