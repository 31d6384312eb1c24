use crossterm::event::KeyEventState;

use super::*;

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

#[test]
fn vim_and_arrow_keys_move() {
    assert_eq!(input_for(press(KeyCode::Up)), Some(Input::Up));
    assert_eq!(input_for(press(KeyCode::Char('k'))), Some(Input::Up));
    assert_eq!(input_for(press(KeyCode::Down)), Some(Input::Down));
    assert_eq!(input_for(press(KeyCode::Char('j'))), Some(Input::Down));
}

#[test]
fn three_keys_go_back() {
    for code in [KeyCode::Char('-'), KeyCode::Esc, KeyCode::Backspace] {
        assert_eq!(input_for(press(code)), Some(Input::Back));
    }
}

#[test]
fn ctrl_c_quits_but_plain_c_clears() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
    assert_eq!(input_for(ctrl_c), Some(Input::Quit));
    assert_eq!(input_for(press(KeyCode::Char('c'))), Some(Input::ClearSelection));
    assert_eq!(input_for(press(KeyCode::Char('q'))), Some(Input::Quit));
}

#[test]
fn selection_and_page_actions() {
    assert_eq!(input_for(press(KeyCode::Char(' '))), Some(Input::ToggleSelect));
    assert_eq!(input_for(press(KeyCode::Char('d'))), Some(Input::DeleteSelected));
    assert_eq!(input_for(press(KeyCode::Char('r'))), Some(Input::Reload));
    assert_eq!(input_for(press(KeyCode::Char('t'))), Some(Input::ToggleTimestamps));
    assert_eq!(input_for(press(KeyCode::Enter)), Some(Input::Enter));
}

#[test]
fn releases_and_unbound_keys_are_ignored() {
    let release = KeyEvent {
        code: KeyCode::Char('d'),
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert_eq!(input_for(release), None);
    assert_eq!(input_for(press(KeyCode::Char('x'))), None);
    assert_eq!(input_for(press(KeyCode::Tab)), None);
}
