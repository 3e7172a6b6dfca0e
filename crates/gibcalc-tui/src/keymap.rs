//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    ModulusUp,
    ModulusDown,
    NextField,
    PrevField,
    Increment,
    Decrement,
    Solve,
    ToggleLogs,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Home,
    End,
    None,
}

/// Map a key event to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('+' | '=') => KeyAction::ModulusUp,
        KeyCode::Char('-' | '_') => KeyAction::ModulusDown,
        KeyCode::Tab => KeyAction::NextField,
        KeyCode::BackTab => KeyAction::PrevField,
        KeyCode::Right => KeyAction::Increment,
        KeyCode::Left => KeyAction::Decrement,
        KeyCode::Enter | KeyCode::Char('s') => KeyAction::Solve,
        KeyCode::Char('l') => KeyAction::ToggleLogs,
        KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::Down => KeyAction::ScrollDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        KeyCode::Home => KeyAction::Home,
        KeyCode::End => KeyAction::End,
        _ => KeyAction::None,
    }
}
