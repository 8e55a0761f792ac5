// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Navigation actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationAction {
    Up,
    Down,
    Select,
    Download,
    ClearSelection,
    Refresh,
    Quit,
    None,
}

/// Convert a key event to a navigation action.
pub fn key_to_action(key: &KeyEvent) -> NavigationAction {
    // Windows reports releases too; only presses count.
    if key.kind == KeyEventKind::Release {
        return NavigationAction::None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => NavigationAction::Quit,
            _ => NavigationAction::None,
        };
    }

    match key.code {
        KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
        KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
        KeyCode::Enter | KeyCode::Right => NavigationAction::Select,
        KeyCode::Char('d') => NavigationAction::Download,
        KeyCode::Esc | KeyCode::Left => NavigationAction::ClearSelection,
        KeyCode::Char('r') => NavigationAction::Refresh,
        KeyCode::Char('q') => NavigationAction::Quit,
        _ => NavigationAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_plain_keys() {
        let k = |code| KeyEvent::new(code, KeyModifiers::NONE);
        assert_eq!(key_to_action(&k(KeyCode::Char('j'))), NavigationAction::Down);
        assert_eq!(key_to_action(&k(KeyCode::Enter)), NavigationAction::Select);
        assert_eq!(key_to_action(&k(KeyCode::Char('d'))), NavigationAction::Download);
        assert_eq!(key_to_action(&k(KeyCode::Esc)), NavigationAction::ClearSelection);
        assert_eq!(key_to_action(&k(KeyCode::Char('x'))), NavigationAction::None);
    }

    #[test]
    fn ctrl_c_quits_but_ctrl_d_does_nothing() {
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(&ctrl('c')), NavigationAction::Quit);
        assert_eq!(key_to_action(&ctrl('d')), NavigationAction::None);
    }

    #[test]
    fn releases_are_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_action(&key), NavigationAction::None);
    }
}
