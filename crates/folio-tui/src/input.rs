use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Mode};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    MoveUp,
    MoveDown,
    JumpToTop,
    JumpToBottom,
    ScrollDown,
    ScrollUp,
    PendingG, // First 'g' press, waiting for second 'g'
    OpenDetails,
    CloseDetails,
    OpenGithub,
    OpenLive,
    ToggleTheme,
    TogglePage,
    OpenContact,
    NextField,
    Submit,
    ShowHelp,
    ExitMode,
    InputChar(char),
    Backspace,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    if app.is_input_mode() {
        return handle_form_mode(key);
    }

    if app.mode == Mode::Help {
        // Any key exits help
        return Action::ExitMode;
    }

    if app.details_open() {
        return handle_details_mode(key);
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Down, _) => Action::MoveDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) | (KeyCode::Up, _) => Action::MoveUp,

        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::JumpToBottom,
        (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => Action::ScrollDown,
        (KeyCode::Char('y'), KeyModifiers::CONTROL) => Action::ScrollUp,

        (KeyCode::Enter, _) => Action::OpenDetails,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenGithub,
        (KeyCode::Char('b'), KeyModifiers::NONE) => Action::OpenLive,

        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::ToggleTheme,
        (KeyCode::Tab, _) => Action::TogglePage,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::OpenContact,
        (KeyCode::Char('?'), _) => Action::ShowHelp,

        _ => Action::None,
    }
}

/// Keys while a project overlay is showing
fn handle_details_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('q'), KeyModifiers::NONE) => Action::CloseDetails,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::OpenGithub,
        (KeyCode::Char('b'), KeyModifiers::NONE) => Action::OpenLive,
        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::ToggleTheme,
        _ => Action::None,
    }
}

/// Keys while editing the contact form
fn handle_form_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, KeyModifiers::CONTROL) | (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            Action::Submit
        }
        (KeyCode::Tab, _) | (KeyCode::Enter, _) => Action::NextField,
        (KeyCode::Esc, _) => Action::ExitMode,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => Action::InputChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::theme::MemoryStore;
    use folio_core::{AppConfig, Catalog, PageContext, Site};

    fn app() -> App {
        let site = Site::new(
            AppConfig::default(),
            Catalog::builtin().unwrap(),
            Box::new(MemoryStore::default()),
        );
        App::new(site, PageContext::Home)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app), Action::MoveDown);
        assert_eq!(handle_key_event(key(KeyCode::Up), &app), Action::MoveUp);
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::OpenDetails);
        assert_eq!(handle_key_event(key(KeyCode::Char('t')), &app), Action::ToggleTheme);
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app), Action::Quit);
        let ctrl = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL);
        assert_eq!(handle_key_event(ctrl('e'), &app), Action::ScrollDown);
        assert_eq!(handle_key_event(ctrl('y'), &app), Action::ScrollUp);
    }

    #[test]
    fn test_double_g_jumps_to_top() {
        let mut app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app), Action::JumpToTop);
    }

    #[test]
    fn test_escape_closes_details() {
        let mut app = app();
        app.open_details();
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::CloseDetails);
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app), Action::None);
    }

    #[test]
    fn test_form_mode_captures_text() {
        let mut app = app();
        app.open_contact();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app), Action::InputChar('q'));
        assert_eq!(handle_key_event(key(KeyCode::Tab), &app), Action::NextField);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL), &app),
            Action::Submit
        );
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::ExitMode);
    }

    #[test]
    fn test_help_exits_on_any_key() {
        let mut app = app();
        app.mode = Mode::Help;
        assert_eq!(handle_key_event(key(KeyCode::Char('x')), &app), Action::ExitMode);
    }
}
