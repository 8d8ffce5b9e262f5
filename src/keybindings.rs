//! Key dispatch for the terminal front end.
//!
//! Keys bound in the command registry run their action; everything else goes
//! to the focused textarea.

use crate::app::App;
use crate::host::Host;
use crate::logging;
use ratatui::crossterm::event::{Event, KeyEvent};
use tui_textarea::Input;

/// Handle one key press. Returns false once the app should exit.
pub fn handle_input(app: &mut App, key: KeyEvent) -> bool {
    if logging::log_keys() {
        log::debug!("key: code={:?}, modifiers={:?}", key.code, key.modifiers);
    }

    // Registered commands take precedence over the textarea's own bindings
    match app.commands.lookup(&key).map(|c| c.action) {
        Some(action) => {
            app.execute(action);
        }
        None => {
            app.status = None;
            let input: Input = Event::Key(key).into();
            if let Some(editor) = app.workspace.focused_editor() {
                editor.input(input);
            }
        }
    }

    !app.quit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use ratatui::crossterm::event::{KeyCode, KeyModifiers};

    fn press(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> bool {
        handle_input(app, KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_typing_then_kill_and_yank() {
        let mut app = App::new(Settings::default());
        app.open_scratch();

        for c in "abc".chars() {
            assert!(press(&mut app, KeyCode::Char(c), KeyModifiers::NONE));
        }
        press(&mut app, KeyCode::Char('a'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(
            app.focused().map(|e| e.textarea().lines().to_vec()),
            Some(vec![String::new()])
        );

        press(&mut app, KeyCode::Char('y'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Char('y'), KeyModifiers::CONTROL);
        assert_eq!(
            app.focused().map(|e| e.textarea().lines().to_vec()),
            Some(vec!["abcabc".to_string()])
        );
        assert!(app.focused().is_some_and(|e| e.is_modified()));
    }

    #[test]
    fn test_quit_key() {
        let mut app = App::new(Settings::default());
        app.open_scratch();
        assert!(!press(&mut app, KeyCode::Char('q'), KeyModifiers::CONTROL));
    }
}
