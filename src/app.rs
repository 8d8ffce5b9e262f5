//! Application state for the terminal front end.
//!
//! Ties the open editors, the kill/yank controller and the command registry
//! together and dispatches resolved commands against the focused editor.

use crate::commands::{Action, CommandRegistry};
use crate::host::{Editor, Host};
use crate::kill_yank::KillYankController;
use crate::settings::Settings;
use crate::textarea::TextAreaEditor;
use crate::workspace::Workspace;
use std::path::{Path, PathBuf};

pub struct App {
    pub workspace: Workspace<TextAreaEditor>,
    pub kill_yank: KillYankController,
    pub commands: CommandRegistry,
    pub settings: Settings,
    /// Message shown in the status bar until the next command
    pub status: Option<String>,
    pub quit: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self {
            workspace: Workspace::new(),
            kill_yank: KillYankController::with_capacity(settings.kill_ring_capacity),
            commands: CommandRegistry::new(),
            settings,
            status: None,
            quit: false,
        }
    }

    /// Expand ~ to home directory
    pub fn expand_path(path_str: &str) -> PathBuf {
        match path_str.strip_prefix('~') {
            Some(rest) => match dirs::home_dir() {
                Some(home) => match rest.strip_prefix('/') {
                    Some(rest) => home.join(rest),
                    None if rest.is_empty() => home,
                    None => PathBuf::from(path_str),
                },
                None => PathBuf::from(path_str),
            },
            None => PathBuf::from(path_str),
        }
    }

    /// Open `path` in a new editor. Failures end up in the status bar.
    pub fn open_path(&mut self, path: &Path) {
        let id = self.workspace.allocate_id();
        match TextAreaEditor::open(id, path, &self.settings) {
            Ok(editor) => {
                log::info!("Opening file: {}", path.display());
                self.workspace.open(editor);
            }
            Err(e) => {
                log::error!("Failed to open {}: {}", path.display(), e);
                self.status = Some(format!("Cannot open {}: {}", path.display(), e));
            }
        }
    }

    /// Open an empty editor with no file behind it.
    pub fn open_scratch(&mut self) {
        let id = self.workspace.allocate_id();
        self.workspace
            .open(TextAreaEditor::new(id, Vec::new(), &self.settings));
    }

    pub fn focused(&self) -> Option<&TextAreaEditor> {
        self.workspace.focused()
    }

    /// Ring length and cursor of the focused editor, for the status bar.
    pub fn ring_summary(&self) -> Option<(usize, Option<usize>)> {
        let id = self.focused()?.id();
        let state = self.kill_yank.state(id)?;
        Some((state.ring.len(), state.ring.cursor()))
    }

    pub fn execute(&mut self, action: Action) {
        self.status = None;
        match action {
            Action::Kill => self.kill_yank.kill_focused(&mut self.workspace),
            Action::Yank => self.kill_yank.yank_focused(&mut self.workspace),
            Action::YankAgain => self.kill_yank.yank_again_focused(&mut self.workspace),
            Action::SaveFile => self.save_focused(),
            Action::OtherEditor => self.workspace.focus_next(),
            Action::CloseEditor => {
                if let Some(id) = self.workspace.close_focused() {
                    log::info!("Closed {}", id);
                    self.kill_yank.forget(id);
                }
                self.quit = self.workspace.is_empty();
            }
            Action::Quit => self.quit = true,
        }
    }

    fn save_focused(&mut self) {
        let Some(editor) = self.workspace.focused_editor() else {
            return;
        };
        let title = editor.title();
        self.status = Some(match editor.save() {
            Ok(()) => {
                log::info!("Saved {}", title);
                format!("Wrote {}", title)
            }
            Err(e) => {
                log::error!("Failed to save {}: {}", title, e);
                format!("Cannot save {}: {}", title, e)
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn app_with(lines: &[&str]) -> App {
        let mut app = App::new(Settings::default());
        let id = app.workspace.allocate_id();
        let lines = lines.iter().map(|s| s.to_string()).collect();
        app.workspace
            .open(TextAreaEditor::new(id, lines, &app.settings));
        app
    }

    fn focused_lines(app: &App) -> Vec<String> {
        app.focused()
            .map(|e| e.textarea().lines().to_vec())
            .unwrap_or_default()
    }

    #[test]
    fn test_kill_yank_again_through_actions() {
        let mut app = app_with(&["one", "two", ""]);

        app.execute(Action::Kill);
        app.execute(Action::Kill);
        assert_eq!(app.ring_summary(), Some((1, Some(0))));
        assert_eq!(focused_lines(&app), vec!["two", ""]);

        app.execute(Action::Yank);
        assert_eq!(focused_lines(&app), vec!["one", "two", ""]);
        assert_eq!(
            app.focused().map(|e| e.cursor_pos()),
            Some(Position::new(1, 0))
        );
    }

    #[test]
    fn test_close_forgets_ring_and_quits_when_empty() {
        let mut app = app_with(&["text"]);
        app.execute(Action::Kill);
        assert!(app.ring_summary().is_some());

        app.execute(Action::CloseEditor);
        assert!(app.workspace.is_empty());
        assert!(app.kill_yank.state(crate::host::EditorId(1)).is_none());
        assert!(app.quit);
    }

    #[test]
    fn test_save_without_path_reports_status() {
        let mut app = app_with(&["text"]);
        app.execute(Action::SaveFile);
        assert!(app.status.as_deref().is_some_and(|s| s.starts_with("Cannot save")));
    }

    #[test]
    fn test_expand_path() {
        assert_eq!(App::expand_path("notes.txt"), PathBuf::from("notes.txt"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(App::expand_path("~/a.txt"), home.join("a.txt"));
            assert_eq!(App::expand_path("~"), home);
        }
        assert_eq!(App::expand_path("~other"), PathBuf::from("~other"));
    }
}
