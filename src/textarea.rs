//! `tui-textarea` backed editor used by the terminal front end.

use crate::host::{clip_to_lines, range_of_lines, Document, Editor, EditorId};
use crate::position::{Position, Selection};
use crate::settings::Settings;
use ratatui::style::{Color, Modifier, Style};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tui_textarea::{CursorMove, TextArea};

/// Document half of [`TextAreaEditor`]: the textarea plus a dirty flag.
pub struct TextAreaDocument {
    textarea: TextArea<'static>,
    modified: bool,
}

impl TextAreaDocument {
    fn new(lines: Vec<String>) -> Self {
        let textarea = match lines.is_empty() {
            true => TextArea::default(),
            false => TextArea::new(lines),
        };
        Self {
            textarea,
            modified: false,
        }
    }

    /// Put the textarea cursor at `pos` (already clipped).
    fn jump_to(&mut self, pos: Position) {
        match (u16::try_from(pos.line), u16::try_from(pos.ch)) {
            (Ok(row), Ok(col)) => self.textarea.move_cursor(CursorMove::Jump(row, col)),
            _ => {
                self.textarea.move_cursor(CursorMove::Top);
                self.textarea.move_cursor(CursorMove::Head);
                for _ in 0..pos.line {
                    self.textarea.move_cursor(CursorMove::Down);
                }
                for _ in 0..pos.ch {
                    self.textarea.move_cursor(CursorMove::Forward);
                }
            }
        }
    }
}

impl Document for TextAreaDocument {
    fn line(&self, index: usize) -> Option<&str> {
        self.textarea.lines().get(index).map(String::as_str)
    }

    fn range(&self, start: Position, end: Position) -> String {
        range_of_lines(self.textarea.lines(), start, end)
    }

    fn replace_range(&mut self, text: &str, start: Position, end: Option<Position>) {
        let lines = self.textarea.lines();
        let start = clip_to_lines(lines, start);
        let end = clip_to_lines(lines, end.unwrap_or(start));
        let (start, end) = if end < start { (end, start) } else { (start, end) };
        // Line breaks count as one char for delete_str.
        let removed = range_of_lines(lines, start, end).chars().count();

        self.textarea.cancel_selection();
        self.jump_to(start);
        if removed > 0 {
            self.textarea.delete_str(removed);
        }
        if !text.is_empty() {
            self.textarea.insert_str(text);
        }
        self.modified = true;
    }
}

pub struct TextAreaEditor {
    id: EditorId,
    path: Option<PathBuf>,
    doc: TextAreaDocument,
}

impl TextAreaEditor {
    pub fn new(id: EditorId, lines: Vec<String>, settings: &Settings) -> Self {
        let mut editor = Self {
            id,
            path: None,
            doc: TextAreaDocument::new(lines),
        };
        editor.apply_settings(settings);
        editor
    }

    /// Load `path`, or start empty when it does not exist yet.
    pub fn open(id: EditorId, path: &Path, settings: &Settings) -> io::Result<Self> {
        let lines = match fs::File::open(path) {
            Ok(mut file) => {
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                contents.lines().map(String::from).collect()
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e),
        };

        let mut editor = Self::new(id, lines, settings);
        editor.path = Some(path.to_path_buf());
        Ok(editor)
    }

    /// Write the buffer back to its path.
    pub fn save(&mut self) -> io::Result<()> {
        let Some(path) = &self.path else {
            return Err(io::Error::new(io::ErrorKind::NotFound, "buffer has no file"));
        };

        let contents = self.doc.textarea.lines().join("\n");
        let mut file = fs::File::create(path)?;
        file.write_all(contents.as_bytes())?;
        self.doc.modified = false;
        Ok(())
    }

    /// Apply cursor and selection colors
    pub fn apply_settings(&mut self, settings: &Settings) {
        let textarea = &mut self.doc.textarea;
        textarea.set_cursor_style(
            Style::default()
                .bg(settings.cursor_color)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        textarea.set_cursor_line_style(Style::default());
        textarea.set_selection_style(
            Style::default()
                .bg(settings.selection_color)
                .fg(Color::White),
        );
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.doc.modified
    }

    /// Display name for the status bar
    pub fn title(&self) -> String {
        match &self.path {
            Some(path) => path.display().to_string(),
            None => format!("*scratch {}*", self.id.0),
        }
    }

    pub fn textarea(&self) -> &TextArea<'static> {
        &self.doc.textarea
    }

    /// Feed a raw key to the textarea, recording whether it edited text.
    pub fn input(&mut self, input: tui_textarea::Input) {
        if self.doc.textarea.input(input) {
            self.doc.modified = true;
        }
    }
}

impl Editor for TextAreaEditor {
    type Document = TextAreaDocument;

    fn id(&self) -> EditorId {
        self.id
    }

    fn selection(&self) -> Option<Selection> {
        self.doc
            .textarea
            .selection_range()
            .map(|(a, b)| Selection::new(a.into(), b.into()))
            .filter(|s| !s.is_empty())
    }

    fn cursor_pos(&self) -> Position {
        self.doc.textarea.cursor().into()
    }

    fn document(&self) -> &TextAreaDocument {
        &self.doc
    }

    fn document_mut(&mut self) -> &mut TextAreaDocument {
        &mut self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kill_yank::KillYankController;

    fn editor(lines: &[&str]) -> TextAreaEditor {
        TextAreaEditor::new(
            EditorId(1),
            lines.iter().map(|s| s.to_string()).collect(),
            &Settings::default(),
        )
    }

    #[test]
    fn test_replace_range_inserts_and_replaces() {
        let mut ed = editor(&["hello", "world"]);

        ed.document_mut().replace_range("!", Position::new(0, 5), None);
        assert_eq!(ed.textarea().lines(), ["hello!", "world"]);
        assert_eq!(ed.cursor_pos(), Position::new(0, 6));

        ed.document_mut()
            .replace_range("-", Position::new(0, 5), Some(Position::new(1, 1)));
        assert_eq!(ed.textarea().lines(), ["hello-orld"]);
        assert_eq!(ed.cursor_pos(), Position::new(0, 6));
        assert!(ed.is_modified());
    }

    #[test]
    fn test_kill_then_yank() {
        let mut ctl = KillYankController::new();
        let mut ed = editor(&["hello world", "second line"]);
        ed.document_mut().jump_to(Position::new(0, 5));

        ctl.kill(Some(&mut ed));
        assert_eq!(ed.textarea().lines(), ["hello", "second line"]);

        ctl.yank(Some(&mut ed));
        assert_eq!(ed.textarea().lines(), ["hello world", "second line"]);
        assert_eq!(ed.cursor_pos(), Position::new(0, 11));
    }

    #[test]
    fn test_kill_blank_line() {
        let mut ctl = KillYankController::new();
        let mut ed = editor(&["", "next"]);

        ctl.kill(Some(&mut ed));

        assert_eq!(ed.textarea().lines(), ["next"]);
        assert_eq!(
            ctl.state(EditorId(1)).and_then(|s| s.ring.peek()),
            Some("\n")
        );
    }

    #[test]
    fn test_save_and_reopen() {
        let path = std::env::temp_dir().join(format!("killyank-save-{}.txt", std::process::id()));
        let _ = fs::remove_file(&path);
        let settings = Settings::default();

        let mut ed = TextAreaEditor::open(EditorId(3), &path, &settings).unwrap();
        assert_eq!(ed.textarea().lines(), [""]);
        ed.document_mut().replace_range("one\ntwo", Position::new(0, 0), None);
        assert!(ed.is_modified());

        ed.save().unwrap();
        assert!(!ed.is_modified());
        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo");

        let reopened = TextAreaEditor::open(EditorId(4), &path, &settings).unwrap();
        assert_eq!(reopened.textarea().lines(), ["one", "two"]);
        assert_eq!(reopened.path(), Some(path.as_path()));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_title_without_path() {
        let ed = editor(&[]);
        assert_eq!(ed.title(), "*scratch 1*");
        assert_eq!(ed.path(), None);
    }
}
