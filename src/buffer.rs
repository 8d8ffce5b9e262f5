//! In-memory editor used where no terminal UI is attached.
//!
//! Holds the text as lines (without terminators), a cursor, and an optional
//! selection anchor. Line breaks read back as `\n`.

use crate::host::{char_to_byte, clip_to_lines, range_of_lines, Document, Editor, EditorId};
use crate::position::{Position, Selection};

#[derive(Debug, Clone)]
pub struct TextBuffer {
    id: EditorId,
    lines: Vec<String>,
    cursor: Position,
    anchor: Option<Position>,
}

impl TextBuffer {
    /// Create a buffer from `text`, splitting on `\n`.
    pub fn new(id: EditorId, text: &str) -> Self {
        Self {
            id,
            lines: text.split('\n').map(String::from).collect(),
            cursor: Position::default(),
            anchor: None,
        }
    }

    pub fn from_lines(id: EditorId, lines: &[&str]) -> Self {
        let mut lines: Vec<String> = lines.iter().map(|s| s.to_string()).collect();
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            id,
            lines,
            cursor: Position::default(),
            anchor: None,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Move the cursor, clipped to the text. Keeps any selection anchor.
    pub fn set_cursor(&mut self, pos: Position) {
        self.cursor = clip_to_lines(&self.lines, pos);
    }

    /// Select from `anchor` to `head`, leaving the cursor at `head`.
    pub fn select(&mut self, anchor: Position, head: Position) {
        self.anchor = Some(clip_to_lines(&self.lines, anchor));
        self.set_cursor(head);
    }

    pub fn clear_selection(&mut self) {
        self.anchor = None;
    }
}

impl Document for TextBuffer {
    fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    fn range(&self, start: Position, end: Position) -> String {
        range_of_lines(&self.lines, start, end)
    }

    fn replace_range(&mut self, text: &str, start: Position, end: Option<Position>) {
        let start = clip_to_lines(&self.lines, start);
        let end = clip_to_lines(&self.lines, end.unwrap_or(start));
        let (start, end) = if end < start { (end, start) } else { (start, end) };

        let first = &self.lines[start.line];
        let last = &self.lines[end.line];
        let prefix = &first[..char_to_byte(first, start.ch)];
        let suffix = &last[char_to_byte(last, end.ch)..];
        let joined = format!("{prefix}{text}{suffix}");

        let replacement: Vec<String> = joined.split('\n').map(String::from).collect();
        self.lines.splice(start.line..=end.line, replacement);

        self.cursor = match text.rfind('\n') {
            Some(idx) => Position::new(
                start.line + text.matches('\n').count(),
                text[idx + 1..].chars().count(),
            ),
            None => Position::new(start.line, start.ch + text.chars().count()),
        };
        self.anchor = None;
    }
}

impl Editor for TextBuffer {
    type Document = Self;

    fn id(&self) -> EditorId {
        self.id
    }

    fn selection(&self) -> Option<Selection> {
        let anchor = self.anchor?;
        let selection = Selection::new(anchor, self.cursor);
        (!selection.is_empty()).then_some(selection)
    }

    fn cursor_pos(&self) -> Position {
        self.cursor
    }

    fn document(&self) -> &Self {
        self
    }

    fn document_mut(&mut self) -> &mut Self {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(lines: &[&str]) -> TextBuffer {
        TextBuffer::from_lines(EditorId(1), lines)
    }

    #[test]
    fn test_new_splits_lines() {
        let buf = TextBuffer::new(EditorId(1), "one\n\nthree");
        assert_eq!(buf.lines(), ["one", "", "three"]);
        assert_eq!(buf.text(), "one\n\nthree");
    }

    #[test]
    fn test_insert_moves_cursor_after_text() {
        let mut buf = buffer(&["hello"]);
        buf.replace_range(" world", Position::new(0, 5), None);
        assert_eq!(buf.lines(), ["hello world"]);
        assert_eq!(buf.cursor_pos(), Position::new(0, 11));
    }

    #[test]
    fn test_multiline_insert() {
        let mut buf = buffer(&["ad"]);
        buf.replace_range("b\nc", Position::new(0, 1), None);
        assert_eq!(buf.lines(), ["ab", "cd"]);
        assert_eq!(buf.cursor_pos(), Position::new(1, 1));
    }

    #[test]
    fn test_delete_line_break() {
        let mut buf = buffer(&["", "next"]);
        buf.replace_range("", Position::new(0, 0), Some(Position::new(1, 0)));
        assert_eq!(buf.lines(), ["next"]);
        assert_eq!(buf.cursor_pos(), Position::new(0, 0));
    }

    #[test]
    fn test_replace_span_across_lines() {
        let mut buf = buffer(&["abc", "def", "ghi"]);
        buf.replace_range("X", Position::new(0, 1), Some(Position::new(2, 2)));
        assert_eq!(buf.lines(), ["aXi"]);
        assert_eq!(buf.cursor_pos(), Position::new(0, 2));
    }

    #[test]
    fn test_replace_uses_char_offsets() {
        let mut buf = buffer(&["naïve text"]);
        buf.replace_range("", Position::new(0, 2), Some(Position::new(0, 5)));
        assert_eq!(buf.lines(), ["na text"]);
    }

    #[test]
    fn test_selection_is_normalized_and_cleared_by_edit() {
        let mut buf = buffer(&["hello world"]);
        assert_eq!(buf.selection(), None);

        buf.select(Position::new(0, 11), Position::new(0, 6));
        let sel = buf.selection().unwrap();
        assert_eq!(sel.start, Position::new(0, 6));
        assert_eq!(sel.end, Position::new(0, 11));

        buf.replace_range("", sel.start, Some(sel.end));
        assert_eq!(buf.selection(), None);
        assert_eq!(buf.lines(), ["hello "]);
    }

    #[test]
    fn test_empty_selection_reports_none() {
        let mut buf = buffer(&["abc"]);
        buf.select(Position::new(0, 1), Position::new(0, 1));
        assert_eq!(buf.selection(), None);

        buf.select(Position::new(0, 0), Position::new(0, 2));
        buf.clear_selection();
        assert_eq!(buf.selection(), None);
    }

    #[test]
    fn test_set_cursor_clips() {
        let mut buf = buffer(&["ab", "c"]);
        buf.set_cursor(Position::new(7, 7));
        assert_eq!(buf.cursor_pos(), Position::new(1, 1));
    }
}
