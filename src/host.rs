//! The boundary between the kill/yank logic and whatever hosts the text.
//!
//! A host provides editors; each editor exposes its cursor, an optional
//! selection, and a document that can be read by line or range and edited
//! by replacing a range.

use crate::position::{Position, Selection};
use std::fmt;

/// Stable identity of an editor instance, assigned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EditorId(pub u64);

impl fmt::Display for EditorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "editor#{}", self.0)
    }
}

/// Text storage of an editor.
pub trait Document {
    /// Content of line `index` without its terminator.
    fn line(&self, index: usize) -> Option<&str>;

    /// Text between `start` and `end`, with line breaks as `\n`.
    ///
    /// Positions past the end of a line or of the document are clipped.
    fn range(&self, start: Position, end: Position) -> String;

    /// Insert `text` at `start`, or replace `start..end` when `end` is given.
    ///
    /// Afterwards the owning editor's cursor sits right after the inserted
    /// text.
    fn replace_range(&mut self, text: &str, start: Position, end: Option<Position>);
}

/// A single editor view over a document.
pub trait Editor {
    type Document: Document;

    fn id(&self) -> EditorId;

    /// The active selection, or `None` when nothing is selected.
    fn selection(&self) -> Option<Selection>;

    fn cursor_pos(&self) -> Position;

    fn document(&self) -> &Self::Document;

    fn document_mut(&mut self) -> &mut Self::Document;
}

/// Source of the editor that commands act on by default.
pub trait Host {
    type Editor: Editor;

    fn focused_editor(&mut self) -> Option<&mut Self::Editor>;
}

/// Byte offset of char `ch` in `s`, or `s.len()` when past the end.
pub fn char_to_byte(s: &str, ch: usize) -> usize {
    s.char_indices()
        .nth(ch)
        .map(|(byte_idx, _)| byte_idx)
        .unwrap_or(s.len())
}

/// Read `start..end` out of a slice of lines, with clipping.
pub fn range_of_lines(lines: &[String], start: Position, end: Position) -> String {
    let (start, end) = (clip_to_lines(lines, start), clip_to_lines(lines, end));
    if lines.is_empty() || end <= start {
        return String::new();
    }

    let mut text = String::new();
    for row in start.line..=end.line {
        let line = &lines[row];
        let from = if row == start.line { char_to_byte(line, start.ch) } else { 0 };
        let to = if row == end.line { char_to_byte(line, end.ch) } else { line.len() };
        text.push_str(&line[from..to]);
        if row < end.line {
            text.push('\n');
        }
    }
    text
}

/// Clip `pos` to a valid location within `lines`.
pub fn clip_to_lines(lines: &[String], pos: Position) -> Position {
    match lines.len() {
        0 => Position::default(),
        n if pos.line >= n => Position::new(n - 1, lines[n - 1].chars().count()),
        _ => Position::new(pos.line, pos.ch.min(lines[pos.line].chars().count())),
    }
}
