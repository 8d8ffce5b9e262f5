//! Text positions and selections.
//!
//! Coordinates are zero-based. `ch` counts chars within the line, not bytes,
//! which is also how `tui-textarea` reports its cursor column.

use std::fmt;

/// A location in a text buffer.
///
/// Equality is structural: two positions are equal only when both `line`
/// and `ch` match. Ordering is line first, then column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub line: usize,
    pub ch: usize,
}

impl Position {
    pub const fn new(line: usize, ch: usize) -> Self {
        Self { line, ch }
    }

    /// Column 0 of the line after this one.
    pub const fn next_line_start(self) -> Self {
        Self {
            line: self.line + 1,
            ch: 0,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.ch)
    }
}

impl From<(usize, usize)> for Position {
    fn from((line, ch): (usize, usize)) -> Self {
        Self { line, ch }
    }
}

impl From<Position> for (usize, usize) {
    fn from(pos: Position) -> Self {
        (pos.line, pos.ch)
    }
}

/// An active selection, normalized so that `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    /// Build a selection from two endpoints in either order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
