//! Kill, yank and yank-again.
//!
//! The controller keeps one [`KillState`] per editor in a side table keyed by
//! [`EditorId`]. Entries are created on first use and dropped with
//! [`KillYankController::forget`] when the host closes the editor.
//!
//! Adjacency works like this:
//! - a kill starting exactly where the previous kill started extends the
//!   newest ring entry instead of pushing a new one;
//! - yank-again only fires while the cursor still sits at the end of the
//!   last yank, and then replaces that yanked span.
//!
//! A kill clears the yank span and a yank clears the kill start, so at most
//! one of the two is ever set.

use crate::host::{Document, Editor, EditorId, Host};
use crate::kill_ring::{KillRing, DEFAULT_CAPACITY};
use crate::logging;
use crate::position::Position;
use std::collections::HashMap;

/// Text span inserted by the most recent yank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YankSpan {
    pub begin: Position,
    pub end: Position,
}

/// Per-editor kill ring plus adjacency markers.
#[derive(Debug, Clone)]
pub struct KillState {
    pub ring: KillRing,
    pub last_kill_begin: Option<Position>,
    pub last_yank: Option<YankSpan>,
}

impl KillState {
    fn new(capacity: usize) -> Self {
        Self {
            ring: KillRing::with_capacity(capacity),
            last_kill_begin: None,
            last_yank: None,
        }
    }
}

pub struct KillYankController {
    states: HashMap<EditorId, KillState>,
    capacity: usize,
}

impl KillYankController {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Rings created by this controller hold at most `capacity` kills.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            states: HashMap::new(),
            capacity,
        }
    }

    /// State for `id`, if that editor has killed or yanked anything yet.
    pub fn state(&self, id: EditorId) -> Option<&KillState> {
        self.states.get(&id)
    }

    /// Drop the state of a closed editor.
    pub fn forget(&mut self, id: EditorId) {
        if self.states.remove(&id).is_some() {
            log::info!("Dropped kill ring of {}", id);
        }
    }

    fn state_mut(&mut self, id: EditorId) -> &mut KillState {
        let capacity = self.capacity;
        self.states
            .entry(id)
            .or_insert_with(|| KillState::new(capacity))
    }

    // ==================== Kill ====================

    /// Remove the selection, or the rest of the current line, into the ring.
    ///
    /// On an empty line the line break itself is killed. `None` means there
    /// is no editor to act on and nothing happens.
    pub fn kill<E: Editor>(&mut self, editor: Option<&mut E>) {
        let Some(editor) = editor else {
            return;
        };
        let state = self.state_mut(editor.id());

        let (start, end) = match editor.selection() {
            Some(selection) => (selection.start, selection.end),
            None => {
                let cursor = editor.cursor_pos();
                let line = editor.document().line(cursor.line).unwrap_or("");
                let end = match line.is_empty() {
                    true => cursor.next_line_start(),
                    false => Position::new(cursor.line, line.chars().count()),
                };
                (cursor, end)
            }
        };

        let text = editor.document().range(start, end);
        if !text.is_empty() {
            match state.last_kill_begin == Some(start) {
                true => {
                    if logging::log_ring() {
                        log::debug!("kill at {}: merging {:?} into current entry", start, text);
                    }
                    state.ring.concat(&text);
                }
                false => {
                    if logging::log_ring() {
                        log::debug!("kill at {}: pushing {:?}", start, text);
                    }
                    state.ring.push(text);
                }
            }
            editor.document_mut().replace_range("", start, Some(end));
        } else if logging::log_ring() {
            log::debug!("kill at {}: empty span", start);
        }

        state.last_kill_begin = Some(start);
        state.last_yank = None;
    }

    // ==================== Yank ====================

    /// Insert the current ring entry at the cursor.
    pub fn yank<E: Editor>(&mut self, editor: Option<&mut E>) {
        let Some(editor) = editor else {
            return;
        };
        let state = self.state_mut(editor.id());
        Self::insert_entry(state, editor, None);
    }

    /// Replace the last yank with the next-older ring entry.
    ///
    /// Ignored unless the cursor is still at the end of the last yank.
    pub fn yank_again<E: Editor>(&mut self, editor: Option<&mut E>) {
        let Some(editor) = editor else {
            return;
        };
        let state = self.state_mut(editor.id());
        let cursor = editor.cursor_pos();

        let span = match state.last_yank {
            Some(span) if span.end == cursor => span,
            other => {
                if logging::log_ring() {
                    log::debug!(
                        "yank-again ignored: cursor={}, last_yank={:?}",
                        cursor,
                        other
                    );
                }
                return;
            }
        };

        state.ring.rotate();
        Self::insert_entry(state, editor, Some(span));
    }

    /// Insert the ring's current entry at the cursor, or over `replace`.
    fn insert_entry<E: Editor>(state: &mut KillState, editor: &mut E, replace: Option<YankSpan>) {
        let Some(text) = state.ring.peek() else {
            return;
        };

        let begin = match replace {
            Some(span) => {
                editor
                    .document_mut()
                    .replace_range(text, span.begin, Some(span.end));
                span.begin
            }
            None => {
                let cursor = editor.cursor_pos();
                editor.document_mut().replace_range(text, cursor, None);
                cursor
            }
        };

        let end = editor.cursor_pos();
        if logging::log_ring() {
            log::debug!(
                "yank {}..{} from ring cursor {:?}",
                begin,
                end,
                state.ring.cursor()
            );
        }

        state.last_kill_begin = None;
        state.last_yank = Some(YankSpan { begin, end });
    }

    // ==================== Focused editor ====================

    pub fn kill_focused<H: Host>(&mut self, host: &mut H) {
        self.kill(host.focused_editor());
    }

    pub fn yank_focused<H: Host>(&mut self, host: &mut H) {
        self.yank(host.focused_editor());
    }

    pub fn yank_again_focused<H: Host>(&mut self, host: &mut H) {
        self.yank_again(host.focused_editor());
    }
}

impl Default for KillYankController {
    fn default() -> Self {
        Self::new()
    }
}
