//! Set of open editors with a single focus.

use crate::host::{Editor, EditorId, Host};

pub struct Workspace<E: Editor> {
    editors: Vec<E>,
    focused: Option<usize>,
    next_id: u64,
}

impl<E: Editor> Workspace<E> {
    pub fn new() -> Self {
        Self {
            editors: Vec::new(),
            focused: None,
            next_id: 1,
        }
    }

    /// Hand out a fresh id for an editor about to be opened.
    pub fn allocate_id(&mut self) -> EditorId {
        let id = EditorId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an editor and focus it.
    pub fn open(&mut self, editor: E) -> EditorId {
        let id = editor.id();
        self.editors.push(editor);
        self.focused = Some(self.editors.len() - 1);
        id
    }

    /// Close the focused editor, returning its id.
    ///
    /// Focus moves to the editor before it, if any.
    pub fn close_focused(&mut self) -> Option<EditorId> {
        let index = self.focused?;
        let closed = self.editors.remove(index);
        self.focused = match self.editors.len() {
            0 => None,
            _ => Some(index.saturating_sub(1)),
        };
        Some(closed.id())
    }

    /// Cycle focus to the next editor.
    pub fn focus_next(&mut self) {
        if let Some(index) = self.focused {
            self.focused = Some((index + 1) % self.editors.len());
        }
    }

    pub fn focused(&self) -> Option<&E> {
        self.focused.and_then(|i| self.editors.get(i))
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn get(&self, id: EditorId) -> Option<&E> {
        self.editors.iter().find(|e| e.id() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.editors.iter()
    }

    pub fn len(&self) -> usize {
        self.editors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.editors.is_empty()
    }
}

impl<E: Editor> Default for Workspace<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Editor> Host for Workspace<E> {
    type Editor = E;

    fn focused_editor(&mut self) -> Option<&mut E> {
        self.focused.and_then(|i| self.editors.get_mut(i))
    }
}
