//! Command registry for the killyank front end.
//!
//! This module provides:
//! - Named commands with display labels, mapped to an [`Action`]
//! - Key bindings per command, with platform alternatives (M-y / s-y)
//! - The entries added to the Edit menu

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub const EDIT_KILL: &str = "edit.kill";
pub const EDIT_YANK: &str = "edit.yank";
pub const EDIT_YANK_AGAIN: &str = "edit.yankAgain";

/// Category for organizing commands in help display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Edit,
    Buffer,
    System,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Edit => "Edit",
            Category::Buffer => "Buffer",
            Category::System => "System",
        }
    }
}

/// What a command does when dispatched
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Kill,
    Yank,
    YankAgain,
    SaveFile,
    OtherEditor,
    CloseEditor,
    Quit,
}

/// A single key with modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    pub key: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub fn new(key: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    pub fn alt(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::ALT)
    }

    /// Super/Cmd modifier, the macOS counterpart of `alt`
    pub fn cmd(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::SUPER)
    }

    /// Format for display (e.g., "C-k", "M-y", "s-y")
    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("C-");
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("M-");
        }
        if self.modifiers.contains(KeyModifiers::SUPER) {
            parts.push("s-");
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("S-");
        }

        let key_str = match self.key {
            KeyCode::Char(c) => c.to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Esc => "ESC".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            _ => "?".to_string(),
        };

        format!("{}{}", parts.join(""), key_str)
    }

    /// Check if this KeyCombo matches a KeyEvent
    pub fn matches(&self, event: &KeyEvent) -> bool {
        self.key == event.code && self.modifiers == event.modifiers
    }
}

/// Key binding of a command: one key, or any of several
#[derive(Debug, Clone)]
pub enum Keybinding {
    Single(KeyCombo),
    AnyOf(Vec<KeyCombo>),
}

impl Keybinding {
    pub fn display(&self) -> String {
        match self {
            Keybinding::Single(k) => k.display(),
            Keybinding::AnyOf(keys) => {
                keys.iter().map(|k| k.display()).collect::<Vec<_>>().join("/")
            }
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        match self {
            Keybinding::Single(k) => k.matches(event),
            Keybinding::AnyOf(keys) => keys.iter().any(|k| k.matches(event)),
        }
    }
}

/// A named command that can be executed
#[derive(Debug, Clone)]
pub struct Command {
    pub id: &'static str,
    pub label: &'static str,
    pub category: Category,
    pub action: Action,
    pub keybinding: Option<Keybinding>,
}

/// An entry of the Edit menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Divider,
    Item(&'static str),
}

/// Command registry holding all commands, in registration order, and the
/// Edit menu layout
pub struct CommandRegistry {
    commands: Vec<Command>,
    edit_menu: Vec<MenuEntry>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            commands: Vec::new(),
            edit_menu: Vec::new(),
        };
        registry.register_kill_yank();
        registry.register_front_end();
        registry
    }

    fn register_kill_yank(&mut self) {
        self.register(Command {
            id: EDIT_KILL,
            label: "Kill",
            category: Category::Edit,
            action: Action::Kill,
            keybinding: Some(Keybinding::Single(KeyCombo::ctrl('k'))),
        });
        self.register(Command {
            id: EDIT_YANK,
            label: "Yank",
            category: Category::Edit,
            action: Action::Yank,
            keybinding: Some(Keybinding::Single(KeyCombo::ctrl('y'))),
        });
        self.register(Command {
            id: EDIT_YANK_AGAIN,
            label: "Yank Again",
            category: Category::Edit,
            action: Action::YankAgain,
            keybinding: Some(Keybinding::AnyOf(vec![KeyCombo::alt('y'), KeyCombo::cmd('y')])),
        });

        self.edit_menu.push(MenuEntry::Divider);
        self.edit_menu.push(MenuEntry::Item(EDIT_KILL));
        self.edit_menu.push(MenuEntry::Item(EDIT_YANK));
        self.edit_menu.push(MenuEntry::Item(EDIT_YANK_AGAIN));
    }

    fn register_front_end(&mut self) {
        self.register(Command {
            id: "file.save",
            label: "Save",
            category: Category::Buffer,
            action: Action::SaveFile,
            keybinding: Some(Keybinding::Single(KeyCombo::ctrl('s'))),
        });
        self.register(Command {
            id: "buffer.other",
            label: "Other Editor",
            category: Category::Buffer,
            action: Action::OtherEditor,
            keybinding: Some(Keybinding::Single(KeyCombo::alt('o'))),
        });
        self.register(Command {
            id: "buffer.close",
            label: "Close Editor",
            category: Category::Buffer,
            action: Action::CloseEditor,
            keybinding: Some(Keybinding::Single(KeyCombo::alt('k'))),
        });
        self.register(Command {
            id: "app.quit",
            label: "Quit",
            category: Category::System,
            action: Action::Quit,
            keybinding: Some(Keybinding::Single(KeyCombo::ctrl('q'))),
        });
    }

    fn register(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// Get a command by id
    pub fn get(&self, id: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.id == id)
    }

    /// Find the command bound to a key event
    pub fn lookup(&self, key: &KeyEvent) -> Option<&Command> {
        self.commands.iter().find(|c| {
            c.keybinding
                .as_ref()
                .is_some_and(|binding| binding.matches(key))
        })
    }

    /// Get commands by category, in registration order
    pub fn by_category(&self, category: Category) -> Vec<&Command> {
        self.commands.iter()
            .filter(|c| c.category == category)
            .collect()
    }

    /// Entries appended to the Edit menu, in order
    pub fn edit_menu(&self) -> &[MenuEntry] {
        &self.edit_menu
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_keycombo_display() {
        assert_eq!(KeyCombo::ctrl('k').display(), "C-k");
        assert_eq!(KeyCombo::alt('y').display(), "M-y");
        assert_eq!(KeyCombo::cmd('y').display(), "s-y");
    }

    #[test]
    fn test_lookup_kill_yank_bindings() {
        let registry = CommandRegistry::new();

        let kill = registry.lookup(&key(KeyCode::Char('k'), KeyModifiers::CONTROL));
        assert_eq!(kill.map(|c| c.action), Some(Action::Kill));

        let yank = registry.lookup(&key(KeyCode::Char('y'), KeyModifiers::CONTROL));
        assert_eq!(yank.map(|c| c.action), Some(Action::Yank));

        for modifiers in [KeyModifiers::ALT, KeyModifiers::SUPER] {
            let again = registry.lookup(&key(KeyCode::Char('y'), modifiers));
            assert_eq!(again.map(|c| c.id), Some(EDIT_YANK_AGAIN));
        }

        assert!(registry.lookup(&key(KeyCode::Char('y'), KeyModifiers::NONE)).is_none());
    }

    #[test]
    fn test_edit_menu_order() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.edit_menu(),
            [
                MenuEntry::Divider,
                MenuEntry::Item(EDIT_KILL),
                MenuEntry::Item(EDIT_YANK),
                MenuEntry::Item(EDIT_YANK_AGAIN),
            ]
        );

        let labels: Vec<&str> = registry
            .edit_menu()
            .iter()
            .filter_map(|entry| match entry {
                MenuEntry::Item(id) => registry.get(id).map(|c| c.label),
                MenuEntry::Divider => None,
            })
            .collect();
        assert_eq!(labels, vec!["Kill", "Yank", "Yank Again"]);
    }

    #[test]
    fn test_by_category_keeps_registration_order() {
        let registry = CommandRegistry::new();
        let ids: Vec<&str> = registry
            .by_category(Category::Buffer)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["file.save", "buffer.other", "buffer.close"]);
        assert_eq!(registry.by_category(Category::Edit).len(), 3);

        let binding = registry
            .get(EDIT_YANK_AGAIN)
            .and_then(|c| c.keybinding.as_ref())
            .map(|k| k.display());
        assert_eq!(binding.as_deref(), Some("M-y/s-y"));
    }
}
