//! Editor settings and configuration.

use crate::kill_ring::DEFAULT_CAPACITY;
use ratatui::style::Color;
use std::path::PathBuf;

/// Settings for kill ring size, appearance, and logging
pub struct Settings {
    /// Kills remembered per editor before the oldest is dropped
    pub kill_ring_capacity: usize,
    pub cursor_color: Color,
    pub selection_color: Color,
    /// Where `--log` writes
    pub log_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            kill_ring_capacity: DEFAULT_CAPACITY,
            cursor_color: Color::Red,
            selection_color: Color::Magenta,
            log_path: PathBuf::from("killyank.log"),
        }
    }
}
