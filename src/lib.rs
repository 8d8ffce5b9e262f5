//! Emacs-style kill and yank for text editors.
//!
//! The core is [`kill_yank::KillYankController`], which works against any
//! host implementing the traits in [`host`]. [`buffer::TextBuffer`] is an
//! in-memory host; [`textarea::TextAreaEditor`] backs the terminal front end.

pub mod app;
pub mod buffer;
pub mod commands;
pub mod host;
pub mod keybindings;
pub mod kill_ring;
pub mod kill_yank;
pub mod logging;
pub mod position;
pub mod settings;
pub mod textarea;
pub mod ui;
pub mod workspace;
