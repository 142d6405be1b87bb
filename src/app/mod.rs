//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering

mod effects;
mod event_loop;
mod input;
mod model;
mod update;

pub use input::editor_key;
pub use model::{EditSession, EditTarget, Model, PendingSave, Screen, ToastLevel, ViewerState};
pub use update::{Message, NOT_ADDED, update};

use crate::config::ThemeMode;
use crate::store::Store;

/// What the application shows first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartMode {
    /// Write a new entry.
    New { title: Option<String> },
    /// Edit an existing entry.
    Edit(u64),
    /// Read an existing entry.
    View(u64),
}

/// Main application struct that owns the journal and runs the event loop.
pub struct App {
    store: Store,
    start: StartMode,
    theme: ThemeMode,
}

impl App {
    /// Create an application that starts a new entry in `store`.
    pub const fn new(store: Store) -> Self {
        Self {
            store,
            start: StartMode::New { title: None },
            theme: ThemeMode::Dark,
        }
    }

    pub fn with_start(mut self, start: StartMode) -> Self {
        self.start = start;
        self
    }

    pub const fn with_theme(mut self, theme: ThemeMode) -> Self {
        self.theme = theme;
        self
    }
}

#[cfg(test)]
mod tests;
