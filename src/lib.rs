// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. editor::EditorFrame)
    clippy::module_name_repetitions
)]

//! # Jotter
//!
//! A terminal journal with a word-wrapping markdown editor.
//!
//! The core is a text layout engine that maps a buffer of logical lines
//! onto a fixed-size grid of terminal cells:
//! - Word wrapping with hard splits for long words
//! - Cursor mapping between logical and display coordinates
//! - A scroll window that keeps the cursor visible
//! - Markdown styling for headings, lists, inline spans and code fences
//!
//! ## Architecture
//!
//! The application around it uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`layout`]: Wrapping, cursor mapping and scrolling
//! - [`editor`]: Line buffer and edit session
//! - [`markdown`]: Line classification and styled rendering
//! - [`store`]: Journal entries on disk
//! - [`app`]: Main application loop and state
//! - [`ui`]: Terminal UI components
//! - [`config`]: Saved defaults

pub mod app;
pub mod config;
pub mod editor;
pub mod layout;
pub mod markdown;
pub mod store;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::editor::{Editor, Key, KeyOutcome, RenderOutcome};
    pub use crate::layout::{Cursor, ScrollState, WrapCache};
    pub use crate::store::{Entry, Store};
    pub use crate::ui::viewport::Viewport;
}
