//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Scroll position for the entry viewer
//! - [`style`]: Theming and colors

pub mod style;
pub mod viewport;

mod render;
mod status;

pub use render::{render, split_footer};

/// Rows under the body: one for toasts, one for the status bar.
pub const FOOTER_ROWS: u16 = 2;
/// Title and date lines above an entry in the viewer.
pub const VIEWER_HEADER_ROWS: u16 = 2;
