//! Lightweight markdown styling for journal entries.
//!
//! Lines are classified one at a time (heading, list item, code fence,
//! plain) and plain text is split into inline spans. Multi-line state is
//! limited to code fence parity.

pub mod classify;
pub mod fence;
pub mod inline;
pub mod render;
mod types;

pub use classify::{LineKind, classify};
pub use fence::{FenceIndex, is_fence_marker, parity};
pub use inline::tokenize;
pub use render::{
    heading_prefix, render_code_line, render_document, render_line, render_viewport,
    render_wrapped,
};
pub use types::{StyleTag, StyledRow, StyledRun, row_text};
