//! Word-wrapping editor for journal entries.
//!
//! Provides a rope-backed line buffer with cursor management and an
//! editing session that turns keystrokes into edits and frames, designed
//! for integration into the TEA architecture.

mod buffer;
mod keys;
mod session;

pub use buffer::{Direction, LineBuffer, TAB_WIDTH};
pub use keys::{Key, is_insertable};
pub use session::{Editor, EditorFrame, KeyOutcome, RenderOutcome};
