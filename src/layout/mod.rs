//! Text layout: word wrapping, cursor projection and scrolling.
//!
//! Everything here works on code-point columns and is independent of the
//! terminal. The editor and the viewer both build on these pieces.

pub mod cursor;
pub mod scroll;
pub mod wrap;

pub use cursor::{Cursor, display_position, logical_position, row_count, to_display, to_logical};
pub use scroll::ScrollState;
pub use wrap::{DisplaySegment, Segment, WrapCache, Wrapped, wrap};

/// Which logical lines an edit touched.
///
/// Caches keyed by line index use this to drop only the stale entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineChange {
    /// Nothing changed (cursor motion, rejected key).
    #[default]
    None,
    /// Line `n` changed in place.
    Edited(usize),
    /// Line `n` changed and a new line was inserted after it.
    Split(usize),
    /// Line `n` changed and the line after it was removed.
    Joined(usize),
}

impl LineChange {
    /// First line whose content may differ after the edit.
    pub const fn first_line(self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Edited(line) | Self::Split(line) | Self::Joined(line) => Some(line),
        }
    }
}

/// A document whose lines have been wrapped into segments.
pub trait Projection {
    fn line_count(&self) -> usize;

    /// Wrapped segments of `line`; empty when out of range.
    fn segments(&self, line: usize) -> &[Segment];
}
