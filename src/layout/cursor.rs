//! Mapping between logical cursor positions and display rows.

use super::Projection;
use super::wrap::Wrapped;

/// Cursor position in a document of logical lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column, in code points.
    pub col: usize,
}

impl Cursor {
    /// Create a cursor at line 0, column 0.
    pub const fn new() -> Self {
        Self { line: 0, col: 0 }
    }

    /// Create a cursor at a specific position.
    pub const fn at(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

/// Display `(row, col)` of `cursor` within an already wrapped document.
///
/// A column sitting on the space consumed by a wrap break stays at the end
/// of the row it follows. A column on a hard-split boundary moves to the
/// start of the next row.
pub fn display_position<P: Projection + ?Sized>(proj: &P, cursor: Cursor) -> (usize, usize) {
    let line = cursor.line.min(proj.line_count().saturating_sub(1));
    let base: usize = (0..line).map(|i| proj.segments(i).len()).sum();
    let segments = proj.segments(line);

    for (k, seg) in segments.iter().enumerate() {
        let owns_col = segments
            .get(k + 1)
            .is_none_or(|next| cursor.col < next.start);
        if owns_col {
            let col = cursor.col.saturating_sub(seg.start).min(seg.len());
            return (base + k, col);
        }
    }
    (base, 0)
}

/// Logical cursor for display `(row, col)`, clamped to the document.
pub fn logical_position<P: Projection + ?Sized>(proj: &P, row: usize, col: usize) -> Cursor {
    let line_count = proj.line_count();
    if line_count == 0 {
        return Cursor::new();
    }

    let mut remaining = row;
    for line in 0..line_count {
        let segments = proj.segments(line);
        if remaining < segments.len() {
            let seg = &segments[remaining];
            let max_col = segments.get(remaining + 1).map_or(seg.len(), |next| {
                next.start.saturating_sub(1).saturating_sub(seg.start)
            });
            return Cursor::at(line, seg.start + col.min(max_col));
        }
        remaining -= segments.len();
    }

    // Past the last row: end of the document.
    let last = line_count - 1;
    let end = proj.segments(last).last().map_or(0, |seg| seg.end());
    Cursor::at(last, end)
}

/// Total display rows in a wrapped document.
pub fn row_count<P: Projection + ?Sized>(proj: &P) -> usize {
    (0..proj.line_count()).map(|i| proj.segments(i).len()).sum()
}

/// Display `(row, col)` of `cursor` when `lines` are wrapped at `width`.
pub fn to_display<S: AsRef<str>>(cursor: Cursor, lines: &[S], width: usize) -> (usize, usize) {
    display_position(&Wrapped::new(lines, width), cursor)
}

/// Logical cursor at display `(row, col)` when `lines` are wrapped at `width`.
pub fn to_logical<S: AsRef<str>>(row: usize, col: usize, lines: &[S], width: usize) -> Cursor {
    logical_position(&Wrapped::new(lines, width), row, col)
}
