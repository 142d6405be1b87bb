use crate::layout::{LineChange, ScrollState, WrapCache, display_position};
use crate::markdown::{FenceIndex, StyleTag, StyledRow, StyledRun, is_fence_marker};

use super::buffer::{Direction, LineBuffer};
use super::keys::{Key, is_insertable};

/// Result of feeding one key to an [`Editor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    Continue,
    /// The session ended and produced this text.
    Commit(String),
    /// The session ended without a result.
    Cancel,
}

/// Rows to draw plus where the terminal cursor goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorFrame {
    pub rows: Vec<StyledRow>,
    /// `(row, col)` relative to the top-left of the frame.
    pub cursor: (usize, usize),
}

/// What [`Editor::render`] produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Frame(EditorFrame),
    /// The viewport has no columns or no rows.
    NoRoom,
}

/// An interactive editing session over a [`LineBuffer`].
///
/// Wrapped lines and fence parity are cached between frames; each edit
/// invalidates only the lines it touched.
#[derive(Debug, Default)]
pub struct Editor {
    buffer: LineBuffer,
    wraps: WrapCache,
    fences: FenceIndex,
    scroll: ScrollState,
    closed: bool,
}

impl Editor {
    /// Open a session, optionally pre-populated with `initial` text.
    pub fn open(initial: Option<&str>) -> Self {
        let buffer = initial.map_or_else(LineBuffer::new, LineBuffer::from_text);
        Self {
            buffer,
            ..Self::default()
        }
    }

    pub const fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub const fn scroll(&self) -> ScrollState {
        self.scroll
    }

    /// Whether Commit or Cancel has been fed.
    pub const fn is_closed(&self) -> bool {
        self.closed
    }

    /// Apply one keystroke.
    ///
    /// Keys fed after the session closed are ignored.
    pub fn feed_key(&mut self, key: Key) -> KeyOutcome {
        if self.closed {
            return KeyOutcome::Continue;
        }

        let change = match key {
            Key::Char(ch) if is_insertable(ch) => self.buffer.insert_char(ch),
            Key::Char(_) | Key::Other => LineChange::None,
            Key::Tab => self.buffer.insert_tab(),
            Key::Backspace => self.buffer.backspace(),
            Key::Delete => self.buffer.delete_forward(),
            Key::Enter => self.buffer.split_line(),
            Key::Left => self.motion(|b| b.move_cursor(Direction::Left)),
            Key::Right => self.motion(|b| b.move_cursor(Direction::Right)),
            Key::Up => self.motion(|b| b.move_cursor(Direction::Up)),
            Key::Down => self.motion(|b| b.move_cursor(Direction::Down)),
            Key::Home => self.motion(LineBuffer::move_home),
            Key::End => self.motion(LineBuffer::move_end),
            Key::Commit => {
                self.closed = true;
                tracing::debug!(lines = self.buffer.line_count(), "editor committed");
                return KeyOutcome::Commit(self.buffer.text());
            }
            Key::Cancel => {
                self.closed = true;
                tracing::debug!(dirty = self.buffer.is_dirty(), "editor cancelled");
                return KeyOutcome::Cancel;
            }
        };

        self.wraps.apply(change);
        self.fences.apply(change);
        KeyOutcome::Continue
    }

    /// Lay out the visible rows for a `width` x `height` viewport.
    ///
    /// Scrolls just enough to keep the cursor's row visible.
    pub fn render(&mut self, width: usize, height: usize) -> RenderOutcome {
        if width == 0 || height == 0 {
            return RenderOutcome::NoRoom;
        }

        let buffer = &self.buffer;
        self.wraps.set_width(width);
        self.wraps
            .refresh(buffer.line_count(), |i| buffer.line(i).unwrap_or_default());

        let cursor = buffer.cursor();
        let (mut cursor_row, mut cursor_col) = display_position(&self.wraps, cursor);
        // A full row whose wrap consumed a space has no cell for the boundary
        // column; draw it at the start of the next row instead.
        if cursor_col >= width && cursor.col < buffer.line_len(cursor.line) {
            cursor_row += 1;
            cursor_col = 0;
        }
        self.scroll = self.scroll.settle(cursor_row, height);

        let mut rows = Vec::with_capacity(height);
        let mut line_tag: Option<(usize, StyleTag)> = None;
        for segment in self.wraps.display_rows(self.scroll.top, height) {
            let tag = match line_tag {
                Some((line, tag)) if line == segment.line => tag,
                _ => {
                    let tag = self.line_tag(segment.line);
                    line_tag = Some((segment.line, tag));
                    tag
                }
            };
            if segment.text.is_empty() {
                rows.push(Vec::new());
            } else {
                rows.push(vec![StyledRun::new(segment.text, tag)]);
            }
        }

        RenderOutcome::Frame(EditorFrame {
            rows,
            cursor: (cursor_row - self.scroll.top, cursor_col.min(width - 1)),
        })
    }

    fn motion(&mut self, apply: impl FnOnce(&mut LineBuffer)) -> LineChange {
        apply(&mut self.buffer);
        LineChange::None
    }

    fn line_tag(&mut self, line: usize) -> StyleTag {
        let buffer = &self.buffer;
        let is_marker = |i: usize| buffer.line(i).is_some_and(|l| is_fence_marker(&l));
        if is_marker(line) {
            StyleTag::FenceMarker
        } else if self.fences.parity_at(line, is_marker) {
            StyleTag::CodeBlock
        } else {
            StyleTag::Plain
        }
    }
}
