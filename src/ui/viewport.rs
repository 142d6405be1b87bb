//! Scrolling for the read-only entry viewer.
//!
//! The viewer scrolls over wrapped display rows, so its offset is a row
//! index. Unlike the editor there is no cursor to follow; the offset is
//! moved directly and clamped so the last page stays full.

use std::ops::Range;

use crate::layout::ScrollState;

/// Visible window over a rendered entry.
///
/// # Example
///
/// ```
/// use jotter::ui::viewport::Viewport;
///
/// let mut vp = Viewport::new(10, 25);
/// vp.scroll_down(30);
/// assert_eq!(vp.visible_range(), 15..25);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Viewport {
    scroll: ScrollState,
    height: usize,
    total_lines: usize,
}

impl Viewport {
    pub const fn new(height: usize, total_lines: usize) -> Self {
        Self {
            scroll: ScrollState::new(0),
            height,
            total_lines,
        }
    }

    /// First visible line.
    pub const fn offset(&self) -> usize {
        self.scroll.top
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Lines currently on screen, clamped to the document.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset() + self.height).min(self.total_lines);
        self.offset().min(end)..end
    }

    /// How far through the document the view is, 0-100.
    pub fn scroll_percent(&self) -> usize {
        let max = self.max_offset();
        if max == 0 {
            return 100;
        }
        self.offset() * 100 / max
    }

    pub const fn scroll_up(&mut self, n: usize) {
        self.scroll.top = self.scroll.top.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.scroll.top = (self.scroll.top + n).min(self.max_offset());
    }

    pub fn page_up(&mut self) {
        self.scroll_up(self.height.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down(self.height.max(1));
    }

    pub const fn go_to_top(&mut self) {
        self.scroll.top = 0;
    }

    pub const fn go_to_bottom(&mut self) {
        self.scroll.top = self.max_offset();
    }

    /// Change the visible height, keeping the offset valid.
    pub fn resize(&mut self, height: usize) {
        self.height = height;
        self.scroll.top = self.scroll.top.min(self.max_offset());
    }

    /// Update the document length after a re-wrap.
    pub fn set_total_lines(&mut self, total: usize) {
        self.total_lines = total;
        self.scroll.top = self.scroll.top.min(self.max_offset());
    }

    const fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.height)
    }
}
