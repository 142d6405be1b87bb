//! Keeping the cursor's display row inside the viewport.

/// First visible display row of a scrolled view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollState {
    pub top: usize,
}

impl ScrollState {
    pub const fn new(top: usize) -> Self {
        Self { top }
    }

    /// One correction step towards showing `cursor_row`.
    ///
    /// A zero-height viewport has nothing to align and is returned as is.
    #[must_use]
    pub const fn adjust(self, cursor_row: usize, height: usize) -> Self {
        if height == 0 {
            return self;
        }
        if cursor_row < self.top {
            Self { top: cursor_row }
        } else if cursor_row >= self.top + height {
            Self {
                top: cursor_row + 1 - height,
            }
        } else {
            self
        }
    }

    /// Apply [`adjust`](Self::adjust) until the state stops changing.
    ///
    /// One upward and one downward correction are the most a cursor move can
    /// need, so the loop is capped at two steps.
    #[must_use]
    pub fn settle(self, cursor_row: usize, height: usize) -> Self {
        let mut state = self;
        for _ in 0..2 {
            let next = state.adjust(cursor_row, height);
            if next == state {
                break;
            }
            state = next;
        }
        state
    }
}
