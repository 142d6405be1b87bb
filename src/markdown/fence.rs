//! Code fence parity.
//!
//! A line is inside a code block when an odd number of fence markers come
//! before it. [`parity`] answers that with a scan from the document start.
//! [`FenceIndex`] keeps the answers for a prefix of the document and only
//! forgets the ones at or after an edited line.

use crate::layout::LineChange;

/// Whether `line` opens or closes a fenced code block.
pub fn is_fence_marker(line: &str) -> bool {
    line.trim_start().starts_with("```")
}

/// Whether line `upto` sits inside a code block.
///
/// Scans `lines[..upto]`; `upto` past the end counts every line.
pub fn parity<S: AsRef<str>>(lines: &[S], upto: usize) -> bool {
    lines
        .iter()
        .take(upto)
        .filter(|line| is_fence_marker(line.as_ref()))
        .count()
        % 2
        == 1
}

/// Prefix-parity array, extended on demand.
///
/// `prefix[i]` is the parity of line `i`; it is valid for every index the
/// vector holds.
#[derive(Debug, Clone, Default)]
pub struct FenceIndex {
    prefix: Vec<bool>,
}

impl FenceIndex {
    pub const fn new() -> Self {
        Self { prefix: Vec::new() }
    }

    /// Forget the parity of every line after the first edited one.
    pub fn apply(&mut self, change: LineChange) {
        if let Some(line) = change.first_line() {
            self.prefix.truncate(line + 1);
        }
    }

    /// Number of lines with a known parity.
    pub fn known(&self) -> usize {
        self.prefix.len()
    }

    /// Parity of `line`; `is_marker(i)` is asked for lines not yet scanned.
    pub fn parity_at(&mut self, line: usize, mut is_marker: impl FnMut(usize) -> bool) -> bool {
        if self.prefix.is_empty() {
            self.prefix.push(false);
        }
        while self.prefix.len() <= line {
            let prev = self.prefix.len() - 1;
            let next = self.prefix[prev] ^ is_marker(prev);
            self.prefix.push(next);
        }
        self.prefix[line]
    }
}
