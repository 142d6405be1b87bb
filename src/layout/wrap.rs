//! Greedy word wrapping of logical lines.
//!
//! [`wrap`] is a pure function of `(line, width)`. Words are separated by
//! single space characters, so runs of spaces survive as empty words and
//! every wrap break consumes exactly one space. Words longer than the width
//! are hard-split into width-sized chunks.
//!
//! [`WrapCache`] keeps the wrapped segments of every line of a document
//! for one width and drops only the entries an edit touched.

use super::{LineChange, Projection};

/// One width-bounded piece of a wrapped logical line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Text shown on the display row.
    pub text: String,
    /// Column (in code points) of the first character within the logical line.
    pub start: usize,
    len: usize,
}

impl Segment {
    fn new(start: usize, text: &str, len: usize) -> Self {
        Self {
            text: text.to_string(),
            start,
            len,
        }
    }

    fn from_chars(start: usize, chars: &[char]) -> Self {
        Self {
            text: chars.iter().collect(),
            start,
            len: chars.len(),
        }
    }

    /// Length of the segment in code points.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Column just past the last character of this segment.
    pub const fn end(&self) -> usize {
        self.start + self.len
    }

    fn push_word(&mut self, word: &str, word_len: usize) {
        self.text.push(' ');
        self.text.push_str(word);
        self.len += 1 + word_len;
    }
}

/// A wrapped segment placed in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySegment {
    pub text: String,
    /// Index of the logical line this segment came from.
    pub line: usize,
    /// 0 for the first wrapped piece of a logical line.
    pub index: usize,
}

/// Wrap `line` into segments no wider than `width` code points.
///
/// A width of 0 yields no segments. Any other width yields at least one
/// segment, even for an empty line.
///
/// # Example
///
/// ```
/// use jotter::layout::wrap;
///
/// let texts: Vec<String> = wrap("one two three four", 8)
///     .into_iter()
///     .map(|s| s.text)
///     .collect();
/// assert_eq!(texts, ["one two", "three", "four"]);
/// ```
pub fn wrap(line: &str, width: usize) -> Vec<Segment> {
    if width == 0 {
        return Vec::new();
    }

    let mut segments = Vec::new();
    let mut pending: Option<Segment> = None;
    let mut offset = 0;

    for word in line.split(' ') {
        let word_start = offset;
        let word_len = word.chars().count();
        offset += word_len + 1;

        if word_len > width {
            // The tail chunk stays pending so following words can join it.
            let chars: Vec<char> = word.chars().collect();
            for (i, chunk) in chars.chunks(width).enumerate() {
                let chunk_seg = Segment::from_chars(word_start + i * width, chunk);
                if let Some(done) = pending.replace(chunk_seg) {
                    segments.push(done);
                }
            }
            continue;
        }

        match pending.as_mut() {
            Some(current) if current.len + 1 + word_len <= width => {
                current.push_word(word, word_len);
            }
            _ => {
                if let Some(done) = pending.replace(Segment::new(word_start, word, word_len)) {
                    segments.push(done);
                }
            }
        }
    }

    if let Some(done) = pending {
        segments.push(done);
    }
    segments
}

/// Wrapped segments of a whole document, computed eagerly.
#[derive(Debug, Clone)]
pub struct Wrapped {
    lines: Vec<Vec<Segment>>,
}

impl Wrapped {
    pub fn new<S: AsRef<str>>(lines: &[S], width: usize) -> Self {
        Self {
            lines: lines.iter().map(|l| wrap(l.as_ref(), width)).collect(),
        }
    }
}

impl Projection for Wrapped {
    fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn segments(&self, line: usize) -> &[Segment] {
        self.lines.get(line).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Per-line wrap results for a single width.
///
/// Entries are filled lazily by [`WrapCache::refresh`] and invalidated by
/// [`WrapCache::apply`], so a keystroke re-wraps only the line it touched.
#[derive(Debug, Clone, Default)]
pub struct WrapCache {
    width: usize,
    entries: Vec<Option<Vec<Segment>>>,
}

impl WrapCache {
    pub const fn new(width: usize) -> Self {
        Self {
            width,
            entries: Vec::new(),
        }
    }

    /// Change the wrap width, dropping every entry if it differs.
    pub fn set_width(&mut self, width: usize) {
        if width != self.width {
            tracing::debug!(from = self.width, to = width, "wrap width changed");
            self.width = width;
            self.entries.clear();
        }
    }

    /// Invalidate the entries affected by an edit.
    pub fn apply(&mut self, change: LineChange) {
        match change {
            LineChange::None => {}
            LineChange::Edited(line) => self.invalidate(line),
            LineChange::Split(line) => {
                self.invalidate(line);
                if line < self.entries.len() {
                    self.entries.insert(line + 1, None);
                }
            }
            LineChange::Joined(line) => {
                self.invalidate(line);
                if line + 1 < self.entries.len() {
                    self.entries.remove(line + 1);
                }
            }
        }
    }

    fn invalidate(&mut self, line: usize) {
        if let Some(entry) = self.entries.get_mut(line) {
            *entry = None;
        }
    }

    /// Number of lines that currently hold wrapped segments.
    pub fn cached_lines(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }

    /// Wrap every line that has no cached entry.
    ///
    /// `line_text` is only called for lines that need wrapping.
    pub fn refresh(&mut self, line_count: usize, mut line_text: impl FnMut(usize) -> String) {
        if self.entries.len() != line_count {
            // Out of step with the document; start over.
            self.entries.clear();
            self.entries.resize(line_count, None);
        }
        let width = self.width;
        for (idx, entry) in self.entries.iter_mut().enumerate() {
            if entry.is_none() {
                *entry = Some(wrap(&line_text(idx), width));
            }
        }
    }

    /// Display segments for rows `start..start + count` of the document.
    pub fn display_rows(&self, start: usize, count: usize) -> Vec<DisplaySegment> {
        let mut rows = Vec::with_capacity(count);
        let mut row = 0;
        for (line, entry) in self.entries.iter().enumerate() {
            let segments = entry.as_deref().unwrap_or_default();
            if row + segments.len() <= start {
                row += segments.len();
                continue;
            }
            for (index, seg) in segments.iter().enumerate() {
                if row >= start && rows.len() < count {
                    rows.push(DisplaySegment {
                        text: seg.text.clone(),
                        line,
                        index,
                    });
                }
                row += 1;
            }
            if rows.len() >= count {
                break;
            }
        }
        rows
    }
}

impl Projection for WrapCache {
    fn line_count(&self) -> usize {
        self.entries.len()
    }

    fn segments(&self, line: usize) -> &[Segment] {
        self.entries
            .get(line)
            .and_then(Option::as_deref)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(line: &str, width: usize) -> Vec<String> {
        wrap(line, width).into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_wrap_short_text() {
        assert_eq!(texts("hello", 10), ["hello"]);
    }

    #[test]
    fn test_wrap_at_word_boundary() {
        assert_eq!(texts("hello world", 8), ["hello", "world"]);
    }

    #[test]
    fn test_wrap_long_word() {
        assert_eq!(texts("supercalifragilistic", 10), ["supercalif", "ragilistic"]);
    }

    #[test]
    fn test_wrap_multiple_lines() {
        assert_eq!(texts("one two three four", 8), ["one two", "three", "four"]);
    }

    #[test]
    fn test_wrap_empty_string() {
        assert_eq!(texts("", 10), [""]);
    }

    #[test]
    fn test_wrap_exact_width() {
        assert_eq!(texts("hello", 5), ["hello"]);
    }

    #[test]
    fn test_wrap_zero_width_is_empty() {
        assert!(wrap("hello", 0).is_empty());
        assert!(wrap("", 0).is_empty());
    }

    #[test]
    fn test_exact_fit_joins_current_segment() {
        // 3 + 1 + 4 == 8
        assert_eq!(texts("one four five", 8), ["one four", "five"]);
    }

    #[test]
    fn test_long_word_flushes_pending_segment() {
        assert_eq!(
            texts("ab cdefghijklmno", 10),
            ["ab", "cdefghijkl", "mno"]
        );
    }

    #[test]
    fn test_long_word_tail_accepts_following_words() {
        assert_eq!(texts("abcdefghijkl xy", 10), ["abcdefghij", "kl xy"]);
    }

    #[test]
    fn test_repeated_spaces_are_kept() {
        assert_eq!(texts("a  b", 10), ["a  b"]);
        assert_eq!(texts("  indented", 20), ["  indented"]);
    }

    #[test]
    fn test_segment_starts_track_source_columns() {
        let segs = wrap("hello world again", 8);
        let starts: Vec<usize> = segs.iter().map(|s| s.start).collect();
        assert_eq!(starts, [0, 6, 12]);

        let hard = wrap("abcdefghijklmnopqrst", 10);
        assert_eq!(hard[1].start, 10);
        assert_eq!(hard[0].end(), hard[1].start);
    }

    #[test]
    fn test_cache_refresh_wraps_all_lines() {
        let lines = ["hello world", "", "x"];
        let mut cache = WrapCache::new(8);
        cache.refresh(lines.len(), |i| lines[i].to_string());
        assert_eq!(cache.line_count(), 3);
        assert_eq!(cache.segments(0).len(), 2);
        assert_eq!(cache.segments(1).len(), 1);
    }

    #[test]
    fn test_cache_only_rewraps_invalidated_line() {
        let mut lines = vec!["aaa".to_string(), "bbb".to_string(), "ccc".to_string()];
        let mut cache = WrapCache::new(10);
        cache.refresh(lines.len(), |i| lines[i].clone());

        lines[1].push_str(" bbb");
        cache.apply(LineChange::Edited(1));
        assert_eq!(cache.cached_lines(), 2);

        let mut wrapped = Vec::new();
        cache.refresh(lines.len(), |i| {
            wrapped.push(i);
            lines[i].clone()
        });
        assert_eq!(wrapped, [1]);
        assert_eq!(cache.segments(1)[0].text, "bbb bbb");
    }

    #[test]
    fn test_cache_split_and_join_keep_alignment() {
        let mut lines = vec!["ab".to_string(), "cd".to_string()];
        let mut cache = WrapCache::new(10);
        cache.refresh(lines.len(), |i| lines[i].clone());

        lines = vec!["a".to_string(), "b".to_string(), "cd".to_string()];
        cache.apply(LineChange::Split(0));
        cache.refresh(lines.len(), |i| lines[i].clone());
        assert_eq!(cache.segments(0)[0].text, "a");
        assert_eq!(cache.segments(1)[0].text, "b");
        assert_eq!(cache.segments(2)[0].text, "cd");

        lines = vec!["ab".to_string(), "cd".to_string()];
        cache.apply(LineChange::Joined(0));
        cache.refresh(lines.len(), |i| lines[i].clone());
        assert_eq!(cache.segments(0)[0].text, "ab");
        assert_eq!(cache.segments(1)[0].text, "cd");
    }

    #[test]
    fn test_cache_width_change_clears_entries() {
        let lines = ["hello world"];
        let mut cache = WrapCache::new(20);
        cache.refresh(1, |i| lines[i].to_string());
        cache.set_width(5);
        assert_eq!(cache.cached_lines(), 0);
        cache.refresh(1, |i| lines[i].to_string());
        assert_eq!(cache.segments(0).len(), 2);
    }

    #[test]
    fn test_display_rows_skip_to_start() {
        let lines = ["one two three", "four", "five six"];
        let mut cache = WrapCache::new(5);
        cache.refresh(lines.len(), |i| lines[i].to_string());
        // rows: one, two, three, four, five, six
        let rows = cache.display_rows(2, 3);
        let got: Vec<(&str, usize, usize)> = rows
            .iter()
            .map(|r| (r.text.as_str(), r.line, r.index))
            .collect();
        assert_eq!(got, [("three", 0, 2), ("four", 1, 0), ("five", 2, 0)]);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn wrap_is_idempotent(line in "[a-z ]{0,60}", width in 1..20usize) {
                let first = wrap(&line, width);
                let joined = first
                    .iter()
                    .map(|s| s.text.as_str())
                    .collect::<Vec<_>>()
                    .join(" ");
                let again = wrap(&joined, width);
                let first_texts: Vec<&str> = first.iter().map(|s| s.text.as_str()).collect();
                let again_texts: Vec<&str> = again.iter().map(|s| s.text.as_str()).collect();
                prop_assert_eq!(first_texts, again_texts);
            }

            #[test]
            fn segments_never_exceed_width(line in "[a-z ]{0,80}", width in 1..30usize) {
                let segs = wrap(&line, width);
                prop_assert!(!segs.is_empty());
                for seg in &segs {
                    prop_assert!(seg.len() <= width);
                    prop_assert_eq!(seg.len(), seg.text.chars().count());
                }
            }

            #[test]
            fn segments_are_slices_of_the_line(line in "[a-z ]{0,80}", width in 1..30usize) {
                let chars: Vec<char> = line.chars().collect();
                for seg in wrap(&line, width) {
                    let slice: String = chars[seg.start..seg.end()].iter().collect();
                    prop_assert_eq!(slice, seg.text);
                }
            }
        }
    }
}
