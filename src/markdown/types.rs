//! Styled output types shared by the editor and the viewer.

/// What a run of text should look like, independent of colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StyleTag {
    #[default]
    Plain,
    Bold,
    Italic,
    InlineCode,
    /// Heading with level (1-6)
    Heading(u8),
    /// Bullet or number of a list item
    ListMarker,
    /// Horizontal rule drawn for a code fence
    Rule,
    /// Line inside a fenced code block
    CodeBlock,
    /// Raw fence line shown in the editor
    FenceMarker,
}

/// A run of text with a single style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    text: String,
    tag: StyleTag,
}

impl StyledRun {
    pub fn new(text: impl Into<String>, tag: StyleTag) -> Self {
        Self {
            text: text.into(),
            tag,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub const fn tag(&self) -> StyleTag {
        self.tag
    }
}

/// One display row.
pub type StyledRow = Vec<StyledRun>;

/// Concatenated text of a row.
pub fn row_text(row: &[StyledRun]) -> String {
    row.iter().map(StyledRun::text).collect()
}

/// Builds a row while enforcing a horizontal budget in code points.
#[derive(Debug)]
pub(crate) struct RowBuilder {
    runs: StyledRow,
    remaining: usize,
}

impl RowBuilder {
    pub(crate) const fn new(width: usize) -> Self {
        Self {
            runs: Vec::new(),
            remaining: width,
        }
    }

    /// Append `text` cut to the remaining budget.
    ///
    /// Returns `false` once the budget is exhausted.
    pub(crate) fn push(&mut self, text: &str, tag: StyleTag) -> bool {
        if self.remaining == 0 {
            return false;
        }
        let taken: String = text.chars().take(self.remaining).collect();
        let len = taken.chars().count();
        if len > 0 {
            self.remaining -= len;
            self.runs.push(StyledRun::new(taken, tag));
        }
        self.remaining > 0
    }

    pub(crate) fn finish(self) -> StyledRow {
        self.runs
    }
}
