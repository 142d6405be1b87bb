//! Inline span tokenizer.
//!
//! Matches are found left to right and never overlap. At any position the
//! alternatives are tried in order: `**bold**`, `` `code` ``, `*italic*`,
//! `_italic_`. Unmatched markers stay in the literal text.

use std::sync::LazyLock;

use regex::Regex;

use super::types::{RowBuilder, StyleTag, StyledRow};

static INLINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\*\*(.+?)\*\*)|(`(.+?)`)|(\*(.+?)\*)|(_(.+?)_)")
        .expect("inline pattern is valid")
});

/// Capture group holding the inner text, paired with its style.
const SPANS: [(usize, StyleTag); 4] = [
    (2, StyleTag::Bold),
    (4, StyleTag::InlineCode),
    (6, StyleTag::Italic),
    (8, StyleTag::Italic),
];

/// Tokenize `text` into styled runs no longer than `budget` code points.
pub fn tokenize(text: &str, budget: usize) -> StyledRow {
    let mut row = RowBuilder::new(budget);
    push_inline(&mut row, text);
    row.finish()
}

/// Append the inline runs of `text` to `row`, stopping when it is full.
pub(crate) fn push_inline(row: &mut RowBuilder, text: &str) {
    let mut last = 0;
    for caps in INLINE.captures_iter(text) {
        let Some(whole) = caps.get(0) else {
            continue;
        };
        if !row.push(&text[last..whole.start()], StyleTag::Plain) {
            return;
        }
        let styled = SPANS
            .iter()
            .find_map(|&(group, tag)| caps.get(group).map(|m| (m.as_str(), tag)));
        if let Some((inner, tag)) = styled
            && !row.push(inner, tag)
        {
            return;
        }
        last = whole.end();
    }
    row.push(&text[last..], StyleTag::Plain);
}
