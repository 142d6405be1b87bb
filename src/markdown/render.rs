//! Read-only markdown rendering.
//!
//! [`render_line`] styles one logical line into a single row cut to the
//! width. The viewer goes through [`render_viewport`] instead, which wraps
//! each line into as many display rows as it needs; only headings and fence
//! rules stay on one row.

use crate::layout::{Segment, wrap};

use super::classify::{LineKind, classify};
use super::fence::{is_fence_marker, parity};
use super::inline::push_inline;
use super::types::{RowBuilder, StyleTag, StyledRow, StyledRun, row_text};

const BULLET: &str = "•";
const RULE: char = '─';
const ELLIPSIS: char = '…';

/// Decorative prefix for a heading level.
pub const fn heading_prefix(level: u8) -> &'static str {
    match level {
        1 => "█ ",
        2 => "▓ ",
        3 => "▒ ",
        _ => "░ ",
    }
}

/// Render a line that is outside any code block.
pub fn render_line(line: &str, width: usize) -> StyledRow {
    match classify(line) {
        LineKind::Heading { level, text } => render_heading(level, text, width),
        LineKind::ListItem {
            indent,
            marker,
            text,
        } => {
            let mut row = RowBuilder::new(width);
            let glyph = if marker.ends_with('.') { marker } else { BULLET };
            if row.push(indent, StyleTag::Plain)
                && row.push(glyph, StyleTag::ListMarker)
                && row.push(" ", StyleTag::Plain)
            {
                push_inline(&mut row, text);
            }
            row.finish()
        }
        LineKind::FenceMarker => render_rule(width),
        LineKind::Plain => {
            let mut row = RowBuilder::new(width);
            push_inline(&mut row, line);
            row.finish()
        }
    }
}

/// Render a line inside a code block: verbatim, cut to `width`.
pub fn render_code_line(line: &str, width: usize) -> StyledRow {
    let mut row = RowBuilder::new(width);
    row.push(line, StyleTag::CodeBlock);
    row.finish()
}

/// Render one logical line as display rows no wider than `width`.
///
/// `in_code` is the fence parity of the line. Headings keep a single
/// ellipsized row and fence markers a single rule; everything else wraps
/// with [`wrap`], each piece keeping the styles of the text it covers.
pub fn render_wrapped(line: &str, in_code: bool, width: usize) -> Vec<StyledRow> {
    if width == 0 {
        return Vec::new();
    }
    if is_fence_marker(line) {
        return vec![render_rule(width)];
    }
    if in_code {
        return wrap(line, width)
            .into_iter()
            .map(|seg| render_code_line(&seg.text, width))
            .collect();
    }
    if matches!(classify(line), LineKind::Heading { .. }) {
        return vec![render_line(line, width)];
    }

    let runs = render_line(line, usize::MAX);
    split_runs(&runs, &wrap(&row_text(&runs), width))
}

/// Render up to `height` display rows, starting at the first row of
/// logical line `top`.
///
/// Fence parity is computed once for `top` and then carried forward.
pub fn render_viewport<S: AsRef<str>>(
    lines: &[S],
    top: usize,
    width: usize,
    height: usize,
) -> Vec<StyledRow> {
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let mut in_code = parity(lines, top);
    let mut rows = Vec::new();
    for line in lines.iter().skip(top) {
        if rows.len() >= height {
            break;
        }
        let line = line.as_ref();
        rows.extend(render_wrapped(line, in_code, width));
        if is_fence_marker(line) {
            in_code = !in_code;
        }
    }
    rows.truncate(height);
    rows
}

/// Every display row of a document at `width`.
pub fn render_document<S: AsRef<str>>(lines: &[S], width: usize) -> Vec<StyledRow> {
    render_viewport(lines, 0, width, usize::MAX)
}

/// Cut styled runs along wrap segments of their concatenated text.
fn split_runs(runs: &[StyledRun], segments: &[Segment]) -> Vec<StyledRow> {
    let mut spans = Vec::with_capacity(runs.len());
    let mut offset = 0;
    for run in runs {
        let chars: Vec<char> = run.text().chars().collect();
        let start = offset;
        offset += chars.len();
        spans.push((start, chars, run.tag()));
    }

    segments
        .iter()
        .map(|seg| {
            let mut row = StyledRow::new();
            for (start, chars, tag) in &spans {
                let from = seg.start.max(*start);
                let to = seg.end().min(start + chars.len());
                if from < to {
                    let text: String = chars[from - start..to - start].iter().collect();
                    row.push(StyledRun::new(text, *tag));
                }
            }
            row
        })
        .collect()
}

fn render_heading(level: u8, text: &str, width: usize) -> StyledRow {
    let mut full = String::from(heading_prefix(level));
    full.push_str(text);
    if full.chars().count() > width {
        full = full.chars().take(width.saturating_sub(1)).collect();
        full.push(ELLIPSIS);
    }
    let mut row = RowBuilder::new(width);
    row.push(&full, StyleTag::Heading(level));
    row.finish()
}

fn render_rule(width: usize) -> StyledRow {
    let mut row = RowBuilder::new(width);
    row.push(&RULE.to_string().repeat(width), StyleTag::Rule);
    row.finish()
}
