use std::sync::LazyLock;

use regex::Regex;

use super::fence::is_fence_marker;

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6})\s+(.*)$").expect("heading pattern is valid")
});

static LIST_ITEM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\s*)([-*]|\d+\.)\s+(.*)$").expect("list pattern is valid")
});

/// Block-level kind of a logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Heading {
        level: u8,
        text: &'a str,
    },
    ListItem {
        indent: &'a str,
        marker: &'a str,
        text: &'a str,
    },
    FenceMarker,
    Plain,
}

/// Classify a line. Headings win over list items, list items over fences.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(caps) = HEADING.captures(line) {
        let hashes = caps.get(1).map_or("", |m| m.as_str());
        return LineKind::Heading {
            level: u8::try_from(hashes.len()).unwrap_or(6),
            text: caps.get(2).map_or("", |m| m.as_str()),
        };
    }
    if let Some(caps) = LIST_ITEM.captures(line) {
        return LineKind::ListItem {
            indent: caps.get(1).map_or("", |m| m.as_str()),
            marker: caps.get(2).map_or("", |m| m.as_str()),
            text: caps.get(3).map_or("", |m| m.as_str()),
        };
    }
    if is_fence_marker(line) {
        return LineKind::FenceMarker;
    }
    LineKind::Plain
}
