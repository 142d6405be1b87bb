use unicode_width::UnicodeWidthChar;

/// A decoded keystroke as the editor understands it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Tab,
    Backspace,
    Delete,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    /// Finish the session and hand back the text.
    Commit,
    /// Finish the session and discard the text.
    Cancel,
    /// Anything the editor has no binding for.
    Other,
}

/// Whether `ch` may be inserted into a line.
///
/// Layout counts one column per code point, so only characters that occupy
/// exactly one terminal cell are accepted. Control characters, combining
/// marks and wide characters are rejected.
pub fn is_insertable(ch: char) -> bool {
    !ch.is_control() && ch.width() == Some(1)
}
