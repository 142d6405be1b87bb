use ropey::Rope;

use crate::layout::{Cursor, LineChange};

/// Spaces inserted for a Tab key.
pub const TAB_WIDTH: usize = 4;

/// Direction for cursor movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Ordered logical lines plus the cursor, backed by a rope.
///
/// Columns count code points. Lines are separated by `'\n'` only; every
/// other character the rope would treat as a line break is kept out of the
/// buffer, so line indices here match the rope's.
///
/// The cursor always satisfies `line < line_count()` and
/// `col <= line_len(line)`.
pub struct LineBuffer {
    rope: Rope,
    cursor: Cursor,
    dirty: bool,
}

impl LineBuffer {
    /// Create a buffer holding a single empty line.
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: Cursor::new(),
            dirty: false,
        }
    }

    /// Create a buffer from existing text, cursor at the origin.
    ///
    /// `"\r\n"` is treated as `'\n'`, tabs expand to spaces and any other
    /// control character is dropped.
    pub fn from_text(text: &str) -> Self {
        let mut clean = String::with_capacity(text.len());
        for ch in text.chars() {
            match ch {
                '\n' => clean.push('\n'),
                '\t' => clean.extend(std::iter::repeat_n(' ', TAB_WIDTH)),
                '\u{2028}' | '\u{2029}' => clean.push(' '),
                c if c.is_control() => {}
                c => clean.push(c),
            }
        }
        Self {
            rope: Rope::from_str(&clean),
            cursor: Cursor::new(),
            dirty: false,
        }
    }

    /// The current cursor position.
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether any edit has been made since creation.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Content of a line without its line separator.
    pub fn line(&self, idx: usize) -> Option<String> {
        if idx >= self.line_count() {
            return None;
        }
        let mut text = self.rope.line(idx).to_string();
        if text.ends_with('\n') {
            text.pop();
        }
        Some(text)
    }

    /// Length of a line in code points; 0 when out of range.
    pub fn line_len(&self, idx: usize) -> usize {
        if idx >= self.line_count() {
            return 0;
        }
        let line = self.rope.line(idx);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// All lines, in order.
    pub fn lines(&self) -> Vec<String> {
        (0..self.line_count()).filter_map(|i| self.line(i)).collect()
    }

    /// The document with lines joined by `'\n'`.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Insert `ch` at the cursor and advance one column.
    ///
    /// Characters that would act as line breaks or control codes are
    /// ignored.
    pub fn insert_char(&mut self, ch: char) -> LineChange {
        if ch.is_control() || matches!(ch, '\u{2028}' | '\u{2029}') {
            return LineChange::None;
        }
        let idx = self.cursor_char_idx();
        self.rope.insert_char(idx, ch);
        self.cursor.col += 1;
        self.dirty = true;
        LineChange::Edited(self.cursor.line)
    }

    /// Insert [`TAB_WIDTH`] spaces at the cursor.
    pub fn insert_tab(&mut self) -> LineChange {
        let idx = self.cursor_char_idx();
        self.rope.insert(idx, &" ".repeat(TAB_WIDTH));
        self.cursor.col += TAB_WIDTH;
        self.dirty = true;
        LineChange::Edited(self.cursor.line)
    }

    /// Split the current line at the cursor (Enter).
    pub fn split_line(&mut self) -> LineChange {
        let idx = self.cursor_char_idx();
        self.rope.insert_char(idx, '\n');
        let line = self.cursor.line;
        self.cursor = Cursor::at(line + 1, 0);
        self.dirty = true;
        LineChange::Split(line)
    }

    /// Delete the character before the cursor (Backspace).
    ///
    /// At column 0 the current line is merged onto the previous one.
    pub fn backspace(&mut self) -> LineChange {
        let Cursor { line, col } = self.cursor;
        if col == 0 && line == 0 {
            return LineChange::None;
        }

        let idx = self.cursor_char_idx();
        self.dirty = true;
        if col > 0 {
            self.rope.remove(idx - 1..idx);
            self.cursor.col -= 1;
            LineChange::Edited(line)
        } else {
            let prev_len = self.line_len(line - 1);
            // Remove the separator ending the previous line.
            self.rope.remove(idx - 1..idx);
            self.cursor = Cursor::at(line - 1, prev_len);
            LineChange::Joined(line - 1)
        }
    }

    /// Delete the character at the cursor (Delete).
    ///
    /// At the end of a line the next line is appended to this one. The
    /// cursor does not move.
    pub fn delete_forward(&mut self) -> LineChange {
        let Cursor { line, col } = self.cursor;
        let at_line_end = col >= self.line_len(line);
        if at_line_end && line + 1 >= self.line_count() {
            return LineChange::None;
        }

        let idx = self.cursor_char_idx();
        self.rope.remove(idx..=idx);
        self.dirty = true;
        if at_line_end {
            LineChange::Joined(line)
        } else {
            LineChange::Edited(line)
        }
    }

    /// Move the cursor in the given direction.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.move_left(),
            Direction::Right => self.move_right(),
            Direction::Up => self.move_vertical(-1),
            Direction::Down => self.move_vertical(1),
        }
    }

    /// Move the cursor to column 0 (Home).
    pub const fn move_home(&mut self) {
        self.cursor.col = 0;
    }

    /// Move the cursor past the last character of the line (End).
    pub fn move_end(&mut self) {
        self.cursor.col = self.line_len(self.cursor.line);
    }

    /// Move the cursor to a position, clamped to the document.
    pub fn move_to(&mut self, line: usize, col: usize) {
        let line = line.min(self.line_count().saturating_sub(1));
        self.cursor = Cursor::at(line, col.min(self.line_len(line)));
    }

    // --- Private helpers ---

    fn cursor_char_idx(&self) -> usize {
        self.rope.line_to_char(self.cursor.line) + self.cursor.col
    }

    fn move_left(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
        } else if self.cursor.line > 0 {
            let line = self.cursor.line - 1;
            self.cursor = Cursor::at(line, self.line_len(line));
        }
    }

    fn move_right(&mut self) {
        if self.cursor.col < self.line_len(self.cursor.line) {
            self.cursor.col += 1;
        } else if self.cursor.line + 1 < self.line_count() {
            self.cursor = Cursor::at(self.cursor.line + 1, 0);
        }
    }

    fn move_vertical(&mut self, delta: isize) {
        let Some(line) = self.cursor.line.checked_add_signed(delta) else {
            return;
        };
        if line < self.line_count() {
            self.cursor = Cursor::at(line, self.cursor.col.min(self.line_len(line)));
        }
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LineBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineBuffer")
            .field("rope", &format_args!("Rope({} lines)", self.line_count()))
            .field("cursor", &self.cursor)
            .field("dirty", &self.dirty)
            .finish()
    }
}
