use ropey::Rope;

/// How a typed character treats the text under the cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    /// Push existing text to the right.
    #[default]
    Insert,
    /// Replace the character under the cursor.
    Overwrite,
}

impl EditMode {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Insert => Self::Overwrite,
            Self::Overwrite => Self::Insert,
        }
    }
}

/// Line-addressed text backed by a rope.
///
/// Rows and columns are 1-based to match display addressing; row 0 and
/// column 0 are never valid and every operation ignores them. The buffer
/// always holds at least one line. Each `char` occupies one display cell.
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    /// Create a buffer holding one empty line.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a buffer from text, one line per `\n`.
    ///
    /// Control characters and other line separators become spaces so that
    /// every line maps onto a single display row.
    pub fn from_text(text: &str) -> Self {
        let cleaned: String = text
            .split('\n')
            .map(|line| {
                line.trim_end_matches('\r')
                    .chars()
                    .map(|ch| if is_cell_char(ch) { ch } else { ' ' })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            rope: Rope::from_str(&cleaned),
        }
    }

    /// Number of lines (never zero).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Content of a line without its line break.
    pub fn line(&self, row: usize) -> Option<String> {
        if !self.has_line(row) {
            return None;
        }
        let line = self.rope.line(row - 1);
        Some(line.chars().filter(|ch| *ch != '\n').collect())
    }

    /// Length of a line in characters; 0 for a line that does not exist.
    pub fn line_length(&self, row: usize) -> usize {
        if !self.has_line(row) {
            return 0;
        }
        let line = self.rope.line(row - 1);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    /// Character at a position, reading past the end of a line as a space.
    pub fn char_at(&self, row: usize, col: usize) -> char {
        if col == 0 || col > self.line_length(row) {
            return ' ';
        }
        self.rope.char(self.line_start(row) + col - 1)
    }

    /// Up to `width` characters of a line starting at column `from`.
    pub fn line_segment(&self, row: usize, from: usize, width: usize) -> String {
        if from == 0 || !self.has_line(row) {
            return String::new();
        }
        self.rope
            .line(row - 1)
            .chars()
            .filter(|ch| *ch != '\n')
            .skip(from - 1)
            .take(width)
            .collect()
    }

    /// The full text, lines joined by `\n`.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Type `ch` at a position.
    ///
    /// Within the line (or just past its end) the character is inserted or,
    /// in overwrite mode, replaces the one at `col`. Further right, the gap
    /// is filled with spaces first. Missing lines are created.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char, mode: EditMode) {
        if row == 0 || col == 0 || !is_cell_char(ch) {
            return;
        }
        self.ensure_line(row);
        let len = self.line_length(row);
        let start = self.line_start(row);

        if col > len + 1 {
            let padding = " ".repeat(col - 1 - len);
            self.rope.insert(start + len, &padding);
            self.rope.insert_char(start + col - 1, ch);
            return;
        }

        let idx = start + col - 1;
        if mode == EditMode::Overwrite && col <= len {
            self.rope.remove(idx..=idx);
        }
        self.rope.insert_char(idx, ch);
    }

    /// Break a line before `col`; the right part becomes the next line.
    ///
    /// A column past the end splits at the end, leaving an empty new line.
    pub fn split_line(&mut self, row: usize, col: usize) {
        if row == 0 || col == 0 {
            return;
        }
        self.ensure_line(row);
        let at = (col - 1).min(self.line_length(row));
        let idx = self.line_start(row) + at;
        self.rope.insert_char(idx, '\n');
    }

    /// Append line `row` to line `row - 1` and remove it.
    ///
    /// Returns `false` (and does nothing) for the first line or a line that
    /// does not exist.
    pub fn join_with_previous(&mut self, row: usize) -> bool {
        if row <= 1 || !self.has_line(row) {
            return false;
        }
        let idx = self.line_start(row);
        self.rope.remove(idx - 1..idx);
        true
    }

    /// Delete the character at `col`.
    ///
    /// At or past the end of the line, the line is first padded with spaces
    /// up to `col - 1`, then the next line is joined on so it lands at `col`.
    /// On the last line only the padding happens. Returns `false` when
    /// nothing changed.
    pub fn delete_char_at(&mut self, row: usize, col: usize) -> bool {
        if col == 0 || !self.has_line(row) {
            return false;
        }
        let len = self.line_length(row);
        let start = self.line_start(row);
        if col <= len {
            let idx = start + col - 1;
            self.rope.remove(idx..=idx);
            return true;
        }
        let padded = col - 1;
        let mut changed = false;
        if padded > len {
            self.rope.insert(start + len, &" ".repeat(padded - len));
            changed = true;
        }
        if row >= self.line_count() {
            return changed;
        }
        let newline = start + padded;
        self.rope.remove(newline..=newline);
        true
    }

    /// Append empty lines until `row` exists.
    pub fn ensure_line(&mut self, row: usize) {
        let count = self.line_count();
        if row > count {
            let end = self.rope.len_chars();
            self.rope.insert(end, &"\n".repeat(row - count));
        }
    }

    // --- Private helpers ---

    fn has_line(&self, row: usize) -> bool {
        row >= 1 && row <= self.line_count()
    }

    /// Char index of the first character of an existing line.
    fn line_start(&self, row: usize) -> usize {
        self.rope.line_to_char(row - 1)
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .finish()
    }
}

/// Characters that occupy exactly one cell and never break a line.
///
/// Ropey also treats `\r`, vertical tab, form feed, NEL and the Unicode
/// line/paragraph separators as line breaks.
pub(super) fn is_cell_char(ch: char) -> bool {
    !ch.is_control() && !matches!(ch, '\u{2028}' | '\u{2029}')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(buf: &TextBuffer) -> Vec<String> {
        (1..=buf.line_count())
            .map(|row| buf.line(row).unwrap())
            .collect()
    }

    fn type_str(buf: &mut TextBuffer, row: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            buf.insert_char(row, i + 1, ch, EditMode::Insert);
        }
    }

    // --- Construction and basic queries ---

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = TextBuffer::new();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line(1), Some(String::new()));
        assert_eq!(buf.line(0), None);
    }

    #[test]
    fn test_from_text_preserves_lines() {
        let buf = TextBuffer::from_text("hello\nworld");
        assert_eq!(lines(&buf), vec!["hello", "world"]);
        assert_eq!(buf.text(), "hello\nworld");
    }

    #[test]
    fn test_from_text_neutralises_line_breakers() {
        let buf = TextBuffer::from_text("a\rb\u{2028}c\r\nd");
        assert_eq!(lines(&buf), vec!["a b c", "d"]);
    }

    #[test]
    fn test_line_length_of_missing_line_is_zero() {
        let buf = TextBuffer::from_text("hello");
        assert_eq!(buf.line_length(1), 5);
        assert_eq!(buf.line_length(0), 0);
        assert_eq!(buf.line_length(2), 0);
    }

    #[test]
    fn test_char_at_pads_with_spaces() {
        let buf = TextBuffer::from_text("hi");
        assert_eq!(buf.char_at(1, 1), 'h');
        assert_eq!(buf.char_at(1, 2), 'i');
        assert_eq!(buf.char_at(1, 3), ' ');
        assert_eq!(buf.char_at(9, 1), ' ');
    }

    #[test]
    fn test_line_segment_windows_the_line() {
        let buf = TextBuffer::from_text("abcdef\nxy");
        assert_eq!(buf.line_segment(1, 3, 2), "cd");
        assert_eq!(buf.line_segment(1, 5, 10), "ef");
        assert_eq!(buf.line_segment(1, 8, 3), "");
        assert_eq!(buf.line_segment(2, 1, 10), "xy");
        assert_eq!(buf.line_segment(3, 1, 10), "");
    }

    // --- Character insertion ---

    #[test]
    fn test_typing_builds_the_line() {
        let mut buf = TextBuffer::new();
        type_str(&mut buf, 1, "HELLO");
        assert_eq!(buf.line(1), Some("HELLO".to_string()));
    }

    #[test]
    fn test_insert_shifts_right() {
        let mut buf = TextBuffer::from_text("hllo");
        buf.insert_char(1, 2, 'e', EditMode::Insert);
        assert_eq!(buf.line(1), Some("hello".to_string()));
    }

    #[test]
    fn test_overwrite_replaces() {
        let mut buf = TextBuffer::from_text("hallo");
        buf.insert_char(1, 2, 'e', EditMode::Overwrite);
        assert_eq!(buf.line(1), Some("hello".to_string()));
    }

    #[test]
    fn test_overwrite_at_end_appends() {
        let mut buf = TextBuffer::from_text("hell");
        buf.insert_char(1, 5, 'o', EditMode::Overwrite);
        assert_eq!(buf.line(1), Some("hello".to_string()));
    }

    #[test]
    fn test_insert_beyond_end_pads_with_spaces() {
        let mut buf = TextBuffer::from_text("ab");
        buf.insert_char(1, 6, 'x', EditMode::Insert);
        assert_eq!(buf.line(1), Some("ab   x".to_string()));
    }

    #[test]
    fn test_insert_creates_missing_lines() {
        let mut buf = TextBuffer::new();
        buf.insert_char(3, 2, 'z', EditMode::Insert);
        assert_eq!(lines(&buf), vec!["", "", " z"]);
    }

    #[test]
    fn test_insert_ignores_row_zero_and_control_chars() {
        let mut buf = TextBuffer::from_text("ab");
        buf.insert_char(0, 1, 'x', EditMode::Insert);
        buf.insert_char(1, 0, 'x', EditMode::Insert);
        buf.insert_char(1, 1, '\n', EditMode::Insert);
        buf.insert_char(1, 1, '\r', EditMode::Insert);
        assert_eq!(lines(&buf), vec!["ab"]);
    }

    #[test]
    fn test_insert_multibyte_is_one_cell() {
        let mut buf = TextBuffer::from_text("caf");
        buf.insert_char(1, 4, 'é', EditMode::Insert);
        assert_eq!(buf.line_length(1), 4);
        assert_eq!(buf.char_at(1, 4), 'é');
    }

    // --- Line splitting ---

    #[test]
    fn test_split_line_in_middle() {
        let mut buf = TextBuffer::from_text("hello world\nnext");
        buf.split_line(1, 6);
        assert_eq!(lines(&buf), vec!["hello", " world", "next"]);
    }

    #[test]
    fn test_split_line_at_start_and_end() {
        let mut buf = TextBuffer::from_text("hello");
        buf.split_line(1, 6);
        assert_eq!(lines(&buf), vec!["hello", ""]);

        let mut buf = TextBuffer::from_text("hello");
        buf.split_line(1, 1);
        assert_eq!(lines(&buf), vec!["", "hello"]);
    }

    #[test]
    fn test_split_past_end_does_not_pad() {
        let mut buf = TextBuffer::from_text("hi");
        buf.split_line(1, 9);
        assert_eq!(lines(&buf), vec!["hi", ""]);
    }

    // --- Joining ---

    #[test]
    fn test_join_with_previous() {
        let mut buf = TextBuffer::from_text("hello\nworld\n!");
        assert!(buf.join_with_previous(2));
        assert_eq!(lines(&buf), vec!["helloworld", "!"]);
    }

    #[test]
    fn test_join_first_or_missing_line_is_noop() {
        let mut buf = TextBuffer::from_text("a\nb");
        assert!(!buf.join_with_previous(1));
        assert!(!buf.join_with_previous(0));
        assert!(!buf.join_with_previous(3));
        assert_eq!(lines(&buf), vec!["a", "b"]);
    }

    // --- Deletion ---

    #[test]
    fn test_delete_char_within_line() {
        let mut buf = TextBuffer::from_text("AB");
        assert!(buf.delete_char_at(1, 1));
        assert_eq!(buf.line(1), Some("B".to_string()));
    }

    #[test]
    fn test_delete_at_end_joins_next_line() {
        let mut buf = TextBuffer::from_text("hello\nworld");
        assert!(buf.delete_char_at(1, 6));
        assert_eq!(lines(&buf), vec!["helloworld"]);
    }

    #[test]
    fn test_delete_past_end_pads_before_joining() {
        let mut buf = TextBuffer::from_text("ab\ncd");
        assert!(buf.delete_char_at(1, 5));
        assert_eq!(lines(&buf), vec!["ab  cd"]);
    }

    #[test]
    fn test_delete_at_end_of_last_line_is_noop() {
        let mut buf = TextBuffer::from_text("ab");
        assert!(!buf.delete_char_at(1, 3));
        assert!(!buf.delete_char_at(2, 1));
        assert_eq!(lines(&buf), vec!["ab"]);
    }

    #[test]
    fn test_delete_past_end_of_last_line_still_pads() {
        let mut buf = TextBuffer::from_text("ab");
        assert!(buf.delete_char_at(1, 5));
        assert_eq!(buf.line(1).as_deref(), Some("ab  "));
        assert_eq!(buf.line_length(1), 4);
        assert_eq!(buf.line_count(), 1);

        // Already padded: nothing left to do.
        assert!(!buf.delete_char_at(1, 5));
        assert_eq!(buf.line(1).as_deref(), Some("ab  "));
    }

    // --- ensure_line ---

    #[test]
    fn test_ensure_line_appends_blank_lines() {
        let mut buf = TextBuffer::from_text("x");
        buf.ensure_line(4);
        assert_eq!(lines(&buf), vec!["x", "", "", ""]);
        buf.ensure_line(2);
        assert_eq!(buf.line_count(), 4);
    }

    // --- Complex editing sequences ---

    #[test]
    fn test_split_and_rejoin() {
        let mut buf = TextBuffer::from_text("helloworld");
        buf.split_line(1, 6);
        assert_eq!(lines(&buf), vec!["hello", "world"]);
        buf.join_with_previous(2);
        assert_eq!(lines(&buf), vec!["helloworld"]);
    }

    #[test]
    fn test_mode_toggles() {
        assert_eq!(EditMode::Insert.toggled(), EditMode::Overwrite);
        assert_eq!(EditMode::Overwrite.toggled(), EditMode::Insert);
        assert_eq!(EditMode::default(), EditMode::Insert);
    }
}
