use ropey::Rope;

/// A line borrowed from the buffer: its start offset and its length.
///
/// The length excludes the trailing line break, so `start + len` addresses
/// the break itself (or the end of the buffer on the last line).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineSpan {
    /// Offset of the first character of the line.
    pub start: usize,
    /// Number of characters up to, not including, the line break.
    pub len: usize,
}

impl LineSpan {
    /// One past the last content character.
    pub const fn end(&self) -> usize {
        self.start + self.len
    }
}

/// The capability set the structural-editing operations require from a
/// host buffer.
///
/// All offsets and lengths are in characters. Implementations clamp
/// out-of-range arguments to the buffer bounds rather than panicking; the
/// mutation operations built on top never read or write past the end.
pub trait TextBuffer {
    /// Total length of the buffer in characters.
    fn len(&self) -> usize;

    /// Whether the buffer holds no text.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The line containing `offset`. An offset at or past the end of the
    /// buffer resolves to the last line.
    fn line_containing(&self, offset: usize) -> LineSpan;

    /// Read `len` characters starting at `offset`.
    fn text(&self, offset: usize, len: usize) -> String;

    /// Insert `text` at `offset`.
    fn insert(&mut self, offset: usize, text: &str);

    /// Remove `len` characters starting at `offset`.
    fn remove(&mut self, offset: usize, len: usize);

    /// Replace `len` characters at `offset` with `text`.
    fn replace(&mut self, offset: usize, len: usize, text: &str) {
        self.remove(offset, len);
        self.insert(offset, text);
    }

    /// Current caret offset.
    fn caret(&self) -> usize;

    /// Move the caret. Out-of-range offsets clamp to the buffer end.
    fn set_caret(&mut self, offset: usize);
}

/// A text buffer backed by a rope data structure.
///
/// Stores the document text, the caret as a plain character offset, and a
/// dirty flag for unsaved-change tracking. Line-indexed views used by the
/// renderer live alongside the offset-addressed [`TextBuffer`] surface.
pub struct RopeBuffer {
    rope: Rope,
    caret: usize,
    dirty: bool,
}

impl RopeBuffer {
    /// Create a buffer from a string.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            caret: 0,
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// The full text content of the buffer.
    pub fn to_text(&self) -> String {
        self.rope.to_string()
    }

    /// Total number of lines.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Content of a line by index, without the trailing line break.
    pub fn line_at(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.rope.len_lines() {
            return None;
        }
        let s = self.rope.line(line_idx).to_string();
        Some(s.trim_end_matches('\n').trim_end_matches('\r').to_string())
    }

    /// The line index and column of the caret.
    pub fn caret_position(&self) -> (usize, usize) {
        let line = self.rope.char_to_line(self.caret);
        let col = self.caret - self.rope.line_to_char(line);
        (line, col)
    }

    /// Convert a line/column pair to a character offset, clamping the
    /// column to the line's content length.
    pub fn offset_at(&self, line_idx: usize, col: usize) -> usize {
        let line_idx = line_idx.min(self.rope.len_lines().saturating_sub(1));
        let start = self.rope.line_to_char(line_idx);
        let len = self.line_span_at(line_idx).len;
        start + col.min(len)
    }

    /// Insert text at the caret, leaving the caret after it.
    pub fn insert_at_caret(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let at = self.caret;
        self.insert(at, text);
        self.set_caret(at + text.chars().count());
    }

    /// Delete the character before the caret (Backspace).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_back(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        let at = self.caret;
        self.remove(at - 1, 1);
        self.set_caret(at - 1);
        true
    }

    /// Delete the character at the caret (Delete key).
    ///
    /// Returns `true` if a character was deleted.
    pub fn delete_forward(&mut self) -> bool {
        if self.caret >= self.rope.len_chars() {
            return false;
        }
        let at = self.caret;
        self.remove(at, 1);
        true
    }

    /// Move the caret one character left.
    pub fn move_left(&mut self) {
        self.caret = self.caret.saturating_sub(1);
    }

    /// Move the caret one character right.
    pub fn move_right(&mut self) {
        self.caret = (self.caret + 1).min(self.rope.len_chars());
    }

    /// Move the caret up one line, clamping the column to the shorter line.
    pub fn move_up(&mut self) {
        let (line, col) = self.caret_position();
        if line > 0 {
            self.caret = self.offset_at(line - 1, col);
        }
    }

    /// Move the caret down one line, clamping the column to the shorter line.
    pub fn move_down(&mut self) {
        let (line, col) = self.caret_position();
        if line + 1 < self.rope.len_lines() {
            self.caret = self.offset_at(line + 1, col);
        }
    }

    /// Move the caret to the start of its line (Home).
    pub fn move_home(&mut self) {
        let span = self.line_containing(self.caret);
        self.caret = span.start;
    }

    /// Move the caret to the end of its line (End).
    pub fn move_end(&mut self) {
        let span = self.line_containing(self.caret);
        self.caret = span.end();
    }

    /// Move the caret to the start of the buffer (Ctrl+Home).
    pub const fn move_to_start(&mut self) {
        self.caret = 0;
    }

    /// Move the caret to the end of the buffer (Ctrl+End).
    pub fn move_to_end(&mut self) {
        self.caret = self.rope.len_chars();
    }

    fn line_span_at(&self, line_idx: usize) -> LineSpan {
        let start = self.rope.line_to_char(line_idx);
        let raw = self.rope.line(line_idx);
        let mut len = raw.len_chars();
        // Walk back over the line break so spans address content only.
        if len > 0 && raw.char(len - 1) == '\n' {
            len -= 1;
        }
        if len > 0 && raw.char(len - 1) == '\r' {
            len -= 1;
        }
        LineSpan { start, len }
    }
}

impl TextBuffer for RopeBuffer {
    fn len(&self) -> usize {
        self.rope.len_chars()
    }

    fn line_containing(&self, offset: usize) -> LineSpan {
        let offset = offset.min(self.rope.len_chars());
        self.line_span_at(self.rope.char_to_line(offset))
    }

    fn text(&self, offset: usize, len: usize) -> String {
        let start = offset.min(self.rope.len_chars());
        let end = (offset + len).min(self.rope.len_chars());
        self.rope.slice(start..end).to_string()
    }

    fn insert(&mut self, offset: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let offset = offset.min(self.rope.len_chars());
        self.rope.insert(offset, text);
        self.dirty = true;
    }

    fn remove(&mut self, offset: usize, len: usize) {
        let start = offset.min(self.rope.len_chars());
        let end = (offset + len).min(self.rope.len_chars());
        if start < end {
            self.rope.remove(start..end);
            self.dirty = true;
        }
    }

    fn caret(&self) -> usize {
        self.caret
    }

    fn set_caret(&mut self, offset: usize) {
        self.caret = offset.min(self.rope.len_chars());
    }
}

impl std::fmt::Debug for RopeBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RopeBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("caret", &self.caret)
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Construction and basic queries ---

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = RopeBuffer::empty();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some(String::new()));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_from_text_preserves_content() {
        let buf = RopeBuffer::from_text("hello\nworld");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_at(0), Some("hello".to_string()));
        assert_eq!(buf.line_at(1), Some("world".to_string()));
        assert_eq!(buf.to_text(), "hello\nworld");
    }

    #[test]
    fn test_line_at_out_of_bounds_returns_none() {
        let buf = RopeBuffer::from_text("hello");
        assert_eq!(buf.line_at(1), None);
    }

    // --- Line lookup by offset ---

    #[test]
    fn test_line_containing_first_line() {
        let buf = RopeBuffer::from_text("hello\nworld");
        assert_eq!(buf.line_containing(0), LineSpan { start: 0, len: 5 });
        assert_eq!(buf.line_containing(4), LineSpan { start: 0, len: 5 });
    }

    #[test]
    fn test_line_containing_second_line() {
        let buf = RopeBuffer::from_text("hello\nworld");
        assert_eq!(buf.line_containing(6), LineSpan { start: 6, len: 5 });
        assert_eq!(buf.line_containing(8), LineSpan { start: 6, len: 5 });
    }

    #[test]
    fn test_line_containing_newline_offset_belongs_to_its_line() {
        let buf = RopeBuffer::from_text("ab\ncd");
        // Offset 2 addresses the '\n' terminating line 0.
        assert_eq!(buf.line_containing(2), LineSpan { start: 0, len: 2 });
    }

    #[test]
    fn test_line_containing_past_end_resolves_to_last_line() {
        let buf = RopeBuffer::from_text("ab\ncd");
        assert_eq!(buf.line_containing(999), LineSpan { start: 3, len: 2 });
    }

    #[test]
    fn test_line_span_excludes_crlf() {
        let buf = RopeBuffer::from_text("ab\r\ncd");
        assert_eq!(buf.line_containing(0), LineSpan { start: 0, len: 2 });
    }

    // --- Reads ---

    #[test]
    fn test_text_reads_range() {
        let buf = RopeBuffer::from_text("hello world");
        assert_eq!(buf.text(6, 5), "world");
    }

    #[test]
    fn test_text_clamps_to_end() {
        let buf = RopeBuffer::from_text("hello");
        assert_eq!(buf.text(3, 100), "lo");
        assert_eq!(buf.text(100, 5), "");
    }

    // --- Mutations ---

    #[test]
    fn test_insert_and_remove() {
        let mut buf = RopeBuffer::from_text("held");
        buf.insert(3, "lo wor");
        assert_eq!(buf.to_text(), "hello world");
        buf.remove(5, 6);
        assert_eq!(buf.to_text(), "hello");
    }

    #[test]
    fn test_replace_range() {
        let mut buf = RopeBuffer::from_text("hello world");
        buf.replace(0, 5, "**hello**");
        assert_eq!(buf.to_text(), "**hello** world");
    }

    #[test]
    fn test_remove_clamps_out_of_range() {
        let mut buf = RopeBuffer::from_text("hello");
        buf.remove(3, 100);
        assert_eq!(buf.to_text(), "hel");
        buf.remove(100, 5);
        assert_eq!(buf.to_text(), "hel");
    }

    #[test]
    fn test_insert_marks_dirty_and_mark_clean_resets() {
        let mut buf = RopeBuffer::from_text("hello");
        assert!(!buf.is_dirty());
        buf.insert(5, "!");
        assert!(buf.is_dirty());
        buf.mark_clean();
        assert!(!buf.is_dirty());
    }

    // --- Caret ---

    #[test]
    fn test_set_caret_clamps() {
        let mut buf = RopeBuffer::from_text("hello");
        buf.set_caret(100);
        assert_eq!(buf.caret(), 5);
    }

    #[test]
    fn test_caret_position_line_and_col() {
        let mut buf = RopeBuffer::from_text("hello\nworld");
        buf.set_caret(8);
        assert_eq!(buf.caret_position(), (1, 2));
    }

    #[test]
    fn test_insert_at_caret_advances_by_chars() {
        let mut buf = RopeBuffer::from_text("ab");
        buf.set_caret(1);
        buf.insert_at_caret("カナ");
        assert_eq!(buf.to_text(), "aカナb");
        assert_eq!(buf.caret(), 3);
    }

    #[test]
    fn test_delete_back_at_start_is_noop() {
        let mut buf = RopeBuffer::from_text("hello");
        assert!(!buf.delete_back());
        assert_eq!(buf.to_text(), "hello");
    }

    #[test]
    fn test_delete_back_joins_lines() {
        let mut buf = RopeBuffer::from_text("hello\nworld");
        buf.set_caret(6);
        assert!(buf.delete_back());
        assert_eq!(buf.to_text(), "helloworld");
        assert_eq!(buf.caret(), 5);
    }

    #[test]
    fn test_delete_forward_at_end_is_noop() {
        let mut buf = RopeBuffer::from_text("hello");
        buf.set_caret(5);
        assert!(!buf.delete_forward());
    }

    #[test]
    fn test_delete_forward_removes_char() {
        let mut buf = RopeBuffer::from_text("hello");
        assert!(buf.delete_forward());
        assert_eq!(buf.to_text(), "ello");
        assert_eq!(buf.caret(), 0);
    }

    // --- Movement ---

    #[test]
    fn test_move_left_right_clamp_at_bounds() {
        let mut buf = RopeBuffer::from_text("ab");
        buf.move_left();
        assert_eq!(buf.caret(), 0);
        buf.move_right();
        buf.move_right();
        buf.move_right();
        assert_eq!(buf.caret(), 2);
    }

    #[test]
    fn test_move_up_down_clamps_column() {
        let mut buf = RopeBuffer::from_text("hello\nhi\nworld");
        buf.set_caret(4); // line 0, col 4
        buf.move_down();
        assert_eq!(buf.caret_position(), (1, 2)); // "hi" is shorter
        buf.move_down();
        assert_eq!(buf.caret_position(), (2, 2));
        buf.move_up();
        buf.move_up();
        assert_eq!(buf.caret_position(), (0, 2));
    }

    #[test]
    fn test_move_home_and_end() {
        let mut buf = RopeBuffer::from_text("hello\nworld");
        buf.set_caret(8);
        buf.move_home();
        assert_eq!(buf.caret(), 6);
        buf.move_end();
        assert_eq!(buf.caret(), 11);
    }

    #[test]
    fn test_move_to_start_and_end_of_buffer() {
        let mut buf = RopeBuffer::from_text("hello\nworld");
        buf.move_to_end();
        assert_eq!(buf.caret(), 11);
        buf.move_to_start();
        assert_eq!(buf.caret(), 0);
    }
}
