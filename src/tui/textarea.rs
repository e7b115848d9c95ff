//! Minimal multi-line text area used by the terminal UI

use ropey::Rope;
use unicode_width::UnicodeWidthChar;

const TAB_WIDTH: usize = 4;

/// Text plus a cursor. Columns count chars, not bytes; only `\n` breaks lines.
#[derive(Debug, Clone)]
pub struct TextArea {
    rope: Rope,
    row: usize,
    col: usize,
    scroll: usize,
}

impl TextArea {
    pub fn new(text: &str) -> Self {
        TextArea {
            rope: Rope::from_str(text),
            row: 0,
            col: 0,
            scroll: 0,
        }
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Replace the text, keeping the cursor where it was when possible
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.row = self.row.min(self.line_count() - 1);
        self.col = self.col.min(self.line_len(self.row));
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Text of line `row` without its line break
    pub fn line(&self, row: usize) -> String {
        let mut line = self.rope.line(row).to_string();
        if line.ends_with('\n') {
            line.pop();
        }
        line
    }

    /// 0-based line index of the cursor
    pub fn cursor_line(&self) -> usize {
        self.row
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Terminal column of the cursor: tabs are expanded, wide chars take two
    /// cells and control chars none.
    pub fn cursor_display_col(&self) -> usize {
        self.rope
            .line(self.row)
            .chars()
            .take(self.col)
            .map(char_width)
            .sum()
    }

    /// Keep the cursor row inside a viewport of `height` rows
    pub fn scroll_to_cursor(&mut self, height: usize) {
        let height = height.max(1);
        if self.row < self.scroll {
            self.scroll = self.row;
        } else if self.row >= self.scroll + height {
            self.scroll = self.row + 1 - height;
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.rope.insert_char(self.char_index(), c);
        self.col += 1;
    }

    pub fn insert_newline(&mut self) {
        self.rope.insert_char(self.char_index(), '\n');
        self.row += 1;
        self.col = 0;
    }

    pub fn backspace(&mut self) {
        let idx = self.char_index();
        if self.col > 0 {
            self.rope.remove(idx - 1..idx);
            self.col -= 1;
        } else if self.row > 0 {
            let prev_len = self.line_len(self.row - 1);
            self.rope.remove(idx - 1..idx);
            self.row -= 1;
            self.col = prev_len;
        }
    }

    /// Delete the char under the cursor; at the end of a line this joins the
    /// next line
    pub fn delete(&mut self) {
        let idx = self.char_index();
        if idx < self.rope.len_chars() {
            self.rope.remove(idx..idx + 1);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_len(self.row);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.line_count() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self, rows: usize) {
        self.row = self.row.saturating_sub(rows);
        self.col = self.col.min(self.line_len(self.row));
    }

    pub fn move_down(&mut self, rows: usize) {
        self.row = (self.row + rows).min(self.line_count() - 1);
        self.col = self.col.min(self.line_len(self.row));
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = self.line_len(self.row);
    }

    fn line_len(&self, row: usize) -> usize {
        let line = self.rope.line(row);
        let len = line.len_chars();
        if len > 0 && line.char(len - 1) == '\n' {
            len - 1
        } else {
            len
        }
    }

    fn char_index(&self) -> usize {
        self.rope.line_to_char(self.row) + self.col
    }
}

fn char_width(c: char) -> usize {
    if c == '\t' {
        TAB_WIDTH
    } else {
        c.width().unwrap_or(0)
    }
}

/// Expand tabs for display
pub fn expand_tabs(line: &str) -> String {
    line.replace('\t', &" ".repeat(TAB_WIDTH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_text() {
        let area = TextArea::new("- one\n- two\n");
        assert_eq!(area.line_count(), 3);
        assert_eq!(area.line(1), "- two");
        assert_eq!(area.line(2), "");
        assert_eq!(area.text(), "- one\n- two\n");
    }

    #[test]
    fn test_empty_text_has_one_line() {
        let area = TextArea::new("");
        assert_eq!(area.line_count(), 1);
        assert_eq!(area.cursor(), (0, 0));
    }

    #[test]
    fn test_typing_and_newline() {
        let mut area = TextArea::new("");
        for c in "- a".chars() {
            area.insert_char(c);
        }
        area.insert_newline();
        area.insert_char('b');
        assert_eq!(area.text(), "- a\nb");
        assert_eq!(area.cursor_line(), 1);
    }

    #[test]
    fn test_newline_splits_line() {
        let mut area = TextArea::new("ab");
        area.move_right();
        area.insert_newline();
        assert_eq!(area.text(), "a\nb");
        assert_eq!(area.cursor(), (1, 0));
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut area = TextArea::new("a\nb");
        area.move_down(1);
        area.backspace();
        assert_eq!(area.text(), "ab");
        assert_eq!(area.cursor(), (0, 1));
    }

    #[test]
    fn test_delete_at_end_joins_next() {
        let mut area = TextArea::new("a\nb");
        area.move_end();
        area.delete();
        assert_eq!(area.text(), "ab");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut area = TextArea::new("測試");
        area.move_end();
        area.backspace();
        area.insert_char('x');
        assert_eq!(area.text(), "測x");
    }

    #[test]
    fn test_set_text_clamps_cursor() {
        let mut area = TextArea::new("one\ntwo\nthree");
        area.move_down(2);
        area.move_end();
        area.set_text("- TODO one");
        assert_eq!(area.cursor(), (0, 5));
    }

    #[test]
    fn test_vertical_moves_clamp() {
        let mut area = TextArea::new("long line\nx");
        area.move_end();
        area.move_down(10);
        assert_eq!(area.cursor(), (1, 1));
        area.move_up(10);
        assert_eq!(area.cursor(), (0, 1));
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let mut area = TextArea::new("1\n2\n3\n4\n5");
        area.move_down(4);
        area.scroll_to_cursor(2);
        assert_eq!(area.scroll(), 3);
        area.move_up(4);
        area.scroll_to_cursor(2);
        assert_eq!(area.scroll(), 0);
    }

    #[test]
    fn test_tabs_display_width() {
        let mut area = TextArea::new("\t- x");
        area.move_right();
        area.move_right();
        assert_eq!(area.cursor_display_col(), TAB_WIDTH + 1);
        assert_eq!(expand_tabs("\t- x"), "    - x");
    }

    #[test]
    fn test_wide_chars_display_width() {
        let mut area = TextArea::new("- 測試");
        area.move_end();
        assert_eq!(area.cursor(), (0, 4));
        assert_eq!(area.cursor_display_col(), 6);

        area.set_text("😀x");
        area.move_home();
        area.move_right();
        assert_eq!(area.cursor_display_col(), 2);
    }

    #[test]
    fn test_carriage_return_is_not_a_line_break() {
        let area = TextArea::new("a\rb\nc");
        assert_eq!(area.line_count(), 2);
        assert_eq!(area.line(0), "a\rb");
    }
}
