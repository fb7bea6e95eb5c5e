//! Document module: The row store and its render/highlight derivations.
//!
//! This module contains:
//! - [`Row`]: One line with its tab-expanded render and highlight classes
//! - [`Document`]: The ordered rows, dirty tracking and the active syntax profile
//!
//! Every mutation recomputes the affected rows immediately. Highlighting
//! cascades forward only while a row's block-comment state keeps changing.

mod row;

pub use row::{Row, DEFAULT_TAB_STOP};

use crate::syntax::{update_highlight, Highlight, SyntaxProfile};
use std::ops::Range;
use tracing::trace;

/// The ordered rows of one editing session.
#[derive(Debug, Clone)]
pub struct Document {
    /// Rows in order; `rows[i].index == i`.
    rows: Vec<Row>,
    /// Number of modifications since the last load or save.
    dirty: u64,
    /// Active highlighting rules.
    syntax: Option<&'static SyntaxProfile>,
    /// Tab stop width for render expansion.
    tab_stop: usize,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_TAB_STOP)
    }
}

impl Document {
    /// Create an empty document.
    pub fn new(tab_stop: usize) -> Self {
        Self {
            rows: Vec::new(),
            dirty: 0,
            syntax: None,
            tab_stop: tab_stop.max(1),
        }
    }

    /// Build a document from loaded lines. The result is not dirty.
    pub fn from_lines<I, L>(lines: I, tab_stop: usize) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let mut doc = Self::new(tab_stop);
        for line in lines {
            let at = doc.rows.len();
            doc.rows.push(Row::new(at, line.into(), doc.tab_stop));
        }
        doc.rehighlight_all();
        doc
    }

    /// Number of rows.
    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if the document has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get a row by index.
    #[inline]
    pub fn row(&self, at: usize) -> Option<&Row> {
        self.rows.get(at)
    }

    /// All rows in order.
    #[inline]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Raw length of a row, or 0 past the end.
    #[inline]
    pub fn row_len(&self, at: usize) -> usize {
        self.rows.get(at).map_or(0, Row::len)
    }

    /// Check for unsaved modifications.
    #[inline]
    pub const fn is_dirty(&self) -> bool {
        self.dirty > 0
    }

    /// Forget modifications (after a successful save).
    #[inline]
    pub fn mark_clean(&mut self) {
        self.dirty = 0;
    }

    /// Tab stop width.
    #[inline]
    pub const fn tab_stop(&self) -> usize {
        self.tab_stop
    }

    /// Active syntax profile.
    #[inline]
    pub const fn syntax(&self) -> Option<&'static SyntaxProfile> {
        self.syntax
    }

    /// Switch highlighting rules and reclassify every row.
    pub fn set_syntax(&mut self, syntax: Option<&'static SyntaxProfile>) {
        self.syntax = syntax;
        self.rehighlight_all();
    }

    /// Render column of byte column `cx` on row `at` (0 past the end).
    pub fn char_col_to_render_col(&self, at: usize, cx: usize) -> usize {
        self.rows
            .get(at)
            .map_or(0, |row| row.char_col_to_render_col(cx, self.tab_stop))
    }

    /// Byte column of render column `rx` on row `at` (0 past the end).
    pub fn render_col_to_char_col(&self, at: usize, rx: usize) -> usize {
        self.rows
            .get(at)
            .map_or(0, |row| row.render_col_to_char_col(rx, self.tab_stop))
    }

    /// Insert a new row at `at`, clamped to `[0, len]`.
    pub fn insert_row(&mut self, at: usize, text: &[u8]) {
        let at = at.min(self.rows.len());
        let mut row = Row::new(at, text.to_vec(), self.tab_stop);
        // Seed with what the following row saw so the cascade detects a change.
        row.comment_open = at > 0 && self.rows[at - 1].comment_open;
        self.rows.insert(at, row);
        self.renumber_from(at + 1);
        self.rehighlight(at, at);
        self.dirty += 1;
    }

    /// Delete the row at `at`. Out of range is a no-op.
    pub fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        self.renumber_from(at);
        self.rehighlight(at, at);
        self.dirty += 1;
    }

    /// Insert `byte` into row `at` at column `col` (clamped to the row end).
    pub fn insert_char(&mut self, at: usize, col: usize, byte: u8) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        let col = col.min(row.chars.len());
        row.chars.insert(col, byte);
        self.update_row(at);
        self.dirty += 1;
    }

    /// Delete the byte at column `col` of row `at`. Out of range is a no-op.
    pub fn delete_char(&mut self, at: usize, col: usize) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        if col >= row.chars.len() {
            return;
        }
        row.chars.remove(col);
        self.update_row(at);
        self.dirty += 1;
    }

    /// Append `text` to the end of row `at`.
    pub fn append_text(&mut self, at: usize, text: &[u8]) {
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        row.chars.extend_from_slice(text);
        self.update_row(at);
        self.dirty += 1;
    }

    /// Split row `at` at column `col`, moving the tail to a new row below.
    ///
    /// Splitting one past the last row appends an empty row.
    pub fn split_row(&mut self, at: usize, col: usize) {
        if at == self.rows.len() {
            self.insert_row(at, b"");
            return;
        }
        let Some(row) = self.rows.get_mut(at) else {
            return;
        };
        let col = col.min(row.chars.len());
        let tail = row.chars.split_off(col);
        let seen_by_next = row.comment_open;
        row.update_render(self.tab_stop);

        let mut new_row = Row::new(at + 1, tail, self.tab_stop);
        new_row.comment_open = seen_by_next;
        self.rows.insert(at + 1, new_row);
        self.renumber_from(at + 2);
        self.rehighlight(at, at + 1);
        self.dirty += 1;
    }

    /// Append row `at + 1` onto row `at` and remove it.
    pub fn join_with_next(&mut self, at: usize) {
        if at + 1 >= self.rows.len() {
            return;
        }
        let next = self.rows.remove(at + 1);
        let row = &mut self.rows[at];
        row.chars.extend_from_slice(&next.chars);
        // The row after now follows this one; compare against what it saw.
        row.comment_open = next.comment_open;
        row.update_render(self.tab_stop);
        self.renumber_from(at + 1);
        self.rehighlight(at, at);
        self.dirty += 1;
    }

    /// Serialize rows joined by `\n`, each row terminated by a newline.
    pub fn to_bytes(&self) -> Vec<u8> {
        let total = self.rows.iter().map(|row| row.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for row in &self.rows {
            out.extend_from_slice(&row.chars);
            out.push(b'\n');
        }
        out
    }

    /// Overwrite highlight classes of `range` on row `at` without marking
    /// the document dirty. Used for transient overlays such as search matches.
    pub fn paint_highlight(&mut self, at: usize, range: Range<usize>, class: Highlight) {
        if let Some(row) = self.rows.get_mut(at) {
            let end = range.end.min(row.highlight.len());
            let start = range.start.min(end);
            row.highlight[start..end].fill(class);
        }
    }

    /// Restore a highlight array previously copied from row `at`.
    ///
    /// Ignored if the row no longer has the same render length.
    pub fn restore_highlight(&mut self, at: usize, saved: &[Highlight]) {
        if let Some(row) = self.rows.get_mut(at) {
            if row.highlight.len() == saved.len() {
                row.highlight.copy_from_slice(saved);
            }
        }
    }

    /// Re-render and re-highlight one row after its `chars` changed.
    fn update_row(&mut self, at: usize) {
        if let Some(row) = self.rows.get_mut(at) {
            row.update_render(self.tab_stop);
        }
        self.rehighlight(at, at);
    }

    /// Fix `index` of every row from `from` onward.
    fn renumber_from(&mut self, from: usize) {
        for (index, row) in self.rows.iter_mut().enumerate().skip(from) {
            row.index = index;
        }
    }

    /// Highlight rows `start..=through` unconditionally, then keep going
    /// while each row's `comment_open` flag changes.
    fn rehighlight(&mut self, start: usize, through: usize) {
        let mut at = start;
        while at < self.rows.len() {
            let entry = at > 0 && self.rows[at - 1].comment_open;
            let changed = update_highlight(&mut self.rows[at], self.syntax, entry);
            if !changed && at >= through {
                break;
            }
            at += 1;
        }
        if at > through + 1 {
            trace!(start, stopped_at = at, "block comment cascade");
        }
    }

    fn rehighlight_all(&mut self) {
        for at in 0..self.rows.len() {
            let entry = at > 0 && self.rows[at - 1].comment_open;
            update_highlight(&mut self.rows[at], self.syntax, entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c_doc(lines: &[&str]) -> Document {
        let mut doc = Document::from_lines(lines.iter().map(|l| l.as_bytes()), DEFAULT_TAB_STOP);
        doc.set_syntax(SyntaxProfile::for_filename("x.c"));
        doc
    }

    fn starts_in_comment(doc: &Document, at: usize) -> bool {
        doc.row(at).unwrap().highlight().first() == Some(&Highlight::BlockComment)
    }

    fn assert_indices(doc: &Document) {
        for (i, row) in doc.rows().iter().enumerate() {
            assert_eq!(row.index(), i);
        }
    }

    #[test]
    fn test_from_lines_is_clean() {
        let doc = Document::from_lines(["a", "b"], DEFAULT_TAB_STOP);
        assert_eq!(doc.len(), 2);
        assert!(!doc.is_dirty());
        assert_eq!(doc.to_bytes(), b"a\nb\n");
    }

    #[test]
    fn test_insert_row_clamps_and_renumbers() {
        let mut doc = Document::from_lines(["a", "b"], DEFAULT_TAB_STOP);
        doc.insert_row(99, b"c");
        doc.insert_row(0, b"z");
        assert_eq!(doc.to_bytes(), b"z\na\nb\nc\n");
        assert_indices(&doc);
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_delete_row_out_of_range_is_noop() {
        let mut doc = Document::from_lines(["a"], DEFAULT_TAB_STOP);
        doc.delete_row(5);
        assert!(!doc.is_dirty());
        doc.delete_row(0);
        assert!(doc.is_empty());
        assert!(doc.is_dirty());
    }

    #[test]
    fn test_char_edits() {
        let mut doc = Document::from_lines(["ac"], DEFAULT_TAB_STOP);
        doc.insert_char(0, 1, b'b');
        doc.insert_char(0, 99, b'd');
        assert_eq!(doc.row(0).unwrap().chars(), b"abcd");
        doc.delete_char(0, 0);
        doc.delete_char(0, 10);
        assert_eq!(doc.row(0).unwrap().chars(), b"bcd");
        doc.insert_char(3, 0, b'x');
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn test_split_and_join() {
        let mut doc = Document::from_lines(["hello world"], DEFAULT_TAB_STOP);
        doc.split_row(0, 5);
        assert_eq!(doc.to_bytes(), b"hello\n world\n");
        assert_indices(&doc);
        doc.join_with_next(0);
        assert_eq!(doc.to_bytes(), b"hello world\n");
        doc.join_with_next(0);
        assert_eq!(doc.len(), 1);
        doc.split_row(1, 0);
        assert_eq!(doc.to_bytes(), b"hello world\n\n");
    }

    #[test]
    fn test_render_tracks_edits() {
        let mut doc = Document::from_lines(["ab"], DEFAULT_TAB_STOP);
        doc.insert_char(0, 1, b'\t');
        let row = doc.row(0).unwrap();
        assert_eq!(row.render(), b"a       b");
        assert_eq!(row.highlight().len(), row.render().len());
    }

    #[test]
    fn test_block_comment_cascade() {
        let mut doc = c_doc(&["int a;", "int b;", "int c;", "int d;", "int e;"]);
        assert!(!starts_in_comment(&doc, 1));

        // Open a comment on row 1 that stays open.
        doc.append_text(1, b" /*");
        assert!(doc.row(1).unwrap().comment_open());
        assert!(starts_in_comment(&doc, 2));
        assert!(starts_in_comment(&doc, 3));
        assert!(starts_in_comment(&doc, 4));

        // Close it on row 3: row 4 is plain again.
        doc.append_text(3, b" */");
        assert!(starts_in_comment(&doc, 2));
        assert!(starts_in_comment(&doc, 3));
        assert!(!doc.row(3).unwrap().comment_open());
        assert!(!starts_in_comment(&doc, 4));
        assert_eq!(doc.row(4).unwrap().highlight()[0], Highlight::TypeKeyword);
    }

    #[test]
    fn test_cascade_undone_by_deleting_opener() {
        let mut doc = c_doc(&["/*", "a", "b"]);
        assert!(starts_in_comment(&doc, 2));
        doc.delete_row(0);
        assert!(!starts_in_comment(&doc, 0));
        assert!(!starts_in_comment(&doc, 1));
    }

    #[test]
    fn test_inserted_closer_stops_comment() {
        let mut doc = c_doc(&["/*", "a", "b"]);
        doc.insert_row(1, b"*/");
        assert!(!doc.row(1).unwrap().comment_open());
        assert!(!starts_in_comment(&doc, 2));
        assert!(!starts_in_comment(&doc, 3));
    }

    #[test]
    fn test_join_removes_closer() {
        let mut doc = c_doc(&["/* x", "*/", "int y;"]);
        assert!(!starts_in_comment(&doc, 2));
        // Deleting the "*/" row via join keeps row 0 open; "int y;" is now inside.
        doc.delete_char(1, 0);
        doc.delete_char(1, 0);
        doc.join_with_next(0);
        assert!(doc.row(0).unwrap().comment_open());
        assert!(starts_in_comment(&doc, 1));
    }

    #[test]
    fn test_split_carries_comment_state() {
        let mut doc = c_doc(&["a /* b */ c", "int x;"]);
        doc.split_row(0, 6);
        // "a /* b" is open, " */ c" closes it, "int x;" stays plain.
        assert!(doc.row(0).unwrap().comment_open());
        assert!(starts_in_comment(&doc, 1));
        assert!(!doc.row(1).unwrap().comment_open());
        assert!(!starts_in_comment(&doc, 2));
    }

    #[test]
    fn test_paint_and_restore_highlight() {
        let mut doc = c_doc(&["int abc;"]);
        let saved = doc.row(0).unwrap().highlight().to_vec();
        doc.paint_highlight(0, 4..7, Highlight::Match);
        assert_eq!(doc.row(0).unwrap().highlight()[4], Highlight::Match);
        assert!(!doc.is_dirty());
        doc.restore_highlight(0, &saved);
        assert_eq!(doc.row(0).unwrap().highlight(), &saved[..]);
    }
}
