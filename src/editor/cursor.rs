//! Cursor: Position in the document in raw and render coordinates.

use crate::document::Document;

/// Cursor position.
///
/// `row` may equal the row count: the cursor then sits on the virtual line
/// after the last row, where typing appends a new row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Document row.
    pub row: usize,
    /// Byte column into the row's `chars`.
    pub col: usize,
    /// Column into the row's `render`, derived from `col`.
    pub render_col: usize,
}

/// Direction of a single cursor step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// One column left.
    Left,
    /// One column right.
    Right,
    /// One row up.
    Up,
    /// One row down.
    Down,
}

impl Cursor {
    /// Create a cursor at (`row`, `col`).
    pub const fn at(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            render_col: 0,
        }
    }

    /// Free movement: left/right wrap across row ends, down may reach the
    /// virtual line after the last row.
    pub fn step(&mut self, step: Step, doc: &Document) {
        match step {
            Step::Left => {
                if self.col > 0 {
                    self.col -= 1;
                } else if self.row > 0 {
                    self.row -= 1;
                    self.col = doc.row_len(self.row);
                }
            }
            Step::Right => {
                if let Some(row) = doc.row(self.row) {
                    if self.col < row.len() {
                        self.col += 1;
                    } else {
                        self.row += 1;
                        self.col = 0;
                    }
                }
            }
            Step::Up => self.row = self.row.saturating_sub(1),
            Step::Down => {
                if self.row < doc.len() {
                    self.row += 1;
                }
            }
        }
        self.clamp_col(doc);
    }

    /// Line-bound movement: never wraps and never leaves the last row.
    pub fn nudge(&mut self, step: Step, doc: &Document) {
        match step {
            Step::Left => self.col = self.col.saturating_sub(1),
            Step::Right => {
                if self.col < doc.row_len(self.row) {
                    self.col += 1;
                }
            }
            Step::Up => self.row = self.row.saturating_sub(1),
            Step::Down => {
                if self.row + 1 < doc.len() {
                    self.row += 1;
                }
            }
        }
        self.clamp_col(doc);
    }

    /// Move to the start of the row.
    pub fn line_start(&mut self) {
        self.col = 0;
    }

    /// Move past the last byte of the row.
    pub fn line_end(&mut self, doc: &Document) {
        self.col = doc.row_len(self.row);
    }

    /// Keep `col` within the current row.
    pub fn clamp_col(&mut self, doc: &Document) {
        self.col = self.col.min(doc.row_len(self.row));
    }

    /// Recompute `render_col` from `col`.
    pub fn sync_render_col(&mut self, doc: &Document) {
        self.render_col = doc.char_col_to_render_col(self.row, self.col);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DEFAULT_TAB_STOP;

    fn doc() -> Document {
        Document::from_lines(["abc", "", "\tx"], DEFAULT_TAB_STOP)
    }

    #[test]
    fn test_step_wraps_rows() {
        let doc = doc();
        let mut cursor = Cursor::at(0, 3);
        cursor.step(Step::Right, &doc);
        assert_eq!((cursor.row, cursor.col), (1, 0));
        cursor.step(Step::Left, &doc);
        assert_eq!((cursor.row, cursor.col), (0, 3));
    }

    #[test]
    fn test_step_down_reaches_virtual_line() {
        let doc = doc();
        let mut cursor = Cursor::at(2, 2);
        cursor.step(Step::Down, &doc);
        assert_eq!((cursor.row, cursor.col), (3, 0));
        cursor.step(Step::Down, &doc);
        assert_eq!(cursor.row, 3);
        cursor.step(Step::Right, &doc);
        assert_eq!((cursor.row, cursor.col), (3, 0));
    }

    #[test]
    fn test_vertical_move_clamps_column() {
        let doc = doc();
        let mut cursor = Cursor::at(0, 3);
        cursor.step(Step::Down, &doc);
        assert_eq!(cursor.col, 0);
    }

    #[test]
    fn test_nudge_stays_on_line() {
        let doc = doc();
        let mut cursor = Cursor::at(0, 3);
        cursor.nudge(Step::Right, &doc);
        assert_eq!((cursor.row, cursor.col), (0, 3));
        cursor.nudge(Step::Down, &doc);
        cursor.nudge(Step::Down, &doc);
        cursor.nudge(Step::Down, &doc);
        assert_eq!(cursor.row, 2);
        cursor.line_start();
        cursor.nudge(Step::Left, &doc);
        assert_eq!(cursor.col, 0);
    }

    #[test]
    fn test_render_col_follows_tabs() {
        let doc = doc();
        let mut cursor = Cursor::at(2, 1);
        cursor.sync_render_col(&doc);
        assert_eq!(cursor.render_col, 8);
        cursor.line_end(&doc);
        cursor.sync_render_col(&doc);
        assert_eq!(cursor.render_col, 9);
    }
}
