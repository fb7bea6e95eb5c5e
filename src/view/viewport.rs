//! Viewport: Scroll offsets that keep the cursor visible.

/// Screen rows taken by the status line and the message line.
pub const RESERVED_ROWS: u16 = 2;

/// The visible window onto the document.
///
/// `rows` and `cols` describe the text area only; the two bottom rows of
/// the terminal are not part of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    row_offset: usize,
    col_offset: usize,
    rows: usize,
    cols: usize,
}

impl Viewport {
    /// Create a viewport for a terminal of `term_rows` by `term_cols`.
    pub fn new(term_rows: u16, term_cols: u16) -> Self {
        let mut viewport = Self::default();
        viewport.resize(term_rows, term_cols);
        viewport
    }

    /// Adapt to a new terminal size. Offsets are kept; the next
    /// [`Viewport::scroll`] brings the cursor back into view.
    pub fn resize(&mut self, term_rows: u16, term_cols: u16) {
        self.rows = usize::from(term_rows.saturating_sub(RESERVED_ROWS));
        self.cols = usize::from(term_cols);
    }

    /// First document row on screen.
    #[inline]
    pub const fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// First render column on screen.
    #[inline]
    pub const fn col_offset(&self) -> usize {
        self.col_offset
    }

    /// Number of text rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Move the offsets the minimum amount so that (`cursor_row`,
    /// `render_col`) is inside the window.
    pub fn scroll(&mut self, cursor_row: usize, render_col: usize) {
        self.row_offset = follow(self.row_offset, self.rows, cursor_row);
        self.col_offset = follow(self.col_offset, self.cols, render_col);
    }

    /// Put `row` on the first screen line. The next [`Viewport::scroll`]
    /// keeps it there as long as the cursor is on that row.
    pub fn reveal_at_top(&mut self, row: usize) {
        self.row_offset = row;
    }

    /// Restore both offsets, e.g. when a search is cancelled.
    pub fn set_offsets(&mut self, row_offset: usize, col_offset: usize) {
        self.row_offset = row_offset;
        self.col_offset = col_offset;
    }
}

/// New offset on one axis so that `pos` lies in `[offset, offset + extent)`.
const fn follow(offset: usize, extent: usize, pos: usize) -> usize {
    if pos < offset {
        pos
    } else if extent > 0 && pos >= offset + extent {
        pos + 1 - extent
    } else {
        offset
    }
}
