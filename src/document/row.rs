//! Row: One document line plus its derived display form.
//!
//! A row owns three parallel views of the same line:
//! - `chars`: the raw bytes, authoritative
//! - `render`: `chars` with every tab expanded to the next tab stop
//! - `highlight`: one [`Highlight`] per `render` byte
//!
//! `render` and `highlight` always have the same length. The document
//! rebuilds both eagerly after any change to `chars`.

use crate::syntax::Highlight;

/// Tab stop used when no configuration overrides it.
pub const DEFAULT_TAB_STOP: usize = 8;

/// One line of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    /// Position of this row in the document.
    pub(crate) index: usize,
    /// Raw bytes without the trailing newline.
    pub(crate) chars: Vec<u8>,
    /// Tab-expanded display bytes.
    pub(crate) render: Vec<u8>,
    /// Highlight class per `render` byte.
    pub(crate) highlight: Vec<Highlight>,
    /// A block comment is still open at the end of this row.
    pub(crate) comment_open: bool,
}

impl Row {
    /// Create a row and compute its render form. Highlighting is left
    /// at [`Highlight::Normal`] until the document classifies it.
    pub(crate) fn new(index: usize, chars: Vec<u8>, tab_stop: usize) -> Self {
        let mut row = Self {
            index,
            chars,
            ..Self::default()
        };
        row.update_render(tab_stop);
        row
    }

    /// Position of this row in the document.
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Raw bytes.
    #[inline]
    pub fn chars(&self) -> &[u8] {
        &self.chars
    }

    /// Display bytes after tab expansion.
    #[inline]
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Highlight classes, parallel to [`Row::render`].
    #[inline]
    pub fn highlight(&self) -> &[Highlight] {
        &self.highlight
    }

    /// Whether a block comment is open at the end of this row.
    #[inline]
    pub const fn comment_open(&self) -> bool {
        self.comment_open
    }

    /// Length of the raw content in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Check if the row has no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Convert a byte column in `chars` to a column in `render`.
    ///
    /// Columns past the end of the row are measured as if the row ended there.
    pub fn char_col_to_render_col(&self, cx: usize, tab_stop: usize) -> usize {
        self.chars
            .iter()
            .take(cx)
            .fold(0, |rx, &byte| advance(rx, byte, tab_stop))
    }

    /// Convert a column in `render` back to a byte column in `chars`.
    ///
    /// Returns the first char column whose cumulative width exceeds `rx`,
    /// or the row length when `rx` is at or past the end.
    pub fn render_col_to_char_col(&self, rx: usize, tab_stop: usize) -> usize {
        let mut cur_rx = 0;
        for (cx, &byte) in self.chars.iter().enumerate() {
            cur_rx = advance(cur_rx, byte, tab_stop);
            if cur_rx > rx {
                return cx;
            }
        }
        self.chars.len()
    }

    /// Rebuild `render` from `chars` and reset `highlight` to the same length.
    pub(crate) fn update_render(&mut self, tab_stop: usize) {
        let tab_stop = tab_stop.max(1);
        self.render.clear();
        for &byte in &self.chars {
            if byte == b'\t' {
                self.render.push(b' ');
                while self.render.len() % tab_stop != 0 {
                    self.render.push(b' ');
                }
            } else {
                self.render.push(byte);
            }
        }
        self.highlight.clear();
        self.highlight.resize(self.render.len(), Highlight::Normal);
    }
}

/// Render width after appending `byte` at render column `rx`.
#[inline]
const fn advance(rx: usize, byte: u8, tab_stop: usize) -> usize {
    if byte == b'\t' {
        let tab_stop = if tab_stop == 0 { 1 } else { tab_stop };
        rx + (tab_stop - 1) - (rx % tab_stop) + 1
    } else {
        rx + 1
    }
}
