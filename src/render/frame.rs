//! Frame encoder: Turn the visible document into one terminal write.
//!
//! Every frame is a full redraw. Inside a row, bytes are grouped into runs
//! of the same highlight class and a color command is emitted only when the
//! class changes, so a plain row costs no escape sequences at all beyond
//! the line terminators.

use super::{OutputBuffer, StatusBar};
use crate::document::{Document, Row};
use crate::syntax::{Highlight, DEFAULT_COLOR};
use crate::view::Viewport;

/// Everything the encoder reads to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Document to draw.
    pub document: &'a Document,
    /// Visible window.
    pub viewport: &'a Viewport,
    /// Status bar sections.
    pub status: &'a StatusBar,
    /// Text of the message line, already filtered for age.
    pub message: Option<&'a str>,
    /// Cursor position on screen, 0-based (row, col).
    pub cursor: (usize, usize),
    /// Show the version banner on an empty document.
    pub show_welcome: bool,
}

/// Banner shown in the middle of an empty document.
pub fn welcome_banner() -> String {
    format!("Kite editor -- version {}", env!("CARGO_PKG_VERSION"))
}

/// Encode `frame` into `out`, replacing its previous contents.
pub fn draw_frame(out: &mut OutputBuffer, frame: &Frame<'_>) {
    out.clear();
    out.cursor_hide();
    out.cursor_home();

    draw_rows(out, frame);

    frame.status.render(out, frame.viewport.cols());
    out.newline();

    out.clear_line();
    if let Some(message) = frame.message {
        let shown = message.len().min(frame.viewport.cols());
        out.write_raw(&message.as_bytes()[..shown]);
    }

    out.cursor_move(frame.cursor.0, frame.cursor.1);
    out.cursor_show();
}

fn draw_rows(out: &mut OutputBuffer, frame: &Frame<'_>) {
    let viewport = frame.viewport;
    let document = frame.document;
    for y in 0..viewport.rows() {
        let file_row = y + viewport.row_offset();
        match document.row(file_row) {
            Some(row) => draw_row(out, row, viewport.col_offset(), viewport.cols()),
            None if frame.show_welcome && document.is_empty() && y == viewport.rows() / 3 => {
                draw_welcome(out, viewport.cols());
            }
            None => out.write_byte(b'~'),
        }
        out.clear_line();
        out.newline();
    }
}

fn draw_welcome(out: &mut OutputBuffer, cols: usize) {
    let banner = welcome_banner();
    let shown = banner.len().min(cols);
    let mut padding = (cols - shown) / 2;
    if padding > 0 {
        out.write_byte(b'~');
        padding -= 1;
    }
    for _ in 0..padding {
        out.write_byte(b' ');
    }
    out.write_raw(&banner.as_bytes()[..shown]);
}

/// Encode the visible slice of one row with color runs.
fn draw_row(out: &mut OutputBuffer, row: &Row, col_offset: usize, cols: usize) {
    let render = row.render();
    let start = col_offset.min(render.len());
    let end = (start + cols).min(render.len());
    let mut current: Option<u8> = None;

    for (&byte, &class) in render[start..end].iter().zip(&row.highlight()[start..end]) {
        if byte.is_ascii_control() {
            let symbol = if byte <= 26 { b'@' + byte } else { b'?' };
            out.invert();
            out.write_byte(symbol);
            out.reset_attrs();
            if let Some(color) = current {
                out.set_color(color);
            }
        } else if class == Highlight::Normal {
            if current.take().is_some() {
                out.set_color(DEFAULT_COLOR);
            }
            out.write_byte(byte);
        } else {
            let color = class.color();
            if current != Some(color) {
                current = Some(color);
                out.set_color(color);
            }
            out.write_byte(byte);
        }
    }
    out.set_color(DEFAULT_COLOR);
}
