//! Status Bar: Two-section inverse-video line below the text area.
//!
//! The left section names the mode and file, the right section is pushed
//! against the right edge. If both do not fit, the right section is dropped.

use super::OutputBuffer;

/// Longest file name prefix shown in the status bar.
const MAX_NAME_LEN: usize = 20;

/// Left and right status texts for one frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusBar {
    left: String,
    right: String,
}

impl StatusBar {
    /// Build the status texts.
    ///
    /// `cursor_row` is 0-based; it is shown 1-based next to the line count.
    pub fn new(
        mode_tag: &str,
        filename: Option<&str>,
        line_count: usize,
        dirty: bool,
        filetype: Option<&str>,
        cursor_row: usize,
    ) -> Self {
        let name = filename.map_or("[No Name]", |name| truncate(name, MAX_NAME_LEN));
        let modified = if dirty { " (modified)" } else { "" };
        Self {
            left: format!(" {mode_tag} | {name} - {line_count} lines{modified}"),
            right: format!(
                "{} | {}/{}",
                filetype.unwrap_or("no ft"),
                cursor_row + 1,
                line_count
            ),
        }
    }

    /// Get the left section content.
    pub fn left(&self) -> &str {
        &self.left
    }

    /// Get the right section content.
    pub fn right(&self) -> &str {
        &self.right
    }

    /// Encode the bar, exactly `width` columns wide, into `out`.
    pub fn render(&self, out: &mut OutputBuffer, width: usize) {
        out.invert();
        let left = &self.left.as_bytes()[..self.left.len().min(width)];
        out.write_raw(left);
        let mut len = left.len();
        while len < width {
            if width - len == self.right.len() {
                out.write_str(&self.right);
                break;
            }
            out.write_byte(b' ');
            len += 1;
        }
        out.reset_attrs();
    }
}

/// Cut `s` to at most `max` bytes on a char boundary.
fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
