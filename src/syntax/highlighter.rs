//! Highlighter: Classify every rendered byte of a row.
//!
//! The scan is a single left-to-right pass with first-match-wins precedence:
//! 1. Single-line comment marker (outside strings and block comments)
//! 2. Block comment open/close markers, carried across rows
//! 3. String literals with backslash escapes
//! 4. Numbers (digits after a separator, `.` continuing a number)
//! 5. Keywords, bounded by separators on both sides
//! 6. Everything else is normal text
//!
//! The only state that crosses rows is "a block comment is still open",
//! stored in [`Row::comment_open`](crate::document::Row::comment_open).

use super::{Highlight, SyntaxFlags, SyntaxProfile};
use crate::document::Row;

/// Bytes that delimit keywords and numbers besides whitespace and NUL.
const SEPARATORS: &[u8] = b",.()+-/*=~%<>[];";

/// Check whether `byte` is a separator.
#[inline]
pub fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b || byte == 0 || SEPARATORS.contains(&byte)
}

/// Recompute `row.highlight` from `row.render`.
///
/// `entry_in_comment` is the previous row's [`Row::comment_open`] flag.
/// Returns `true` when the row's own `comment_open` flag changed, which
/// means the following row has to be highlighted again.
pub fn update_highlight(
    row: &mut Row,
    profile: Option<&SyntaxProfile>,
    entry_in_comment: bool,
) -> bool {
    let render = &row.render;
    let hl = &mut row.highlight;
    hl.clear();
    hl.resize(render.len(), Highlight::Normal);

    let Some(profile) = profile else {
        let changed = row.comment_open;
        row.comment_open = false;
        return changed;
    };

    let line_comment = profile.line_comment.map(str::as_bytes).filter(|m| !m.is_empty());
    let block_comment = profile
        .block_comment
        .map(|(open, close)| (open.as_bytes(), close.as_bytes()))
        .filter(|(open, close)| !open.is_empty() && !close.is_empty());

    // Row start counts as a separator.
    let mut prev_sep = true;
    let mut in_string: Option<u8> = None;
    let mut in_comment = entry_in_comment && block_comment.is_some();

    let mut i = 0;
    while i < render.len() {
        let byte = render[i];
        let prev_hl = if i > 0 { hl[i - 1] } else { Highlight::Normal };

        if let Some(marker) = line_comment {
            if in_string.is_none() && !in_comment && render[i..].starts_with(marker) {
                hl[i..].fill(Highlight::Comment);
                break;
            }
        }

        if let Some((open, close)) = block_comment {
            if in_string.is_none() {
                if in_comment {
                    if render[i..].starts_with(close) {
                        hl[i..i + close.len()].fill(Highlight::BlockComment);
                        i += close.len();
                        in_comment = false;
                        prev_sep = true;
                    } else {
                        hl[i] = Highlight::BlockComment;
                        i += 1;
                    }
                    continue;
                } else if render[i..].starts_with(open) {
                    hl[i..i + open.len()].fill(Highlight::BlockComment);
                    i += open.len();
                    in_comment = true;
                    continue;
                }
            }
        }

        if profile.flags.contains(SyntaxFlags::STRINGS) {
            if let Some(quote) = in_string {
                hl[i] = Highlight::String;
                if byte == b'\\' && i + 1 < render.len() {
                    hl[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if byte == quote {
                    in_string = None;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if byte == b'"' || byte == b'\'' {
                in_string = Some(byte);
                hl[i] = Highlight::String;
                i += 1;
                continue;
            }
        }

        if profile.flags.contains(SyntaxFlags::NUMBERS)
            && ((byte.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (byte == b'.' && prev_hl == Highlight::Number))
        {
            hl[i] = Highlight::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep {
            if let Some((len, class)) = match_keyword(&render[i..], profile.keywords) {
                hl[i..i + len].fill(class);
                i += len;
                prev_sep = false;
                continue;
            }
        }

        prev_sep = is_separator(byte);
        i += 1;
    }

    let changed = row.comment_open != in_comment;
    row.comment_open = in_comment;
    changed
}

/// Match a keyword at the start of `rest`.
///
/// The byte after the keyword must be a separator; the end of the row counts
/// as one, and nothing past `rest` is ever read.
fn match_keyword(rest: &[u8], keywords: &[&str]) -> Option<(usize, Highlight)> {
    keywords.iter().find_map(|entry| {
        let (word, class) = entry
            .strip_suffix('|')
            .map_or((*entry, Highlight::Keyword), |w| (w, Highlight::TypeKeyword));
        let word = word.as_bytes();
        if word.is_empty() || !rest.starts_with(word) {
            return None;
        }
        let bounded = rest.get(word.len()).map_or(true, |&next| is_separator(next));
        bounded.then_some((word.len(), class))
    })
}
