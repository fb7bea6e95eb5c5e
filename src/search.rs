//! Incremental search.
//!
//! The query is edited one key at a time and the document is searched after
//! every key. The current match is painted with [`Highlight::Match`]; the
//! row's previous classes are saved and put back before the next key is
//! handled, so the overlay never outlives one step.

use crate::editor::{Cursor, Session};
use crate::key::Key;
use crate::syntax::Highlight;
use tracing::{debug, trace};

/// Longest query accepted.
const MAX_QUERY_LEN: usize = 128;

/// Direction of the next match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Towards the end of the document.
    #[default]
    Forward,
    /// Towards the start of the document.
    Backward,
}

/// Result of feeding one key to a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Keep reading keys.
    Continue,
    /// Enter: leave the cursor on the match.
    Accepted,
    /// Esc: cursor and viewport are back where the search began.
    Cancelled,
}

/// An in-progress search.
#[derive(Debug, Clone)]
pub struct Search {
    query: Vec<u8>,
    last_match: Option<usize>,
    direction: Direction,
    /// Row and its classes before the match overlay was painted.
    saved_highlight: Option<(usize, Vec<Highlight>)>,
    origin_cursor: Cursor,
    origin_offsets: (usize, usize),
}

impl Search {
    /// Begin a search from the session's current position.
    pub fn start(session: &Session) -> Self {
        let viewport = session.viewport();
        Self {
            query: Vec::new(),
            last_match: None,
            direction: Direction::Forward,
            saved_highlight: None,
            origin_cursor: session.cursor(),
            origin_offsets: (viewport.row_offset(), viewport.col_offset()),
        }
    }

    /// The query typed so far.
    pub fn query(&self) -> &[u8] {
        &self.query
    }

    /// Row of the current match.
    pub const fn last_match(&self) -> Option<usize> {
        self.last_match
    }

    /// Text shown on the message line.
    pub fn prompt(&self) -> String {
        format!(
            "Search: {} (Use ESC/Arrows/Enter)",
            String::from_utf8_lossy(&self.query)
        )
    }

    /// Column of the cursor on the message line.
    pub fn prompt_cursor_col(&self) -> usize {
        "Search: ".len() + self.query.len()
    }

    /// Handle one key.
    pub fn handle_key(&mut self, key: Key, session: &mut Session) -> SearchOutcome {
        if !self.accepts(key) {
            return SearchOutcome::Continue;
        }
        self.restore_highlight(session);

        match key {
            Key::Esc => {
                session.cursor = self.origin_cursor;
                session
                    .viewport
                    .set_offsets(self.origin_offsets.0, self.origin_offsets.1);
                debug!("search cancelled");
                return SearchOutcome::Cancelled;
            }
            Key::Enter => {
                if !self.query.is_empty() {
                    debug!(row = ?self.last_match, "search accepted");
                    return SearchOutcome::Accepted;
                }
            }
            Key::Backspace | Key::Delete | Key::Ctrl(b'h') => {
                self.query.pop();
                self.restart();
            }
            Key::Right | Key::Down => self.direction = Direction::Forward,
            Key::Left | Key::Up => self.direction = Direction::Backward,
            _ => {
                if let Some(byte) = key.printable() {
                    self.query.push(byte);
                    self.restart();
                }
            }
        }

        if !self.query.is_empty() {
            self.find(session);
        }
        SearchOutcome::Continue
    }

    /// Look for the next match in the current direction and jump to it.
    ///
    /// Scans at most one full cycle of rows, wrapping at either end.
    /// Returns the matched row.
    pub fn find(&mut self, session: &mut Session) -> Option<usize> {
        let len = session.document.len();
        if len == 0 || self.query.is_empty() {
            return None;
        }

        let mut current = match self.last_match {
            Some(row) => self.advance(row, len),
            None => session.cursor.row.min(len - 1),
        };

        for _ in 0..len {
            if let Some(row) = session.document.row(current) {
                if let Some(at) = find_bytes(row.render(), &self.query) {
                    self.last_match = Some(current);
                    session.cursor.row = current;
                    session.cursor.col = session.document.render_col_to_char_col(current, at);
                    session.viewport.reveal_at_top(current);

                    self.saved_highlight = Some((current, row.highlight().to_vec()));
                    session.document.paint_highlight(
                        current,
                        at..at + self.query.len(),
                        Highlight::Match,
                    );
                    trace!(row = current, col = at, "search match");
                    return Some(current);
                }
            }
            current = self.advance(current, len);
        }
        None
    }

    /// Put back the classes hidden by the match overlay.
    pub fn restore_highlight(&mut self, session: &mut Session) {
        if let Some((row, saved)) = self.saved_highlight.take() {
            session.document.restore_highlight(row, &saved);
        }
    }

    /// Keys that do nothing leave the current match painted.
    fn accepts(&self, key: Key) -> bool {
        match key {
            Key::Esc
            | Key::Enter
            | Key::Backspace
            | Key::Delete
            | Key::Ctrl(b'h')
            | Key::Left
            | Key::Right
            | Key::Up
            | Key::Down => true,
            _ => key.printable().is_some() && self.query.len() < MAX_QUERY_LEN,
        }
    }

    fn restart(&mut self) {
        self.last_match = None;
        self.direction = Direction::Forward;
    }

    const fn advance(&self, row: usize, len: usize) -> usize {
        match self.direction {
            Direction::Forward => (row + 1) % len,
            Direction::Backward => (row + len - 1) % len,
        }
    }
}

/// First occurrence of `needle` in `haystack`.
fn find_bytes(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|window| window == needle)
}
