//! Normal mode: motions with an optional repeat count.

use super::{ModeHandler, ModeKind, Transition};
use crate::editor::{Session, Step};
use crate::key::Key;

/// Largest repeat count accepted; more digits are ignored.
const MAX_COUNT: usize = 9_999;

/// Normal mode state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalMode {
    count: usize,
}

impl NormalMode {
    /// The repeat count typed so far, if any.
    pub const fn count(&self) -> Option<usize> {
        if self.count > 0 {
            Some(self.count)
        } else {
            None
        }
    }

    /// Apply one motion or edit. Returns `false` for unbound keys.
    fn apply(key: Key, session: &mut Session) -> bool {
        match key {
            Key::Byte(b'h') | Key::Left => session.nudge(Step::Left),
            Key::Byte(b'j') | Key::Down => session.nudge(Step::Down),
            Key::Byte(b'k') | Key::Up => session.nudge(Step::Up),
            Key::Byte(b'l') | Key::Right => session.nudge(Step::Right),
            Key::Byte(b'0') | Key::Home => session.cursor.line_start(),
            Key::Byte(b'$') | Key::End => session.cursor.line_end(&session.document),
            Key::Byte(b'G') => session.goto_last_row(),
            Key::Byte(b'x') => session.delete_under(),
            Key::PageUp => session.page_within(true),
            Key::PageDown => session.page_within(false),
            _ => return false,
        }
        true
    }

    /// Prepare the cursor for a switch into insert mode.
    fn enter_insert(key: u8, session: &mut Session) {
        match key {
            b'a' => session.nudge(Step::Right),
            b'A' => session.cursor.line_end(&session.document),
            b'I' => session.cursor.line_start(),
            b'o' => {
                let below = (session.cursor.row + 1).min(session.document.len());
                session.document.insert_row(below, b"");
                session.cursor.row = below;
                session.cursor.col = 0;
            }
            b'O' => {
                let at = session.cursor.row.min(session.document.len());
                session.document.insert_row(at, b"");
                session.cursor.row = at;
                session.cursor.col = 0;
            }
            _ => {}
        }
    }
}

impl ModeHandler for NormalMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Normal
    }

    fn handle_key(&mut self, key: Key, session: &mut Session) -> Transition {
        if let Key::Byte(digit @ b'0'..=b'9') = key {
            if digit != b'0' || self.count > 0 {
                if self.count <= MAX_COUNT {
                    self.count = self.count * 10 + usize::from(digit - b'0');
                }
                return Transition::Stay;
            }
        }

        let count = std::mem::take(&mut self.count).max(1);
        match key {
            Key::Byte(b @ (b'i' | b'a' | b'A' | b'I' | b'o' | b'O')) => {
                Self::enter_insert(b, session);
                Transition::Switch(ModeKind::Insert)
            }
            Key::Byte(b':') => Transition::Switch(ModeKind::Command),
            Key::Byte(b'/') => Transition::Search,
            _ => {
                for _ in 0..count {
                    if !Self::apply(key, session) {
                        break;
                    }
                }
                Transition::Stay
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::document::Document;
    use crate::editor::Cursor;

    fn session(lines: &[&str]) -> Session {
        let mut s = Session::new(EditorConfig::default(), 24, 80);
        s.document = Document::from_lines(lines.iter().copied(), 8);
        s
    }

    fn feed(mode: &mut NormalMode, s: &mut Session, keys: &str) -> Transition {
        let mut last = Transition::Stay;
        for &b in keys.as_bytes() {
            last = mode.handle_key(Key::Byte(b), s);
        }
        last
    }

    #[test]
    fn test_hjkl() {
        let mut s = session(&["abc", "defg", "hi"]);
        let mut mode = NormalMode::default();
        feed(&mut mode, &mut s, "ljjl");
        assert_eq!(s.cursor, Cursor::at(2, 2));
        feed(&mut mode, &mut s, "jk");
        assert_eq!(s.cursor.row, 1);
        feed(&mut mode, &mut s, "hhhh");
        assert_eq!(s.cursor.col, 0);
    }

    #[test]
    fn test_count_repeats_motion() {
        let mut s = session(&["0123456789"]);
        let mut mode = NormalMode::default();
        feed(&mut mode, &mut s, "3l");
        assert_eq!(s.cursor.col, 3);
        assert_eq!(mode.count(), None);
        feed(&mut mode, &mut s, "12l");
        assert_eq!(s.cursor.col, 10);
    }

    #[test]
    fn test_leading_zero_is_line_start() {
        let mut s = session(&["abcdef"]);
        let mut mode = NormalMode::default();
        feed(&mut mode, &mut s, "$");
        assert_eq!(s.cursor.col, 6);
        feed(&mut mode, &mut s, "0");
        assert_eq!(s.cursor.col, 0);
        feed(&mut mode, &mut s, "10");
        assert_eq!(mode.count(), Some(10));
    }

    #[test]
    fn test_count_with_delete() {
        let mut s = session(&["abcdef"]);
        let mut mode = NormalMode::default();
        feed(&mut mode, &mut s, "l3x");
        assert_eq!(s.document.row(0).unwrap().chars(), b"aef");
    }

    #[test]
    fn test_mode_switch_keys_clear_count() {
        let mut s = session(&["abc"]);
        let mut mode = NormalMode::default();
        assert_eq!(feed(&mut mode, &mut s, "5i"), Transition::Switch(ModeKind::Insert));
        assert_eq!(mode.count(), None);
        assert_eq!(feed(&mut mode, &mut s, ":"), Transition::Switch(ModeKind::Command));
        assert_eq!(feed(&mut mode, &mut s, "/"), Transition::Search);
    }

    #[test]
    fn test_insert_entry_positions() {
        let mut s = session(&["abc", "def"]);
        let mut mode = NormalMode::default();
        feed(&mut mode, &mut s, "A");
        assert_eq!(s.cursor.col, 3);
        feed(&mut mode, &mut s, "I");
        assert_eq!(s.cursor.col, 0);
        feed(&mut mode, &mut s, "a");
        assert_eq!(s.cursor.col, 1);
        feed(&mut mode, &mut s, "o");
        assert_eq!(s.document.len(), 3);
        assert_eq!((s.cursor.row, s.cursor.col), (1, 0));
        feed(&mut mode, &mut s, "O");
        assert_eq!(s.document.len(), 4);
        assert_eq!(s.cursor.row, 1);
        assert_eq!(s.document.row(3).unwrap().chars(), b"def");
    }

    #[test]
    fn test_page_down_stays_on_last_row() {
        let mut s = session(&["a", "b", "c"]);
        let mut mode = NormalMode::default();
        mode.handle_key(Key::PageDown, &mut s);
        assert_eq!(s.cursor.row, 2);
        mode.handle_key(Key::PageUp, &mut s);
        assert_eq!(s.cursor.row, 0);
    }

    #[test]
    fn test_goto_last_row() {
        let mut s = session(&["a", "b", "c"]);
        let mut mode = NormalMode::default();
        feed(&mut mode, &mut s, "G");
        assert_eq!(s.cursor.row, 2);
    }
}
