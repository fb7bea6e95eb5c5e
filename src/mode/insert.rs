//! Insert mode: text entry.

use super::{ModeHandler, ModeKind, Transition};
use crate::editor::{Session, Step};
use crate::key::Key;

/// Insert mode has no state of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InsertMode;

impl ModeHandler for InsertMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Insert
    }

    fn handle_key(&mut self, key: Key, session: &mut Session) -> Transition {
        match key {
            Key::Esc => return Transition::Switch(ModeKind::Normal),
            Key::Enter => session.insert_newline(),
            Key::Backspace | Key::Ctrl(b'h') => session.delete_before(),
            Key::Delete => session.delete_at(),
            Key::Left => session.step(Step::Left),
            Key::Right => session.step(Step::Right),
            Key::Up => session.step(Step::Up),
            Key::Down => session.step(Step::Down),
            Key::Home => session.cursor.line_start(),
            Key::End => session.cursor.line_end(&session.document),
            Key::PageUp => session.page(true),
            Key::PageDown => session.page(false),
            Key::Byte(b'\t') => session.insert_byte(b'\t'),
            _ => {
                if let Some(byte) = key.printable() {
                    session.insert_byte(byte);
                }
            }
        }
        Transition::Stay
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

    fn text(s: &Session) -> String {
        String::from_utf8(s.document.to_bytes()).unwrap()
    }

    #[test]
    fn test_typing_and_newline() {
        let mut s = session(&[]);
        let mut mode = InsertMode;
        for key in [Key::Byte(b'a'), Key::Byte(b'\t'), Key::Enter, Key::Byte(b'b')] {
            assert_eq!(mode.handle_key(key, &mut s), Transition::Stay);
        }
        assert_eq!(text(&s), "a\t\nb\n");
        assert_eq!(s.cursor, Cursor::at(1, 1));
    }

    #[test]
    fn test_control_bytes_ignored() {
        let mut s = session(&["x"]);
        let mut mode = InsertMode;
        mode.handle_key(Key::Ctrl(b'x'), &mut s);
        mode.handle_key(Key::Byte(0x1b), &mut s);
        assert_eq!(text(&s), "x\n");
        assert!(!s.document.is_dirty());
    }

    #[test]
    fn test_arrows_wrap_between_rows() {
        let mut s = session(&["ab", "cd"]);
        let mut mode = InsertMode;
        s.cursor = Cursor::at(0, 2);
        mode.handle_key(Key::Right, &mut s);
        assert_eq!((s.cursor.row, s.cursor.col), (1, 0));
        mode.handle_key(Key::Backspace, &mut s);
        assert_eq!(text(&s), "abcd\n");
    }

    #[test]
    fn test_escape_returns_to_normal() {
        let mut s = session(&["x"]);
        assert_eq!(InsertMode.handle_key(Key::Esc, &mut s), Transition::Switch(ModeKind::Normal));
    }
}
