//! Crossterm backend: raw mode, alternate screen and key decoding.

use super::Terminal;
use crate::error::{Error, Result};
use crate::key::Key;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{execute, terminal};
use std::io::{self, Stdout, Write};
use tracing::{debug, trace};

/// The real terminal, in raw mode on the alternate screen until dropped.
pub struct CrosstermTerminal {
    stdout: Stdout,
}

impl CrosstermTerminal {
    /// Enter raw mode and the alternate screen.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().map_err(Error::Terminal)?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, terminal::EnterAlternateScreen) {
            let _ = terminal::disable_raw_mode();
            return Err(Error::Terminal(err));
        }
        debug!("terminal in raw mode");
        Ok(Self { stdout })
    }
}

impl Terminal for CrosstermTerminal {
    fn read_key(&mut self) -> Result<Key> {
        loop {
            match event::read().map_err(Error::Terminal)? {
                Event::Key(key_event) => {
                    if let Some(key) = convert_key(key_event) {
                        trace!(?key, "key");
                        return Ok(key);
                    }
                }
                // Size is re-queried before the next frame.
                Event::Resize(cols, rows) => trace!(rows, cols, "resize"),
                _ => {}
            }
        }
    }

    fn size(&mut self) -> Result<(u16, u16)> {
        let (cols, rows) = terminal::size().map_err(Error::Terminal)?;
        Ok((rows, cols))
    }

    fn write_frame(&mut self, bytes: &[u8]) -> Result<()> {
        self.stdout.write_all(bytes).map_err(Error::Terminal)?;
        self.stdout.flush().map_err(Error::Terminal)
    }
}

impl Drop for CrosstermTerminal {
    fn drop(&mut self) {
        // Restore terminal state
        let _ = execute!(self.stdout, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Convert a crossterm key event to a logical [`Key`].
///
/// Only presses count. Non-ASCII characters are dropped.
pub fn convert_key(event: KeyEvent) -> Option<Key> {
    if event.kind != KeyEventKind::Press {
        return None;
    }
    let control = event.modifiers.contains(KeyModifiers::CONTROL);
    Some(match event.code {
        KeyCode::Char(c) if control && c.is_ascii_alphabetic() => {
            let letter = c.to_ascii_lowercase();
            if letter == 'h' {
                Key::Backspace
            } else {
                Key::ctrl(letter as u8)
            }
        }
        KeyCode::Char(c) if c.is_ascii() => Key::Byte(c as u8),
        KeyCode::Tab => Key::Byte(b'\t'),
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        _ => return None, // Ignore other key codes
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_plain_characters() {
        assert_eq!(convert_key(press(KeyCode::Char('a'), KeyModifiers::NONE)), Some(Key::Byte(b'a')));
        assert_eq!(convert_key(press(KeyCode::Char('A'), KeyModifiers::SHIFT)), Some(Key::Byte(b'A')));
        assert_eq!(convert_key(press(KeyCode::Char('é'), KeyModifiers::NONE)), None);
        assert_eq!(convert_key(press(KeyCode::Tab, KeyModifiers::NONE)), Some(Key::Byte(b'\t')));
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(convert_key(press(KeyCode::Char('q'), KeyModifiers::CONTROL)), Some(Key::Ctrl(b'q')));
        assert_eq!(convert_key(press(KeyCode::Char('S'), KeyModifiers::CONTROL)), Some(Key::Ctrl(b's')));
        assert_eq!(convert_key(press(KeyCode::Char('h'), KeyModifiers::CONTROL)), Some(Key::Backspace));
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(convert_key(press(KeyCode::PageDown, KeyModifiers::NONE)), Some(Key::PageDown));
        assert_eq!(convert_key(press(KeyCode::Delete, KeyModifiers::NONE)), Some(Key::Delete));
        assert_eq!(convert_key(press(KeyCode::F(1), KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut event = press(KeyCode::Char('a'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(convert_key(event), None);
    }
}
