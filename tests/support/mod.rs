//! Shared helpers for integration tests.

#![allow(dead_code)]

use kite::{Editor, EditorConfig, Error, Key, Result, Terminal};
use std::collections::VecDeque;
use std::io;
use std::time::Instant;

/// An in-memory terminal fed from a key script.
pub struct ScriptedTerminal {
    keys: VecDeque<Key>,
    rows: u16,
    cols: u16,
    /// Every frame written, in order.
    pub frames: Vec<Vec<u8>>,
}

impl ScriptedTerminal {
    pub fn new(rows: u16, cols: u16, keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            rows,
            cols,
            frames: Vec::new(),
        }
    }

    pub fn resize(&mut self, rows: u16, cols: u16) {
        self.rows = rows;
        self.cols = cols;
    }
}

impl Terminal for ScriptedTerminal {
    fn read_key(&mut self) -> Result<Key> {
        self.keys.pop_front().ok_or_else(|| {
            Error::Terminal(io::Error::new(io::ErrorKind::UnexpectedEof, "script exhausted"))
        })
    }

    fn size(&mut self) -> Result<(u16, u16)> {
        Ok((self.rows, self.cols))
    }

    fn write_frame(&mut self, bytes: &[u8]) -> Result<()> {
        self.frames.push(bytes.to_vec());
        Ok(())
    }
}

/// Keys for typing `text` byte by byte (`\n` becomes Enter).
pub fn text_keys(text: &str) -> Vec<Key> {
    text.bytes()
        .map(|b| if b == b'\n' { Key::Enter } else { Key::Byte(b) })
        .collect()
}

/// Feed keys straight into an editor.
pub fn feed(editor: &mut Editor, keys: &[Key]) {
    for &key in keys {
        editor.process_key(key);
    }
}

/// An editor with default configuration.
pub fn editor(rows: u16, cols: u16) -> Editor {
    Editor::new(EditorConfig::default(), rows, cols)
}

/// Render the current frame and parse it with a VT100 emulator.
pub fn screen(editor: &mut Editor, rows: u16, cols: u16) -> vt100::Parser {
    let mut parser = vt100::Parser::new(rows, cols, 0);
    parser.process(editor.render_frame(Instant::now()));
    parser
}

/// Text of one screen row, trailing blanks trimmed.
pub fn row_text(parser: &vt100::Parser, row: u16) -> String {
    let cols = parser.screen().size().1;
    parser
        .screen()
        .rows(0, cols)
        .nth(usize::from(row))
        .unwrap_or_default()
        .trim_end()
        .to_owned()
}
