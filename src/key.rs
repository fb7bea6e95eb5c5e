//! Logical key codes delivered by the terminal collaborator.
//!
//! The terminal adapter decodes escape sequences (`ESC [ <digit> ~` for the
//! numbered keys, `ESC [ <letter>` for arrows/Home/End) into these codes, so
//! the editor core never sees raw escape bytes.

/// A single logical key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A plain byte: printable ASCII, or `\t`.
    Byte(u8),
    /// Control + letter, stored as the lowercase letter (`Ctrl(b'q')`).
    Ctrl(u8),
    /// Enter/Return.
    Enter,
    /// Escape.
    Esc,
    /// Backspace (also Ctrl-H).
    Backspace,
    /// Delete (`ESC [ 3 ~`).
    Delete,
    /// Left arrow.
    Left,
    /// Right arrow.
    Right,
    /// Up arrow.
    Up,
    /// Down arrow.
    Down,
    /// Home (`ESC [ 1 ~`, `ESC [ 7 ~`, `ESC [ H`).
    Home,
    /// End (`ESC [ 4 ~`, `ESC [ 8 ~`, `ESC [ F`).
    End,
    /// Page Up (`ESC [ 5 ~`).
    PageUp,
    /// Page Down (`ESC [ 6 ~`).
    PageDown,
}

impl Key {
    /// Build a control-key code from a letter.
    pub const fn ctrl(letter: u8) -> Self {
        Self::Ctrl(letter.to_ascii_lowercase())
    }

    /// The byte to insert for this key, if it is a printable ASCII byte.
    ///
    /// Tab is not printable here; insert mode accepts it separately.
    pub const fn printable(self) -> Option<u8> {
        match self {
            Self::Byte(b) if b.is_ascii() && !b.is_ascii_control() => Some(b),
            _ => None,
        }
    }
}
