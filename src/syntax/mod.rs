//! Syntax module: per-byte highlight classes and the file-type database.
//!
//! This module contains:
//! - [`Highlight`]: The classification assigned to every rendered byte
//! - [`SyntaxProfile`]: Static per-file-type rules (keywords, comment markers)
//! - [`highlighter`]: The incremental row scanner with block-comment carry-over

pub mod highlighter;
mod profile;

pub use highlighter::{is_separator, update_highlight};
pub use profile::{SyntaxFlags, SyntaxProfile, HLDB};

/// SGR foreground code that restores the terminal default color.
pub const DEFAULT_COLOR: u8 = 39;

/// Highlight class of one rendered byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Highlight {
    /// Plain text.
    #[default]
    Normal,
    /// Single-line comment.
    Comment,
    /// Block (multi-line) comment.
    BlockComment,
    /// Primary keyword (`if`, `while`, ...).
    Keyword,
    /// Secondary keyword, usually a type name (`int`, `void`, ...).
    TypeKeyword,
    /// String or character literal.
    String,
    /// Numeric literal.
    Number,
    /// Current search match.
    Match,
}

impl Highlight {
    /// ANSI SGR foreground code for this class.
    pub const fn color(self) -> u8 {
        match self {
            Self::Comment | Self::BlockComment => 36,
            Self::Keyword => 33,
            Self::TypeKeyword => 32,
            Self::String => 35,
            Self::Number => 31,
            Self::Match => 34,
            Self::Normal => 37,
        }
    }
}
