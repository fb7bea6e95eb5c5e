//! # Kite
//!
//! The core of a small modal terminal text editor.
//!
//! Kite keeps the document as a vector of rows. Every row carries its
//! tab-expanded render form and one highlight class per rendered byte,
//! recomputed eagerly whenever the row changes. Each frame is encoded as a
//! single write.
//!
//! ## Core Concepts
//!
//! - **Row store**: Raw bytes, render bytes and highlight classes per row
//! - **Incremental highlighting**: Block comment state cascades to following
//!   rows only while it keeps changing
//! - **Color runs**: A color command is emitted only where the class changes
//! - **Modal input**: Normal, insert and command modes, one handler each
//!
//! ## Example
//!
//! ```rust
//! use kite::{Editor, EditorConfig, Key};
//! use std::time::Instant;
//!
//! let mut editor = Editor::new(EditorConfig::default(), 24, 80);
//! for key in [Key::Byte(b'i'), Key::Byte(b'h'), Key::Byte(b'i'), Key::Esc] {
//!     editor.process_key(key);
//! }
//! assert_eq!(editor.session().document().to_bytes(), b"hi\n");
//! let frame = editor.render_frame(Instant::now());
//! assert!(frame.starts_with(b"\x1b[?25l\x1b[H"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod fileio;
pub mod key;
pub mod mode;
pub mod render;
pub mod search;
pub mod syntax;
pub mod terminal;
pub mod view;

// Re-exports for convenience
pub use config::EditorConfig;
pub use document::{Document, Row};
pub use editor::{Cursor, Editor, Session};
pub use error::{Error, Result};
pub use key::Key;
pub use mode::{Mode, ModeKind};
pub use render::OutputBuffer;
pub use search::{Search, SearchOutcome};
pub use syntax::{Highlight, SyntaxProfile};
pub use terminal::{CrosstermTerminal, Terminal};
pub use view::Viewport;
