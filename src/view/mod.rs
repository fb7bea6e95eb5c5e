//! View module: Which part of the document is on screen.
//!
//! This module contains:
//! - [`Viewport`]: Row/column offsets and the size of the text area

mod viewport;

pub use viewport::{Viewport, RESERVED_ROWS};
