//! Terminal module: The editor's only window onto the outside world.
//!
//! This module contains:
//! - [`Terminal`]: Key source, size query and frame sink
//! - [`CrosstermTerminal`]: Raw-mode backend over crossterm

mod backend;

pub use backend::{convert_key, CrosstermTerminal};

use crate::error::Result;
use crate::key::Key;

/// A terminal the editor can drive.
///
/// Implementations own raw mode and escape-sequence decoding; the editor
/// only sees logical keys and writes complete frames.
pub trait Terminal {
    /// Block until the next key press.
    fn read_key(&mut self) -> Result<Key>;

    /// Current size as (rows, cols).
    fn size(&mut self) -> Result<(u16, u16)>;

    /// Write one complete frame.
    fn write_frame(&mut self, bytes: &[u8]) -> Result<()>;
}
