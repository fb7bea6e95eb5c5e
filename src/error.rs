//! Error types shared across the editor core.

use std::io;
use std::path::PathBuf;

/// Errors surfaced by the editor core and its collaborators.
///
/// Everything here is fatal to the session loop. Recoverable conditions
/// (failed saves, unknown commands, cursor at a boundary) are reported on
/// the message line instead and never become an `Error`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be opened for editing.
    #[error("failed to open {}: {source}", path.display())]
    Open {
        /// The file that was being read.
        path: PathBuf,
        /// Underlying cause.
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The configuration parsed but holds an unusable value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),

    /// The terminal collaborator failed (raw mode, read, write).
    #[error("terminal I/O failed: {0}")]
    Terminal(#[source] io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
