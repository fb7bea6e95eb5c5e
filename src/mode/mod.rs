//! Mode module: The modal key interpreter.
//!
//! This module contains:
//! - [`ModeHandler`]: The per-mode key handler trait
//! - [`NormalMode`], [`InsertMode`], [`CommandMode`]: One handler per mode
//! - [`Mode`]: The tagged current mode, dispatching to its handler
//!
//! A handler never switches modes itself; it returns a [`Transition`] and the
//! editor applies it.

mod command;
mod insert;
mod normal;

pub use command::{Command, CommandMode, UnknownCommand};
pub use insert::InsertMode;
pub use normal::NormalMode;

use crate::editor::Session;
use crate::key::Key;

/// Mode names, without state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    /// Motions and operators.
    Normal,
    /// Text entry.
    Insert,
    /// `:` command line.
    Command,
}

impl ModeKind {
    /// Tag shown in the status bar.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Command => "COMMAND",
        }
    }
}

/// What the editor should do after a key was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Stay in the current mode.
    Stay,
    /// Switch to another mode.
    Switch(ModeKind),
    /// Start an incremental search, then come back to this mode.
    Search,
}

/// A key handler for one mode.
pub trait ModeHandler {
    /// Which mode this handler implements.
    fn kind(&self) -> ModeKind;

    /// Interpret one key against the session.
    fn handle_key(&mut self, key: Key, session: &mut Session) -> Transition;
}

/// The current mode and its private state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Normal mode with its pending repeat count.
    Normal(NormalMode),
    /// Insert mode.
    Insert(InsertMode),
    /// Command mode with its command line.
    Command(CommandMode),
}

impl Default for Mode {
    fn default() -> Self {
        Self::Normal(NormalMode::default())
    }
}

impl Mode {
    /// Fresh state for `kind`.
    pub fn enter(kind: ModeKind) -> Self {
        match kind {
            ModeKind::Normal => Self::Normal(NormalMode::default()),
            ModeKind::Insert => Self::Insert(InsertMode),
            ModeKind::Command => Self::Command(CommandMode::default()),
        }
    }

    /// The handler for the current mode.
    pub fn handler_mut(&mut self) -> &mut dyn ModeHandler {
        match self {
            Self::Normal(mode) => mode,
            Self::Insert(mode) => mode,
            Self::Command(mode) => mode,
        }
    }

    /// Which mode is active.
    pub const fn kind(&self) -> ModeKind {
        match self {
            Self::Normal(_) => ModeKind::Normal,
            Self::Insert(_) => ModeKind::Insert,
            Self::Command(_) => ModeKind::Command,
        }
    }

    /// The command line, only in command mode.
    pub fn command_line(&self) -> Option<&str> {
        match self {
            Self::Command(mode) => Some(mode.line()),
            _ => None,
        }
    }

    /// The pending repeat count, only in normal mode.
    pub const fn pending_count(&self) -> Option<usize> {
        match self {
            Self::Normal(mode) => mode.count(),
            _ => None,
        }
    }
}
