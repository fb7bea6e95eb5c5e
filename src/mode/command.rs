//! Command mode: the `:` line and its commands.

use super::{ModeHandler, ModeKind, Transition};
use crate::editor::Session;
use crate::key::Key;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// Longest command line, including the leading `:`.
const MAX_LINE_LEN: usize = 128;

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Nothing typed.
    Empty,
    /// `:w [file]`
    Write(Option<PathBuf>),
    /// `:q`
    Quit,
    /// `:q!`
    ForceQuit,
    /// `:wq` or `:x`
    WriteQuit,
}

/// A command line that names no known command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown command: {0}")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let (name, arg) = match text.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, Some(arg.trim())),
            None => (text, None),
        };
        match (name, arg) {
            ("", _) => Ok(Self::Empty),
            ("w", arg) => Ok(Self::Write(arg.map(PathBuf::from))),
            ("q", None) => Ok(Self::Quit),
            ("q!", None) => Ok(Self::ForceQuit),
            ("wq" | "x", None) => Ok(Self::WriteQuit),
            _ => Err(UnknownCommand(text.to_owned())),
        }
    }
}

impl Command {
    /// Run the command against the session.
    pub fn execute(&self, session: &mut Session) {
        match self {
            Self::Empty => {}
            Self::Write(path) => {
                session.save(path.as_deref());
            }
            Self::Quit => {
                if session.document.is_dirty() {
                    session.set_message("No write since last change (add ! to override)");
                } else {
                    session.should_quit = true;
                }
            }
            Self::ForceQuit => session.should_quit = true,
            Self::WriteQuit => {
                if session.save(None) {
                    session.should_quit = true;
                }
            }
        }
    }
}

/// Command mode state: the line being typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandMode {
    line: String,
}

impl Default for CommandMode {
    fn default() -> Self {
        Self {
            line: String::from(":"),
        }
    }
}

impl CommandMode {
    /// The command line, starting with `:`.
    pub fn line(&self) -> &str {
        &self.line
    }
}

impl ModeHandler for CommandMode {
    fn kind(&self) -> ModeKind {
        ModeKind::Command
    }

    fn handle_key(&mut self, key: Key, session: &mut Session) -> Transition {
        match key {
            Key::Esc => Transition::Switch(ModeKind::Normal),
            Key::Enter => {
                let text = &self.line[1..];
                debug!(command = text, "execute");
                match text.parse::<Command>() {
                    Ok(command) => command.execute(session),
                    Err(err) => session.set_message(err.to_string()),
                }
                Transition::Switch(ModeKind::Normal)
            }
            Key::Backspace | Key::Ctrl(b'h') => {
                if self.line.len() > 1 {
                    self.line.pop();
                    Transition::Stay
                } else {
                    Transition::Switch(ModeKind::Normal)
                }
            }
            _ => {
                if let Some(byte) = key.printable() {
                    if self.line.len() < MAX_LINE_LEN {
                        self.line.push(char::from(byte));
                    }
                }
                Transition::Stay
            }
        }
    }
}
