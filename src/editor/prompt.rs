//! Prompt: One line of input typed on the message line.

use crate::key::Key;

/// Longest input accepted.
const MAX_INPUT_LEN: usize = 128;

/// Result of feeding one key to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// Keep reading keys.
    Continue,
    /// Enter on a non-empty input.
    Submitted(String),
    /// Esc.
    Cancelled,
}

/// A message-line prompt such as `Save as: notes.txt (ESC to cancel)`.
#[derive(Debug, Clone)]
pub struct Prompt {
    label: &'static str,
    hint: &'static str,
    input: String,
}

impl Prompt {
    /// Create an empty prompt shown as `label`, the input, then `hint`.
    pub const fn new(label: &'static str, hint: &'static str) -> Self {
        Self {
            label,
            hint,
            input: String::new(),
        }
    }

    /// The input typed so far.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Text shown on the message line.
    pub fn text(&self) -> String {
        format!("{}{}{}", self.label, self.input, self.hint)
    }

    /// Column of the cursor on the message line.
    pub fn cursor_col(&self) -> usize {
        self.label.len() + self.input.len()
    }

    /// Handle one key.
    pub fn handle_key(&mut self, key: Key) -> PromptOutcome {
        match key {
            Key::Esc => PromptOutcome::Cancelled,
            Key::Enter if !self.input.is_empty() => {
                PromptOutcome::Submitted(std::mem::take(&mut self.input))
            }
            Key::Backspace | Key::Delete | Key::Ctrl(b'h') => {
                self.input.pop();
                PromptOutcome::Continue
            }
            _ => {
                if let Some(byte) = key.printable() {
                    if self.input.len() < MAX_INPUT_LEN {
                        self.input.push(char::from(byte));
                    }
                }
                PromptOutcome::Continue
            }
        }
    }
}
