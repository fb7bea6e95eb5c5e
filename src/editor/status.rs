//! Transient message shown on the bottom line.

use std::time::{Duration, Instant};

/// A message with the time it was set.
#[derive(Debug, Clone, Default)]
pub struct StatusMessage {
    text: String,
    set_at: Option<Instant>,
    revision: u64,
}

impl StatusMessage {
    /// Replace the message, stamped with the current time.
    pub fn set(&mut self, text: impl Into<String>) {
        self.set_at_time(text, Instant::now());
    }

    /// Replace the message with an explicit timestamp.
    pub fn set_at_time(&mut self, text: impl Into<String>, at: Instant) {
        self.text = text.into();
        self.set_at = Some(at);
        self.revision += 1;
    }

    /// Counter bumped by every `set`, to tell whether anything reported.
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// The message text regardless of age.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The message if it is younger than `timeout` at `now`.
    pub fn visible_at(&self, now: Instant, timeout: Duration) -> Option<&str> {
        let set_at = self.set_at?;
        (!self.text.is_empty() && now.saturating_duration_since(set_at) < timeout)
            .then_some(self.text.as_str())
    }
}
