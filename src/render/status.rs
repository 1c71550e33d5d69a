//! Transient status bar message.

use std::time::{Duration, Instant};

/// How long a status message stays on screen.
pub const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

/// A message shown in the status bar for [`STATUS_MESSAGE_TTL`] after it is
/// set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StatusMessage {
    text: String,
    set_at: Option<Instant>,
}

impl StatusMessage {
    /// Replace the message, starting its lifetime at `now`.
    pub fn set(&mut self, text: impl Into<String>, now: Instant) {
        self.text = text.into();
        self.set_at = Some(now);
    }

    /// The most recent message, expired or not.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn set_at(&self) -> Option<Instant> {
        self.set_at
    }

    /// Whether the message is still showing at `now`.
    #[must_use]
    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.set_at
            .is_some_and(|set_at| now < set_at + STATUS_MESSAGE_TTL)
    }

    /// The message text if it is still showing at `now`.
    #[must_use]
    pub fn visible_at(&self, now: Instant) -> Option<&str> {
        self.is_visible_at(now).then_some(self.text.as_str())
    }
}
