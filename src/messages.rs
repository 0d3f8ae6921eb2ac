//! Ordered round message log.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Messages recorded during a round, drained once at the end in the order
/// they were written.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Vec<String>,
}

impl MessageLog {
    /// Creates an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            messages: Vec::new(),
        }
    }

    /// Appends a message.
    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    /// Removes and returns all messages, oldest first.
    pub fn drain(&mut self) -> Vec<String> {
        core::mem::take(&mut self.messages)
    }

    /// Discards all messages.
    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Returns the messages recorded so far.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Returns the number of messages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
