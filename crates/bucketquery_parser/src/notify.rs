//! Sinks for user-facing notifications.
//!
//! Parsing reports malformed input through a [`Notifier`] instead of failing,
//! so the caller decides how a message reaches the user.

use tracing::warn;

/// Receives messages meant for the user who typed the command.
pub trait Notifier {
    /// Delivers one message.
    fn notify(&mut self, message: &str);
}

impl<F: FnMut(&str)> Notifier for F {
    fn notify(&mut self, message: &str) {
        (*self)(message);
    }
}

/// Records every message it receives.
#[derive(Clone, Debug, Default)]
pub struct CollectingNotifier {
    messages: Vec<String>,
}

impl CollectingNotifier {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages received so far, oldest first.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Returns true if nothing has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Removes and returns all messages.
    pub fn drain(&mut self) -> Vec<String> {
        std::mem::take(&mut self.messages)
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

/// Logs messages at `warn` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&mut self, message: &str) {
        warn!(target: "bucketquery::notify", "{message}");
    }
}
