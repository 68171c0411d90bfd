//! Outbound message delivery.

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;
use tracing::warn;

/// Opaque destination for notifications (a chat id for Telegram).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Recipient(pub i64);

impl fmt::Display for Recipient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The transport failed to deliver one message.
#[derive(Debug, Error)]
#[error("failed to deliver message to {recipient}: {reason}")]
pub struct SendError {
    pub recipient: Recipient,
    pub reason: String,
}

impl SendError {
    pub fn new(recipient: Recipient, reason: impl Into<String>) -> Self {
        Self {
            recipient,
            reason: reason.into(),
        }
    }
}

/// Sends plain text to a recipient.
#[async_trait]
pub trait MessageSink: Send + Sync {
    /// Deliver `text` to `recipient`.
    async fn send_text(&self, recipient: Recipient, text: &str) -> Result<(), SendError>;
}

/// Send every message in order, logging failures instead of stopping.
///
/// Returns `(sent, failed)`.
pub(crate) async fn deliver_all<I>(
    sink: &dyn MessageSink,
    recipient: Recipient,
    messages: I,
) -> (usize, usize)
where
    I: IntoIterator<Item = String>,
{
    let mut sent = 0;
    let mut failed = 0;

    for text in messages {
        match sink.send_text(recipient, &text).await {
            Ok(()) => sent += 1,
            Err(e) => {
                warn!(recipient = %recipient, error = %e, "Failed to send notification");
                failed += 1;
            }
        }
    }

    (sent, failed)
}
