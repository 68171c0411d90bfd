//! teloxide-backed message delivery.

use async_trait::async_trait;
use issuewatch_runtime::{MessageSink, Recipient, SendError};
use teloxide::prelude::*;

/// Delivers notifications as plain Telegram messages.
#[derive(Clone)]
pub struct TelegramSink {
    bot: Bot,
}

impl TelegramSink {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl MessageSink for TelegramSink {
    async fn send_text(&self, recipient: Recipient, text: &str) -> Result<(), SendError> {
        self.bot
            .send_message(ChatId(recipient.0), text)
            .await
            .map(|_| ())
            .map_err(|e| SendError::new(recipient, e.to_string()))
    }
}
