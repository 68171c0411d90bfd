//! Main Telegram bot implementation.

use std::sync::Arc;

use issuewatch_github::GithubClient;
use teloxide::dispatching::UpdateFilterExt;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

use crate::config::BotConfig;
use crate::error::{BotError, Result};
use crate::handlers::{
    handle_command, handle_message, handle_unknown_command, is_command_like, Command,
};
use crate::sink::TelegramSink;
use crate::state::{create_shared_state, BotState};

/// The issue-notification bot.
pub struct IssueBot {
    /// The teloxide bot instance.
    bot: Bot,
    /// Shared state across handlers.
    state: Arc<BotState>,
}

impl IssueBot {
    /// Create the bot, its GitHub client and its shared state.
    pub fn new(config: BotConfig) -> Result<Self> {
        let bot = Bot::new(config.bot_token.clone());
        let github = GithubClient::new(config.github.clone())?;
        let sink = TelegramSink::new(bot.clone());

        let state = create_shared_state(config, Arc::new(github), Arc::new(sink));

        Ok(Self { bot, state })
    }

    /// Get the bot's username.
    pub async fn get_me(&self) -> Result<String> {
        let me = self
            .bot
            .get_me()
            .await
            .map_err(|e| BotError::BotStartFailed(e.to_string()))?;
        Ok(me.username().to_string())
    }

    /// Receive updates until Ctrl+C, then stop every notifier.
    pub async fn run(&self) -> Result<()> {
        info!(repository = %self.state.repository(), "Starting Telegram bot in polling mode...");

        if let Err(e) = self.bot.set_my_commands(Command::bot_commands()).await {
            warn!(error = %e, "Failed to register bot commands");
        }

        let state_for_commands = Arc::clone(&self.state);

        let handler = dptree::entry()
            .branch(
                Update::filter_message()
                    .filter_command::<Command>()
                    .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                        let state = Arc::clone(&state_for_commands);
                        info!(chat_id = %msg.chat.id, "Command matched: {:?}", cmd);
                        async move { handle_command(bot, msg, cmd, state).await }
                    }),
            )
            .branch(
                Update::filter_message()
                    .filter(|msg: Message| is_command_like(msg.text()))
                    .endpoint(|bot: Bot, msg: Message| async move {
                        handle_unknown_command(bot, msg).await
                    }),
            )
            .branch(
                Update::filter_message().endpoint(|bot: Bot, msg: Message| async move {
                    handle_message(bot, msg).await
                }),
            );

        info!("Bot is running! Send /start to begin.");

        Dispatcher::builder(self.bot.clone(), handler)
            .default_handler(|upd| async move {
                warn!("Unhandled update: {:?}", upd);
            })
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;

        self.state.shutdown().await;
        info!("Bot stopped");
        Ok(())
    }
}
