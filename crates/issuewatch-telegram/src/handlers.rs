//! Command handlers for the Telegram bot.

use std::sync::Arc;
use std::time::Duration;

use issuewatch_runtime::format::describe_window;
use issuewatch_runtime::Recipient;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::{info, warn};

use crate::state::BotState;

/// Reply to anything that is not a command.
pub const INVALID_MESSAGE: &str = "Invalid Message";

/// Bot commands that can be invoked with /.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Available commands:")]
pub enum Command {
    #[command(description = "Start watching the repository for new issues")]
    Start,

    #[command(description = "List all open issues")]
    Issues,

    #[command(description = "Stop new-issue notifications")]
    Stop,

    #[command(description = "Show notification status")]
    Status,

    #[command(description = "Show help message")]
    Help,
}

fn recipient(msg: &Message) -> Recipient {
    Recipient(msg.chat.id.0)
}

/// Greeting sent on /start.
pub fn welcome_text(repository: &str, window: Duration) -> String {
    format!(
        "Welcome to Github Issues bot\n\n\
        Watching {} for new issues every {}.\n\
        Use /issues to list open issues and /stop to turn notifications off.",
        repository,
        describe_window(window)
    )
}

/// Reply to /status.
pub fn status_text(repository: &str, window: Duration, polling: bool) -> String {
    if polling {
        format!(
            "Notifications are on for {}.\nChecking every {}.",
            repository,
            describe_window(window)
        )
    } else {
        format!(
            "Notifications are off for {}.\nUse /start to turn them on.",
            repository
        )
    }
}

/// Whether a message looks like a command (starts with `/`).
///
/// Used after command parsing, so a match here is an unrecognised command.
pub fn is_command_like(text: Option<&str>) -> bool {
    text.map(|t| t.starts_with('/')).unwrap_or(false)
}

/// Reply to a `/command` that did not parse.
pub fn unknown_command_text(text: &str) -> String {
    let command = text.split_whitespace().next().unwrap_or(text);
    format!("Unknown command: {}\n\nUse /help to see available commands.", command)
}

/// Handle the /start command.
pub async fn handle_start(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let welcome = welcome_text(&state.repository(), state.config().notifier.window);
    if let Err(e) = bot.send_message(msg.chat.id, welcome).await {
        warn!(chat_id = %msg.chat.id, error = %e, "Failed to send welcome message");
    }

    let replaced = state.start_notifier(recipient(&msg)).await;
    info!(
        chat_id = %msg.chat.id,
        user = ?msg.from.as_ref().map(|u| &u.username),
        replaced,
        "User started notifications"
    );
    Ok(())
}

/// Handle the /issues command.
pub async fn handle_issues(msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    // The listing already tells the user when the fetch fails.
    match state.list_issues(recipient(&msg)).await {
        Ok(report) => {
            info!(
                chat_id = %msg.chat.id,
                open = report.open,
                failed = report.failed,
                "Issues listed"
            );
        }
        Err(e) => {
            warn!(chat_id = %msg.chat.id, error = %e, "Issue listing failed");
        }
    }
    Ok(())
}

/// Handle the /stop command.
pub async fn handle_stop(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let reply = if state.stop_notifier(recipient(&msg)).await {
        "Notifications stopped. Use /start to turn them on again."
    } else {
        "Notifications are not running."
    };
    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

/// Handle the /status command.
pub async fn handle_status(bot: Bot, msg: Message, state: Arc<BotState>) -> ResponseResult<()> {
    let polling = state.is_polling(recipient(&msg)).await;
    let text = status_text(&state.repository(), state.config().notifier.window, polling);
    bot.send_message(msg.chat.id, text).await?;
    Ok(())
}

/// Handle the /help command.
pub async fn handle_help(bot: Bot, msg: Message) -> ResponseResult<()> {
    bot.send_message(msg.chat.id, Command::descriptions().to_string())
        .await?;
    Ok(())
}

/// Handle a `/command` the parser did not recognise.
pub async fn handle_unknown_command(bot: Bot, msg: Message) -> ResponseResult<()> {
    if let Some(text) = msg.text() {
        info!(chat_id = %msg.chat.id, cmd = %text, "Unrecognized command");
        bot.send_message(msg.chat.id, unknown_command_text(text)).await?;
    }
    Ok(())
}

/// Handle plain text and other non-command messages.
pub async fn handle_message(bot: Bot, msg: Message) -> ResponseResult<()> {
    bot.send_message(msg.chat.id, INVALID_MESSAGE).await?;
    Ok(())
}

/// Dispatch commands to appropriate handlers.
pub async fn handle_command(
    bot: Bot,
    msg: Message,
    cmd: Command,
    state: Arc<BotState>,
) -> ResponseResult<()> {
    match cmd {
        Command::Start => handle_start(bot, msg, state).await,
        Command::Issues => handle_issues(msg, state).await,
        Command::Stop => handle_stop(bot, msg, state).await,
        Command::Status => handle_status(bot, msg, state).await,
        Command::Help => handle_help(bot, msg).await,
    }
}
