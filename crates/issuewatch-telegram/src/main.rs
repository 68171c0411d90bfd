//! issuewatch Telegram bot binary.
//!
//! Start the bot with:
//! ```bash
//! TELEGRAM_BOT_TOKEN=xxx GITHUB_TOKEN=yyy GITHUB_OWNER=octo GITHUB_REPO=hello \
//!     cargo run -p issuewatch-telegram
//! ```

use clap::Parser;
use issuewatch_runtime::format::describe_window;
use issuewatch_telegram::{BotConfig, CliArgs, IssueBot};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Local .env.local or .env, before clap reads the environment
    let _ = dotenvy::from_filename(".env.local").or_else(|_| dotenvy::dotenv());

    let args = CliArgs::parse();

    // Initialize logging based on verbosity
    let filter = match args.verbose {
        0 => "issuewatch=info,teloxide=warn",
        1 => "issuewatch=debug,teloxide=info",
        2 => "issuewatch=trace,teloxide=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = BotConfig::from_args(&args)?;
    let repository = config.github.repository();
    let window = describe_window(config.notifier.window);
    let policy = config.notifier.on_fetch_error;

    let bot = IssueBot::new(config)?;

    match bot.get_me().await {
        Ok(username) => {
            tracing::info!(username = %username, "Bot initialized successfully");
            println!("\n[robot] issuewatch Telegram Bot");
            println!("   Bot: @{}", username);
            println!("   Repository: {}", repository);
            println!("   Polling every: {}", window);
            println!("   On fetch error: {}", policy);
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to get bot info");
            return Err(e.into());
        }
    }

    println!("\n[phone] Open Telegram and send /start to begin");
    println!("   Press Ctrl+C to stop\n");

    bot.run().await?;

    Ok(())
}
