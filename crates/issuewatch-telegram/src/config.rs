//! Startup configuration.
//!
//! Every setting can come from a command-line flag or an environment
//! variable; `main` loads `.env.local` / `.env` before parsing.
//!
//! # Environment Variables
//!
//! Required:
//! - `TELEGRAM_BOT_TOKEN`: Bot token from @BotFather
//! - `GITHUB_TOKEN`: Token used to read the repository's issues
//! - `GITHUB_OWNER`, `GITHUB_REPO`: The repository to watch
//!
//! Optional:
//! - `GITHUB_API_URL`: API base URL (default: https://api.github.com)
//! - `ISSUEWATCH_POLL_INTERVAL_SECS`: Polling window (default: 300)
//! - `ISSUEWATCH_FETCH_TIMEOUT_SECS`: Issue request timeout (default: 30)
//! - `ISSUEWATCH_ON_FETCH_ERROR`: `skip` or `stop` (default: skip)

use std::fmt;
use std::time::Duration;

use clap::Parser;
use issuewatch_github::{GithubConfig, DEFAULT_API_URL};
use issuewatch_runtime::{FetchFailurePolicy, NotifierConfig};

use crate::error::{BotError, Result};

/// issuewatch - Telegram notifications for new GitHub issues
#[derive(Parser, Debug)]
#[command(name = "issuewatch-telegram")]
#[command(about = "Telegram bot that announces new issues of a GitHub repository")]
pub struct CliArgs {
    /// Telegram bot token
    #[arg(long, env = "TELEGRAM_BOT_TOKEN", hide_env_values = true)]
    pub bot_token: String,

    /// GitHub token for reading issues
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub github_token: String,

    /// Repository owner
    #[arg(long, env = "GITHUB_OWNER")]
    pub owner: String,

    /// Repository name
    #[arg(long, env = "GITHUB_REPO")]
    pub repo: String,

    /// GitHub API base URL
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Seconds between polls; also the "new issue" age limit
    #[arg(long, env = "ISSUEWATCH_POLL_INTERVAL_SECS", default_value_t = 300)]
    pub poll_interval_secs: u64,

    /// Timeout for one issue-list request, in seconds
    #[arg(long, env = "ISSUEWATCH_FETCH_TIMEOUT_SECS", default_value_t = 30)]
    pub fetch_timeout_secs: u64,

    /// What a notifier does when fetching fails: skip or stop
    #[arg(long, env = "ISSUEWATCH_ON_FETCH_ERROR", default_value = "skip")]
    pub on_fetch_error: FetchFailurePolicy,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Validated configuration for the bot.
#[derive(Clone)]
pub struct BotConfig {
    /// Telegram bot token.
    pub bot_token: String,
    /// Repository and credentials for the issue fetcher.
    pub github: GithubConfig,
    /// Window and failure policy shared by every notifier.
    pub notifier: NotifierConfig,
}

impl BotConfig {
    pub fn new(
        bot_token: impl Into<String>,
        github: GithubConfig,
        notifier: NotifierConfig,
    ) -> Self {
        Self {
            bot_token: bot_token.into(),
            github,
            notifier,
        }
    }

    /// Validate parsed arguments.
    pub fn from_args(args: &CliArgs) -> Result<Self> {
        require("bot token", &args.bot_token)?;
        require("GitHub token", &args.github_token)?;
        require("repository owner", &args.owner)?;
        require("repository name", &args.repo)?;

        if args.fetch_timeout_secs == 0 {
            return Err(BotError::Config(
                "fetch timeout must be greater than zero".to_string(),
            ));
        }

        let github = GithubConfig::new(
            args.owner.trim(),
            args.repo.trim(),
            args.github_token.trim(),
        )
        .with_api_url(args.api_url.trim())
        .with_timeout(Duration::from_secs(args.fetch_timeout_secs));

        let notifier = NotifierConfig::new()
            .with_window(Duration::from_secs(args.poll_interval_secs))
            .with_fetch_failure_policy(args.on_fetch_error);
        notifier.validate()?;

        Ok(Self::new(args.bot_token.trim(), github, notifier))
    }
}

fn require(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BotError::Config(format!("{} must not be empty", name)));
    }
    Ok(())
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("bot_token", &"<redacted>")
            .field("github", &self.github)
            .field("notifier", &self.notifier)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> std::result::Result<CliArgs, clap::Error> {
        let mut argv = vec![
            "issuewatch-telegram",
            "--bot-token",
            "123:abc",
            "--github-token",
            "ghp_x",
            "--owner",
            "octo",
            "--repo",
            "hello",
        ];
        argv.extend_from_slice(extra);
        CliArgs::try_parse_from(argv)
    }

    #[test]
    fn test_flags_build_config() {
        let args = parse(&[
            "--poll-interval-secs",
            "60",
            "--on-fetch-error",
            "stop",
            "--api-url",
            "http://127.0.0.1:9000/",
            "-vv",
        ])
        .unwrap();
        let config = BotConfig::from_args(&args).unwrap();

        assert_eq!(config.bot_token, "123:abc");
        assert_eq!(config.github.repository(), "octo/hello");
        assert_eq!(config.github.api_url, "http://127.0.0.1:9000");
        assert_eq!(config.notifier.window, Duration::from_secs(60));
        assert_eq!(config.notifier.on_fetch_error, FetchFailurePolicy::Stop);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let args = parse(&["--poll-interval-secs", "0"]).unwrap();
        assert!(BotConfig::from_args(&args).is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let args = parse(&["--fetch-timeout-secs", "0"]).unwrap();
        assert!(matches!(BotConfig::from_args(&args), Err(BotError::Config(_))));
    }

    #[test]
    fn test_blank_owner_rejected() {
        let mut args = parse(&[]).unwrap();
        args.owner = "  ".to_string();
        match BotConfig::from_args(&args) {
            Err(BotError::Config(msg)) => assert!(msg.contains("owner")),
            other => panic!("expected config error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_policy_rejected_by_parser() {
        assert!(parse(&["--on-fetch-error", "retry"]).is_err());
    }

    #[test]
    fn test_debug_hides_tokens() {
        let args = parse(&[]).unwrap();
        let printed = format!("{:?}", BotConfig::from_args(&args).unwrap());
        assert!(!printed.contains("123:abc"));
        assert!(!printed.contains("ghp_x"));
    }
}
