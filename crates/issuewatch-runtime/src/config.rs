//! Notifier configuration.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{Result, RuntimeError};

/// Default polling window: five minutes.
pub const DEFAULT_WINDOW: Duration = Duration::from_secs(5 * 60);

/// What a notifier does when a fetch fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FetchFailurePolicy {
    /// Log the error, announce nothing for that cycle, keep polling.
    #[default]
    Skip,
    /// End the notifier and surface the error through its handle.
    Stop,
}

impl FromStr for FetchFailurePolicy {
    type Err = RuntimeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "stop" => Ok(Self::Stop),
            other => Err(RuntimeError::InvalidPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for FetchFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Skip => write!(f, "skip"),
            Self::Stop => write!(f, "stop"),
        }
    }
}

/// Configuration for a polling notifier.
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// Sleep between fetches, and the "new issue" recency threshold.
    pub window: Duration,
    /// Behaviour on fetch failure.
    pub on_fetch_error: FetchFailurePolicy,
}

impl Default for NotifierConfig {
    fn default() -> Self {
        Self {
            window: DEFAULT_WINDOW,
            on_fetch_error: FetchFailurePolicy::default(),
        }
    }
}

impl NotifierConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the polling window.
    pub fn with_window(mut self, window: Duration) -> Self {
        self.window = window;
        self
    }

    /// Sets the fetch-failure policy.
    pub fn with_fetch_failure_policy(mut self, policy: FetchFailurePolicy) -> Self {
        self.on_fetch_error = policy;
        self
    }

    /// Rejects a zero window, which would make the loop spin.
    pub fn validate(&self) -> Result<()> {
        if self.window.is_zero() {
            return Err(RuntimeError::ZeroWindow);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NotifierConfig::default();

        assert_eq!(config.window, Duration::from_secs(300));
        assert_eq!(config.on_fetch_error, FetchFailurePolicy::Skip);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_builder() {
        let config = NotifierConfig::new()
            .with_window(Duration::from_secs(60))
            .with_fetch_failure_policy(FetchFailurePolicy::Stop);

        assert_eq!(config.window, Duration::from_secs(60));
        assert_eq!(config.on_fetch_error, FetchFailurePolicy::Stop);
    }

    #[test]
    fn test_zero_window_rejected() {
        let config = NotifierConfig::new().with_window(Duration::ZERO);
        assert!(matches!(config.validate(), Err(RuntimeError::ZeroWindow)));
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("skip".parse::<FetchFailurePolicy>().unwrap(), FetchFailurePolicy::Skip);
        assert_eq!(" STOP ".parse::<FetchFailurePolicy>().unwrap(), FetchFailurePolicy::Stop);
        assert!(matches!(
            "retry".parse::<FetchFailurePolicy>(),
            Err(RuntimeError::InvalidPolicy(name)) if name == "retry"
        ));
        assert_eq!(FetchFailurePolicy::Stop.to_string(), "stop");
    }
}
