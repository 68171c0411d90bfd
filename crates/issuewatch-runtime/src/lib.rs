//! Polling notifier for issuewatch.
//!
//! This crate turns issue snapshots into chat notifications:
//! - `IssueNotifier` - the polling loop bound to one recipient
//! - `NotifierHandle` - a spawned notifier plus its shutdown signal
//! - `list_open_issues` - the one-shot listing of every open issue
//! - `MessageSink` - the outbound side, implemented by the chat transport
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use std::time::Duration;
//! use issuewatch_github::{GithubClient, GithubConfig};
//! use issuewatch_runtime::{NotifierConfig, NotifierHandle, Recipient};
//!
//! let source = Arc::new(GithubClient::new(GithubConfig::new("octo", "hello", token))?);
//! let config = NotifierConfig::new().with_window(Duration::from_secs(300));
//! let handle = NotifierHandle::spawn(source, sink, Recipient(42), config);
//!
//! // Later
//! handle.stop().await?;
//! ```
//!
//! # Key Concepts
//!
//! ## Polling window
//!
//! One duration `W` is both the sleep between fetches and the recency
//! threshold: an open issue is announced in a cycle iff it was created at
//! most `W` before that cycle's fetch. Nothing is remembered between cycles.
//!
//! ## Failure handling
//!
//! A failed send is logged and the remaining issues are still delivered. A
//! failed fetch follows [`FetchFailurePolicy`]: skip the cycle (default) or
//! stop the notifier.

pub mod config;
pub mod error;
pub mod filter;
pub mod format;
pub mod handle;
pub mod listing;
pub mod notifier;
pub mod sink;

pub use config::{FetchFailurePolicy, NotifierConfig};
pub use error::{Result, RuntimeError};
pub use handle::NotifierHandle;
pub use listing::{list_open_issues, ListingReport, FETCH_ERROR_NOTICE};
pub use notifier::{CycleReport, IssueNotifier};
pub use sink::{MessageSink, Recipient, SendError};
