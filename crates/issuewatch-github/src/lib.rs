//! GitHub issue fetching for issuewatch.
//!
//! This crate is the leaf of the system: it performs one authenticated
//! request against the repository's issue-list endpoint and decodes the
//! response into [`Issue`] records.
//!
//! - [`IssueSource`] - the seam the notifier and the listing depend on
//! - [`GithubClient`] - the reqwest-backed implementation
//! - [`GithubConfig`] - owner, repository, credential, API base URL, timeout
//!
//! Only the first page the API returns is decoded. There is no retry and no
//! pagination; a failed request never yields partial results.
//!
//! # Example
//!
//! ```no_run
//! use issuewatch_github::{GithubClient, GithubConfig, IssueSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GithubConfig::new("rust-lang", "rust", "ghp_example");
//!     let client = GithubClient::new(config)?;
//!
//!     for issue in client.fetch_issues().await? {
//!         println!("{} ({:?})", issue.title, issue.state);
//!     }
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod error;
pub mod issue;
pub mod source;

pub use client::{GithubClient, GithubConfig, DEFAULT_API_URL};
pub use error::{FetchError, Result};
pub use issue::{Issue, IssueState};
pub use source::IssueSource;
