//! Issue records as returned by the tracker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// State of an issue on the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
    /// Any state string the tracker may add in the future.
    #[serde(other)]
    Other,
}

/// A single issue, decoded verbatim from the issue-list response.
///
/// Issues are snapshots: a fresh set is decoded on every fetch and nothing
/// is kept between fetches. The tracker's `url` is the only identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// When the issue was opened.
    pub created_at: DateTime<Utc>,
    /// API URL of the issue.
    pub url: String,
    /// Browser URL of the issue, when the tracker provides one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    /// Issue title.
    pub title: String,
    /// Open, closed, or something else.
    pub state: IssueState,
    /// Issue description. The tracker sends `null` for an empty body.
    #[serde(default)]
    pub body: Option<String>,
}

impl Issue {
    /// Whether the issue is currently open.
    pub fn is_open(&self) -> bool {
        self.state == IssueState::Open
    }

    /// The description, or an empty string.
    pub fn body(&self) -> &str {
        self.body.as_deref().unwrap_or_default()
    }

    /// The link to show a person: the browser URL if known, else the API URL.
    pub fn link(&self) -> &str {
        self.html_url.as_deref().unwrap_or(&self.url)
    }
}
