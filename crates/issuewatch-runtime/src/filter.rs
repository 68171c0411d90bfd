//! Classification of fetched issues.
//!
//! Pure functions over a snapshot; the caller supplies `now`.

use std::time::Duration;

use chrono::{DateTime, Utc};
use issuewatch_github::Issue;

/// Whether `issue` was created within `window` of `now` (inclusive).
///
/// An issue stamped in the future relative to `now` (clock skew) counts as new.
pub fn is_recent(issue: &Issue, now: DateTime<Utc>, window: Duration) -> bool {
    match (now - issue.created_at).to_std() {
        Ok(age) => age <= window,
        Err(_) => true,
    }
}

/// Open issues created within `window` of `now`, in snapshot order.
pub fn new_open_issues(
    issues: &[Issue],
    now: DateTime<Utc>,
    window: Duration,
) -> impl Iterator<Item = &Issue> {
    issues
        .iter()
        .filter(move |issue| issue.is_open() && is_recent(issue, now, window))
}

/// Open issues regardless of age, in snapshot order.
pub fn open_issues(issues: &[Issue]) -> impl Iterator<Item = &Issue> {
    issues.iter().filter(|issue| issue.is_open())
}
