//! The issue-source abstraction.

use async_trait::async_trait;

use crate::error::Result;
use crate::issue::Issue;

/// Something that can produce a snapshot of a repository's issues.
///
/// Implementations return issues in the order the tracker yields them; callers
/// must not assume any sorting.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Fetch the current issue list (open and closed).
    async fn fetch_issues(&self) -> Result<Vec<Issue>>;

    /// Human-readable name of the repository, e.g. `owner/repo`.
    fn repository(&self) -> String;
}
