//! One-shot listing of every open issue.

use issuewatch_github::IssueSource;
use tracing::{debug, warn};

use crate::error::Result;
use crate::filter::open_issues;
use crate::format::issue_message;
use crate::sink::{deliver_all, MessageSink, Recipient};

/// Sent instead of the listing when the fetch fails.
pub const FETCH_ERROR_NOTICE: &str = "There was an error while getting the issues";

/// Outcome of a listing.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ListingReport {
    /// Issues in the snapshot.
    pub fetched: usize,
    /// Open issues among them.
    pub open: usize,
    /// Messages delivered.
    pub sent: usize,
    /// Messages the transport rejected.
    pub failed: usize,
}

/// Fetch once and send one message per open issue, whatever its age.
///
/// On fetch failure the recipient gets [`FETCH_ERROR_NOTICE`] and no issue
/// messages, and the fetch error is returned.
pub async fn list_open_issues(
    source: &dyn IssueSource,
    sink: &dyn MessageSink,
    recipient: Recipient,
) -> Result<ListingReport> {
    let issues = match source.fetch_issues().await {
        Ok(issues) => issues,
        Err(e) => {
            warn!(recipient = %recipient, error = %e, "Failed to fetch issues for listing");
            if let Err(send_err) = sink.send_text(recipient, FETCH_ERROR_NOTICE).await {
                warn!(
                    recipient = %recipient,
                    error = %send_err,
                    "Failed to send fetch error notice"
                );
            }
            return Err(e.into());
        }
    };

    let messages: Vec<String> = open_issues(&issues).map(issue_message).collect();
    let open = messages.len();

    let (sent, failed) = deliver_all(sink, recipient, messages).await;

    debug!(
        recipient = %recipient,
        fetched = issues.len(),
        open,
        sent,
        failed,
        "listing complete"
    );

    Ok(ListingReport {
        fetched: issues.len(),
        open,
        sent,
        failed,
    })
}
