//! Integration tests for the one-shot listing.

mod common;

use common::{closed, open, FakeSource, RecordingSink, Reply};
use issuewatch_runtime::{
    list_open_issues, ListingReport, Recipient, RuntimeError, FETCH_ERROR_NOTICE,
};

const CHAT: Recipient = Recipient(1001);

fn minutes(n: i64) -> chrono::Duration {
    chrono::Duration::minutes(n)
}

#[tokio::test]
async fn test_listing_sends_every_open_issue_regardless_of_age() {
    let source = FakeSource::always(Reply::Issues(vec![
        open("Bug A", minutes(2)),
        closed("Done", minutes(1)),
        open("Bug B", minutes(10)),
    ]));
    let sink = RecordingSink::new();

    let report = list_open_issues(&source, &sink, CHAT).await.unwrap();

    assert_eq!(
        report,
        ListingReport {
            fetched: 3,
            open: 2,
            sent: 2,
            failed: 0,
        }
    );
    let messages = sink.messages_for(CHAT);
    assert_eq!(
        messages,
        vec![
            "Bug A\n\nBug A body\n\nhttps://api.github.com/repos/octo/hello/issues/1".to_string(),
            "Bug B\n\nBug B body\n\nhttps://api.github.com/repos/octo/hello/issues/3".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_listing_skips_closed_issues() {
    let source = FakeSource::always(Reply::Issues(vec![closed("Done", minutes(1))]));
    let sink = RecordingSink::new();

    let report = list_open_issues(&source, &sink, CHAT).await.unwrap();

    assert_eq!(report.open, 0);
    assert_eq!(sink.attempts(), 0);
}

#[tokio::test]
async fn test_listing_fetch_failure_sends_single_notice() {
    let source = FakeSource::always(Reply::Status(401));
    let sink = RecordingSink::new();

    let result = list_open_issues(&source, &sink, CHAT).await;

    match result {
        Err(RuntimeError::Fetch(e)) => assert_eq!(e.status(), Some(401)),
        other => panic!("expected fetch error, got {:?}", other),
    }
    assert_eq!(sink.messages_for(CHAT), vec![FETCH_ERROR_NOTICE.to_string()]);
}

#[tokio::test]
async fn test_listing_continues_after_send_failure() {
    let source = FakeSource::always(Reply::Issues(vec![
        open("Bug A", minutes(2)),
        open("Bug B", minutes(3)),
    ]));
    let sink = RecordingSink::rejecting_text("Bug A");

    let report = list_open_issues(&source, &sink, CHAT).await.unwrap();

    assert_eq!(report.sent, 1);
    assert_eq!(report.failed, 1);
    assert_eq!(sink.messages_for(CHAT).len(), 1);
}
