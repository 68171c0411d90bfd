//! The polling loop.

use std::sync::Arc;

use chrono::Utc;
use issuewatch_github::IssueSource;
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::config::{FetchFailurePolicy, NotifierConfig};
use crate::error::Result;
use crate::filter::new_open_issues;
use crate::format::new_issue_alert;
use crate::sink::{deliver_all, MessageSink, Recipient};

/// Outcome of one polling cycle.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// Issues in the snapshot.
    pub fetched: usize,
    /// Open issues inside the window.
    pub matched: usize,
    /// Alerts delivered.
    pub sent: usize,
    /// Alerts the transport rejected.
    pub failed: usize,
}

/// Announces new open issues to one recipient, once per polling window.
pub struct IssueNotifier {
    source: Arc<dyn IssueSource>,
    sink: Arc<dyn MessageSink>,
    recipient: Recipient,
    config: NotifierConfig,
    /// Shutdown signal receiver.
    shutdown: watch::Receiver<bool>,
}

impl IssueNotifier {
    /// Creates a notifier bound to `recipient`.
    pub fn new(
        source: Arc<dyn IssueSource>,
        sink: Arc<dyn MessageSink>,
        recipient: Recipient,
        config: NotifierConfig,
        shutdown: watch::Receiver<bool>,
    ) -> Self {
        Self {
            source,
            sink,
            recipient,
            config,
            shutdown,
        }
    }

    /// Run until the shutdown signal, or until a fetch fails under
    /// [`FetchFailurePolicy::Stop`].
    ///
    /// Each cycle sleeps for the full window first, then fetches.
    pub async fn run(&mut self) -> Result<()> {
        let window = self.config.window;

        info!(
            recipient = %self.recipient,
            repository = %self.source.repository(),
            window_secs = window.as_secs(),
            policy = %self.config.on_fetch_error,
            "starting issue notifier"
        );

        loop {
            if *self.shutdown.borrow() {
                break;
            }

            tokio::select! {
                _ = sleep(window) => {}
                changed = self.shutdown.changed() => {
                    // A dropped sender means nobody can stop us any more.
                    if changed.is_err() || *self.shutdown.borrow() {
                        break;
                    }
                    continue;
                }
            }

            match self.run_cycle().await {
                Ok(report) => {
                    debug!(
                        recipient = %self.recipient,
                        fetched = report.fetched,
                        matched = report.matched,
                        sent = report.sent,
                        failed = report.failed,
                        "poll cycle complete"
                    );
                }
                Err(e) => match self.config.on_fetch_error {
                    FetchFailurePolicy::Skip => {
                        warn!(
                            recipient = %self.recipient,
                            error = %e,
                            "fetch failed, skipping cycle"
                        );
                    }
                    FetchFailurePolicy::Stop => {
                        error!(
                            recipient = %self.recipient,
                            error = %e,
                            "fetch failed, stopping notifier"
                        );
                        return Err(e);
                    }
                },
            }
        }

        info!(recipient = %self.recipient, "issue notifier stopped");
        Ok(())
    }

    /// One fetch-filter-send pass, without the sleep.
    ///
    /// A failed fetch sends nothing.
    pub async fn run_cycle(&self) -> Result<CycleReport> {
        let issues = self.source.fetch_issues().await?;
        let now = Utc::now();

        let alerts: Vec<String> = new_open_issues(&issues, now, self.config.window)
            .map(new_issue_alert)
            .collect();
        let matched = alerts.len();

        let (sent, failed) = deliver_all(self.sink.as_ref(), self.recipient, alerts).await;

        Ok(CycleReport {
            fetched: issues.len(),
            matched,
            sent,
            failed,
        })
    }
}
