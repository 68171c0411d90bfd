//! A spawned notifier and the means to stop it.

use std::sync::Arc;

use issuewatch_github::IssueSource;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::NotifierConfig;
use crate::error::{Result, RuntimeError};
use crate::notifier::IssueNotifier;
use crate::sink::{MessageSink, Recipient};

/// Handle to a running [`IssueNotifier`] task.
///
/// Dropping the handle signals the task to stop.
pub struct NotifierHandle {
    recipient: Recipient,
    /// Shutdown signal sender.
    shutdown_tx: watch::Sender<bool>,
    task: JoinHandle<Result<()>>,
}

impl NotifierHandle {
    /// Spawn a notifier for `recipient` on the current tokio runtime.
    pub fn spawn(
        source: Arc<dyn IssueSource>,
        sink: Arc<dyn MessageSink>,
        recipient: Recipient,
        config: NotifierConfig,
    ) -> Self {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let task = tokio::spawn(async move {
            let mut notifier = IssueNotifier::new(source, sink, recipient, config, shutdown_rx);
            notifier.run().await
        });

        Self {
            recipient,
            shutdown_tx,
            task,
        }
    }

    pub fn recipient(&self) -> Recipient {
        self.recipient
    }

    /// Whether the task has ended (stopped, or died on a fetch failure).
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    /// Signal shutdown and wait for the task.
    ///
    /// Returns the task's own outcome, so a notifier that already stopped on
    /// a fetch failure reports that error here.
    pub async fn stop(mut self) -> Result<()> {
        debug!(recipient = %self.recipient, "stopping notifier");
        let _ = self.shutdown_tx.send(true);

        (&mut self.task)
            .await
            .map_err(|e| RuntimeError::Join(e.to_string()))?
    }
}

impl Drop for NotifierHandle {
    fn drop(&mut self) {
        let _ = self.shutdown_tx.send(true);
    }
}
