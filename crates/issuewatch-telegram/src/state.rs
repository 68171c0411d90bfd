//! Shared state for the Telegram bot.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::join_all;
use issuewatch_github::IssueSource;
use issuewatch_runtime::{
    list_open_issues, ListingReport, MessageSink, NotifierHandle, Recipient, RuntimeError,
};
use tokio::sync::RwLock;
use tracing::{error, info};

use crate::config::BotConfig;

/// Shared state for the Telegram bot, accessible across all handlers.
///
/// Holds at most one running notifier per chat.
pub struct BotState {
    config: BotConfig,
    source: Arc<dyn IssueSource>,
    sink: Arc<dyn MessageSink>,
    /// Running notifiers (chat -> handle).
    notifiers: RwLock<HashMap<Recipient, NotifierHandle>>,
}

impl BotState {
    /// Create a new BotState instance.
    pub fn new(
        config: BotConfig,
        source: Arc<dyn IssueSource>,
        sink: Arc<dyn MessageSink>,
    ) -> Self {
        Self {
            config,
            source,
            sink,
            notifiers: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Repository being watched, as `owner/repo`.
    pub fn repository(&self) -> String {
        self.source.repository()
    }

    /// Start polling for `recipient`, replacing any notifier it already has.
    ///
    /// Returns `true` if an existing notifier was replaced.
    pub async fn start_notifier(&self, recipient: Recipient) -> bool {
        let previous = self.notifiers.write().await.remove(&recipient);
        let replaced = previous.is_some();
        if let Some(old) = previous {
            finish(old).await;
        }

        let handle = NotifierHandle::spawn(
            Arc::clone(&self.source),
            Arc::clone(&self.sink),
            recipient,
            self.config.notifier.clone(),
        );

        // A concurrent /start for the same chat may have inserted meanwhile.
        let raced = self.notifiers.write().await.insert(recipient, handle);
        if let Some(other) = raced {
            finish(other).await;
        }

        info!(chat_id = %recipient, replaced, "Notifier started");
        replaced
    }

    /// Stop the notifier for `recipient`. Returns `false` if there was none.
    pub async fn stop_notifier(&self, recipient: Recipient) -> bool {
        let removed = self.notifiers.write().await.remove(&recipient);
        match removed {
            Some(handle) => {
                finish(handle).await;
                true
            }
            None => false,
        }
    }

    /// Whether `recipient` has a notifier that is still running.
    pub async fn is_polling(&self, recipient: Recipient) -> bool {
        self.prune_finished().await;
        self.notifiers.read().await.contains_key(&recipient)
    }

    /// Number of running notifiers.
    pub async fn active_notifiers(&self) -> usize {
        self.prune_finished().await;
        self.notifiers.read().await.len()
    }

    /// Send every open issue to `recipient` once.
    pub async fn list_issues(&self, recipient: Recipient) -> Result<ListingReport, RuntimeError> {
        list_open_issues(self.source.as_ref(), self.sink.as_ref(), recipient).await
    }

    /// Stop every notifier.
    pub async fn shutdown(&self) {
        let handles: Vec<NotifierHandle> = self
            .notifiers
            .write()
            .await
            .drain()
            .map(|(_, handle)| handle)
            .collect();

        if handles.is_empty() {
            return;
        }

        info!(count = handles.len(), "Stopping all notifiers");
        join_all(handles.into_iter().map(finish)).await;
    }

    /// Drop notifiers whose task already ended (fail-stop policy).
    async fn prune_finished(&self) {
        let finished: Vec<NotifierHandle> = {
            let mut notifiers = self.notifiers.write().await;
            let done: Vec<Recipient> = notifiers
                .iter()
                .filter(|(_, handle)| handle.is_finished())
                .map(|(recipient, _)| *recipient)
                .collect();
            done.iter().filter_map(|r| notifiers.remove(r)).collect()
        };

        for handle in finished {
            finish(handle).await;
        }
    }
}

/// Stop a notifier and log how it ended.
async fn finish(handle: NotifierHandle) {
    let recipient = handle.recipient();
    match handle.stop().await {
        Ok(()) => info!(chat_id = %recipient, "Notifier stopped"),
        Err(e) => error!(chat_id = %recipient, error = %e, "Notifier ended with error"),
    }
}

/// Create a shared BotState wrapped in Arc.
pub fn create_shared_state(
    config: BotConfig,
    source: Arc<dyn IssueSource>,
    sink: Arc<dyn MessageSink>,
) -> Arc<BotState> {
    Arc::new(BotState::new(config, source, sink))
}
