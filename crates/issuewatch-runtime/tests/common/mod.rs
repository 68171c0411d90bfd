//! In-memory fakes shared by the runtime integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use issuewatch_github::{FetchError, Issue, IssueSource, IssueState};
use issuewatch_runtime::{MessageSink, Recipient, SendError};

/// An issue described relative to the moment it is fetched.
#[derive(Debug, Clone)]
pub struct IssueSpec {
    pub title: &'static str,
    pub state: IssueState,
    pub age: chrono::Duration,
}

pub fn open(title: &'static str, age: chrono::Duration) -> IssueSpec {
    IssueSpec {
        title,
        state: IssueState::Open,
        age,
    }
}

pub fn closed(title: &'static str, age: chrono::Duration) -> IssueSpec {
    IssueSpec {
        title,
        state: IssueState::Closed,
        age,
    }
}

/// One scripted answer from the fake tracker.
#[derive(Debug, Clone)]
pub enum Reply {
    Issues(Vec<IssueSpec>),
    Status(u16),
}

/// Replays scripted replies, then repeats `fallback` forever.
pub struct FakeSource {
    script: Mutex<VecDeque<Reply>>,
    fallback: Reply,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(script: Vec<Reply>, fallback: Reply) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn always(reply: Reply) -> Self {
        Self::new(Vec::new(), reply)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IssueSource for FakeSource {
    async fn fetch_issues(&self) -> Result<Vec<Issue>, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.clone());

        match reply {
            Reply::Status(status) => Err(FetchError::Status {
                status,
                body: "scripted failure".to_string(),
            }),
            Reply::Issues(specs) => {
                let now = Utc::now();
                Ok(specs
                    .into_iter()
                    .enumerate()
                    .map(|(n, spec)| Issue {
                        created_at: now - spec.age,
                        url: format!("https://api.github.com/repos/octo/hello/issues/{}", n + 1),
                        html_url: None,
                        title: spec.title.to_string(),
                        state: spec.state,
                        body: Some(format!("{} body", spec.title)),
                    })
                    .collect())
            }
        }
    }

    fn repository(&self) -> String {
        "octo/hello".to_string()
    }
}

/// Records delivered messages; can be told to reject some.
#[derive(Default)]
pub struct RecordingSink {
    delivered: Mutex<Vec<(Recipient, String)>>,
    attempts: AtomicUsize,
    reject_recipient: Option<Recipient>,
    reject_containing: Option<&'static str>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rejecting_recipient(recipient: Recipient) -> Self {
        Self {
            reject_recipient: Some(recipient),
            ..Self::default()
        }
    }

    pub fn rejecting_text(needle: &'static str) -> Self {
        Self {
            reject_containing: Some(needle),
            ..Self::default()
        }
    }

    pub fn messages_for(&self, recipient: Recipient) -> Vec<String> {
        self.delivered
            .lock()
            .unwrap()
            .iter()
            .filter(|(r, _)| *r == recipient)
            .map(|(_, text)| text.clone())
            .collect()
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MessageSink for RecordingSink {
    async fn send_text(&self, recipient: Recipient, text: &str) -> Result<(), SendError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);

        if self.reject_recipient == Some(recipient) {
            return Err(SendError::new(recipient, "chat not found"));
        }
        if let Some(needle) = self.reject_containing {
            if text.contains(needle) {
                return Err(SendError::new(recipient, "message rejected"));
            }
        }

        self.delivered
            .lock()
            .unwrap()
            .push((recipient, text.to_string()));
        Ok(())
    }
}
