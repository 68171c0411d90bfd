//! reqwest-backed client for the GitHub issue-list endpoint.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace};

use crate::error::{FetchError, Result};
use crate::issue::Issue;
use crate::source::IssueSource;

/// Public GitHub REST API.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Media type for the v3 REST API.
const ACCEPT_V3: &str = "application/vnd.github.v3+json";

/// GitHub rejects requests without a User-Agent.
const USER_AGENT: &str = concat!("issuewatch/", env!("CARGO_PKG_VERSION"));

/// Default bound on a single issue-list request.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Which repository to read and how to authenticate.
#[derive(Clone)]
pub struct GithubConfig {
    /// API base URL, without a trailing slash.
    pub api_url: String,
    /// Repository owner (user or organisation).
    pub owner: String,
    /// Repository name.
    pub repo: String,
    /// Personal access token sent as `Authorization: token <..>`.
    pub token: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GithubConfig {
    /// Creates a config for `owner/repo` against the public API.
    pub fn new(
        owner: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            owner: owner.into(),
            repo: repo.into(),
            token: token.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sets the API base URL (GitHub Enterprise, or a local test server).
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// `owner/repo`.
    pub fn repository(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// Full URL of the issue-list endpoint.
    pub fn issues_url(&self) -> String {
        format!("{}/repos/{}/{}/issues", self.api_url, self.owner, self.repo)
    }
}

// The token stays out of logs.
impl fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubConfig")
            .field("api_url", &self.api_url)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Client for one repository's issue list.
#[derive(Clone, Debug)]
pub struct GithubClient {
    client: reqwest::Client,
    config: GithubConfig,
}

impl GithubClient {
    /// Create a client for the configured repository.
    pub fn new(config: GithubConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Fetch the first page of issues, in tracker order.
    pub async fn fetch(&self) -> Result<Vec<Issue>> {
        let url = self.config.issues_url();
        trace!(url = %url, "requesting issue list");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("token {}", self.config.token))
            .header("Accept", ACCEPT_V3)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let text = response.text().await?;
        let issues: Vec<Issue> = serde_json::from_str(&text)?;

        debug!(
            repository = %self.config.repository(),
            count = issues.len(),
            "fetched issue list"
        );

        Ok(issues)
    }
}

#[async_trait]
impl IssueSource for GithubClient {
    async fn fetch_issues(&self) -> Result<Vec<Issue>> {
        self.fetch().await
    }

    fn repository(&self) -> String {
        self.config.repository()
    }
}
