//! GitHub Search Client
//!
//! HTTP client for the GitHub repository search API.
//! One GET per query, no retries: failures come back as `SearchError`.

use std::fmt;
use std::time::Duration;
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};

use crate::domain::RepositoryRecord;
use crate::ports::repository_search::{
    RejectedItem, RepositorySearchPort, SearchError, SearchItem, SearchResults,
};
use super::types::SearchResponse;

/// Default repository search endpoint
pub const GITHUB_SEARCH_API: &str = "https://api.github.com/search/repositories";

/// Longest error body kept in `SearchError::Status`
const MAX_ERROR_BODY_CHARS: usize = 200;

/// GitHub client configuration
#[derive(Clone)]
pub struct GithubConfig {
    /// Full search endpoint URL
    pub api_url: String,
    /// Personal access token, sent as `Authorization: token <value>`
    pub token: String,
    /// Request timeout
    pub timeout: Duration,
    /// GitHub rejects requests without a User-Agent
    pub user_agent: String,
}

impl GithubConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            api_url: GITHUB_SEARCH_API.to_string(),
            token: token.into(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("defi-scout/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

// Keeps the token out of logs
impl fmt::Debug for GithubConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GithubConfig")
            .field("api_url", &self.api_url)
            .field("token", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

/// GitHub repository search client
#[derive(Debug, Clone)]
pub struct GithubClient {
    config: GithubConfig,
    http: Client,
}

impl GithubClient {
    /// Create a new client; the token is passed in, never read from globals
    pub fn new(config: GithubConfig) -> Result<Self, SearchError> {
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| SearchError::Http(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Search repositories with a single `q` parameter
    pub async fn search_repositories(&self, query: &str) -> Result<SearchResults, SearchError> {
        tracing::debug!("GET {} q={:?}", self.config.api_url, query);

        let response = self
            .http
            .get(&self.config.api_url)
            .query(&[("q", query)])
            .header(header::AUTHORIZATION, format!("token {}", self.config.token))
            .header(header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                message: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let page: SearchResponse = response.json().await.map_err(|e| {
            if e.is_timeout() {
                SearchError::Timeout(self.config.timeout.as_secs())
            } else {
                SearchError::Decode(e.to_string())
            }
        })?;

        Ok(Self::collect_items(page))
    }

    /// Convert a page into search items, keeping rejected ones in place
    fn collect_items(page: SearchResponse) -> SearchResults {
        let items = page
            .items
            .into_iter()
            .map(|item| {
                let label = item
                    .full_name
                    .clone()
                    .or_else(|| item.name.clone())
                    .unwrap_or_else(|| "<unnamed>".to_string());
                match RepositoryRecord::try_from(item) {
                    Ok(record) => SearchItem::Record(record),
                    Err(error) => {
                        tracing::debug!("Search item {} is incomplete: {}", label, error);
                        SearchItem::Rejected(RejectedItem { label, error })
                    }
                }
            })
            .collect();

        SearchResults::from_items(items)
    }

    fn transport_error(&self, e: reqwest::Error) -> SearchError {
        if e.is_timeout() {
            SearchError::Timeout(self.config.timeout.as_secs())
        } else {
            SearchError::Http(e.to_string())
        }
    }
}

#[async_trait]
impl RepositorySearchPort for GithubClient {
    async fn search(&self, query: &str) -> Result<SearchResults, SearchError> {
        self.search_repositories(query).await
    }
}
