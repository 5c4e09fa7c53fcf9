use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{RecordError, RepositoryRecord};

/// Transport-level search failures
///
/// All of these are recoverable per query: the scanner logs them and moves
/// on with an empty result for that query.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SearchError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Request timed out after {0} s")]
    Timeout(u64),
    #[error("Search API returned status {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Failed to decode search response: {0}")]
    Decode(String),
}

/// A search item that could not become a `RepositoryRecord`
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedItem {
    /// Best available identifier (full name, name, or a placeholder)
    pub label: String,
    pub error: RecordError,
}

/// One search item in API order: a valid record or a rejection
#[derive(Debug, Clone, PartialEq)]
pub enum SearchItem {
    Record(RepositoryRecord),
    Rejected(RejectedItem),
}

/// Items returned by one query, in API order
///
/// Rejected items keep their position so a per-query limit applies to what
/// the API actually ranked first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchResults {
    pub items: Vec<SearchItem>,
}

impl SearchResults {
    /// Results made only of valid records
    pub fn new(records: Vec<RepositoryRecord>) -> Self {
        Self {
            items: records.into_iter().map(SearchItem::Record).collect(),
        }
    }

    pub fn from_items(items: Vec<SearchItem>) -> Self {
        Self { items }
    }

    /// Keep the first `limit` items, valid or not
    pub fn truncated(mut self, limit: usize) -> Self {
        self.items.truncate(limit);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn rejected_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| matches!(item, SearchItem::Rejected(_)))
            .count()
    }

    /// Split into valid records and rejections, both in API order
    pub fn partition(self) -> (Vec<RepositoryRecord>, Vec<RejectedItem>) {
        let mut records = Vec::new();
        let mut rejected = Vec::new();
        for item in self.items {
            match item {
                SearchItem::Record(record) => records.push(record),
                SearchItem::Rejected(item) => rejected.push(item),
            }
        }
        (records, rejected)
    }
}

/// Repository search port
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RepositorySearchPort: Send + Sync {
    /// Run one search query (keyword plus endpoint filter syntax)
    async fn search(&self, query: &str) -> Result<SearchResults, SearchError>;
}
