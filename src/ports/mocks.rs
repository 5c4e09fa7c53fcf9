use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use async_trait::async_trait;

use crate::domain::RepositoryRecord;
use super::repository_search::{RepositorySearchPort, SearchError, SearchResults};

/// In-memory search adapter that records calls and serves canned responses
///
/// Unknown queries answer with an empty result.
#[derive(Debug, Default, Clone)]
pub struct MockRepositorySearch {
    calls: Arc<Mutex<Vec<String>>>,
    responses: Arc<Mutex<HashMap<String, Result<SearchResults, SearchError>>>>,
}

impl MockRepositorySearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the records for a query
    pub fn with_records(self, query: &str, records: Vec<RepositoryRecord>) -> Self {
        self.insert(query, Ok(SearchResults::new(records)));
        self
    }

    /// Builder method to set a full result (records and rejections in order)
    pub fn with_results(self, query: &str, results: SearchResults) -> Self {
        self.insert(query, Ok(results));
        self
    }

    /// Builder method to make a query fail
    pub fn with_error(self, query: &str, error: SearchError) -> Self {
        self.insert(query, Err(error));
        self
    }

    /// Get all recorded calls
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn insert(&self, query: &str, response: Result<SearchResults, SearchError>) {
        self.responses.lock().unwrap().insert(query.to_string(), response);
    }
}

#[async_trait]
impl RepositorySearchPort for MockRepositorySearch {
    async fn search(&self, query: &str) -> Result<SearchResults, SearchError> {
        self.calls.lock().unwrap().push(query.to_string());
        self.responses
            .lock()
            .unwrap()
            .get(query)
            .cloned()
            .unwrap_or_else(|| Ok(SearchResults::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> RepositoryRecord {
        RepositoryRecord::new(
            name.to_string(),
            format!("https://github.com/mock/{}", name),
            None,
            1,
            None,
            "2026-01-01T00:00:00Z".to_string(),
        )
        .unwrap()
    }

    #[test]
    fn test_mock_search() {
        let mock = MockRepositorySearch::new()
            .with_records("defi", vec![record("a"), record("b")])
            .with_error("broken", SearchError::Timeout(5));

        let hits = tokio_test::block_on(mock.search("defi")).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits.rejected_count(), 0);

        let err = tokio_test::block_on(mock.search("broken")).unwrap_err();
        assert_eq!(err, SearchError::Timeout(5));

        let none = tokio_test::block_on(mock.search("unknown")).unwrap();
        assert!(none.is_empty());

        assert_eq!(mock.get_calls(), vec!["defi", "broken", "unknown"]);
    }
}
