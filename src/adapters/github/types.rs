//! GitHub Search Wire Types
//!
//! Response structures for `GET /search/repositories`. Every item field is
//! optional on the wire; required ones are checked when converting to a
//! `RepositoryRecord`.

use serde::{Deserialize, Serialize};

use crate::domain::{RecordError, RepositoryRecord};

/// Response from the repository search API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub incomplete_results: Option<bool>,
    /// Missing `items` is treated as an empty page
    #[serde(default)]
    pub items: Vec<GithubRepository>,
}

/// One repository item as sent by GitHub
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GithubRepository {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: Option<u64>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl TryFrom<GithubRepository> for RepositoryRecord {
    type Error = RecordError;

    fn try_from(item: GithubRepository) -> Result<Self, Self::Error> {
        let name = item.name.ok_or(RecordError::MissingField("name"))?;
        let url = item.html_url.ok_or(RecordError::MissingField("html_url"))?;
        let stars = item
            .stargazers_count
            .ok_or(RecordError::MissingField("stargazers_count"))?;
        let created_at = item.created_at.ok_or(RecordError::MissingField("created_at"))?;

        RepositoryRecord::new(name, url, item.description, stars, item.language, created_at)
    }
}
