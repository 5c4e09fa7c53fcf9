use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A repository returned by the code-hosting search API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    pub url: String,
    pub description: Option<String>,
    pub stars: u64,
    pub language: Option<String>,
    /// Creation timestamp exactly as the API sent it (ISO-8601)
    pub created_at: String,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RecordError {
    #[error("Missing required field '{0}'")]
    MissingField(&'static str),
    #[error("Field '{field}' is empty")]
    EmptyField { field: &'static str },
}

impl RepositoryRecord {
    /// Build a record, rejecting blank identifying fields
    pub fn new(
        name: String,
        url: String,
        description: Option<String>,
        stars: u64,
        language: Option<String>,
        created_at: String,
    ) -> Result<Self, RecordError> {
        if name.trim().is_empty() {
            return Err(RecordError::EmptyField { field: "name" });
        }
        if url.trim().is_empty() {
            return Err(RecordError::EmptyField { field: "html_url" });
        }
        if created_at.trim().is_empty() {
            return Err(RecordError::EmptyField { field: "created_at" });
        }

        Ok(Self {
            name,
            url,
            description,
            stars,
            language,
            created_at,
        })
    }

    /// Description text, empty when the repository has none
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// A repository paired with its potential score (0-100)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProject {
    pub project: RepositoryRecord,
    pub score: u32,
}

impl ScoredProject {
    pub fn new(project: RepositoryRecord, score: u32) -> Self {
        Self { project, score }
    }

    pub fn name(&self) -> &str {
        &self.project.name
    }
}
