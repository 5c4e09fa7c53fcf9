//! Potential Scorer
//!
//! Heuristic 0-100 score for a freshly discovered repository. Four additive
//! terms, clamped at 100:
//! - recency: bonus when the repository is younger than the recency window
//! - popularity: points per star, capped
//! - keywords: bonus per configured keyword found in the lower-cased description
//! - language: bonus when the primary language matches exactly
//!
//! The caller supplies "now" so the score is deterministic.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{RepositoryRecord, ScoredProject};
use super::params::ScoringParams;

/// Upper bound of every score
pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    #[error("Invalid creation timestamp '{value}' for {repository}: {reason}")]
    InvalidTimestamp {
        repository: String,
        value: String,
        reason: String,
    },
}

/// Per-term contributions, useful for logging and the search command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreBreakdown {
    pub recency: u32,
    pub popularity: u32,
    pub keywords: u32,
    pub language: u32,
}

impl ScoreBreakdown {
    /// Sum of all terms before clamping
    pub fn raw(&self) -> u32 {
        self.recency
            .saturating_add(self.popularity)
            .saturating_add(self.keywords)
            .saturating_add(self.language)
    }

    /// Final score, clamped to [0, 100]
    pub fn total(&self) -> u32 {
        self.raw().min(MAX_SCORE)
    }
}

#[derive(Debug, Clone)]
pub struct PotentialScorer {
    params: ScoringParams,
}

impl Default for PotentialScorer {
    fn default() -> Self {
        Self::new(ScoringParams::default())
    }
}

impl PotentialScorer {
    pub fn new(params: ScoringParams) -> Self {
        Self { params }
    }

    /// Score a repository at the given instant
    pub fn score(&self, record: &RepositoryRecord, now: DateTime<Utc>) -> Result<u32, ScoreError> {
        self.breakdown(record, now).map(|b| b.total())
    }

    /// Score and pair with the record
    pub fn score_project(
        &self,
        record: RepositoryRecord,
        now: DateTime<Utc>,
    ) -> Result<ScoredProject, ScoreError> {
        let score = self.score(&record, now)?;
        Ok(ScoredProject::new(record, score))
    }

    /// Compute each term separately
    pub fn breakdown(
        &self,
        record: &RepositoryRecord,
        now: DateTime<Utc>,
    ) -> Result<ScoreBreakdown, ScoreError> {
        let breakdown = ScoreBreakdown {
            recency: self.recency_points(record, now)?,
            popularity: self.popularity_points(record.stars),
            keywords: self.keyword_points(record.description_or_empty()),
            language: self.language_points(record.language.as_deref()),
        };

        tracing::debug!(
            "Scored {}: recency={} popularity={} keywords={} language={} -> {}",
            record.name,
            breakdown.recency,
            breakdown.popularity,
            breakdown.keywords,
            breakdown.language,
            breakdown.total()
        );

        Ok(breakdown)
    }

    /// Whether a score qualifies as a gem (strictly above the threshold)
    pub fn is_gem(&self, score: u32) -> bool {
        score > self.params.gem_threshold
    }

    fn recency_points(&self, record: &RepositoryRecord, now: DateTime<Utc>) -> Result<u32, ScoreError> {
        let created = DateTime::parse_from_rfc3339(&record.created_at).map_err(|e| {
            ScoreError::InvalidTimestamp {
                repository: record.name.clone(),
                value: record.created_at.clone(),
                reason: e.to_string(),
            }
        })?;

        // Age is measured in the creation timestamp's own offset
        let age_days = now
            .with_timezone(created.offset())
            .signed_duration_since(created)
            .num_days();

        if age_days < self.params.recency_window_days {
            Ok(self.params.recency_bonus)
        } else {
            Ok(0)
        }
    }

    fn popularity_points(&self, stars: u64) -> u32 {
        let points = stars.saturating_mul(u64::from(self.params.points_per_star));
        points.min(u64::from(self.params.max_star_points)) as u32
    }

    fn keyword_points(&self, description: &str) -> u32 {
        let desc = description.to_lowercase();
        let hits = self
            .params
            .keywords
            .iter()
            .filter(|kw| desc.contains(kw.as_str()))
            .count() as u32;
        hits.saturating_mul(self.params.keyword_bonus)
    }

    fn language_points(&self, language: Option<&str>) -> u32 {
        match language {
            Some(lang) if lang == self.params.bonus_language => self.params.language_bonus,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 19, 12, 0, 0).unwrap()
    }

    fn repo(
        description: Option<&str>,
        stars: u64,
        language: Option<&str>,
        created_at: String,
    ) -> RepositoryRecord {
        RepositoryRecord::new(
            "test-repo".to_string(),
            "https://github.com/test/test-repo".to_string(),
            description.map(String::from),
            stars,
            language.map(String::from),
            created_at,
        )
        .unwrap()
    }

    fn days_ago(days: i64) -> String {
        (now() - Duration::days(days)).to_rfc3339_opts(chrono::SecondsFormat::Secs, true)
    }

    #[test]
    fn test_hot_solidity_project_clamps_to_100() {
        let scorer = PotentialScorer::default();
        let record = repo(
            Some("New yield farming protocol with high APY staking rewards"),
            50,
            Some("Solidity"),
            days_ago(0),
        );

        let breakdown = scorer.breakdown(&record, now()).unwrap();
        assert_eq!(breakdown.recency, 25);
        assert_eq!(breakdown.popularity, 30);
        assert_eq!(breakdown.keywords, 50);
        assert_eq!(breakdown.language, 15);
        assert_eq!(breakdown.raw(), 120);
        assert_eq!(scorer.score(&record, now()).unwrap(), 100);
    }

    #[test]
    fn test_old_empty_rust_project_scores_zero() {
        let scorer = PotentialScorer::default();
        let record = repo(None, 0, Some("Rust"), days_ago(730));
        assert_eq!(scorer.score(&record, now()).unwrap(), 0);
    }

    #[test]
    fn test_recency_boundary() {
        let scorer = PotentialScorer::default();
        let young = repo(None, 0, None, days_ago(29));
        let old = repo(None, 0, None, days_ago(30));
        assert_eq!(scorer.score(&young, now()).unwrap(), 25);
        assert_eq!(scorer.score(&old, now()).unwrap(), 0);
    }

    #[test]
    fn test_recency_uses_creation_offset() {
        let scorer = PotentialScorer::default();
        let record = repo(None, 0, None, "2026-10-01T09:00:00+02:00".to_string());
        assert_eq!(scorer.score(&record, now()).unwrap(), 25);
    }

    #[test]
    fn test_popularity_cap() {
        let scorer = PotentialScorer::default();
        assert_eq!(scorer.popularity_points(0), 0);
        assert_eq!(scorer.popularity_points(7), 14);
        assert_eq!(scorer.popularity_points(15), 30);
        assert_eq!(scorer.popularity_points(u64::MAX), 30);
    }

    #[test]
    fn test_keywords_are_case_insensitive_substrings() {
        let scorer = PotentialScorer::default();
        assert_eq!(scorer.keyword_points("LIQUIDITY mining"), 10);
        // "farming" and "yield" both hit once, repeats do not add
        assert_eq!(scorer.keyword_points("yield yield farming"), 20);
        assert_eq!(scorer.keyword_points("stakingrewards"), 20);
        assert_eq!(scorer.keyword_points(""), 0);
    }

    #[test]
    fn test_language_is_case_sensitive() {
        let scorer = PotentialScorer::default();
        assert_eq!(scorer.language_points(Some("Solidity")), 15);
        assert_eq!(scorer.language_points(Some("solidity")), 0);
        assert_eq!(scorer.language_points(None), 0);
    }

    #[test]
    fn test_invalid_timestamp_is_typed_error() {
        let scorer = PotentialScorer::default();
        let record = repo(Some("yield"), 5, None, "last tuesday".to_string());
        let err = scorer.score(&record, now()).unwrap_err();
        match err {
            ScoreError::InvalidTimestamp { repository, value, .. } => {
                assert_eq!(repository, "test-repo");
                assert_eq!(value, "last tuesday");
            }
        }
    }

    #[test]
    fn test_score_is_bounded_and_deterministic() {
        let scorer = PotentialScorer::default();
        let descriptions = [None, Some("yield"), Some("yield farming staking liquidity rewards apy")];
        let languages = [None, Some("Solidity"), Some("Rust")];

        for desc in descriptions {
            for lang in languages {
                for stars in [0u64, 1, 14, 15, 1_000] {
                    for age in [0i64, 29, 30, 365] {
                        let record = repo(desc, stars, lang, days_ago(age));
                        let first = scorer.score(&record, now()).unwrap();
                        let second = scorer.score(&record, now()).unwrap();
                        assert!(first <= MAX_SCORE);
                        assert_eq!(first, second);
                    }
                }
            }
        }
    }

    #[test]
    fn test_is_gem_strictly_above_threshold() {
        let scorer = PotentialScorer::default();
        assert!(!scorer.is_gem(80));
        assert!(scorer.is_gem(81));
    }

    #[test]
    fn test_custom_params() {
        let params = ScoringParams {
            bonus_language: "Rust".to_string(),
            ..ScoringParams::default()
        }
        .with_keywords(["vault"]);
        let scorer = PotentialScorer::new(params);
        let record = repo(Some("A Vault for yield"), 0, Some("Rust"), days_ago(400));
        assert_eq!(scorer.score(&record, now()).unwrap(), 25);
    }
}
