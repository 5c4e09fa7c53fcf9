//! Strategy Parameters
//!
//! Weights for the potential scorer and settings for signal generation.
//! Defaults reproduce the original DeFi gem heuristic exactly.

use serde::{Deserialize, Serialize};

/// Potential scorer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringParams {
    /// Repositories younger than this many whole days get the recency bonus
    pub recency_window_days: i64,
    /// Points for being recent
    pub recency_bonus: u32,
    /// Points per star before the cap
    pub points_per_star: u32,
    /// Cap on the popularity contribution
    pub max_star_points: u32,
    /// Points per keyword found in the description
    pub keyword_bonus: u32,
    /// Lower-case keywords matched as substrings of the description
    pub keywords: Vec<String>,
    /// Primary language that earns the language bonus (case-sensitive)
    pub bonus_language: String,
    /// Points for the bonus language
    pub language_bonus: u32,
    /// Projects scoring strictly above this become gems
    pub gem_threshold: u32,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            recency_window_days: 30,
            recency_bonus: 25,
            points_per_star: 2,
            max_star_points: 30,
            keyword_bonus: 10,
            keywords: ["yield", "farming", "staking", "liquidity", "rewards", "apy"]
                .into_iter()
                .map(String::from)
                .collect(),
            bonus_language: "Solidity".to_string(),
            language_bonus: 15,
            gem_threshold: 80,
        }
    }
}

impl ScoringParams {
    /// Create params with a custom gem threshold
    pub fn with_gem_threshold(mut self, threshold: u32) -> Self {
        self.gem_threshold = threshold;
        self
    }

    /// Create params with a custom keyword list
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.recency_window_days < 0 {
            return Err(ParamsError::InvalidRecencyWindow(self.recency_window_days));
        }
        if self.gem_threshold > 100 {
            return Err(ParamsError::InvalidGemThreshold(self.gem_threshold));
        }
        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(ParamsError::EmptyKeyword);
        }
        if let Some(keyword) = self.keywords.iter().find(|k| k.to_lowercase() != **k) {
            return Err(ParamsError::KeywordNotLowercase(keyword.clone()));
        }
        Ok(())
    }
}

/// Signal generator configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalParams {
    /// Holding period attached to every buy signal
    pub timeframe: String,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            timeframe: "1-4 weeks".to_string(),
        }
    }
}

/// Parameter validation errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamsError {
    #[error("Invalid recency window: {0} days (must be >= 0)")]
    InvalidRecencyWindow(i64),
    #[error("Invalid gem threshold: {0} (must be 0-100)")]
    InvalidGemThreshold(u32),
    #[error("Keywords cannot be empty strings")]
    EmptyKeyword,
    #[error("Keyword '{0}' must be lower-case (descriptions are lower-cased before matching)")]
    KeywordNotLowercase(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = ScoringParams::default();
        assert_eq!(params.recency_window_days, 30);
        assert_eq!(params.recency_bonus, 25);
        assert_eq!(params.max_star_points, 30);
        assert_eq!(params.keywords.len(), 6);
        assert_eq!(params.bonus_language, "Solidity");
        assert_eq!(params.gem_threshold, 80);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_params_builder() {
        let params = ScoringParams::default()
            .with_gem_threshold(50)
            .with_keywords(["vault", "lending"]);
        assert_eq!(params.gem_threshold, 50);
        assert_eq!(params.keywords, vec!["vault".to_string(), "lending".to_string()]);
    }

    #[test]
    fn test_invalid_gem_threshold() {
        let params = ScoringParams::default().with_gem_threshold(101);
        assert_eq!(params.validate(), Err(ParamsError::InvalidGemThreshold(101)));
    }

    #[test]
    fn test_invalid_keywords() {
        let params = ScoringParams::default().with_keywords(["yield", " "]);
        assert_eq!(params.validate(), Err(ParamsError::EmptyKeyword));

        let params = ScoringParams::default().with_keywords(["APY"]);
        assert_eq!(
            params.validate(),
            Err(ParamsError::KeywordNotLowercase("APY".to_string()))
        );
    }

    #[test]
    fn test_signal_params_default() {
        assert_eq!(SignalParams::default().timeframe, "1-4 weeks");
    }
}
