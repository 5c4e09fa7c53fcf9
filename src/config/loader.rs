//! Configuration Loader
//!
//! Loads and validates configuration from TOML files. Every section is
//! optional; the built-in defaults reproduce the original scanner exactly.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::adapters::github::{GithubConfig, GITHUB_SEARCH_API};
use crate::adapters::samples::SamplesConfig;
use crate::domain::PackageTemplate;
use crate::strategy::{ParamsError, ScoringParams, SignalParams};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchSection,
    pub scoring: ScoringParams,
    pub signals: SignalParams,
    pub samples: SamplesConfig,
    pub package: PackageTemplate,
    pub logging: LoggingSection,
}

/// Repository search configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Full search endpoint URL
    pub api_url: String,
    /// Environment variable holding the access token
    pub token_env: String,
    /// Queries run in order, one request each
    pub queries: Vec<String>,
    /// Results kept per query
    pub per_query_limit: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Override for the User-Agent header
    pub user_agent: Option<String>,
}

impl Default for SearchSection {
    fn default() -> Self {
        Self {
            api_url: GITHUB_SEARCH_API.to_string(),
            token_env: "GITHUB_TOKEN".to_string(),
            queries: vec![
                "defi protocol created:>2024-01-01 language:Solidity".to_string(),
                "yield farming created:>2024-01-01 stars:>5".to_string(),
                "dex amm created:>2024-01-01".to_string(),
                "liquidity pool created:>2024-01-01".to_string(),
            ],
            per_query_limit: 5,
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

impl SearchSection {
    /// Read the access token from the configured environment variable
    ///
    /// Missing or blank tokens fail here, before any request is made.
    pub fn resolve_token(&self) -> Result<String, ConfigError> {
        match std::env::var(&self.token_env) {
            Ok(token) if !token.trim().is_empty() => Ok(token.trim().to_string()),
            _ => Err(ConfigError::MissingCredential(self.token_env.clone())),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the GitHub client configuration with an already resolved token
    pub fn github_config(&self, token: String) -> GithubConfig {
        let mut config = GithubConfig::new(token)
            .with_api_url(self.api_url.clone())
            .with_timeout(self.timeout());
        if let Some(ref agent) = self.user_agent {
            config.user_agent = agent.clone();
        }
        config
    }
}

/// Levels accepted by `[logging] level`
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Logging configuration section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "trace", "debug", "info", "warn", "error"
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to render TOML: {0}")]
    RenderError(#[from] toml::ser::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Invalid scoring parameters: {0}")]
    InvalidParams(#[from] ParamsError),
    #[error("Missing credential: set the {0} environment variable to a GitHub access token")]
    MissingCredential(String),
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Load from a file when given (with `~` expansion), otherwise use defaults
pub fn load_config_or_default(path: Option<&Path>) -> Result<Config, ConfigError> {
    match path {
        Some(path) => {
            let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref());
            tracing::debug!("Loading configuration from {}", expanded.display());
            load_config(expanded)
        }
        None => {
            let config = Config::default();
            config.validate()?;
            Ok(config)
        }
    }
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.api_url.is_empty() {
            return Err(ConfigError::ValidationError(
                "api_url cannot be empty".to_string(),
            ));
        }

        if self.search.token_env.is_empty() {
            return Err(ConfigError::ValidationError(
                "token_env cannot be empty".to_string(),
            ));
        }

        if self.search.queries.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one search query is required".to_string(),
            ));
        }

        if self.search.queries.iter().any(|q| q.trim().is_empty()) {
            return Err(ConfigError::ValidationError(
                "search queries cannot be empty".to_string(),
            ));
        }

        if self.search.per_query_limit == 0 {
            return Err(ConfigError::ValidationError(format!(
                "per_query_limit must be > 0, got {}",
                self.search.per_query_limit
            )));
        }

        if self.search.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(format!(
                "timeout_secs must be > 0, got {}",
                self.search.timeout_secs
            )));
        }

        let level = self.logging.level.trim().to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level must be one of {}, got {:?}",
                LOG_LEVELS.join(", "),
                self.logging.level
            )));
        }

        self.scoring.validate()?;

        Ok(())
    }

    /// Render the configuration as TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
