//! Adapters Layer - External System Implementations
//!
//! - GitHub: repository search API client
//! - Samples: static yield/arbitrage records (not live data)
//! - CLI: command-line interface handlers

pub mod github;
pub mod samples;
pub mod cli;

pub use github::{GithubClient, GithubConfig};
pub use samples::{SampleOpportunityGenerator, SamplesConfig};
pub use cli::CliApp;
