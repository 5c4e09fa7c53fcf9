//! GitHub Adapter
//!
//! Implementation of the RepositorySearchPort for the GitHub search API.

mod client;
pub mod types;

pub use client::{GithubClient, GithubConfig, GITHUB_SEARCH_API};
pub use types::{GithubRepository, SearchResponse};
