//! Ports Layer - Trait definitions for external dependencies
//!
//! Following hexagonal architecture, the scanner only talks to the
//! repository search API through `RepositorySearchPort`.

pub mod repository_search;
pub mod mocks;

pub use repository_search::{
    RejectedItem, RepositorySearchPort, SearchError, SearchItem, SearchResults,
};
pub use mocks::MockRepositorySearch;
