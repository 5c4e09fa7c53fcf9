//! DeFi Scout - GitHub DeFi Opportunity Scanner Library
//!
//! Searches GitHub for freshly created DeFi repositories, scores their
//! potential and packages the results with buy signals.
//!
//! # Modules
//!
//! - `domain`: Core types (RepositoryRecord, Opportunity, Signal, IntelligencePackage)
//! - `ports`: Trait abstractions (RepositorySearchPort)
//! - `strategy`: Potential scoring and signal generation
//! - `adapters`: External implementations (GitHub, sample data, CLI)
//! - `config`: Configuration loading and validation
//! - `application`: Opportunity scanner and packager

pub mod domain;
pub mod ports;
pub mod strategy;
pub mod adapters;
pub mod config;
pub mod application;
