//! Domain Layer - Core types for the DeFi Scout scanner
//!
//! Pure data with no I/O. Everything here is built once per scan and
//! discarded after the package is printed.

pub mod repository;
pub mod opportunity;
pub mod signal;
pub mod package;

pub use repository::{RepositoryRecord, ScoredProject, RecordError};
pub use opportunity::{Opportunity, OpportunityKind};
pub use signal::{Signal, SignalAction};
pub use package::{IntelligencePackage, PackageTemplate};
