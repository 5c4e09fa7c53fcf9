pub mod scanner;
pub mod packager;

pub use scanner::{
    OpportunityScanner, ScanReport, ScanDiagnostics, QueryFailure, SkippedProject,
};
pub use packager::Packager;
