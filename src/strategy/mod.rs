//! Strategy Layer - Scoring and signal generation
//!
//! - `PotentialScorer`: heuristic 0-100 score for discovered repositories
//! - `SignalGenerator`: BUY signals for gem opportunities

pub mod params;
pub mod potential_scorer;
pub mod signal_generator;

pub use params::{ScoringParams, SignalParams, ParamsError};
pub use potential_scorer::{PotentialScorer, ScoreBreakdown, ScoreError, MAX_SCORE};
pub use signal_generator::SignalGenerator;
