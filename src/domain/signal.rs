use serde::{Deserialize, Serialize};
use std::fmt;

/// Action carried by a signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    Buy,
}

impl fmt::Display for SignalAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalAction::Buy => write!(f, "BUY"),
        }
    }
}

/// Trading signal derived from a scored opportunity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Signal {
    #[serde(rename = "signal")]
    pub action: SignalAction,
    pub asset: String,
    /// Source score, 0-100
    pub confidence: u32,
    pub target: String,
    pub timeframe: String,
}

impl Signal {
    /// Creates a buy signal; the target is twice the confidence as a gain percentage
    pub fn buy(asset: impl Into<String>, confidence: u32, timeframe: impl Into<String>) -> Self {
        Self {
            action: SignalAction::Buy,
            asset: asset.into(),
            confidence,
            target: Self::target_for(confidence),
            timeframe: timeframe.into(),
        }
    }

    /// "<score*2>% gain"
    pub fn target_for(score: u32) -> String {
        format!("{}% gain", u64::from(score) * 2)
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (confidence {}, target {}, {})",
            self.action, self.asset, self.confidence, self.target, self.timeframe
        )
    }
}
