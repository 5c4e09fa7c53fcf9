use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::opportunity::{Opportunity, OpportunityKind};
use super::signal::Signal;

/// Static marketing text attached to every package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PackageTemplate {
    pub value_proposition: String,
    pub target_market: String,
    /// Tier name -> price text
    pub pricing: BTreeMap<String, String>,
}

impl Default for PackageTemplate {
    fn default() -> Self {
        let pricing = [
            ("basic_signals", "$99/month"),
            ("premium_intel", "$299/month"),
            ("vip_access", "$999/month"),
        ]
        .into_iter()
        .map(|(tier, price)| (tier.to_string(), price.to_string()))
        .collect();

        Self {
            value_proposition: "Early DeFi gems and yield opportunities".to_string(),
            target_market: "Crypto traders, DeFi investors, Yield farmers".to_string(),
            pricing,
        }
    }
}

/// Everything produced by one scan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelligencePackage {
    pub opportunities: Vec<Opportunity>,
    pub signals: Vec<Signal>,
    pub generated_at: DateTime<Utc>,
    pub value_proposition: String,
    pub pricing: BTreeMap<String, String>,
    pub target_market: String,
}

impl IntelligencePackage {
    pub fn new(
        opportunities: Vec<Opportunity>,
        signals: Vec<Signal>,
        generated_at: DateTime<Utc>,
        template: &PackageTemplate,
    ) -> Self {
        Self {
            opportunities,
            signals,
            generated_at,
            value_proposition: template.value_proposition.clone(),
            pricing: template.pricing.clone(),
            target_market: template.target_market.clone(),
        }
    }

    pub fn count_of(&self, kind: OpportunityKind) -> usize {
        self.opportunities.iter().filter(|o| o.kind() == kind).count()
    }
}
