//! Sample Opportunity Data
//!
//! Fixed yield-farm and arbitrage records appended to every package.
//! These are NOT live market data: nothing here is queried or computed, the
//! records come straight from configuration (or the built-in defaults).

use serde::{Deserialize, Serialize};

use crate::domain::Opportunity;

/// Sample yield farm record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldFarmSample {
    pub protocol: String,
    pub apy: String,
    pub risk: String,
    pub potential: String,
}

/// Sample arbitrage record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArbitrageSample {
    pub pair: String,
    pub exchanges: Vec<String>,
    pub profit_margin: String,
    pub potential: String,
}

/// Sample records configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplesConfig {
    pub yield_farms: Vec<YieldFarmSample>,
    pub arbitrage: Vec<ArbitrageSample>,
}

impl Default for SamplesConfig {
    fn default() -> Self {
        Self {
            yield_farms: vec![YieldFarmSample {
                protocol: "New DeFi Protocol".to_string(),
                apy: "150%+".to_string(),
                risk: "Medium".to_string(),
                potential: "$5000+ monthly yield".to_string(),
            }],
            arbitrage: vec![ArbitrageSample {
                pair: "ETH/USDC".to_string(),
                exchanges: vec!["Uniswap".to_string(), "SushiSwap".to_string()],
                profit_margin: "2.5%".to_string(),
                potential: "$1000+ per trade".to_string(),
            }],
        }
    }
}

/// Produces the configured sample opportunities
#[derive(Debug, Clone, Default)]
pub struct SampleOpportunityGenerator {
    config: SamplesConfig,
}

impl SampleOpportunityGenerator {
    pub fn new(config: SamplesConfig) -> Self {
        Self { config }
    }

    /// Sample yield farm opportunities, in configured order
    pub fn yield_opportunities(&self) -> Vec<Opportunity> {
        tracing::info!(
            "Adding {} sample yield farm record(s) (static data, not live market analysis)",
            self.config.yield_farms.len()
        );

        self.config
            .yield_farms
            .iter()
            .map(|s| Opportunity::YieldFarm {
                protocol: s.protocol.clone(),
                apy: s.apy.clone(),
                risk: s.risk.clone(),
                potential: s.potential.clone(),
            })
            .collect()
    }

    /// Sample arbitrage opportunities, in configured order
    pub fn arbitrage_opportunities(&self) -> Vec<Opportunity> {
        tracing::info!(
            "Adding {} sample arbitrage record(s) (static data, not live market analysis)",
            self.config.arbitrage.len()
        );

        self.config
            .arbitrage
            .iter()
            .map(|s| Opportunity::Arbitrage {
                pair: s.pair.clone(),
                exchanges: s.exchanges.clone(),
                profit_margin: s.profit_margin.clone(),
                potential: s.potential.clone(),
            })
            .collect()
    }
}
