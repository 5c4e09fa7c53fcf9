use serde::{Deserialize, Serialize};
use std::fmt;

use super::repository::{RepositoryRecord, ScoredProject};

/// A discovered (or sample) opportunity
///
/// Serialized with a `type` tag: `defi_gem`, `yield_farm` or `arbitrage`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Opportunity {
    /// A freshly created repository that scored above the gem threshold
    DefiGem {
        project: RepositoryRecord,
        score: u32,
        potential: String,
    },
    /// Yield farming record (sample data)
    YieldFarm {
        protocol: String,
        apy: String,
        risk: String,
        potential: String,
    },
    /// Cross-exchange arbitrage record (sample data)
    Arbitrage {
        pair: String,
        exchanges: Vec<String>,
        profit_margin: String,
        potential: String,
    },
}

/// Opportunity kind without payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpportunityKind {
    DefiGem,
    YieldFarm,
    Arbitrage,
}

impl fmt::Display for OpportunityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpportunityKind::DefiGem => write!(f, "defi_gem"),
            OpportunityKind::YieldFarm => write!(f, "yield_farm"),
            OpportunityKind::Arbitrage => write!(f, "arbitrage"),
        }
    }
}

impl Opportunity {
    /// Wrap a scored project as a gem; potential is "$<score*1000>+ gain"
    pub fn gem(scored: ScoredProject) -> Self {
        let potential = format!("${}+ gain", u64::from(scored.score) * 1000);
        Opportunity::DefiGem {
            project: scored.project,
            score: scored.score,
            potential,
        }
    }

    pub fn kind(&self) -> OpportunityKind {
        match self {
            Opportunity::DefiGem { .. } => OpportunityKind::DefiGem,
            Opportunity::YieldFarm { .. } => OpportunityKind::YieldFarm,
            Opportunity::Arbitrage { .. } => OpportunityKind::Arbitrage,
        }
    }
}

impl fmt::Display for Opportunity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Opportunity::DefiGem { project, score, potential } => write!(
                f,
                "[GEM] {} (score {}, {}) {}",
                project.name, score, potential, project.url
            ),
            Opportunity::YieldFarm { protocol, apy, risk, potential } => write!(
                f,
                "[YIELD] {} APY {} risk {} ({})",
                protocol, apy, risk, potential
            ),
            Opportunity::Arbitrage { pair, exchanges, profit_margin, potential } => write!(
                f,
                "[ARB] {} across {} margin {} ({})",
                pair,
                exchanges.join("/"),
                profit_margin,
                potential
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(score: u32) -> ScoredProject {
        let rec = RepositoryRecord::new(
            "stake-pool".to_string(),
            "https://github.com/x/stake-pool".to_string(),
            Some("staking rewards".to_string()),
            12,
            Some("Solidity".to_string()),
            "2024-05-01T00:00:00Z".to_string(),
        )
        .unwrap();
        ScoredProject::new(rec, score)
    }

    #[test]
    fn test_gem_potential_text() {
        let opp = Opportunity::gem(scored(85));
        assert_eq!(opp.kind(), OpportunityKind::DefiGem);
        match opp {
            Opportunity::DefiGem { potential, score, .. } => {
                assert_eq!(potential, "$85000+ gain");
                assert_eq!(score, 85);
            }
            other => panic!("Expected a gem, got {:?}", other),
        }
    }

    #[test]
    fn test_serialized_type_tags() {
        let gem = serde_json::to_value(Opportunity::gem(scored(90))).unwrap();
        assert_eq!(gem["type"], "defi_gem");
        assert_eq!(gem["project"]["name"], "stake-pool");
        assert_eq!(gem["score"], 90);

        let farm = serde_json::to_value(Opportunity::YieldFarm {
            protocol: "P".into(),
            apy: "10%".into(),
            risk: "Low".into(),
            potential: "x".into(),
        })
        .unwrap();
        assert_eq!(farm["type"], "yield_farm");

        let arb = serde_json::to_value(Opportunity::Arbitrage {
            pair: "ETH/USDC".into(),
            exchanges: vec!["Uniswap".into(), "SushiSwap".into()],
            profit_margin: "2.5%".into(),
            potential: "y".into(),
        })
        .unwrap();
        assert_eq!(arb["type"], "arbitrage");
        assert_eq!(arb["exchanges"][1], "SushiSwap");
    }

    #[test]
    fn test_display() {
        let arb = Opportunity::Arbitrage {
            pair: "ETH/USDC".into(),
            exchanges: vec!["Uniswap".into(), "SushiSwap".into()],
            profit_margin: "2.5%".into(),
            potential: "$1000+ per trade".into(),
        };
        assert_eq!(
            arb.to_string(),
            "[ARB] ETH/USDC across Uniswap/SushiSwap margin 2.5% ($1000+ per trade)"
        );
        assert_eq!(OpportunityKind::YieldFarm.to_string(), "yield_farm");
    }
}
