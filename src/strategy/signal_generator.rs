//! Signal Generator
//!
//! Turns gem opportunities into buy signals. Other opportunity kinds are
//! sample data and never produce a signal.

use crate::domain::{Opportunity, Signal};
use super::params::SignalParams;

#[derive(Debug, Clone, Default)]
pub struct SignalGenerator {
    params: SignalParams,
}

impl SignalGenerator {
    pub fn new(params: SignalParams) -> Self {
        Self { params }
    }

    /// One BUY signal per `DefiGem`, in input order
    pub fn generate(&self, opportunities: &[Opportunity]) -> Vec<Signal> {
        opportunities
            .iter()
            .filter_map(|opp| match opp {
                Opportunity::DefiGem { project, score, .. } => {
                    Some(Signal::buy(project.name.clone(), *score, self.params.timeframe.clone()))
                }
                Opportunity::YieldFarm { .. } | Opportunity::Arbitrage { .. } => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OpportunityKind, RepositoryRecord, ScoredProject, SignalAction};

    fn gem(name: &str, score: u32) -> Opportunity {
        let record = RepositoryRecord::new(
            name.to_string(),
            format!("https://github.com/x/{}", name),
            None,
            0,
            None,
            "2026-10-01T00:00:00Z".to_string(),
        )
        .unwrap();
        Opportunity::gem(ScoredProject::new(record, score))
    }

    fn farm() -> Opportunity {
        Opportunity::YieldFarm {
            protocol: "New DeFi Protocol".into(),
            apy: "150%+".into(),
            risk: "Medium".into(),
            potential: "$5000+ monthly yield".into(),
        }
    }

    fn arb() -> Opportunity {
        Opportunity::Arbitrage {
            pair: "ETH/USDC".into(),
            exchanges: vec!["Uniswap".into(), "SushiSwap".into()],
            profit_margin: "2.5%".into(),
            potential: "$1000+ per trade".into(),
        }
    }

    #[test]
    fn test_one_signal_per_gem_in_order() {
        let opportunities = vec![gem("alpha", 90), farm(), gem("beta", 81), arb(), gem("gamma", 100)];
        let signals = SignalGenerator::default().generate(&opportunities);

        let gems = opportunities
            .iter()
            .filter(|o| o.kind() == OpportunityKind::DefiGem)
            .count();
        assert_eq!(signals.len(), gems);

        let assets: Vec<&str> = signals.iter().map(|s| s.asset.as_str()).collect();
        assert_eq!(assets, vec!["alpha", "beta", "gamma"]);

        assert!(signals.iter().all(|s| s.action == SignalAction::Buy));
        assert_eq!(signals[0].confidence, 90);
        assert_eq!(signals[0].target, "180% gain");
        assert_eq!(signals[0].timeframe, "1-4 weeks");
    }

    #[test]
    fn test_samples_produce_no_signals() {
        let signals = SignalGenerator::default().generate(&[farm(), arb()]);
        assert!(signals.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(SignalGenerator::default().generate(&[]).is_empty());
    }

    #[test]
    fn test_custom_timeframe() {
        let generator = SignalGenerator::new(SignalParams {
            timeframe: "2-3 days".to_string(),
        });
        let signals = generator.generate(&[gem("delta", 85)]);
        assert_eq!(signals[0].timeframe, "2-3 days");
        assert_eq!(signals[0].target, "170% gain");
    }
}
