//! Packager
//!
//! Wraps opportunities, signals and the static marketing text into one
//! `IntelligencePackage`. No filtering, no validation.

use chrono::{DateTime, Utc};

use crate::domain::{IntelligencePackage, Opportunity, PackageTemplate, Signal};

#[derive(Debug, Clone, Default)]
pub struct Packager {
    template: PackageTemplate,
}

impl Packager {
    pub fn new(template: PackageTemplate) -> Self {
        Self { template }
    }

    pub fn package(
        &self,
        opportunities: Vec<Opportunity>,
        signals: Vec<Signal>,
        generated_at: DateTime<Utc>,
    ) -> IntelligencePackage {
        let package = IntelligencePackage::new(opportunities, signals, generated_at, &self.template);
        tracing::info!(
            "PACKAGED CRYPTO INTELLIGENCE: {} opportunities",
            package.opportunities.len()
        );
        package
    }
}
