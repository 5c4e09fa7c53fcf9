//! Opportunity Scanner
//!
//! Runs one scan: search -> score -> append sample records -> derive signals
//! -> package. Strictly sequential; each query is awaited before the next.
//!
//! Failures are contained:
//! - a failed query is logged, recorded and treated as an empty result
//! - a project with an unparseable timestamp is logged, recorded and skipped

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::adapters::samples::SampleOpportunityGenerator;
use crate::config::Config;
use crate::domain::{IntelligencePackage, Opportunity, RepositoryRecord, ScoredProject};
use crate::ports::{RepositorySearchPort, SearchError, SearchResults};
use crate::strategy::{PotentialScorer, SignalGenerator};
use super::packager::Packager;

/// A query that did not return results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QueryFailure {
    pub query: String,
    pub error: String,
}

/// A project dropped during scoring
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedProject {
    pub name: String,
    pub reason: String,
}

/// What went wrong (or right) during a scan
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScanDiagnostics {
    pub queries_run: usize,
    pub failed_queries: Vec<QueryFailure>,
    /// Search items within the per-query limit dropped for missing fields
    pub rejected_records: usize,
    pub projects_found: usize,
    pub projects_scored: usize,
    pub skipped_projects: Vec<SkippedProject>,
}

impl ScanDiagnostics {
    pub fn has_failures(&self) -> bool {
        !self.failed_queries.is_empty()
            || !self.skipped_projects.is_empty()
            || self.rejected_records > 0
    }
}

/// Result of one scan
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub package: IntelligencePackage,
    pub diagnostics: ScanDiagnostics,
}

impl ScanReport {
    /// The ordered opportunity list
    pub fn opportunities(&self) -> &[Opportunity] {
        &self.package.opportunities
    }
}

pub struct OpportunityScanner<S: RepositorySearchPort> {
    search: S,
    queries: Vec<String>,
    per_query_limit: usize,
    scorer: PotentialScorer,
    samples: SampleOpportunityGenerator,
    signals: SignalGenerator,
    packager: Packager,
}

impl<S: RepositorySearchPort> OpportunityScanner<S> {
    /// Create a scanner from a search adapter and configuration
    ///
    /// The configuration is used as given; `load_config` and
    /// `load_config_or_default` are where it gets validated.
    pub fn new(search: S, config: &Config) -> Self {
        Self {
            search,
            queries: config.search.queries.clone(),
            per_query_limit: config.search.per_query_limit,
            scorer: PotentialScorer::new(config.scoring.clone()),
            samples: SampleOpportunityGenerator::new(config.samples.clone()),
            signals: SignalGenerator::new(config.signals.clone()),
            packager: Packager::new(config.package.clone()),
        }
    }

    pub fn scorer(&self) -> &PotentialScorer {
        &self.scorer
    }

    /// Run a full scan now
    pub async fn scan(&self) -> ScanReport {
        self.scan_at(Utc::now()).await
    }

    /// Run a full scan, scoring and stamping the package with `now`
    pub async fn scan_at(&self, now: DateTime<Utc>) -> ScanReport {
        tracing::info!("SCANNING CRYPTO DEGEN OPPORTUNITIES...");
        let mut diagnostics = ScanDiagnostics::default();

        let projects = self.find_new_defi_projects(&mut diagnostics).await;
        let scored = self.analyze_projects(projects, now, &mut diagnostics);

        let mut opportunities: Vec<Opportunity> = scored
            .into_iter()
            .filter(|p| self.scorer.is_gem(p.score))
            .map(Opportunity::gem)
            .collect();
        tracing::info!("{} project(s) above the gem threshold", opportunities.len());

        opportunities.extend(self.samples.yield_opportunities());
        opportunities.extend(self.samples.arbitrage_opportunities());

        let signals = self.signals.generate(&opportunities);
        tracing::info!("Generated {} trading signal(s)", signals.len());

        let package = self.packager.package(opportunities, signals, now);

        if diagnostics.has_failures() {
            tracing::warn!(
                "Scan finished with {} failed query(ies), {} rejected record(s), {} skipped project(s)",
                diagnostics.failed_queries.len(),
                diagnostics.rejected_records,
                diagnostics.skipped_projects.len()
            );
        }

        ScanReport { package, diagnostics }
    }

    /// Run every configured query, keeping the first `per_query_limit` hits of each
    pub async fn find_new_defi_projects(
        &self,
        diagnostics: &mut ScanDiagnostics,
    ) -> Vec<RepositoryRecord> {
        let mut projects = Vec::new();

        for query in &self.queries {
            diagnostics.queries_run += 1;
            match self.search_query(query).await {
                Ok(results) => {
                    projects.extend(Self::keep_records(results, self.per_query_limit, diagnostics));
                }
                Err(e) => {
                    tracing::warn!("Search failed for {:?}: {} (continuing with no results)", query, e);
                    diagnostics.failed_queries.push(QueryFailure {
                        query: query.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        diagnostics.projects_found = projects.len();
        projects
    }

    /// Score every project, skipping the ones that cannot be scored
    pub fn analyze_projects(
        &self,
        projects: Vec<RepositoryRecord>,
        now: DateTime<Utc>,
        diagnostics: &mut ScanDiagnostics,
    ) -> Vec<ScoredProject> {
        let mut scored = Vec::with_capacity(projects.len());

        for project in projects {
            let name = project.name.clone();
            match self.scorer.score_project(project, now) {
                Ok(p) => scored.push(p),
                Err(e) => {
                    tracing::warn!("Skipping project {}: {}", name, e);
                    diagnostics.skipped_projects.push(SkippedProject {
                        name,
                        reason: e.to_string(),
                    });
                }
            }
        }

        diagnostics.projects_scored = scored.len();
        scored
    }

    /// Run one ad-hoc query and score its results, without packaging
    pub async fn search_and_score(
        &self,
        query: &str,
        limit: usize,
        now: DateTime<Utc>,
    ) -> Result<(Vec<ScoredProject>, ScanDiagnostics), SearchError> {
        let mut diagnostics = ScanDiagnostics {
            queries_run: 1,
            ..ScanDiagnostics::default()
        };

        let results = self.search.search(query).await?;
        let records = Self::keep_records(results, limit, &mut diagnostics);
        diagnostics.projects_found = records.len();

        let scored = self.analyze_projects(records, now, &mut diagnostics);
        Ok((scored, diagnostics))
    }

    async fn search_query(&self, query: &str) -> Result<SearchResults, SearchError> {
        tracing::info!("Searching: {}", query);
        let results = self.search.search(query).await?;
        tracing::info!(
            "  {} result(s) ({} incomplete), keeping the first {}",
            results.len(),
            results.rejected_count(),
            results.len().min(self.per_query_limit)
        );
        Ok(results)
    }

    /// Take the first `limit` items in API order and drop the invalid ones
    ///
    /// Only rejections inside the window are counted.
    fn keep_records(
        results: SearchResults,
        limit: usize,
        diagnostics: &mut ScanDiagnostics,
    ) -> Vec<RepositoryRecord> {
        let (records, rejected) = results.truncated(limit).partition();
        for item in &rejected {
            tracing::warn!("Skipping search item {}: {}", item.label, item.error);
        }
        diagnostics.rejected_records += rejected.len();
        records
    }
}
