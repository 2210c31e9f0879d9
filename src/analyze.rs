use crate::badges::{self, BadgeCatalog};
use crate::error::Result;
use crate::fixture;
use crate::repo::RepoRef;
use crate::scoring::{ScoreTier, ScoringEngine};
use crate::stats::derive_stats;
use crate::types::finding::Finding;
use crate::types::report::AnalysisReport;
use tracing::{debug, info};

/// Runs findings through scoring, stats derivation and badge matching.
#[derive(Debug, Clone, Copy)]
pub struct Analyzer<'a> {
    scoring: &'a ScoringEngine,
    catalog: &'a BadgeCatalog,
}

impl<'a> Analyzer<'a> {
    pub fn new(scoring: &'a ScoringEngine, catalog: &'a BadgeCatalog) -> Self {
        Self { scoring, catalog }
    }

    pub fn fixture_findings(repo: &RepoRef) -> Vec<Finding> {
        let hash = fixture::repo_hash(repo.url());
        let count = fixture::finding_count(hash);
        debug!(repo = repo.name(), hash, count, "generating fixture findings");
        fixture::generate_findings(repo.url(), count)
    }

    pub fn analyze(&self, repo: &RepoRef, findings: Vec<Finding>) -> Result<AnalysisReport> {
        let score = self.scoring.calculate_score(&findings)?;
        let breakdown = self.scoring.score_breakdown(&findings)?;
        debug!(
            repo = repo.name(),
            total_score = score.total_score,
            approved = score.baseline_approved,
            "scored findings"
        );

        let stats = derive_stats(&findings, &score, repo.url());
        let earned = self.catalog.earned(&stats);
        let badges_markdown = badges::badges_markdown(earned.iter().copied());
        let earned_badges = earned.into_iter().cloned().collect::<Vec<_>>();
        debug!(
            repo = repo.name(),
            earned = earned_badges.len(),
            "matched badges"
        );

        let tier = ScoreTier::for_score(score.total_score);
        let findings_digest = fixture::findings_digest(&findings)?;
        info!(
            repo = repo.name(),
            score = score.total_score,
            rank = tier.rank(),
            "analysis complete"
        );

        Ok(AnalysisReport {
            repo_url: repo.url().to_string(),
            repo_name: repo.name().to_string(),
            score,
            tier,
            interpretation: tier.interpretation(),
            rank: tier.rank(),
            color: tier.color(),
            breakdown,
            stats,
            earned_badges,
            badges_markdown,
            findings,
            findings_digest,
        })
    }
}
