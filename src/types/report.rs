use crate::badges::Badge;
use crate::scoring::ScoreTier;
use crate::types::finding::{BaselineStatus, Category, Finding, Severity};
use crate::types::stats::RepoStats;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    pub total_score: f64,
    pub baseline_approved: bool,
    pub suggestions_count: usize,
    pub suggestions_by_category: BTreeMap<Category, usize>,
    pub suggestions_by_severity: BTreeMap<Severity, usize>,
    pub suggestions_by_baseline_status: BTreeMap<BaselineStatus, usize>,
}

impl ScoreResult {
    pub fn category_count(&self, category: Category) -> usize {
        self.suggestions_by_category
            .get(&category)
            .copied()
            .unwrap_or(0)
    }

    pub fn status_count(&self, status: BaselineStatus) -> usize {
        self.suggestions_by_baseline_status
            .get(&status)
            .copied()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Multipliers {
    pub baseline: f64,
    pub category: f64,
}

/// One finding's contribution to the total score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakdownItem {
    pub description: String,
    pub severity: Severity,
    pub category: Category,
    pub baseline_status: BaselineStatus,
    pub penalty: f64,
    pub base_points: f64,
    pub multipliers: Multipliers,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub repo_url: String,
    pub repo_name: String,
    pub score: ScoreResult,
    pub tier: ScoreTier,
    pub interpretation: &'static str,
    pub rank: &'static str,
    pub color: &'static str,
    pub breakdown: Vec<BreakdownItem>,
    pub stats: RepoStats,
    pub earned_badges: Vec<Badge>,
    pub badges_markdown: String,
    pub findings: Vec<Finding>,
    pub findings_digest: String,
}
