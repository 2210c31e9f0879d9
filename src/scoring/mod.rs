pub mod tier;

pub use tier::ScoreTier;

use crate::error::{Result, ScoreError};
use crate::types::config::ScoringConfig;
use crate::types::finding::{BaselineStatus, Category, Finding, Severity};
use crate::types::report::{BreakdownItem, Multipliers, ScoreResult};
use std::collections::BTreeMap;
use std::fmt::Display;

/// Weighted-penalty scorer over a validated, immutable [`ScoringConfig`].
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

struct Penalty {
    base_points: f64,
    baseline: f64,
    category: f64,
}

impl Penalty {
    fn value(&self) -> f64 {
        self.base_points * self.baseline * self.category
    }
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn calculate_score(&self, findings: &[Finding]) -> Result<ScoreResult> {
        let mut total_score = 0.0;
        let mut by_category: BTreeMap<Category, usize> =
            Category::ALL.iter().map(|category| (*category, 0)).collect();
        let mut by_severity: BTreeMap<Severity, usize> =
            Severity::ALL.iter().map(|severity| (*severity, 0)).collect();
        let mut by_status: BTreeMap<BaselineStatus, usize> =
            BaselineStatus::ALL.iter().map(|status| (*status, 0)).collect();

        for finding in findings {
            total_score += self.penalty(finding)?.value();
            *by_category.entry(finding.category).or_insert(0) += 1;
            *by_severity.entry(finding.severity).or_insert(0) += 1;
            *by_status.entry(finding.baseline_status).or_insert(0) += 1;
        }

        let total_score = round_to_cents(total_score);
        Ok(ScoreResult {
            total_score,
            baseline_approved: self.is_approved(total_score),
            suggestions_count: findings.len(),
            suggestions_by_category: by_category,
            suggestions_by_severity: by_severity,
            suggestions_by_baseline_status: by_status,
        })
    }

    /// Per-finding penalties, in input order. Summing the `penalty` fields and
    /// rounding to two decimals reproduces `calculate_score().total_score`.
    pub fn score_breakdown(&self, findings: &[Finding]) -> Result<Vec<BreakdownItem>> {
        findings
            .iter()
            .map(|finding| {
                let penalty = self.penalty(finding)?;
                Ok(BreakdownItem {
                    description: finding.description.clone(),
                    severity: finding.severity,
                    category: finding.category,
                    baseline_status: finding.baseline_status,
                    penalty: penalty.value(),
                    base_points: penalty.base_points,
                    multipliers: Multipliers {
                        baseline: penalty.baseline,
                        category: penalty.category,
                    },
                })
            })
            .collect()
    }

    pub fn is_approved(&self, total_score: f64) -> bool {
        total_score >= self.config.baseline_approval_threshold
    }

    fn penalty(&self, finding: &Finding) -> Result<Penalty> {
        finding.validate()?;
        Ok(Penalty {
            base_points: lookup(
                &self.config.points_per_suggestion,
                finding.severity,
                "points_per_suggestion",
            )?,
            baseline: lookup(
                &self.config.baseline_status_multipliers,
                finding.baseline_status,
                "baseline_status_multipliers",
            )?,
            category: lookup(
                &self.config.category_multipliers,
                finding.category,
                "category_multipliers",
            )?,
        })
    }
}

fn lookup<K: Ord + Display>(table: &BTreeMap<K, f64>, key: K, name: &'static str) -> Result<f64> {
    table
        .get(&key)
        .copied()
        .ok_or_else(|| ScoreError::ConfigMismatch {
            table: name,
            key: key.to_string(),
        })
}

/// Two decimals, halves rounded away from zero. Never returns `-0.0`.
pub fn round_to_cents(value: f64) -> f64 {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
