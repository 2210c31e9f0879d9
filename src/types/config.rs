use crate::error::{Result, ScoreError};
use crate::types::finding::{BaselineStatus, Category, Severity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_APPROVAL_THRESHOLD: f64 = -5.0;
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 50;

/// On-disk configuration, every section optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    pub scoring: Option<ScoringOverrides>,
    pub leaderboard: Option<LeaderboardConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringOverrides {
    pub baseline_approval_threshold: Option<f64>,
    pub points_per_suggestion: Option<BTreeMap<Severity, f64>>,
    pub baseline_status_multipliers: Option<BTreeMap<BaselineStatus, f64>>,
    pub category_multipliers: Option<BTreeMap<Category, f64>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LeaderboardConfig {
    pub limit: Option<usize>,
}

/// Multiplier tables and approval threshold driving the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringConfig {
    pub points_per_suggestion: BTreeMap<Severity, f64>,
    pub baseline_status_multipliers: BTreeMap<BaselineStatus, f64>,
    pub category_multipliers: BTreeMap<Category, f64>,
    pub baseline_approval_threshold: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            points_per_suggestion: BTreeMap::from([
                (Severity::Error, -3.0),
                (Severity::Warn, -2.0),
                (Severity::Info, -1.0),
            ]),
            baseline_status_multipliers: BTreeMap::from([
                (BaselineStatus::High, 1.0),
                (BaselineStatus::Low, 0.7),
                (BaselineStatus::Limited, 0.4),
                (BaselineStatus::NotSupported, 0.1),
            ]),
            category_multipliers: BTreeMap::from([
                (Category::Javascript, 1.0),
                (Category::Css, 0.9),
                (Category::Html, 0.8),
                (Category::Performance, 1.2),
            ]),
            baseline_approval_threshold: DEFAULT_APPROVAL_THRESHOLD,
        }
    }
}

impl ScoringConfig {
    /// Defaults with every key present in `overrides` replaced.
    pub fn with_overrides(overrides: &ScoringOverrides) -> Self {
        let mut config = Self::default();
        if let Some(points) = &overrides.points_per_suggestion {
            config.points_per_suggestion.extend(points);
        }
        if let Some(multipliers) = &overrides.baseline_status_multipliers {
            config.baseline_status_multipliers.extend(multipliers);
        }
        if let Some(multipliers) = &overrides.category_multipliers {
            config.category_multipliers.extend(multipliers);
        }
        if let Some(threshold) = overrides.baseline_approval_threshold {
            config.baseline_approval_threshold = threshold;
        }
        config
    }

    pub fn validate(&self) -> Result<()> {
        for (severity, points) in &self.points_per_suggestion {
            if !points.is_finite() || *points >= 0.0 {
                return Err(ScoreError::ConfigParse(format!(
                    "scoring.points_per_suggestion.{severity} must be negative (found {points})"
                )));
            }
        }
        for (status, multiplier) in &self.baseline_status_multipliers {
            if !(0.0..=1.0).contains(multiplier) {
                return Err(ScoreError::ConfigParse(format!(
                    "scoring.baseline_status_multipliers.{status} must be between 0.0 and 1.0 (found {multiplier})"
                )));
            }
        }
        for (category, multiplier) in &self.category_multipliers {
            if !multiplier.is_finite() || *multiplier <= 0.0 {
                return Err(ScoreError::ConfigParse(format!(
                    "scoring.category_multipliers.{category} must be positive (found {multiplier})"
                )));
            }
        }
        if !self.baseline_approval_threshold.is_finite() {
            return Err(ScoreError::ConfigParse(
                "scoring.baseline_approval_threshold must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}

impl AppConfig {
    pub fn scoring_config(&self) -> ScoringConfig {
        match &self.scoring {
            Some(overrides) => ScoringConfig::with_overrides(overrides),
            None => ScoringConfig::default(),
        }
    }

    pub fn leaderboard_limit(&self) -> usize {
        self.leaderboard
            .as_ref()
            .and_then(|leaderboard| leaderboard.limit)
            .unwrap_or(DEFAULT_LEADERBOARD_LIMIT)
    }

    pub fn validate(&self) -> Result<()> {
        self.scoring_config().validate()?;
        if self.leaderboard_limit() == 0 {
            return Err(ScoreError::ConfigParse(
                "leaderboard.limit must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
