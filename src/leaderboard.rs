use crate::error::Result;
use crate::types::report::AnalysisReport;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub repo_url: String,
    pub repo_name: String,
    pub score: f64,
    pub baseline_approved: bool,
    pub suggestions_count: usize,
    pub badges_earned: usize,
    pub analyzed_at: DateTime<Utc>,
}

impl LeaderboardEntry {
    pub fn from_report(report: &AnalysisReport) -> Self {
        Self::from_report_at(report, Utc::now())
    }

    pub fn from_report_at(report: &AnalysisReport, analyzed_at: DateTime<Utc>) -> Self {
        Self {
            repo_url: report.repo_url.clone(),
            repo_name: report.repo_name.clone(),
            score: report.score.total_score,
            baseline_approved: report.score.baseline_approved,
            suggestions_count: report.score.suggestions_count,
            badges_earned: report.earned_badges.len(),
            analyzed_at,
        }
    }
}

/// Storage for scored repositories. Implementations back this with whatever
/// datastore the deployment provides.
pub trait LeaderboardStore {
    /// Stores an entry and returns its id.
    fn insert(&mut self, entry: LeaderboardEntry) -> Result<u64>;

    /// Highest scores first; equal scores keep insertion order.
    fn list_top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>>;
}

/// Process-local store used to rank one batch of analyses.
#[derive(Debug, Default)]
pub struct MemoryLeaderboard {
    entries: Vec<(u64, LeaderboardEntry)>,
    next_id: u64,
}

impl MemoryLeaderboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LeaderboardStore for MemoryLeaderboard {
    fn insert(&mut self, entry: LeaderboardEntry) -> Result<u64> {
        self.next_id += 1;
        self.entries.push((self.next_id, entry));
        Ok(self.next_id)
    }

    fn list_top(&self, limit: usize) -> Result<Vec<LeaderboardEntry>> {
        let mut ranked: Vec<&(u64, LeaderboardEntry)> = self.entries.iter().collect();
        ranked.sort_by(|(_, a), (_, b)| b.score.total_cmp(&a.score));
        Ok(ranked
            .into_iter()
            .take(limit)
            .map(|(_, entry)| entry.clone())
            .collect())
    }
}

/// Medal for the top three places, `#n` after that. `index` is zero-based.
pub fn rank_icon(index: usize) -> String {
    match index {
        0 => "🥇".to_string(),
        1 => "🥈".to_string(),
        2 => "🥉".to_string(),
        _ => format!("#{}", index + 1),
    }
}
