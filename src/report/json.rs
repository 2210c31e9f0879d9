use crate::leaderboard::LeaderboardEntry;
use crate::types::report::AnalysisReport;

pub fn to_json(report: &AnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn leaderboard_to_json(entries: &[LeaderboardEntry]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(entries)
}
