pub mod json;
pub mod md;

use crate::error::ScoreError;
use crate::leaderboard::LeaderboardEntry;
use crate::types::report::AnalysisReport;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(report: &AnalysisReport, format: OutputFormat) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}

pub fn render_leaderboard(
    entries: &[LeaderboardEntry],
    format: OutputFormat,
) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Json => json::leaderboard_to_json(entries).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::leaderboard_to_markdown(entries)),
    }
}
