use crate::leaderboard::{rank_icon, LeaderboardEntry};
use crate::scoring::round_to_cents;
use crate::types::finding::{BaselineStatus, Category};
use crate::types::report::{AnalysisReport, BreakdownItem};

/// README snippet for an analysed repository.
pub fn to_markdown(report: &AnalysisReport) -> String {
    let score = &report.score;
    let mut output = String::new();
    output.push_str(&format!("# {}\n\n", report.repo_name));
    if !report.badges_markdown.is_empty() {
        output.push_str(&format!("{}\n\n", report.badges_markdown));
    }
    output.push_str(&format!("## 📊 Baseline Score: {}\n\n", score.total_score));
    output.push_str(if score.baseline_approved {
        "✅ **Baseline Approved**\n\n"
    } else {
        "⚠️ **Not Baseline Approved**\n\n"
    });

    output.push_str("### 🎯 Score Details:\n");
    output.push_str(&format!(
        "- **Total Suggestions**: {}\n",
        score.suggestions_count
    ));
    for (label, category) in [
        ("JavaScript", Category::Javascript),
        ("CSS", Category::Css),
        ("HTML", Category::Html),
        ("Performance", Category::Performance),
    ] {
        output.push_str(&format!(
            "- **{}**: {}\n",
            label,
            score.category_count(category)
        ));
    }
    output.push('\n');

    output.push_str("### 📈 Baseline Status:\n");
    for (label, status) in [
        ("Stable Features", BaselineStatus::High),
        ("Newly Available", BaselineStatus::Low),
        ("Limited Support", BaselineStatus::Limited),
        ("Not Supported", BaselineStatus::NotSupported),
    ] {
        output.push_str(&format!("- **{}**: {}\n", label, score.status_count(status)));
    }
    output.push('\n');

    output.push_str(&format!("### 🏆 Rank: {}\n", report.rank));
    output.push_str(&format!("{}\n\n", report.interpretation));
    output.push_str("---\n\n");
    output.push_str(&format!(
        "*Analyzed with baseline-score v{}*\n",
        env!("CARGO_PKG_VERSION")
    ));
    output
}

pub fn breakdown_to_markdown(items: &[BreakdownItem]) -> String {
    let mut output = String::new();
    output.push_str("| # | Description | Severity | Category | Baseline | Base | × Baseline | × Category | Penalty |\n");
    output.push_str("|---|---|---|---|---|---|---|---|---|\n");
    for (index, item) in items.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} | {} | {:.2} |\n",
            index + 1,
            item.description,
            item.severity,
            item.category,
            item.baseline_status,
            item.base_points,
            item.multipliers.baseline,
            item.multipliers.category,
            round_to_cents(item.penalty)
        ));
    }
    output
}

pub fn leaderboard_to_markdown(entries: &[LeaderboardEntry]) -> String {
    let mut output = String::new();
    output.push_str("# 🏆 Leaderboard\n\n");
    if entries.is_empty() {
        output.push_str("- none\n");
        return output;
    }
    output.push_str("| Rank | Repository | Score | Approved | Suggestions | Badges | Analyzed |\n");
    output.push_str("|---|---|---|---|---|---|---|\n");
    for (index, entry) in entries.iter().enumerate() {
        output.push_str(&format!(
            "| {} | [{}]({}) | {} | {} | {} | {} | {} |\n",
            rank_icon(index),
            entry.repo_name,
            entry.repo_url,
            entry.score,
            if entry.baseline_approved { "yes" } else { "no" },
            entry.suggestions_count,
            entry.badges_earned,
            entry.analyzed_at.format("%b %-d")
        ));
    }
    output
}
