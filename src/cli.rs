use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "baseline-score",
    version,
    about = "Baseline modernization scoring, badges and leaderboard for GitHub repositories"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Config file to use instead of the global and ./baseline.toml layers
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a repository and print its README report
    Analyze(AnalyzeCommand),
    /// Show the per-finding penalty computation
    Breakdown(BreakdownCommand),
    /// List earned badges, or every badge with --all
    Badges(BadgesCommand),
    /// Analyze several repositories and rank them
    Leaderboard(LeaderboardCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    pub repo_url: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// JSON array of findings to score instead of the generated ones
    #[arg(long)]
    pub findings: Option<PathBuf>,
}

#[derive(Args)]
pub struct BreakdownCommand {
    pub repo_url: String,
    #[arg(long)]
    pub findings: Option<PathBuf>,
}

#[derive(Args)]
pub struct BadgesCommand {
    pub repo_url: String,
    /// Include badges not earned, with their rules
    #[arg(long)]
    pub all: bool,
}

#[derive(Args)]
pub struct LeaderboardCommand {
    #[arg(required = true)]
    pub repo_urls: Vec<String>,
    /// Number of entries to show (defaults to leaderboard.limit)
    #[arg(long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..))]
    pub limit: Option<usize>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}
