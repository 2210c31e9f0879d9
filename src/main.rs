mod analyze;
mod badges;
mod cli;
mod config;
mod error;
mod fixture;
mod leaderboard;
mod repo;
mod report;
mod scoring;
mod stats;
mod types;

use crate::analyze::Analyzer;
use crate::badges::{BadgeCatalog, BadgeKind};
use crate::error::{Result, ScoreError};
use crate::leaderboard::{LeaderboardEntry, LeaderboardStore, MemoryLeaderboard};
use crate::repo::RepoRef;
use crate::scoring::{ScoreTier, ScoringEngine};
use crate::types::finding::Finding;
use clap::Parser;
use std::path::Path;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const NOT_APPROVED: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn load_findings(path: Option<&Path>, repo: &RepoRef) -> Result<Vec<Finding>> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(ScoreError::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("findings file not found: {}", path.display()),
                )));
            }
            let content = std::fs::read_to_string(path)?;
            let findings: Vec<Finding> = serde_json::from_str(&content)?;
            info!(path = %path.display(), count = findings.len(), "loaded findings");
            Ok(findings)
        }
        None => Ok(Analyzer::fixture_findings(repo)),
    }
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    info!(version = env!("CARGO_PKG_VERSION"), "baseline-score starting");

    let loaded = config::load_config(cli.config.as_deref())?;
    let scoring = ScoringEngine::new(loaded.scoring_config())?;
    let catalog = BadgeCatalog::builtin()?;
    debug!(badges = catalog.badges().len(), "badge catalog loaded");
    let analyzer = Analyzer::new(&scoring, &catalog);
    let emit = |text: &str| {
        if !cli.quiet {
            println!("{text}");
        }
    };

    match &cli.command {
        cli::Commands::Analyze(cmd) => {
            let repo = RepoRef::parse(&cmd.repo_url)?;
            let findings = load_findings(cmd.findings.as_deref(), &repo)?;
            let analysis = analyzer.analyze(&repo, findings)?;
            emit(&report::render(&analysis, output_format(&cmd.format))?);

            if analysis.score.baseline_approved {
                Ok(exit_code::SUCCESS)
            } else {
                Ok(exit_code::NOT_APPROVED)
            }
        }
        cli::Commands::Breakdown(cmd) => {
            let repo = RepoRef::parse(&cmd.repo_url)?;
            let findings = load_findings(cmd.findings.as_deref(), &repo)?;
            let items = scoring.score_breakdown(&findings)?;
            let score = scoring.calculate_score(&findings)?;

            emit(&report::md::breakdown_to_markdown(&items));
            emit(&format!(
                "total: {} ({})",
                score.total_score,
                ScoreTier::for_score(score.total_score).rank()
            ));
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Badges(cmd) => {
            let repo = RepoRef::parse(&cmd.repo_url)?;
            let analysis = analyzer.analyze(&repo, Analyzer::fixture_findings(&repo))?;

            if cmd.all {
                for entry in catalog.progress(&analysis.stats) {
                    emit(&format!(
                        "[{}] {} ({}%): {}",
                        if entry.earned { "x" } else { " " },
                        entry.badge.id,
                        entry.progress,
                        entry.badge.rule
                    ));
                }
                return Ok(exit_code::SUCCESS);
            }

            for (heading, kind) in [
                ("badges:", BadgeKind::Standard),
                ("roasts:", BadgeKind::Roast),
            ] {
                let group = badges::of_kind(&analysis.earned_badges, kind);
                if group.is_empty() {
                    continue;
                }
                emit(heading);
                for badge in group {
                    emit(&format!("- {}: {}", badge.name, badge.description));
                }
            }
            if analysis.earned_badges.is_empty() {
                emit("badges: none earned");
            } else {
                emit(&format!("markdown: {}", analysis.badges_markdown));
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Leaderboard(cmd) => {
            let mut store = MemoryLeaderboard::new();
            for url in &cmd.repo_urls {
                let repo = RepoRef::parse(url)?;
                let analysis = analyzer.analyze(&repo, Analyzer::fixture_findings(&repo))?;
                let id = store.insert(LeaderboardEntry::from_report(&analysis))?;
                info!(id, repo = repo.name(), "leaderboard entry stored");
            }

            let limit = cmd.limit.unwrap_or_else(|| loaded.leaderboard_limit());
            let entries = store.list_top(limit)?;
            emit(&report::render_leaderboard(&entries, output_format(&cmd.format))?);
            Ok(exit_code::SUCCESS)
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
