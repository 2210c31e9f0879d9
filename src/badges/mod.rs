pub mod catalog;
pub mod rule;

pub use rule::Rule;

use crate::error::{Result, ScoreError};
use crate::types::stats::RepoStats;
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeKind {
    Standard,
    /// Tongue-in-cheek callout, shown in its own group.
    Roast,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Badge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub svg_url: String,
    pub markdown: String,
    pub rule: Rule,
    pub kind: BadgeKind,
}

impl Badge {
    pub fn is_earned(&self, stats: &RepoStats) -> bool {
        self.rule.matches(stats)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BadgeProgress<'a> {
    pub badge: &'a Badge,
    pub earned: bool,
    /// Percent towards the badge. Rules are pass/fail, so 0 or 100.
    pub progress: u8,
}

/// Ordered badge catalog with unique ids, immutable once built.
#[derive(Debug, Clone)]
pub struct BadgeCatalog {
    badges: Vec<Badge>,
}

impl BadgeCatalog {
    pub fn new(badges: Vec<Badge>) -> Result<Self> {
        let mut seen = HashSet::new();
        for badge in &badges {
            if !seen.insert(badge.id.as_str()) {
                return Err(ScoreError::DuplicateBadgeId(badge.id.clone()));
            }
        }
        Ok(Self { badges })
    }

    pub fn builtin() -> Result<Self> {
        Self::new(catalog::builtin_badges())
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    pub fn earned(&self, stats: &RepoStats) -> Vec<&Badge> {
        self.badges
            .iter()
            .filter(|badge| badge.is_earned(stats))
            .collect()
    }

    pub fn progress(&self, stats: &RepoStats) -> Vec<BadgeProgress<'_>> {
        self.badges
            .iter()
            .map(|badge| {
                let earned = badge.is_earned(stats);
                BadgeProgress {
                    badge,
                    earned,
                    progress: if earned { 100 } else { 0 },
                }
            })
            .collect()
    }
}

pub fn badges_markdown<'a, I>(badges: I) -> String
where
    I: IntoIterator<Item = &'a Badge>,
{
    badges
        .into_iter()
        .map(|badge| badge.markdown.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn of_kind<'a, I>(badges: I, kind: BadgeKind) -> Vec<&'a Badge>
where
    I: IntoIterator<Item = &'a Badge>,
{
    badges
        .into_iter()
        .filter(|badge| badge.kind == kind)
        .collect()
}
