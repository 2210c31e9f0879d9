use serde::Serialize;

/// Score bands, best first. Interpretation, rank and color all derive from
/// this one ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreTier {
    Perfect,
    Excellent,
    Good,
    Fair,
    NeedsWork,
    Critical,
}

/// Inclusive lower bounds, descending. Anything below the last bound is Critical.
const LADDER: [(f64, ScoreTier); 5] = [
    (0.0, ScoreTier::Perfect),
    (-5.0, ScoreTier::Excellent),
    (-15.0, ScoreTier::Good),
    (-30.0, ScoreTier::Fair),
    (-50.0, ScoreTier::NeedsWork),
];

impl ScoreTier {
    pub fn for_score(score: f64) -> Self {
        LADDER
            .iter()
            .find(|(floor, _)| score >= *floor)
            .map(|(_, tier)| *tier)
            .unwrap_or(ScoreTier::Critical)
    }

    pub fn interpretation(self) -> &'static str {
        match self {
            ScoreTier::Perfect => "Perfect - Baseline Approved! 🎉",
            ScoreTier::Excellent => "Excellent - Baseline Approved! ✨",
            ScoreTier::Good => "Good - Minor improvements needed 👍",
            ScoreTier::Fair => "Fair - Moderate modernization required ⚠️",
            ScoreTier::NeedsWork => "Needs Work - Significant modernization required 🚧",
            ScoreTier::Critical => "Critical - Major modernization required 🔴",
        }
    }

    pub fn rank(self) -> &'static str {
        match self {
            ScoreTier::Perfect => "Baseline Champion 🏆",
            ScoreTier::Excellent => "Modernization Master 🥇",
            ScoreTier::Good => "Web Standards Expert 🥈",
            ScoreTier::Fair => "Progressive Developer 🥉",
            ScoreTier::NeedsWork => "Modern Web Explorer 🔍",
            ScoreTier::Critical => "Legacy Code Adventurer ⚔️",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ScoreTier::Perfect => "#43e97b",
            ScoreTier::Excellent => "#51cf66",
            ScoreTier::Good => "#fcc419",
            ScoreTier::Fair => "#ff922b",
            ScoreTier::NeedsWork => "#ff6b6b",
            ScoreTier::Critical => "#fa5252",
        }
    }
}
