use crate::types::stats::{Flag, Metric, RepoStats};
use serde::Serialize;
use std::fmt;

/// Declarative badge criterion over [`RepoStats`].
///
/// Rules only name fields through [`Flag`] and [`Metric`], so evaluation is
/// total for any stats value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Rule {
    Flag { flag: Flag },
    NotFlag { flag: Flag },
    Above { metric: Metric, value: f64 },
    AtLeast { metric: Metric, value: f64 },
    Below { metric: Metric, value: f64 },
    AtMost { metric: Metric, value: f64 },
    Between { metric: Metric, min: f64, max: f64 },
    All { rules: Vec<Rule> },
}

impl Rule {
    pub fn matches(&self, stats: &RepoStats) -> bool {
        match self {
            Rule::Flag { flag } => stats.flag(*flag),
            Rule::NotFlag { flag } => !stats.flag(*flag),
            Rule::Above { metric, value } => stats.metric(*metric) > *value,
            Rule::AtLeast { metric, value } => stats.metric(*metric) >= *value,
            Rule::Below { metric, value } => stats.metric(*metric) < *value,
            Rule::AtMost { metric, value } => stats.metric(*metric) <= *value,
            Rule::Between { metric, min, max } => {
                let actual = stats.metric(*metric);
                actual >= *min && actual <= *max
            }
            Rule::All { rules } => rules.iter().all(|rule| rule.matches(stats)),
        }
    }
}

pub fn flag(flag: Flag) -> Rule {
    Rule::Flag { flag }
}

pub fn not_flag(flag: Flag) -> Rule {
    Rule::NotFlag { flag }
}

pub fn above(metric: Metric, value: f64) -> Rule {
    Rule::Above { metric, value }
}

pub fn at_least(metric: Metric, value: f64) -> Rule {
    Rule::AtLeast { metric, value }
}

pub fn below(metric: Metric, value: f64) -> Rule {
    Rule::Below { metric, value }
}

pub fn at_most(metric: Metric, value: f64) -> Rule {
    Rule::AtMost { metric, value }
}

pub fn between(metric: Metric, min: f64, max: f64) -> Rule {
    Rule::Between { metric, min, max }
}

pub fn all(rules: Vec<Rule>) -> Rule {
    Rule::All { rules }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::Flag { flag } => write!(f, "{flag}"),
            Rule::NotFlag { flag } => write!(f, "not {flag}"),
            Rule::Above { metric, value } => write!(f, "{metric} > {value}"),
            Rule::AtLeast { metric, value } => write!(f, "{metric} >= {value}"),
            Rule::Below { metric, value } => write!(f, "{metric} < {value}"),
            Rule::AtMost { metric, value } => write!(f, "{metric} <= {value}"),
            Rule::Between { metric, min, max } => write!(f, "{min} <= {metric} <= {max}"),
            Rule::All { rules } => {
                for (index, rule) in rules.iter().enumerate() {
                    if index > 0 {
                        f.write_str(" and ")?;
                    }
                    write!(f, "{rule}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comparators_respect_strictness() {
        let stats = RepoStats {
            quality_score: 90.0,
            ..RepoStats::default()
        };
        assert!(!above(Metric::QualityScore, 90.0).matches(&stats));
        assert!(at_least(Metric::QualityScore, 90.0).matches(&stats));
        assert!(!below(Metric::QualityScore, 90.0).matches(&stats));
        assert!(at_most(Metric::QualityScore, 90.0).matches(&stats));
        assert!(between(Metric::QualityScore, 90.0, 95.0).matches(&stats));
    }

    #[test]
    fn all_requires_every_rule() {
        let stats = RepoStats {
            uses_vanilla_js: true,
            uses_heavy_frameworks: false,
            ..RepoStats::default()
        };
        let rule = all(vec![
            flag(Flag::UsesVanillaJs),
            not_flag(Flag::UsesHeavyFrameworks),
        ]);
        assert!(rule.matches(&stats));
        assert!(!all(vec![flag(Flag::HasCiCd), flag(Flag::UsesVanillaJs)]).matches(&stats));
        assert!(all(vec![]).matches(&stats));
    }

    #[test]
    fn display_describes_rule() {
        let rule = all(vec![
            flag(Flag::HasTests),
            at_least(Metric::TestCoverage, 80.0),
        ]);
        assert_eq!(rule.to_string(), "has_tests and test_coverage >= 80");
        assert_eq!(
            between(Metric::FileCount, 10.0, 100.0).to_string(),
            "10 <= file_count <= 100"
        );
        assert_eq!(not_flag(Flag::HasCiCd).to_string(), "not has_ci_cd");
    }
}
