use serde::Serialize;
use std::fmt;

/// Repository signals consumed by badge rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RepoStats {
    /// 0.0..=100.0
    pub quality_score: f64,
    pub uses_modern_tech: bool,
    pub framework_usage: u32,
    pub has_tests: bool,
    /// Percent, 0 when the repository has no tests.
    pub test_coverage: u32,
    pub performance_optimized: bool,
    /// Kilobytes.
    pub bundle_size: u32,
    pub has_good_structure: bool,
    pub has_good_architecture: bool,
    pub has_good_docs: bool,
    /// Fraction of comment lines, 0.0..1.0
    pub comment_ratio: f64,
    pub has_seo_best_practices: bool,
    pub has_accessibility: bool,
    pub uses_frameworks: bool,
    pub uses_vanilla_js: bool,
    pub uses_heavy_frameworks: bool,
    pub dependency_count: u32,
    pub has_ci_cd: bool,
    pub has_good_git_history: bool,
    pub is_open_source: bool,
    pub console_logs: u32,
    pub is_responsive: bool,
    pub complexity_score: u32,
    pub file_count: u32,
    pub has_package_json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    UsesModernTech,
    HasTests,
    PerformanceOptimized,
    HasGoodStructure,
    HasGoodArchitecture,
    HasGoodDocs,
    HasSeoBestPractices,
    HasAccessibility,
    UsesFrameworks,
    UsesVanillaJs,
    UsesHeavyFrameworks,
    HasCiCd,
    HasGoodGitHistory,
    IsOpenSource,
    IsResponsive,
    HasPackageJson,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    QualityScore,
    FrameworkUsage,
    TestCoverage,
    BundleSize,
    CommentRatio,
    DependencyCount,
    ConsoleLogs,
    ComplexityScore,
    FileCount,
}

impl RepoStats {
    pub fn flag(&self, flag: Flag) -> bool {
        match flag {
            Flag::UsesModernTech => self.uses_modern_tech,
            Flag::HasTests => self.has_tests,
            Flag::PerformanceOptimized => self.performance_optimized,
            Flag::HasGoodStructure => self.has_good_structure,
            Flag::HasGoodArchitecture => self.has_good_architecture,
            Flag::HasGoodDocs => self.has_good_docs,
            Flag::HasSeoBestPractices => self.has_seo_best_practices,
            Flag::HasAccessibility => self.has_accessibility,
            Flag::UsesFrameworks => self.uses_frameworks,
            Flag::UsesVanillaJs => self.uses_vanilla_js,
            Flag::UsesHeavyFrameworks => self.uses_heavy_frameworks,
            Flag::HasCiCd => self.has_ci_cd,
            Flag::HasGoodGitHistory => self.has_good_git_history,
            Flag::IsOpenSource => self.is_open_source,
            Flag::IsResponsive => self.is_responsive,
            Flag::HasPackageJson => self.has_package_json,
        }
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::QualityScore => self.quality_score,
            Metric::FrameworkUsage => f64::from(self.framework_usage),
            Metric::TestCoverage => f64::from(self.test_coverage),
            Metric::BundleSize => f64::from(self.bundle_size),
            Metric::CommentRatio => self.comment_ratio,
            Metric::DependencyCount => f64::from(self.dependency_count),
            Metric::ConsoleLogs => f64::from(self.console_logs),
            Metric::ComplexityScore => f64::from(self.complexity_score),
            Metric::FileCount => f64::from(self.file_count),
        }
    }
}


impl Flag {
    pub fn as_str(self) -> &'static str {
        match self {
            Flag::UsesModernTech => "uses_modern_tech",
            Flag::HasTests => "has_tests",
            Flag::PerformanceOptimized => "performance_optimized",
            Flag::HasGoodStructure => "has_good_structure",
            Flag::HasGoodArchitecture => "has_good_architecture",
            Flag::HasGoodDocs => "has_good_docs",
            Flag::HasSeoBestPractices => "has_seo_best_practices",
            Flag::HasAccessibility => "has_accessibility",
            Flag::UsesFrameworks => "uses_frameworks",
            Flag::UsesVanillaJs => "uses_vanilla_js",
            Flag::UsesHeavyFrameworks => "uses_heavy_frameworks",
            Flag::HasCiCd => "has_ci_cd",
            Flag::HasGoodGitHistory => "has_good_git_history",
            Flag::IsOpenSource => "is_open_source",
            Flag::IsResponsive => "is_responsive",
            Flag::HasPackageJson => "has_package_json",
        }
    }
}

impl Metric {
    pub fn as_str(self) -> &'static str {
        match self {
            Metric::QualityScore => "quality_score",
            Metric::FrameworkUsage => "framework_usage",
            Metric::TestCoverage => "test_coverage",
            Metric::BundleSize => "bundle_size",
            Metric::CommentRatio => "comment_ratio",
            Metric::DependencyCount => "dependency_count",
            Metric::ConsoleLogs => "console_logs",
            Metric::ComplexityScore => "complexity_score",
            Metric::FileCount => "file_count",
        }
    }
}

display_as_str!(Flag, Metric);

#[cfg(test)]
mod tests {
    use super::*;

    const FLAGS: [Flag; 16] = [
        Flag::UsesModernTech,
        Flag::HasTests,
        Flag::PerformanceOptimized,
        Flag::HasGoodStructure,
        Flag::HasGoodArchitecture,
        Flag::HasGoodDocs,
        Flag::HasSeoBestPractices,
        Flag::HasAccessibility,
        Flag::UsesFrameworks,
        Flag::UsesVanillaJs,
        Flag::UsesHeavyFrameworks,
        Flag::HasCiCd,
        Flag::HasGoodGitHistory,
        Flag::IsOpenSource,
        Flag::IsResponsive,
        Flag::HasPackageJson,
    ];

    const METRICS: [Metric; 9] = [
        Metric::QualityScore,
        Metric::FrameworkUsage,
        Metric::TestCoverage,
        Metric::BundleSize,
        Metric::CommentRatio,
        Metric::DependencyCount,
        Metric::ConsoleLogs,
        Metric::ComplexityScore,
        Metric::FileCount,
    ];

    #[test]
    fn display_names_match_serialized_names_and_stats_fields() {
        let fields = serde_json::to_value(RepoStats::default()).expect("stats should serialize");
        for flag in FLAGS {
            assert_eq!(serde_json::to_value(flag).expect("flag should serialize"), flag.as_str());
            assert_eq!(flag.to_string(), flag.as_str());
            assert!(fields.get(flag.as_str()).is_some(), "no stats field {flag}");
        }
        for metric in METRICS {
            assert_eq!(
                serde_json::to_value(metric).expect("metric should serialize"),
                metric.as_str()
            );
            assert_eq!(metric.to_string(), metric.as_str());
            assert!(fields.get(metric.as_str()).is_some(), "no stats field {metric}");
        }
    }

    #[test]
    fn accessors_read_the_named_field() {
        let stats = RepoStats {
            has_ci_cd: true,
            bundle_size: 1200,
            comment_ratio: 0.25,
            ..RepoStats::default()
        };
        assert!(stats.flag(Flag::HasCiCd));
        assert!(!stats.flag(Flag::HasTests));
        assert_eq!(stats.metric(Metric::BundleSize), 1200.0);
        assert_eq!(stats.metric(Metric::CommentRatio), 0.25);
    }
}
