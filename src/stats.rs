use crate::fixture::repo_hash;
use crate::types::finding::Finding;
use crate::types::report::ScoreResult;
use crate::types::stats::RepoStats;

/// Derives the badge-facing statistics for a repository from its score and
/// URL hash. Findings are accepted but not yet measured.
pub fn derive_stats(_findings: &[Finding], score: &ScoreResult, repo_url: &str) -> RepoStats {
    let h = repo_hash(repo_url);
    let name = repo_url.to_lowercase();
    let name_has = |needles: &[&str]| needles.iter().any(|needle| name.contains(needle));

    let has_tests = h % 3 != 0;
    let has_good_docs = h % 4 != 0;

    RepoStats {
        quality_score: (100.0 + score.total_score * 2.0).clamp(0.0, 100.0),
        uses_modern_tech: h % 5 != 0,
        framework_usage: (h % 5 + 1) as u32,
        has_tests,
        test_coverage: if has_tests { (h % 40 + 60) as u32 } else { 0 },
        performance_optimized: h % 3 == 0,
        bundle_size: (h % 1500 + 100) as u32,
        has_good_structure: h % 4 != 0,
        has_good_architecture: h % 3 != 0,
        has_good_docs,
        comment_ratio: if has_good_docs {
            (h % 30 + 10) as f64 / 100.0
        } else {
            (h % 10) as f64 / 100.0
        },
        has_seo_best_practices: name_has(&["frontend", "web"]),
        has_accessibility: h % 5 == 0,
        uses_frameworks: h % 3 != 0,
        uses_vanilla_js: h % 4 == 0,
        uses_heavy_frameworks: h % 6 == 0,
        dependency_count: (h % 50 + 5) as u32,
        has_ci_cd: h % 6 == 0,
        has_good_git_history: h % 3 != 0,
        is_open_source: h % 2 == 0,
        console_logs: (h % 20 + 1) as u32,
        is_responsive: name_has(&["frontend", "web", "ui"]),
        complexity_score: (h % 5 + 1) as u32,
        file_count: (h % 100 + 10) as u32,
        has_package_json: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringEngine;
    use crate::types::config::ScoringConfig;

    fn score_with_total(total_score: f64) -> ScoreResult {
        let engine =
            ScoringEngine::new(ScoringConfig::default()).expect("default config should be valid");
        let mut score = engine.calculate_score(&[]).expect("empty score should compute");
        score.total_score = total_score;
        score
    }

    #[test]
    fn quality_score_is_clamped() {
        let url = "https://github.com/octo/tools";
        assert_eq!(derive_stats(&[], &score_with_total(0.0), url).quality_score, 100.0);
        assert_eq!(derive_stats(&[], &score_with_total(-10.0), url).quality_score, 80.0);
        assert_eq!(derive_stats(&[], &score_with_total(-75.0), url).quality_score, 0.0);
        assert_eq!(derive_stats(&[], &score_with_total(3.0), url).quality_score, 100.0);
    }

    #[test]
    fn hash_driven_fields_follow_formulas() {
        // hash("hello") = 99162322
        let stats = derive_stats(&[], &score_with_total(0.0), "hello");
        let h: u64 = 99_162_322;
        assert_eq!(stats.framework_usage as u64, h % 5 + 1);
        assert_eq!(stats.has_tests, h % 3 != 0);
        assert_eq!(stats.bundle_size as u64, h % 1500 + 100);
        assert_eq!(stats.dependency_count as u64, h % 50 + 5);
        assert_eq!(stats.file_count as u64, h % 100 + 10);
        assert_eq!(stats.is_open_source, h % 2 == 0);
        assert!(stats.has_package_json);
    }

    #[test]
    fn coverage_is_zero_without_tests() {
        // Pick inputs until one hashes to a multiple of three.
        let url = (0..)
            .map(|n| format!("https://github.com/octo/repo{n}"))
            .find(|url| repo_hash(url) % 3 == 0)
            .expect("some url hashes to a multiple of three");
        let stats = derive_stats(&[], &score_with_total(0.0), &url);
        assert!(!stats.has_tests);
        assert_eq!(stats.test_coverage, 0);
        assert!(stats.performance_optimized);
    }

    #[test]
    fn derived_values_stay_in_documented_ranges() {
        for n in 0..200 {
            let url = format!("https://github.com/octo/project-{n}");
            let stats = derive_stats(&[], &score_with_total(-12.4), &url);
            assert!((1..=5).contains(&stats.framework_usage));
            assert!(stats.test_coverage == 0 || (60..=99).contains(&stats.test_coverage));
            assert!((100..=1599).contains(&stats.bundle_size));
            assert!((0.0..0.4).contains(&stats.comment_ratio));
            assert!((5..=54).contains(&stats.dependency_count));
            assert!((1..=20).contains(&stats.console_logs));
            assert!((10..=109).contains(&stats.file_count));
        }
    }

    #[test]
    fn name_keywords_drive_web_flags() {
        let score = score_with_total(0.0);
        let web = derive_stats(&[], &score, "https://github.com/octo/My-Web-Shop");
        assert!(web.has_seo_best_practices);
        assert!(web.is_responsive);

        let ui = derive_stats(&[], &score, "https://github.com/octo/ui-kit");
        assert!(!ui.has_seo_best_practices);
        assert!(ui.is_responsive);
    }

    #[test]
    fn derivation_is_deterministic() {
        let score = score_with_total(-7.5);
        let url = "https://github.com/octo/frontend-app";
        assert_eq!(
            derive_stats(&[], &score, url),
            derive_stats(&[], &score, url)
        );
    }
}
