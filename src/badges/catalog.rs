use super::rule::{above, all, at_least, at_most, below, between, flag, not_flag, Rule};
use super::{Badge, BadgeKind};
use crate::types::stats::{Flag, Metric};

fn badge(id: &str, name: &str, description: &str, svg_url: &str, rule: Rule) -> Badge {
    Badge {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        svg_url: svg_url.to_string(),
        markdown: format!("[![{name}]({svg_url})]"),
        rule,
        kind: BadgeKind::Standard,
    }
}

fn roast(id: &str, name: &str, description: &str, svg_url: &str, rule: Rule) -> Badge {
    Badge {
        kind: BadgeKind::Roast,
        ..badge(id, name, description, svg_url, rule)
    }
}

/// Catalog shipped with the binary, in display order.
pub fn builtin_badges() -> Vec<Badge> {
    vec![
        badge(
            "code-perfectionist",
            "Code Perfectionist",
            "Achieved near-perfect code quality (qualityScore > 90)",
            "https://img.shields.io/badge/Code-Perfectionist-gold",
            above(Metric::QualityScore, 90.0),
        ),
        badge(
            "modern-master",
            "Modern Master",
            "Uses modern technologies and frameworks extensively",
            "https://img.shields.io/badge/Tech-Modern_Master-blueviolet",
            all(vec![
                flag(Flag::UsesModernTech),
                at_least(Metric::FrameworkUsage, 2.0),
            ]),
        ),
        badge(
            "test-champion",
            "Test Champion",
            "Excellent test coverage and testing practices",
            "https://img.shields.io/badge/Testing-Champion-success",
            all(vec![
                flag(Flag::HasTests),
                at_least(Metric::TestCoverage, 80.0),
            ]),
        ),
        badge(
            "performance-guru",
            "Performance Guru",
            "Highly optimized code with great performance",
            "https://img.shields.io/badge/Performance-Guru-orange",
            all(vec![
                flag(Flag::PerformanceOptimized),
                below(Metric::BundleSize, 500.0),
            ]),
        ),
        badge(
            "clean-architect",
            "Clean Architect",
            "Excellent project structure and architecture",
            "https://img.shields.io/badge/Architecture-Clean-brightgreen",
            all(vec![
                flag(Flag::HasGoodStructure),
                flag(Flag::HasGoodArchitecture),
            ]),
        ),
        badge(
            "docs-hero",
            "Docs Hero",
            "Great documentation and commenting practices",
            "https://img.shields.io/badge/Documentation-Hero-9cf",
            all(vec![
                flag(Flag::HasGoodDocs),
                at_least(Metric::CommentRatio, 0.2),
            ]),
        ),
        badge(
            "seo-expert",
            "SEO Expert",
            "Implements SEO best practices",
            "https://img.shields.io/badge/SEO-Expert-lightgrey",
            flag(Flag::HasSeoBestPractices),
        ),
        badge(
            "accessibility-advocate",
            "Accessibility Advocate",
            "Focuses on web accessibility",
            "https://img.shields.io/badge/Accessibility-Advocate-important",
            flag(Flag::HasAccessibility),
        ),
        badge(
            "framework-wizard",
            "Framework Wizard",
            "Uses multiple modern frameworks effectively",
            "https://img.shields.io/badge/Frameworks-Wizard-purple",
            all(vec![
                flag(Flag::UsesFrameworks),
                at_least(Metric::FrameworkUsage, 3.0),
            ]),
        ),
        badge(
            "vanilla-virtuoso",
            "Vanilla Virtuoso",
            "Masters vanilla JavaScript without heavy frameworks",
            "https://img.shields.io/badge/JavaScript-Vanilla_Virtuoso-yellow",
            all(vec![
                flag(Flag::UsesVanillaJs),
                not_flag(Flag::UsesHeavyFrameworks),
            ]),
        ),
        badge(
            "dependency-master",
            "Dependency Master",
            "Well-managed dependencies (not too many, not too few)",
            "https://img.shields.io/badge/Dependencies-Master-blue",
            between(Metric::DependencyCount, 5.0, 30.0),
        ),
        badge(
            "ci-cd-pro",
            "CI/CD Pro",
            "Implements continuous integration and deployment",
            "https://img.shields.io/badge/CI/CD-Professional-red",
            flag(Flag::HasCiCd),
        ),
        badge(
            "git-master",
            "Git Master",
            "Maintains excellent git history and practices",
            "https://img.shields.io/badge/Git-Master-green",
            flag(Flag::HasGoodGitHistory),
        ),
        badge(
            "open-source-hero",
            "Open Source Hero",
            "Maintains open source best practices",
            "https://img.shields.io/badge/Open_Source-Hero-success",
            flag(Flag::IsOpenSource),
        ),
        roast(
            "console-logger",
            "Console Logger",
            "Loves console.log a bit too much!",
            "https://img.shields.io/badge/Debugging-Console_Logger-ff69b4",
            above(Metric::ConsoleLogs, 10.0),
        ),
        roast(
            "dependency-hoarder",
            "Dependency Hoarder",
            "Maybe using a few too many packages?",
            "https://img.shields.io/badge/Dependencies-Hoarder-critical",
            above(Metric::DependencyCount, 50.0),
        ),
        roast(
            "bundle-bloater",
            "Bundle Bloater",
            "Bundle size could use some dieting!",
            "https://img.shields.io/badge/Performance-Bundle_Bloater-red",
            above(Metric::BundleSize, 1000.0),
        ),
        roast(
            "comment-ghost",
            "Comment Ghost",
            "Comments? What comments?",
            "https://img.shields.io/badge/Documentation-Ghost-lightgrey",
            below(Metric::CommentRatio, 0.05),
        ),
        badge(
            "responsive-rockstar",
            "Responsive Rockstar",
            "Perfect responsive design implementation",
            "https://img.shields.io/badge/Design-Responsive_Rockstar-pink",
            flag(Flag::IsResponsive),
        ),
        badge(
            "complexity-crusher",
            "Complexity Crusher",
            "Manages complexity like a pro",
            "https://img.shields.io/badge/Code_Quality-Complexity_Crusher-green",
            at_most(Metric::ComplexityScore, 3.0),
        ),
        badge(
            "file-organizer",
            "File Organizer",
            "Well-structured project with optimal file count",
            "https://img.shields.io/badge/Structure-File_Organizer-blue",
            between(Metric::FileCount, 10.0, 100.0),
        ),
        badge(
            "package-json-pro",
            "Package.json Pro",
            "Perfect package.json configuration",
            "https://img.shields.io/badge/Configuration-Package.json_Pro-yellow",
            flag(Flag::HasPackageJson),
        ),
        badge(
            "code-minimalist",
            "Code Minimalist",
            "Clean and minimal codebase",
            "https://img.shields.io/badge/Code-Minimalist-lightblue",
            all(vec![
                below(Metric::FileCount, 20.0),
                below(Metric::DependencyCount, 10.0),
            ]),
        ),
        badge(
            "test-enthusiast",
            "Test Enthusiast",
            "Good test coverage (70%+)",
            "https://img.shields.io/badge/Testing-Enthusiast-green",
            all(vec![
                flag(Flag::HasTests),
                at_least(Metric::TestCoverage, 70.0),
            ]),
        ),
        badge(
            "modern-framework-user",
            "Modern Framework User",
            "Uses modern frameworks appropriately",
            "https://img.shields.io/badge/Framework-Modern_User-blue",
            all(vec![
                flag(Flag::UsesFrameworks),
                at_least(Metric::FrameworkUsage, 1.0),
            ]),
        ),
        badge(
            "performance-optimizer",
            "Performance Optimizer",
            "Good performance optimization",
            "https://img.shields.io/badge/Performance-Optimizer-orange",
            all(vec![
                flag(Flag::PerformanceOptimized),
                below(Metric::BundleSize, 800.0),
            ]),
        ),
        badge(
            "documentation-pro",
            "Documentation Pro",
            "Good documentation practices",
            "https://img.shields.io/badge/Docs-Pro-brightgreen",
            all(vec![
                flag(Flag::HasGoodDocs),
                at_least(Metric::CommentRatio, 0.15),
            ]),
        ),
    ]
}
