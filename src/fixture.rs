//! Deterministic stand-in for a real analyzer.
//!
//! Every value produced here is a pure function of the repository URL, so
//! re-analysing the same repository always yields the same findings, score
//! and badges. The hash is the 32-bit `h * 31 + c` string hash over UTF-16
//! code units, kept bit-exact so that previously stored leaderboard scores
//! stay reproducible.

use crate::error::Result;
use crate::types::finding::{BaselineStatus, Category, Finding, Severity};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoFlavor {
    Frontend,
    Backend,
    Fullstack,
}

impl RepoFlavor {
    pub fn detect(repo_id: &str) -> Self {
        let name = repo_id.to_lowercase();
        let has_any = |needles: &[&str]| needles.iter().any(|needle| name.contains(needle));
        if has_any(&["frontend", "react", "vue", "angular"]) {
            RepoFlavor::Frontend
        } else if has_any(&["backend", "node", "express", "api"]) {
            RepoFlavor::Backend
        } else {
            RepoFlavor::Fullstack
        }
    }

    fn accepts(self, category: Category) -> bool {
        match self {
            RepoFlavor::Backend => !matches!(category, Category::Css | Category::Html),
            RepoFlavor::Frontend | RepoFlavor::Fullstack => true,
        }
    }
}

struct Pattern {
    old_code: &'static str,
    new_code: &'static str,
    description: &'static str,
    category: Category,
    severity: Severity,
    baseline_status: BaselineStatus,
}

const PATTERNS: [Pattern; 6] = [
    Pattern {
        old_code: "var",
        new_code: "const/let",
        description: "Use const/let instead of var for block scoping",
        category: Category::Javascript,
        severity: Severity::Info,
        baseline_status: BaselineStatus::High,
    },
    Pattern {
        old_code: "function()",
        new_code: "() =>",
        description: "Use arrow functions for concise syntax",
        category: Category::Javascript,
        severity: Severity::Info,
        baseline_status: BaselineStatus::High,
    },
    Pattern {
        old_code: "XMLHttpRequest",
        new_code: "fetch()",
        description: "Use fetch API instead of XMLHttpRequest",
        category: Category::Javascript,
        severity: Severity::Warn,
        baseline_status: BaselineStatus::High,
    },
    Pattern {
        old_code: "float: left",
        new_code: "CSS Grid/Flexbox",
        description: "Use modern layout techniques instead of floats",
        category: Category::Css,
        severity: Severity::Warn,
        baseline_status: BaselineStatus::High,
    },
    Pattern {
        old_code: "<div> for layout",
        new_code: "semantic HTML5",
        description: "Use semantic HTML elements for better accessibility",
        category: Category::Html,
        severity: Severity::Info,
        baseline_status: BaselineStatus::High,
    },
    Pattern {
        old_code: "synchronous operations",
        new_code: "async/await",
        description: "Use asynchronous patterns for better performance",
        category: Category::Performance,
        severity: Severity::Warn,
        baseline_status: BaselineStatus::High,
    },
];

pub fn repo_hash(repo_id: &str) -> u64 {
    let hash = repo_id.encode_utf16().fold(0i32, |hash, unit| {
        hash.wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    });
    i64::from(hash).unsigned_abs()
}

/// Number of findings the fixture reports for a repository hash, 5..=44.
pub fn finding_count(hash: u64) -> usize {
    (hash % 40 + 5) as usize
}

pub fn generate_findings(repo_id: &str, count: usize) -> Vec<Finding> {
    let hash = repo_hash(repo_id);
    let flavor = RepoFlavor::detect(repo_id);
    let patterns: Vec<&Pattern> = PATTERNS
        .iter()
        .filter(|pattern| flavor.accepts(pattern.category))
        .collect();

    (0..count as u64)
        .map(|offset| finding_from_seed(hash + offset, &patterns))
        .collect()
}

fn finding_from_seed(seed: u64, patterns: &[&Pattern]) -> Finding {
    let pattern = patterns[(seed % patterns.len() as u64) as usize];
    Finding {
        file: format!(
            "src/{}/file{}.{}",
            pattern.category,
            seed % 3 + 1,
            pattern.category.file_extension()
        ),
        line: (seed % 100 + 1) as u32,
        old_code: pattern.old_code.to_string(),
        new_code: pattern.new_code.to_string(),
        description: pattern.description.to_string(),
        category: pattern.category,
        severity: pattern.severity,
        baseline_status: pattern.baseline_status,
    }
}

/// Hex SHA-256 over the serialized findings; equal inputs give equal digests.
pub fn findings_digest(findings: &[Finding]) -> Result<String> {
    let bytes = serde_json::to_vec(findings)?;
    let digest = Sha256::digest(&bytes);
    Ok(digest.iter().map(|byte| format!("{byte:02x}")).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_hash_matches_reference_values() {
        assert_eq!(repo_hash(""), 0);
        assert_eq!(repo_hash("a"), 97);
        assert_eq!(repo_hash("ab"), 3105);
        assert_eq!(repo_hash("hello"), 99_162_322);
    }

    #[test]
    fn repo_hash_takes_absolute_value_of_overflowed_hash() {
        // "polygenelubricants" wraps to i32::MIN.
        assert_eq!(repo_hash("polygenelubricants"), 2_147_483_648);
    }

    #[test]
    fn finding_count_stays_in_range() {
        assert_eq!(finding_count(0), 5);
        assert_eq!(finding_count(39), 44);
        assert_eq!(finding_count(40), 5);
    }

    #[test]
    fn generate_findings_is_deterministic() {
        let url = "https://github.com/rust-lang/rust";
        let first = generate_findings(url, 25);
        let second = generate_findings(url, 25);
        assert_eq!(first, second);
        assert_eq!(
            findings_digest(&first).expect("digest should compute"),
            findings_digest(&second).expect("digest should compute")
        );
    }

    #[test]
    fn generated_findings_are_valid() {
        let findings = generate_findings("https://github.com/octo/site", 44);
        assert_eq!(findings.len(), 44);
        for finding in &findings {
            assert!(finding.validate().is_ok());
            assert!((1..=100).contains(&finding.line));
            assert!(finding.file.starts_with(&format!("src/{}/file", finding.category)));
        }
    }

    #[test]
    fn backend_repos_never_get_css_or_html_findings() {
        let url = "https://github.com/octo/express-backend";
        assert_eq!(RepoFlavor::detect(url), RepoFlavor::Backend);
        let findings = generate_findings(url, 40);
        assert!(findings
            .iter()
            .all(|finding| !matches!(finding.category, Category::Css | Category::Html)));
    }

    #[test]
    fn frontend_keywords_take_priority_over_backend() {
        assert_eq!(
            RepoFlavor::detect("https://github.com/octo/React-Node-Starter"),
            RepoFlavor::Frontend
        );
        assert_eq!(
            RepoFlavor::detect("https://github.com/octo/dotfiles"),
            RepoFlavor::Fullstack
        );
    }

    #[test]
    fn seed_walks_the_pattern_table() {
        let url = "https://github.com/octo/dotfiles";
        let hash = repo_hash(url);
        let findings = generate_findings(url, 6);
        for (offset, finding) in findings.iter().enumerate() {
            let seed = hash + offset as u64;
            let pattern = &PATTERNS[(seed % 6) as usize];
            assert_eq!(finding.description, pattern.description);
            assert_eq!(finding.line as u64, seed % 100 + 1);
        }
    }

    #[test]
    fn digest_is_hex_sha256() {
        let digest = findings_digest(&[]).expect("digest should compute");
        assert_eq!(digest.len(), 64);
        // sha256("[]")
        assert_eq!(
            digest,
            "4f53cda18c2baa0c0354bb5f9a3ecbe5ed12ab4d8e11ba873c2f11161202b945"
        );
    }
}
