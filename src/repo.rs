use crate::error::{Result, ScoreError};
use regex::Regex;
use std::sync::OnceLock;

fn github_url() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^https?://github\.com/([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)/?$")
            .expect("valid regex")
    })
}

/// A validated GitHub repository URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRef {
    url: String,
    name: String,
}

impl RepoRef {
    pub fn parse(input: &str) -> Result<Self> {
        let url = input.trim();
        let captures = github_url().captures(url).ok_or_else(|| {
            ScoreError::InvalidRepoUrl(format!(
                "{url} (expected https://github.com/<owner>/<repository>)"
            ))
        })?;
        let name = format!("{}/{}", &captures[1], &captures[2]);
        Ok(Self {
            url: url.to_string(),
            name,
        })
    }

    /// The URL as analysed; hashing and stats derivation key off this string.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// `owner/repository`
    pub fn name(&self) -> &str {
        &self.name
    }
}
