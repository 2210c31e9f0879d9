use crate::error::{Result, ScoreError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Javascript,
    Css,
    Html,
    Performance,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Javascript,
        Category::Css,
        Category::Html,
        Category::Performance,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Javascript => "javascript",
            Category::Css => "css",
            Category::Html => "html",
            Category::Performance => "performance",
        }
    }

    /// Source file extension used for generated finding paths.
    pub fn file_extension(self) -> &'static str {
        match self {
            Category::Javascript | Category::Performance => "js",
            Category::Css => "css",
            Category::Html => "html",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Error,
    Warn,
    Info,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Error, Severity::Warn, Severity::Info];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warn => "warn",
            Severity::Info => "info",
        }
    }
}

/// Web-platform support tier of the feature a finding recommends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BaselineStatus {
    High,
    Low,
    Limited,
    #[serde(alias = "not supported")]
    NotSupported,
}

impl BaselineStatus {
    pub const ALL: [BaselineStatus; 4] = [
        BaselineStatus::High,
        BaselineStatus::Low,
        BaselineStatus::Limited,
        BaselineStatus::NotSupported,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BaselineStatus::High => "high",
            BaselineStatus::Low => "low",
            BaselineStatus::Limited => "limited",
            BaselineStatus::NotSupported => "not-supported",
        }
    }
}

display_as_str!(Category, Severity, BaselineStatus);

/// A single modernization opportunity detected in a repository.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub file: String,
    pub line: u32,
    pub old_code: String,
    pub new_code: String,
    pub description: String,
    pub category: Category,
    pub severity: Severity,
    pub baseline_status: BaselineStatus,
}

impl Finding {
    pub fn validate(&self) -> Result<()> {
        if self.file.trim().is_empty() {
            return Err(ScoreError::InvalidFinding(format!(
                "finding '{}' has an empty file path",
                self.description
            )));
        }
        if self.line == 0 {
            return Err(ScoreError::InvalidFinding(format!(
                "{}: line numbers start at 1",
                self.file
            )));
        }
        if self.description.trim().is_empty() {
            return Err(ScoreError::InvalidFinding(format!(
                "{}:{} has an empty description",
                self.file, self.line
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_finding(
    severity: Severity,
    category: Category,
    baseline_status: BaselineStatus,
) -> Finding {
    Finding {
        file: format!("src/{category}/file1.{}", category.file_extension()),
        line: 1,
        old_code: "var".to_string(),
        new_code: "const/let".to_string(),
        description: "Use const/let instead of var for block scoping".to_string(),
        category,
        severity,
        baseline_status,
    }
}
