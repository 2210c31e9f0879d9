use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScoreError {
    #[error("no {table} multiplier configured for {key}")]
    ConfigMismatch { table: &'static str, key: String },

    #[error("duplicate badge id in catalog: {0}")]
    DuplicateBadgeId(String),

    #[error("invalid finding: {0}")]
    InvalidFinding(String),

    #[error("invalid repository url: {0}")]
    InvalidRepoUrl(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScoreError>;
