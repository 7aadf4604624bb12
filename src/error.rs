use std::io;
use thiserror::Error;

/// Custom error type for statline
#[derive(Error, Debug)]
pub enum StatlineError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Tool not installed: {0}")]
    ToolNotInstalled(String),

    #[error("Tool failed: {0}")]
    ToolFailed(String),

    #[error("Timed out after {0} ms")]
    Timeout(u64),

    #[error("Unparsable output: {0}")]
    ParseFailure(String),
}

/// Result type alias for statline
pub type Result<T> = std::result::Result<T, StatlineError>;

impl StatlineError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        StatlineError::Config(msg.into())
    }

    pub fn source_unavailable<S: Into<String>>(msg: S) -> Self {
        StatlineError::SourceUnavailable(msg.into())
    }

    pub fn tool_not_installed<S: Into<String>>(msg: S) -> Self {
        StatlineError::ToolNotInstalled(msg.into())
    }

    pub fn tool_failed<S: Into<String>>(msg: S) -> Self {
        StatlineError::ToolFailed(msg.into())
    }

    pub fn parse_failure<S: Into<String>>(msg: S) -> Self {
        StatlineError::ParseFailure(msg.into())
    }

    /// Whether the error only means "no data this tick".
    ///
    /// Everything except configuration errors degrades to an omitted row.
    pub fn is_transient(&self) -> bool {
        !matches!(
            self,
            StatlineError::Config(_)
                | StatlineError::ConfigParse(_)
                | StatlineError::Pattern(_)
        )
    }
}
