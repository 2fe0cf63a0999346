//! Error types for javalint-core
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

/// Main error type for javalint operations
#[derive(Debug, Error)]
pub enum JavalintError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Analysis error
    #[error("Analysis error: {0}")]
    Analysis(String),
}

impl JavalintError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        JavalintError::Parse(msg.into())
    }

    /// Create an analysis error
    pub fn analysis(msg: impl Into<String>) -> Self {
        JavalintError::Analysis(msg.into())
    }
}

/// Result type alias for javalint operations
pub type Result<T> = std::result::Result<T, JavalintError>;
