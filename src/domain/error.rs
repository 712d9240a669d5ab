//! Domain error types

use thiserror::Error;

/// Error when a choice answer cannot be interpreted
#[derive(Debug, Clone, Error)]
#[error("Invalid choice answer: \"{input}\". Expected a number between 1 and {option_count}")]
pub struct AnswerParseError {
    pub input: String,
    pub option_count: usize,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),
}
