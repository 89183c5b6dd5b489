//! Configuration errors

use thiserror::Error;

/// Errors raised while reading rule options
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Indentation given as a string other than `"tab"`
    #[error("Unknown indentation keyword '{0}', expected \"tab\" or a number of spaces")]
    UnknownIndentKeyword(String),

    /// Indentation width of zero spaces
    #[error("Indentation width must be at least one space")]
    ZeroIndentWidth,

    /// Rules configuration that does not deserialize
    #[error("Invalid rules configuration: {0}")]
    InvalidRules(String),
}
