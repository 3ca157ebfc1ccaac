//! Error types surfaced by the pattern cache and configuration loading.
//!
//! Strategies never return these to their callers; they are recovered at the
//! strategy boundary and logged. Only direct users of
//! [`PatternCache::compile`](crate::PatternCache::compile) or
//! [`DesensitizeConfig::from_json`](crate::DesensitizeConfig::from_json) see
//! them.

use thiserror::Error;

/// Errors produced while preparing patterns or configuration.
#[derive(Debug, Error)]
pub enum Error {
    /// The pattern text was empty.
    #[error("pattern is empty")]
    EmptyPattern,

    /// The pattern text is not a valid regular expression.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The configuration document could not be parsed.
    #[cfg(feature = "json")]
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl Error {
    /// Returns `true` for the pattern errors (`EmptyPattern`, `InvalidPattern`).
    pub fn is_pattern_error(&self) -> bool {
        matches!(self, Self::EmptyPattern | Self::InvalidPattern { .. })
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
