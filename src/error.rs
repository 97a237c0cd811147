//! Configuration errors surfaced before any secret is processed.

use thiserror::Error;

/// Rejected pipeline or caller configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Iteration count is zero or negative.
    #[error("cannot hash zero or negative times (got {0})")]
    InvalidIterationCount(i64),

    /// Iteration count is above the allowed ceiling.
    #[error("refusing to hash {count} times; the maximum is {max}")]
    ExcessiveIterationCount { count: i64, max: u32 },

    /// Caller-supplied text could not be turned into an iteration count.
    #[error("invalid iteration input: {0}")]
    InvalidCallerInput(String),

    #[error("unknown hash: {0}. Valid: md5, sha256")]
    UnknownHash(String),

    #[error("unknown post-processing: {0}. Valid: alternating, identity")]
    UnknownPost(String),
}
