//! Error type for the scoring and ranking engine.

use thiserror::Error;

/// Errors raised while scoring or ranking movies.
///
/// Absent preference slots, empty match lists, people without
/// preferences, and unknown rating labels are not errors; they are
/// absorbed by the scoring rules themselves.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    /// A runtime threshold did not match `<H>h<M>m<S>s`.
    #[error("malformed duration: {input:?} (expected <H>h<M>m<S>s)")]
    MalformedDuration {
        /// The rejected input.
        input: String,
    },

    /// A configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Shorthand result type for the engine.
pub type RankResult<T> = Result<T, RankError>;
