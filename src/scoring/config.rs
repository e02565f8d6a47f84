//! Error policy for per-preference failures.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What to do when a single preference cannot be evaluated (currently only
/// a malformed `shorterThan` duration).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorPolicy {
    /// Abort the whole scoring call with the error.
    #[default]
    Fail,

    /// Log a warning and leave the preference out of both the satisfaction
    /// and the weight sums, as if the slot were unset.
    SkipPreference,
}
