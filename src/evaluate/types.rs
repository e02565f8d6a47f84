//! Evaluation result type.

use crate::model::PreferenceKind;

/// The outcome of checking one preference slot against one movie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    /// Which slot produced this result.
    pub kind: PreferenceKind,

    /// Whether the movie meets the preference. For the ratio kinds this
    /// means "at least one match".
    pub satisfied: bool,

    /// Signed contribution to the person's satisfaction sum.
    pub satisfaction: f64,

    /// Contribution to the weight denominator. Always the declared weight,
    /// whatever the sign of `satisfaction`.
    pub weight: u32,
}
