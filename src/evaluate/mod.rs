//! Single-preference evaluation.
//!
//! Checks one preference slot against one movie and returns a signed
//! satisfaction contribution plus the slot's weight. Two penalty policies
//! are supported for unmet threshold preferences:
//!
//! - **Flat**: every miss scores `-weight`.
//! - **Distance**: a miss scores a graduated penalty proportional to how
//!   far the movie is from the threshold, normalized by a domain bound.
//!
//! Ratio preferences (favorite actors, plot elements) score
//! `ratio * weight` on any match and `-weight` otherwise, under both
//! policies.
//!
//! A separate integer [`Evaluator::points`] policy supports the
//! concurrent points aggregation.

mod config;
mod engine;
mod rules;
mod types;

pub use config::{Bounds, PenaltyMode};
pub use engine::Evaluator;
pub use types::Evaluation;
