//! Per-person scoring.
//!
//! [`PersonScorer`] runs every present preference of one person through
//! the [`Evaluator`](crate::evaluate::Evaluator) and reduces the results to
//! either a satisfaction proportion in `[0, 1]` or an integer point total.

mod config;
mod scorer;

pub use config::ErrorPolicy;
pub use scorer::{proportion_of, PersonScorer};
