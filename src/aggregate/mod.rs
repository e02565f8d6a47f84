//! Group aggregation.
//!
//! Reduces each person's view of a movie to a single group statistic:
//!
//! - **Median**: median of per-person proportions (robust to one outlier).
//! - **Average**: mean of per-person proportions.
//! - **Points**: summed per-person integer points, accumulated
//!   concurrently across (movie, person) pairs.

mod engine;
mod stats;

pub use engine::{AggregationMode, GroupAggregator};
pub use stats::{mean, median};
