//! Movie ranking.
//!
//! # Key Types
//!
//! - [`RankConfig`]: aggregation mode, penalty policy, bounds, error policy
//! - [`Ranker`]: attaches group statistics and sorts best first

mod config;
mod runner;

pub use config::RankConfig;
pub use runner::Ranker;
