//! Ranking pass configuration.

use crate::aggregate::AggregationMode;
use crate::evaluate::{Bounds, PenaltyMode};
use crate::scoring::ErrorPolicy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for one ranking pass.
///
/// # Examples
///
/// ```
/// use u_cinerank::aggregate::AggregationMode;
/// use u_cinerank::evaluate::PenaltyMode;
/// use u_cinerank::rank::RankConfig;
///
/// let config = RankConfig::default()
///     .with_mode(AggregationMode::Average)
///     .with_penalty(PenaltyMode::Flat)
///     .with_parallel(false);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RankConfig {
    /// Group statistic used for ordering.
    pub mode: AggregationMode,

    /// Penalty for unmet threshold preferences (proportion modes only).
    pub penalty: PenaltyMode,

    /// Domain bounds for distance penalties.
    pub bounds: Bounds,

    /// Handling of preferences that cannot be evaluated.
    pub on_error: ErrorPolicy,

    /// Score movies (median/average) or pairs (points) on the rayon pool.
    ///
    /// Ignored when the `parallel` feature is disabled.
    pub parallel: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            mode: AggregationMode::Median,
            penalty: PenaltyMode::Distance,
            bounds: Bounds::default(),
            on_error: ErrorPolicy::Fail,
            parallel: true,
        }
    }
}

impl RankConfig {
    pub fn with_mode(mut self, mode: AggregationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_penalty(mut self, penalty: PenaltyMode) -> Self {
        self.penalty = penalty;
        self
    }

    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.bounds.validate()
    }
}
