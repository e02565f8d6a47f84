//! Penalty policy and domain bounds.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How an unmet threshold preference is penalized.
///
/// Satisfied preferences always score `+weight`. Genre, director, and the
/// ratio kinds (actors, plot elements) ignore this setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PenaltyMode {
    /// Every miss scores `-weight`.
    Flat,

    /// A miss scores `-weight * |actual - edge| / |bound - edge|`.
    ///
    /// `edge` is the closest value that would have satisfied the
    /// preference and `bound` is the domain extreme on the unsatisfied
    /// side. The result is not clamped: an `actual` beyond `bound` scores
    /// below `-weight`.
    #[default]
    Distance,
}

/// Domain extremes used to normalize distance penalties.
///
/// # Examples
///
/// ```
/// use u_cinerank::evaluate::Bounds;
///
/// let bounds = Bounds::default().with_max_year(2025);
/// assert_eq!(bounds.min_year, 1888);
/// assert!(bounds.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Bounds {
    /// Latest release year considered. Bound for `beforeYear` misses.
    pub max_year: u32,

    /// Earliest release year considered. Bound for `afterYear` misses.
    pub min_year: u32,

    /// Shortest runtime in minutes. Bound for `shorterThan` misses.
    pub min_runtime: u32,

    /// Lowest critic score. Bound for `minimumRottenTomatoesScore` misses.
    pub min_rotten_tomatoes: u32,

    /// Rank of the most permissive rating.
    pub min_rating: u32,

    /// Rank of the least permissive rating. Bound for `maximumAgeRating` misses.
    pub max_rating: u32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            max_year: 2024,
            min_year: 1888,
            min_runtime: 0,
            min_rotten_tomatoes: 0,
            min_rating: 0,
            max_rating: 4,
        }
    }
}

impl Bounds {
    pub fn with_max_year(mut self, year: u32) -> Self {
        self.max_year = year;
        self
    }

    pub fn with_min_year(mut self, year: u32) -> Self {
        self.min_year = year;
        self
    }

    pub fn with_min_runtime(mut self, minutes: u32) -> Self {
        self.min_runtime = minutes;
        self
    }

    pub fn with_min_rotten_tomatoes(mut self, score: u32) -> Self {
        self.min_rotten_tomatoes = score;
        self
    }

    pub fn with_rating_range(mut self, min: u32, max: u32) -> Self {
        self.min_rating = min;
        self.max_rating = max;
        self
    }

    /// Validates the bounds.
    pub fn validate(&self) -> Result<(), String> {
        if self.min_year >= self.max_year {
            return Err(format!(
                "min_year ({}) must be less than max_year ({})",
                self.min_year, self.max_year
            ));
        }
        if self.min_rating >= self.max_rating {
            return Err(format!(
                "min_rating ({}) must be less than max_rating ({})",
                self.min_rating, self.max_rating
            ));
        }
        if self.min_rotten_tomatoes > 100 {
            return Err(format!(
                "min_rotten_tomatoes must be at most 100, got {}",
                self.min_rotten_tomatoes
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bounds() {
        let b = Bounds::default();
        assert_eq!(b.max_year, 2024);
        assert_eq!(b.min_year, 1888);
        assert_eq!(b.min_runtime, 0);
        assert_eq!(b.min_rotten_tomatoes, 0);
        assert_eq!(b.min_rating, 0);
        assert_eq!(b.max_rating, 4);
    }

    #[test]
    fn test_validate_ok() {
        assert!(Bounds::default().validate().is_ok());
    }

    #[test]
    fn test_validate_inverted_years() {
        let b = Bounds::default().with_min_year(2030);
        assert!(b.validate().is_err());
    }

    #[test]
    fn test_validate_inverted_ratings() {
        let b = Bounds::default().with_rating_range(4, 4);
        assert!(b.validate().is_err());
    }

    #[test]
    fn test_validate_score_out_of_range() {
        let b = Bounds::default().with_min_rotten_tomatoes(101);
        assert!(b.validate().is_err());
    }

    #[test]
    fn test_default_penalty_is_distance() {
        assert_eq!(PenaltyMode::default(), PenaltyMode::Distance);
    }
}
