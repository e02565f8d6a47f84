//! Preference evaluation engine.

use super::config::{Bounds, PenaltyMode};
use super::rules::*;
use super::types::Evaluation;
use crate::error::RankResult;
use crate::model::{ActivePreference, ContentRating, Movie};
use crate::runtime::parse_runtime;

/// Evaluates single preference slots against a movie.
///
/// Dispatch is a `match` over [`ActivePreference`], one arm per slot.
///
/// # Examples
///
/// ```
/// use u_cinerank::evaluate::{Evaluator, PenaltyMode};
/// use u_cinerank::model::{Movie, Preferences};
///
/// let mut movie = Movie::new("tt1", "Old Movie");
/// movie.year = 1990;
///
/// let prefs = Preferences::new().with_after_year_inclusive(2000, 10);
/// let pref = prefs.iter().next().unwrap();
///
/// let flat = Evaluator::new().with_penalty(PenaltyMode::Flat);
/// assert_eq!(flat.evaluate(pref, &movie).unwrap().satisfaction, -10.0);
///
/// let graded = Evaluator::new().with_penalty(PenaltyMode::Distance);
/// let eval = graded.evaluate(pref, &movie).unwrap();
/// assert!(eval.satisfaction > -10.0 && eval.satisfaction < 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    penalty: PenaltyMode,
    bounds: Bounds,
}

impl Evaluator {
    /// Creates an evaluator with distance penalties and default bounds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the penalty policy.
    pub fn with_penalty(mut self, penalty: PenaltyMode) -> Self {
        self.penalty = penalty;
        self
    }

    /// Sets the domain bounds.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn penalty(&self) -> PenaltyMode {
        self.penalty
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    /// Scores `pref` against `movie`.
    ///
    /// # Errors
    ///
    /// Fails only for a `shorterThan` threshold that is not a valid
    /// `<H>h<M>m<S>s` duration.
    pub fn evaluate(&self, pref: ActivePreference<'_>, movie: &Movie) -> RankResult<Evaluation> {
        let kind = pref.kind();
        let weight = pref.weight();
        let w = f64::from(weight);
        let b = &self.bounds;

        let (satisfied, satisfaction) = match pref {
            ActivePreference::AfterYearInclusive(p) => {
                let ok = is_after_year_inclusive(movie.year, p.value);
                let sat = self.threshold_score(
                    ok,
                    w,
                    f64::from(movie.year),
                    f64::from(p.value),
                    f64::from(b.min_year),
                );
                (ok, sat)
            }
            ActivePreference::BeforeYearExclusive(p) => {
                let ok = is_before_year_exclusive(movie.year, p.value);
                // Latest satisfying year is one before the threshold.
                let sat = self.threshold_score(
                    ok,
                    w,
                    f64::from(movie.year),
                    f64::from(p.value) - 1.0,
                    f64::from(b.max_year),
                );
                (ok, sat)
            }
            ActivePreference::MaximumAgeRatingInclusive(p) => {
                let movie_rank = movie.rating_rank();
                let pref_rank = ContentRating::rank_of(&p.value);
                let ok = is_maximum_age_rating_inclusive(movie_rank, pref_rank);
                let sat = self.threshold_score(
                    ok,
                    w,
                    f64::from(movie_rank),
                    f64::from(pref_rank),
                    f64::from(b.max_rating),
                );
                (ok, sat)
            }
            ActivePreference::ShorterThanExclusive(p) => {
                let pref_runtime = parse_runtime(&p.value)?;
                let ok = is_shorter_than_exclusive(f64::from(movie.runtime), pref_runtime);
                let sat = self.threshold_score(
                    ok,
                    w,
                    f64::from(movie.runtime),
                    pref_runtime - 1.0,
                    f64::from(b.min_runtime),
                );
                (ok, sat)
            }
            ActivePreference::FavoriteGenre(p) => {
                let ok = is_favorite_genre(&movie.genres, &p.value);
                (ok, if ok { w } else { -w })
            }
            ActivePreference::LeastFavoriteDirector(p) => {
                // Presence is the bad outcome.
                let ok = !is_least_favorite_director(&movie.director, &p.value);
                (ok, if ok { w } else { -w })
            }
            ActivePreference::FavoriteActors(p) => {
                let matches = count_actor_matches(&movie.actors, &p.value);
                ratio_score(match_ratio(matches, p.value.len()), w)
            }
            ActivePreference::FavoritePlotElements(p) => {
                let matches = count_plot_matches(&movie.plot, &p.value);
                ratio_score(match_ratio(matches, p.value.len()), w)
            }
            ActivePreference::MinimumRottenTomatoesScoreInclusive(p) => {
                let ok = is_minimum_score_inclusive(movie.rotten_tomatoes, p.value);
                let sat = self.threshold_score(
                    ok,
                    w,
                    f64::from(movie.rotten_tomatoes),
                    f64::from(p.value),
                    f64::from(b.min_rotten_tomatoes),
                );
                (ok, sat)
            }
        };

        Ok(Evaluation {
            kind,
            satisfied,
            satisfaction,
            weight,
        })
    }

    /// Integer points for `pref` against `movie`.
    ///
    /// Met thresholds earn `+weight` and misses earn nothing. A match on
    /// the least favorite director costs `weight`. Actors and plot
    /// elements earn `weight` per match. Runtime thresholds are truncated
    /// to whole minutes before comparing.
    ///
    /// # Errors
    ///
    /// Fails only for a malformed `shorterThan` threshold.
    pub fn points(&self, pref: ActivePreference<'_>, movie: &Movie) -> RankResult<i64> {
        let w = i64::from(pref.weight());
        let earned = |ok: bool| if ok { w } else { 0 };

        let points = match pref {
            ActivePreference::AfterYearInclusive(p) => {
                earned(is_after_year_inclusive(movie.year, p.value))
            }
            ActivePreference::BeforeYearExclusive(p) => {
                earned(is_before_year_exclusive(movie.year, p.value))
            }
            ActivePreference::MaximumAgeRatingInclusive(p) => earned(
                is_maximum_age_rating_inclusive(movie.rating_rank(), ContentRating::rank_of(&p.value)),
            ),
            ActivePreference::ShorterThanExclusive(p) => {
                let pref_runtime = parse_runtime(&p.value)?.trunc();
                earned(is_shorter_than_exclusive(
                    f64::from(movie.runtime),
                    pref_runtime,
                ))
            }
            ActivePreference::FavoriteGenre(p) => earned(is_favorite_genre(&movie.genres, &p.value)),
            ActivePreference::LeastFavoriteDirector(p) => {
                if is_least_favorite_director(&movie.director, &p.value) {
                    -w
                } else {
                    0
                }
            }
            ActivePreference::FavoriteActors(p) => {
                count_actor_matches(&movie.actors, &p.value) as i64 * w
            }
            ActivePreference::FavoritePlotElements(p) => {
                count_plot_matches(&movie.plot, &p.value) as i64 * w
            }
            ActivePreference::MinimumRottenTomatoesScoreInclusive(p) => {
                earned(is_minimum_score_inclusive(movie.rotten_tomatoes, p.value))
            }
        };

        Ok(points)
    }

    /// Score for a threshold kind under the configured penalty policy.
    fn threshold_score(&self, satisfied: bool, w: f64, actual: f64, edge: f64, bound: f64) -> f64 {
        if satisfied {
            return w;
        }
        match self.penalty {
            PenaltyMode::Flat => -w,
            PenaltyMode::Distance => distance_penalty(actual, edge, bound, w),
        }
    }
}

fn ratio_score(ratio: f64, w: f64) -> (bool, f64) {
    if ratio > 0.0 {
        (true, ratio * w)
    } else {
        (false, -w)
    }
}
