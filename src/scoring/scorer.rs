//! Per-person satisfaction.

use super::config::ErrorPolicy;
use crate::error::{RankError, RankResult};
use crate::evaluate::{Evaluation, Evaluator};
use crate::model::{Movie, Person, PreferenceKind};
use tracing::warn;

/// Folds a person's preference evaluations into one number.
///
/// # Examples
///
/// ```
/// use u_cinerank::model::{Movie, Person, Preferences};
/// use u_cinerank::scoring::PersonScorer;
///
/// let mut movie = Movie::new("tt1", "Heat");
/// movie.genres = vec!["Crime".into()];
/// movie.director = "Michael Mann".into();
///
/// let person = Person::new(
///     "ana",
///     Preferences::new()
///         .with_favorite_genre("Crime", 10)
///         .with_least_favorite_director("Michael Mann", 10),
/// );
///
/// // +10 and -10 over a weight of 20 lands in the middle.
/// let scorer = PersonScorer::new();
/// assert_eq!(scorer.proportion(&movie, &person).unwrap(), 0.5);
/// assert_eq!(scorer.points(&movie, &person).unwrap(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PersonScorer {
    evaluator: Evaluator,
    on_error: ErrorPolicy,
}

impl PersonScorer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }

    pub fn with_error_policy(mut self, policy: ErrorPolicy) -> Self {
        self.on_error = policy;
        self
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Evaluates every present preference of `person` against `movie`.
    pub fn evaluations(&self, movie: &Movie, person: &Person) -> RankResult<Vec<Evaluation>> {
        let mut out = Vec::with_capacity(person.preferences.len());
        for pref in person.preferences.iter() {
            match self.evaluator.evaluate(pref, movie) {
                Ok(e) => out.push(e),
                Err(err) => self.absorb(err, movie, person, pref.kind())?,
            }
        }
        Ok(out)
    }

    /// Satisfaction proportion of `person` for `movie`.
    ///
    /// Maps the signed sum `[-W, +W]` onto `[0, 1]` via `(S + W) / 2W`,
    /// where `W` is the total weight of present preferences. Returns `0.0`
    /// when `W` is zero. Distance penalties beyond a bound can push the
    /// result below zero.
    pub fn proportion(&self, movie: &Movie, person: &Person) -> RankResult<f64> {
        let evals = self.evaluations(movie, person)?;
        Ok(proportion_of(&evals))
    }

    /// Integer points of `person` for `movie` (see [`Evaluator::points`]).
    pub fn points(&self, movie: &Movie, person: &Person) -> RankResult<i64> {
        let mut total = 0i64;
        for pref in person.preferences.iter() {
            match self.evaluator.points(pref, movie) {
                Ok(p) => total += p,
                Err(err) => self.absorb(err, movie, person, pref.kind())?,
            }
        }
        Ok(total)
    }

    fn absorb(
        &self,
        err: RankError,
        movie: &Movie,
        person: &Person,
        kind: PreferenceKind,
    ) -> RankResult<()> {
        match self.on_error {
            ErrorPolicy::Fail => Err(err),
            ErrorPolicy::SkipPreference => {
                warn!(
                    person = %person.name,
                    movie = %movie.id,
                    preference = %kind,
                    error = %err,
                    "skipping preference"
                );
                Ok(())
            }
        }
    }
}

/// `(S + W) / 2W` over a set of evaluations, or `0.0` when `W == 0`.
pub fn proportion_of(evals: &[Evaluation]) -> f64 {
    let total_weight: f64 = evals.iter().map(|e| f64::from(e.weight)).sum();
    if total_weight == 0.0 {
        return 0.0;
    }
    let total_satisfaction: f64 = evals.iter().map(|e| e.satisfaction).sum();
    (total_satisfaction + total_weight) / (2.0 * total_weight)
}
