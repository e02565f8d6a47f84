//! Group aggregation engine.

use super::stats::{mean, median};
use crate::error::RankResult;
use crate::model::{Movie, Person, Statistic};
use crate::scoring::PersonScorer;
use std::sync::atomic::{AtomicI64, Ordering};
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How per-person results are reduced to one statistic per movie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AggregationMode {
    /// Median of per-person proportions.
    #[default]
    Median,

    /// Mean of per-person proportions.
    Average,

    /// Sum of per-person integer points.
    Points,
}

/// Reduces the group's opinions of a movie to a [`Statistic`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GroupAggregator {
    scorer: PersonScorer,
    mode: AggregationMode,
}

impl GroupAggregator {
    pub fn new(mode: AggregationMode) -> Self {
        Self {
            scorer: PersonScorer::default(),
            mode,
        }
    }

    pub fn with_scorer(mut self, scorer: PersonScorer) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn mode(&self) -> AggregationMode {
        self.mode
    }

    pub fn scorer(&self) -> &PersonScorer {
        &self.scorer
    }

    /// Every person's proportion for `movie`, in `people` order.
    ///
    /// People without preferences contribute `0.0`.
    pub fn proportions(&self, movie: &Movie, people: &[Person]) -> RankResult<Vec<f64>> {
        people
            .iter()
            .map(|person| self.scorer.proportion(movie, person))
            .collect()
    }

    /// Computes the group statistic for one movie.
    pub fn aggregate(&self, movie: &Movie, people: &[Person]) -> RankResult<Statistic> {
        let stat = match self.mode {
            AggregationMode::Median => {
                let mut props = self.proportions(movie, people)?;
                Statistic::Median(median(&mut props))
            }
            AggregationMode::Average => {
                let props = self.proportions(movie, people)?;
                Statistic::Average(mean(&props))
            }
            AggregationMode::Points => {
                let mut total = 0i64;
                for person in people {
                    total += self.scorer.points(movie, person)?;
                }
                Statistic::Points(total)
            }
        };
        trace!(movie = %movie.id, ?stat, "aggregated");
        Ok(stat)
    }

    /// Sums points for every (movie, person) pair, one total per movie.
    ///
    /// Pairs are scored independently and added into a per-movie atomic
    /// accumulator, in parallel when `parallel` is set and the `parallel`
    /// feature is enabled. Completion order between pairs is unspecified;
    /// the call returns only once every pair has been added.
    pub fn accumulate_points(
        &self,
        movies: &[Movie],
        people: &[Person],
        parallel: bool,
    ) -> RankResult<Vec<i64>> {
        let totals: Vec<AtomicI64> = movies.iter().map(|_| AtomicI64::new(0)).collect();
        let pairs = movies.len() * people.len();

        for_each_pair(pairs, parallel, |idx| {
            let (m, p) = (idx / people.len(), idx % people.len());
            let points = self.scorer.points(&movies[m], &people[p])?;
            totals[m].fetch_add(points, Ordering::Relaxed);
            Ok(())
        })?;

        Ok(totals.into_iter().map(AtomicI64::into_inner).collect())
    }
}

#[cfg(feature = "parallel")]
fn for_each_pair<F>(pairs: usize, parallel: bool, score: F) -> RankResult<()>
where
    F: Fn(usize) -> RankResult<()> + Send + Sync,
{
    if parallel {
        (0..pairs).into_par_iter().try_for_each(score)
    } else {
        (0..pairs).try_for_each(score)
    }
}

#[cfg(not(feature = "parallel"))]
fn for_each_pair<F>(pairs: usize, _parallel: bool, score: F) -> RankResult<()>
where
    F: Fn(usize) -> RankResult<()>,
{
    (0..pairs).try_for_each(score)
}
