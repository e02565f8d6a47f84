//! Ranking pass execution.
//!
//! [`Ranker`] wires the configured evaluator, scorer, and aggregator
//! together, attaches a [`Statistic`] to each movie, and orders the movies
//! from most to least satisfying.

use super::config::RankConfig;
use crate::aggregate::{AggregationMode, GroupAggregator};
use crate::error::{RankError, RankResult};
use crate::evaluate::Evaluator;
use crate::model::{Movie, Person, Statistic};
use crate::scoring::PersonScorer;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Executes ranking passes.
///
/// # Usage
///
/// ```
/// use u_cinerank::model::{Movie, Person, Preferences};
/// use u_cinerank::rank::{RankConfig, Ranker};
///
/// let mut drama = Movie::new("tt1", "Drama");
/// drama.genres = vec!["Drama".into()];
/// let mut comedy = Movie::new("tt2", "Comedy");
/// comedy.genres = vec!["Comedy".into()];
///
/// let people = vec![Person::new(
///     "ana",
///     Preferences::new().with_favorite_genre("Comedy", 10),
/// )];
///
/// let ranked = Ranker::rank(vec![drama, comedy], &people, &RankConfig::default()).unwrap();
/// assert_eq!(Ranker::ranked_ids(&ranked), vec!["tt2", "tt1"]);
/// ```
pub struct Ranker;

impl Ranker {
    /// Ranks `movies` for `people`, best first.
    ///
    /// Each returned movie carries its [`Statistic`]. The sort is stable:
    /// movies with equal statistics keep their input order. Running a new
    /// pass overwrites the statistic and leaves every other field alone.
    ///
    /// # Errors
    ///
    /// [`RankError::InvalidConfig`] for invalid bounds, or the first
    /// evaluation error under [`ErrorPolicy::Fail`](crate::scoring::ErrorPolicy::Fail).
    pub fn rank(
        mut movies: Vec<Movie>,
        people: &[Person],
        config: &RankConfig,
    ) -> RankResult<Vec<Movie>> {
        let stats = Self::statistics(&movies, people, config)?;
        for (movie, stat) in movies.iter_mut().zip(stats) {
            movie.statistic = Some(stat);
        }

        movies.sort_by(|a, b| match (b.statistic, a.statistic) {
            (Some(sb), Some(sa)) => sb.total_cmp(&sa),
            _ => std::cmp::Ordering::Equal,
        });

        debug!(
            top = movies.first().map(|m| m.id.as_str()),
            "ranking pass complete"
        );
        Ok(movies)
    }

    /// Returns indices into `movies`, best first, without touching them.
    pub fn rank_indices(
        movies: &[Movie],
        people: &[Person],
        config: &RankConfig,
    ) -> RankResult<Vec<usize>> {
        let stats = Self::statistics(movies, people, config)?;
        let mut indices: Vec<usize> = (0..movies.len()).collect();
        indices.sort_by(|&a, &b| stats[b].total_cmp(&stats[a]));
        Ok(indices)
    }

    /// Computes the group statistic for every movie, in input order.
    pub fn statistics(
        movies: &[Movie],
        people: &[Person],
        config: &RankConfig,
    ) -> RankResult<Vec<Statistic>> {
        config.validate().map_err(RankError::InvalidConfig)?;

        debug!(
            movies = movies.len(),
            people = people.len(),
            mode = ?config.mode,
            penalty = ?config.penalty,
            "ranking pass"
        );

        let aggregator = Self::aggregator(config);
        match config.mode {
            AggregationMode::Points => Ok(aggregator
                .accumulate_points(movies, people, config.parallel)?
                .into_iter()
                .map(Statistic::Points)
                .collect()),
            AggregationMode::Median | AggregationMode::Average => {
                aggregate_each(&aggregator, movies, people, config.parallel)
            }
        }
    }

    /// Movie ids in slice order.
    pub fn ranked_ids(movies: &[Movie]) -> Vec<&str> {
        movies.iter().map(|m| m.id.as_str()).collect()
    }

    fn aggregator(config: &RankConfig) -> GroupAggregator {
        let evaluator = Evaluator::new()
            .with_penalty(config.penalty)
            .with_bounds(config.bounds);
        let scorer = PersonScorer::new()
            .with_evaluator(evaluator)
            .with_error_policy(config.on_error);
        GroupAggregator::new(config.mode).with_scorer(scorer)
    }
}

#[cfg(feature = "parallel")]
fn aggregate_each(
    aggregator: &GroupAggregator,
    movies: &[Movie],
    people: &[Person],
    parallel: bool,
) -> RankResult<Vec<Statistic>> {
    if parallel {
        movies
            .par_iter()
            .map(|m| aggregator.aggregate(m, people))
            .collect()
    } else {
        movies
            .iter()
            .map(|m| aggregator.aggregate(m, people))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn aggregate_each(
    aggregator: &GroupAggregator,
    movies: &[Movie],
    people: &[Person],
    _parallel: bool,
) -> RankResult<Vec<Statistic>> {
    movies
        .iter()
        .map(|m| aggregator.aggregate(m, people))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluate::{Bounds, PenaltyMode};
    use crate::model::Preferences;
    use crate::scoring::ErrorPolicy;
    use proptest::prelude::*;

    fn genre_movie(id: &str, genre: &str) -> Movie {
        Movie {
            id: id.into(),
            genres: vec![genre.into()],
            ..Movie::default()
        }
    }

    fn genre_fans(genres: &[&str]) -> Vec<Person> {
        genres
            .iter()
            .enumerate()
            .map(|(i, g)| Person::new(format!("p{i}"), Preferences::new().with_favorite_genre(*g, 10)))
            .collect()
    }

    #[test]
    fn test_descending_order() {
        let movies = vec![
            genre_movie("horror", "Horror"),
            genre_movie("drama", "Drama"),
            genre_movie("comedy", "Comedy"),
        ];
        let people = genre_fans(&["Drama", "Drama", "Comedy"]);
        let config = RankConfig::default().with_mode(AggregationMode::Average);

        let ranked = Ranker::rank(movies, &people, &config).unwrap();
        assert_eq!(Ranker::ranked_ids(&ranked), vec!["drama", "comedy", "horror"]);

        let values: Vec<f64> = ranked
            .iter()
            .map(|m| m.statistic.unwrap().value())
            .collect();
        assert!((values[0] - 2.0 / 3.0).abs() < 1e-10);
        assert!((values[1] - 1.0 / 3.0).abs() < 1e-10);
        assert!(values[2].abs() < 1e-10);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let movies = vec![
            genre_movie("a", "Horror"),
            genre_movie("b", "Drama"),
            genre_movie("c", "Horror"),
            genre_movie("d", "Drama"),
            genre_movie("e", "Horror"),
        ];
        let people = genre_fans(&["Drama"]);

        for mode in [
            AggregationMode::Median,
            AggregationMode::Average,
            AggregationMode::Points,
        ] {
            let config = RankConfig::default().with_mode(mode);
            let ranked = Ranker::rank(movies.clone(), &people, &config).unwrap();
            assert_eq!(
                Ranker::ranked_ids(&ranked),
                vec!["b", "d", "a", "c", "e"],
                "{mode:?}"
            );

            let indices = Ranker::rank_indices(&movies, &people, &config).unwrap();
            assert_eq!(indices, vec![1, 3, 0, 2, 4], "{mode:?}");
        }
    }

    #[test]
    fn test_no_people_preserves_order() {
        let movies = vec![genre_movie("x", "Drama"), genre_movie("y", "Comedy")];
        let ranked = Ranker::rank(movies, &[], &RankConfig::default()).unwrap();
        assert_eq!(Ranker::ranked_ids(&ranked), vec!["x", "y"]);
        assert!(ranked
            .iter()
            .all(|m| m.statistic == Some(Statistic::Median(0.0))));
    }

    #[test]
    fn test_statistic_variant_follows_mode() {
        let movies = vec![genre_movie("x", "Drama")];
        let people = genre_fans(&["Drama"]);

        let stat = |mode| {
            let config = RankConfig::default().with_mode(mode);
            Ranker::statistics(&movies, &people, &config).unwrap()[0]
        };
        assert_eq!(stat(AggregationMode::Median), Statistic::Median(1.0));
        assert_eq!(stat(AggregationMode::Average), Statistic::Average(1.0));
        assert_eq!(stat(AggregationMode::Points), Statistic::Points(10));
    }

    #[test]
    fn test_repeat_pass_keeps_identity() {
        let movies = vec![genre_movie("x", "Drama"), genre_movie("y", "Comedy")];
        let first = Ranker::rank(movies.clone(), &genre_fans(&["Drama"]), &RankConfig::default())
            .unwrap();
        let second = Ranker::rank(first, &genre_fans(&["Comedy"]), &RankConfig::default())
            .unwrap();

        assert_eq!(Ranker::ranked_ids(&second), vec!["y", "x"]);
        assert!(second[0].same_entity(&movies[1]));
        assert!(second[1].same_entity(&movies[0]));
        assert_eq!(second[0].statistic, Some(Statistic::Median(1.0)));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RankConfig::default().with_bounds(Bounds::default().with_min_year(3000));
        let result = Ranker::rank(vec![genre_movie("x", "Drama")], &[], &config);
        assert!(matches!(result, Err(RankError::InvalidConfig(_))));
    }

    #[test]
    fn test_error_policy_applies_to_pass() {
        let movies = vec![genre_movie("x", "Drama"), genre_movie("y", "Comedy")];
        let people = vec![Person::new(
            "typo",
            Preferences::new()
                .with_favorite_genre("Comedy", 10)
                .with_shorter_than_exclusive("two hours", 10),
        )];

        let strict = RankConfig::default();
        assert!(Ranker::rank(movies.clone(), &people, &strict).is_err());

        let lenient = RankConfig::default().with_error_policy(ErrorPolicy::SkipPreference);
        let ranked = Ranker::rank(movies, &people, &lenient).unwrap();
        assert_eq!(Ranker::ranked_ids(&ranked), vec!["y", "x"]);
    }

    #[test]
    fn test_penalty_mode_changes_order() {
        // Both miss the 2000 cutoff; only the distance penalty can tell
        // them apart, so flat keeps input order.
        let movies = vec![
            Movie {
                id: "old".into(),
                year: 1900,
                ..Movie::default()
            },
            Movie {
                id: "recent".into(),
                year: 1998,
                ..Movie::default()
            },
        ];
        let people = vec![Person::new(
            "modern",
            Preferences::new().with_after_year_inclusive(2000, 10),
        )];

        let flat = RankConfig::default().with_penalty(PenaltyMode::Flat);
        let ranked = Ranker::rank(movies.clone(), &people, &flat).unwrap();
        assert_eq!(Ranker::ranked_ids(&ranked), vec!["old", "recent"]);

        let distance = RankConfig::default().with_penalty(PenaltyMode::Distance);
        let ranked = Ranker::rank(movies, &people, &distance).unwrap();
        assert_eq!(Ranker::ranked_ids(&ranked), vec!["recent", "old"]);
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let movies: Vec<Movie> = (0..30)
            .map(|i| Movie {
                id: format!("m{i}"),
                year: 1950 + i * 2,
                rotten_tomatoes: (i * 3) % 101,
                ..Movie::default()
            })
            .collect();
        let people = vec![
            Person::new("a", Preferences::new().with_after_year_inclusive(1990, 5)),
            Person::new(
                "b",
                Preferences::new().with_minimum_rotten_tomatoes_score_inclusive(40, 3),
            ),
            Person::new("c", Preferences::new().with_before_year_exclusive(1980, 2)),
        ];

        for mode in [
            AggregationMode::Median,
            AggregationMode::Average,
            AggregationMode::Points,
        ] {
            let par = RankConfig::default().with_mode(mode).with_parallel(true);
            let seq = RankConfig::default().with_mode(mode).with_parallel(false);
            assert_eq!(
                Ranker::rank_indices(&movies, &people, &par).unwrap(),
                Ranker::rank_indices(&movies, &people, &seq).unwrap(),
                "{mode:?}"
            );
        }
    }

    proptest! {
        #[test]
        fn prop_ranking_is_sorted(
            years in prop::collection::vec(1888u32..=2024, 1..25),
            threshold in 1900u32..2020,
        ) {
            let movies: Vec<Movie> = years
                .iter()
                .enumerate()
                .map(|(i, &year)| Movie { id: format!("m{i}"), year, ..Movie::default() })
                .collect();
            let people = vec![
                Person::new("a", Preferences::new().with_after_year_inclusive(threshold, 4)),
                Person::new("b", Preferences::new().with_before_year_exclusive(threshold, 1)),
            ];
            let ranked = Ranker::rank(movies, &people, &RankConfig::default()).unwrap();
            for pair in ranked.windows(2) {
                let a = pair[0].statistic.unwrap().value();
                let b = pair[1].statistic.unwrap().value();
                prop_assert!(a >= b);
            }
        }
    }
}
