//! Per-kind match predicates and penalty arithmetic.

use std::collections::HashSet;

pub(crate) fn is_after_year_inclusive(movie_year: u32, pref_year: u32) -> bool {
    movie_year >= pref_year
}

pub(crate) fn is_before_year_exclusive(movie_year: u32, pref_year: u32) -> bool {
    movie_year < pref_year
}

pub(crate) fn is_maximum_age_rating_inclusive(movie_rank: u32, pref_rank: u32) -> bool {
    movie_rank <= pref_rank
}

pub(crate) fn is_shorter_than_exclusive(movie_runtime: f64, pref_runtime: f64) -> bool {
    movie_runtime < pref_runtime
}

pub(crate) fn is_favorite_genre(movie_genres: &[String], pref_genre: &str) -> bool {
    movie_genres.iter().any(|g| g == pref_genre)
}

pub(crate) fn is_least_favorite_director(movie_director: &str, pref_director: &str) -> bool {
    movie_director == pref_director
}

pub(crate) fn is_minimum_score_inclusive(movie_score: u32, pref_score: u32) -> bool {
    movie_score >= pref_score
}

/// Number of preferred actors that appear in the cast.
///
/// Each preferred entry is counted, so a duplicated favorite counts twice.
pub(crate) fn count_actor_matches(movie_actors: &[String], pref_actors: &[String]) -> usize {
    let cast: HashSet<&str> = movie_actors.iter().map(String::as_str).collect();
    pref_actors
        .iter()
        .filter(|a| cast.contains(a.as_str()))
        .count()
}

/// Number of preferred plot elements that occur as substrings of the plot.
pub(crate) fn count_plot_matches(movie_plot: &str, pref_elements: &[String]) -> usize {
    pref_elements
        .iter()
        .filter(|e| movie_plot.contains(e.as_str()))
        .count()
}

/// `matches / total`, or `0.0` when there is nothing to match against.
pub(crate) fn match_ratio(matches: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matches as f64 / total as f64
    }
}

/// Graduated penalty for a value that missed its edge.
///
/// `-weight * |actual - edge| / |bound - edge|`. When the bound coincides
/// with the edge the span is empty and the penalty is a flat `-weight`.
pub(crate) fn distance_penalty(actual: f64, edge: f64, bound: f64, weight: f64) -> f64 {
    let span = (bound - edge).abs();
    if span == 0.0 {
        return -weight;
    }
    -weight * ((actual - edge).abs() / span)
}
