//! Criterion benchmarks for u-cinerank ranking passes.
//!
//! Uses synthetic movies and groups with every preference slot filled so
//! each pass exercises the full evaluator.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_cinerank::aggregate::AggregationMode;
use u_cinerank::model::{ContentRating, Movie, Person, Preferences};
use u_cinerank::rank::{RankConfig, Ranker};

const GENRES: [&str; 6] = ["Action", "Comedy", "Drama", "Horror", "Romance", "Thriller"];
const ACTORS: [&str; 8] = [
    "Chris Evans",
    "Zendaya",
    "Josh Brolin",
    "Robert Pattinson",
    "Florence Pugh",
    "Dev Patel",
    "Viola Davis",
    "Oscar Isaac",
];
const DIRECTORS: [&str; 4] = ["Aaron Kim", "Ridley Scott", "Christopher Nolan", "Greta Gerwig"];
const PLOT_WORDS: [&str; 6] = ["love", "war", "family", "heist", "history", "space"];

// ===========================================================================
// Synthetic data
// ===========================================================================

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

fn random_movie<R: Rng>(rng: &mut R, idx: usize) -> Movie {
    let rating = ContentRating::ALL[rng.random_range(0..ContentRating::ALL.len())];
    Movie {
        id: format!("tt{idx:07}"),
        title: format!("Movie {idx}"),
        year: rng.random_range(1950..=2024),
        rated: rating.label().to_string(),
        runtime: rng.random_range(80..=180),
        genres: (0..2).map(|_| pick(rng, &GENRES).to_string()).collect(),
        director: pick(rng, &DIRECTORS).to_string(),
        actors: (0..4).map(|_| pick(rng, &ACTORS).to_string()).collect(),
        plot: format!(
            "a story about {} and {}",
            pick(rng, &PLOT_WORDS),
            pick(rng, &PLOT_WORDS)
        ),
        rotten_tomatoes: rng.random_range(0..=100),
        statistic: None,
    }
}

fn random_person<R: Rng>(rng: &mut R, idx: usize) -> Person {
    let after = rng.random_range(1960..2010);
    let max_rating = ContentRating::ALL[rng.random_range(0..ContentRating::ALL.len())];
    let prefs = Preferences::new()
        .with_after_year_inclusive(after, rng.random_range(1..50))
        .with_before_year_exclusive(after + 15, rng.random_range(1..50))
        .with_maximum_age_rating_inclusive(max_rating.label(), rng.random_range(1..50))
        .with_shorter_than_exclusive(
            format!("{}h{}m0s", rng.random_range(1..3), rng.random_range(0..60)),
            rng.random_range(1..50),
        )
        .with_favorite_genre(pick(rng, &GENRES), rng.random_range(1..50))
        .with_least_favorite_director(pick(rng, &DIRECTORS), rng.random_range(1..50))
        .with_favorite_actors(
            [pick(rng, &ACTORS), pick(rng, &ACTORS)],
            rng.random_range(1..50),
        )
        .with_favorite_plot_elements([pick(rng, &PLOT_WORDS)], rng.random_range(1..50))
        .with_minimum_rotten_tomatoes_score_inclusive(
            rng.random_range(40..95),
            rng.random_range(1..50),
        );
    Person::new(format!("p{idx}"), prefs)
}

fn workload(movies: usize, people: usize) -> (Vec<Movie>, Vec<Person>) {
    let mut rng = StdRng::seed_from_u64(42);
    let movies = (0..movies).map(|i| random_movie(&mut rng, i)).collect();
    let people = (0..people).map(|i| random_person(&mut rng, i)).collect();
    (movies, people)
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_rank_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_modes");
    group.sample_size(20);

    let (movies, people) = workload(200, 20);
    for mode in [
        AggregationMode::Median,
        AggregationMode::Average,
        AggregationMode::Points,
    ] {
        let config = RankConfig::default().with_mode(mode);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{mode:?}")),
            &config,
            |b, c| {
                b.iter(|| {
                    let result = Ranker::rank(black_box(movies.clone()), black_box(&people), c);
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_parallel_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_scaling");
    group.sample_size(10);

    for (m, p) in [(100usize, 10usize), (500, 20), (1000, 50)] {
        let (movies, people) = workload(m, p);
        for parallel in [false, true] {
            let config = RankConfig::default().with_parallel(parallel);
            group.bench_with_input(
                BenchmarkId::new(format!("m{}_p{}", m, p), parallel),
                &config,
                |b, c| {
                    b.iter(|| {
                        let result =
                            Ranker::rank_indices(black_box(&movies), black_box(&people), c);
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_rank_modes, bench_parallel_scaling);
criterion_main!(benches);
