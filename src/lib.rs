//! Group movie ranking engine.
//!
//! Scores a list of movies against the weighted preferences of a group of
//! people and orders the movies from most to least satisfying for the
//! group as a whole:
//!
//! - **Evaluate**: check one preference slot against one movie, with flat
//!   or distance-graduated penalties for unmet thresholds.
//! - **Score**: fold one person's evaluations into a satisfaction
//!   proportion in `[0, 1]` or an integer point total.
//! - **Aggregate**: reduce the group to a median, mean, or summed-points
//!   statistic per movie.
//! - **Rank**: attach the statistic and stable-sort descending.
//! - **Catalog** (feature `catalog`): resolve movie ids through a local
//!   JSON cache backed by the OMDb API, and read the challenge document.
//!
//! # Quick Start
//!
//! ```
//! use u_cinerank::model::{Movie, Person, Preferences};
//! use u_cinerank::rank::{RankConfig, Ranker};
//!
//! let mut old = Movie::new("tt1", "Old");
//! old.year = 1950;
//! let mut new = Movie::new("tt2", "New");
//! new.year = 2015;
//!
//! let group = vec![
//!     Person::new("ana", Preferences::new().with_after_year_inclusive(2000, 10)),
//!     Person::new("ben", Preferences::new().with_after_year_inclusive(1990, 5)),
//! ];
//!
//! let ranked = Ranker::rank(vec![old, new], &group, &RankConfig::default()).unwrap();
//! assert_eq!(Ranker::ranked_ids(&ranked), vec!["tt2", "tt1"]);
//! ```

pub mod aggregate;
#[cfg(feature = "catalog")]
pub mod catalog;
pub mod error;
pub mod evaluate;
pub mod model;
pub mod rank;
pub mod runtime;
pub mod scoring;

pub use error::{RankError, RankResult};
pub use model::{Movie, Person, Preferences, Statistic};
pub use rank::{RankConfig, Ranker};
