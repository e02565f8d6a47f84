//! Movie and person entities.

use super::preferences::Preferences;
use super::rating::ContentRating;
use std::cmp::Ordering;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize};

/// The group-level value a ranking pass attaches to a movie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Statistic {
    /// Median of per-person satisfaction proportions.
    Median(f64),
    /// Mean of per-person satisfaction proportions.
    Average(f64),
    /// Summed per-person points.
    Points(i64),
}

impl Statistic {
    /// The statistic as a sortable float.
    pub fn value(self) -> f64 {
        match self {
            Statistic::Median(v) | Statistic::Average(v) => v,
            Statistic::Points(p) => p as f64,
        }
    }

    /// Total order on statistics. Point totals compare as integers.
    pub fn total_cmp(&self, other: &Statistic) -> Ordering {
        match (self, other) {
            (Statistic::Points(a), Statistic::Points(b)) => a.cmp(b),
            _ => self.value().total_cmp(&other.value()),
        }
    }
}

/// A movie with the metadata preferences are evaluated against.
///
/// Serialized field names match the cache file written by the catalog
/// (`ID`, `Title`, `Year`, ...). The `statistic` field belongs to the
/// current ranking pass and is never serialized.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "PascalCase"))]
pub struct Movie {
    #[cfg_attr(feature = "serde", serde(rename = "ID"))]
    pub id: String,
    pub title: String,
    pub year: u32,
    /// Content rating label, e.g. `"PG-13"`.
    pub rated: String,
    /// Runtime in whole minutes.
    pub runtime: u32,
    pub genres: Vec<String>,
    pub director: String,
    pub actors: Vec<String>,
    pub plot: String,
    /// Rotten Tomatoes score, 0–100.
    pub rotten_tomatoes: u32,

    #[cfg_attr(feature = "serde", serde(skip))]
    pub statistic: Option<Statistic>,
}

impl Movie {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Rank of the content rating (unknown labels rank 0).
    pub fn rating_rank(&self) -> u32 {
        ContentRating::rank_of(&self.rated)
    }

    /// Whether every identity field matches, ignoring the ranking statistic.
    pub fn same_entity(&self, other: &Movie) -> bool {
        Movie {
            statistic: None,
            ..self.clone()
        } == Movie {
            statistic: None,
            ..other.clone()
        }
    }
}

/// A member of the group being recommended for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Person {
    pub name: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "null_as_default")
    )]
    pub preferences: Preferences,
}

impl Person {
    pub fn new(name: impl Into<String>, preferences: Preferences) -> Self {
        Self {
            name: name.into(),
            preferences,
        }
    }
}

#[cfg(feature = "serde")]
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
