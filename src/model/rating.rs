//! Content rating ladder.

use std::fmt;

/// Content ratings, ordered from most to least permissive audience.
///
/// Labels are matched exactly and case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContentRating {
    G,
    Pg,
    Pg13,
    R,
    Nc17,
}

impl ContentRating {
    /// All ratings in ascending rank order.
    pub const ALL: [ContentRating; 5] = [
        ContentRating::G,
        ContentRating::Pg,
        ContentRating::Pg13,
        ContentRating::R,
        ContentRating::Nc17,
    ];

    /// Looks up a rating by its label (`"G"`, `"PG"`, `"PG-13"`, `"R"`, `"NC-17"`).
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.label() == label)
    }

    /// The canonical label.
    pub fn label(self) -> &'static str {
        match self {
            ContentRating::G => "G",
            ContentRating::Pg => "PG",
            ContentRating::Pg13 => "PG-13",
            ContentRating::R => "R",
            ContentRating::Nc17 => "NC-17",
        }
    }

    /// Position on the ladder: `G = 0` through `NC-17 = 4`.
    pub fn rank(self) -> u32 {
        self as u32
    }

    /// Rank of a raw label.
    ///
    /// Unrecognized labels (`"Not Rated"`, `"TV-MA"`, `"pg"`, ...) rank 0,
    /// the same as `G`.
    pub fn rank_of(label: &str) -> u32 {
        Self::from_label(label).map_or(0, Self::rank)
    }
}

impl fmt::Display for ContentRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
