//! Weighted preference slots.
//!
//! A [`Preferences`] bundle has nine independently optional slots. The
//! scorer never inspects the struct fields directly; it walks
//! [`Preferences::iter`], which yields one [`ActivePreference`] per present
//! slot in [`PreferenceKind::ALL`] order.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A preference value paired with its importance.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Preference<T> {
    /// The threshold or target the movie is compared against.
    pub value: T,
    /// Non-negative importance. Also the denominator contribution.
    pub weight: u32,
}

impl<T> Preference<T> {
    pub fn new(value: T, weight: u32) -> Self {
        Self { value, weight }
    }
}

/// The nine preference slots, in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PreferenceKind {
    AfterYearInclusive,
    BeforeYearExclusive,
    MaximumAgeRatingInclusive,
    ShorterThanExclusive,
    FavoriteGenre,
    LeastFavoriteDirector,
    FavoriteActors,
    FavoritePlotElements,
    MinimumRottenTomatoesScoreInclusive,
}

impl PreferenceKind {
    pub const ALL: [PreferenceKind; 9] = [
        PreferenceKind::AfterYearInclusive,
        PreferenceKind::BeforeYearExclusive,
        PreferenceKind::MaximumAgeRatingInclusive,
        PreferenceKind::ShorterThanExclusive,
        PreferenceKind::FavoriteGenre,
        PreferenceKind::LeastFavoriteDirector,
        PreferenceKind::FavoriteActors,
        PreferenceKind::FavoritePlotElements,
        PreferenceKind::MinimumRottenTomatoesScoreInclusive,
    ];

    /// Name used in challenge documents.
    pub fn wire_name(self) -> &'static str {
        match self {
            PreferenceKind::AfterYearInclusive => "afterYear(inclusive)",
            PreferenceKind::BeforeYearExclusive => "beforeYear(exclusive)",
            PreferenceKind::MaximumAgeRatingInclusive => "maximumAgeRating(inclusive)",
            PreferenceKind::ShorterThanExclusive => "shorterThan(exclusive)",
            PreferenceKind::FavoriteGenre => "favoriteGenre",
            PreferenceKind::LeastFavoriteDirector => "leastFavoriteDirector",
            PreferenceKind::FavoriteActors => "favoriteActors",
            PreferenceKind::FavoritePlotElements => "favoritePlotElements",
            PreferenceKind::MinimumRottenTomatoesScoreInclusive => {
                "minimumRottenTomatoesScore(inclusive)"
            }
        }
    }

    /// Whether unmet values of this kind can take a graduated distance
    /// penalty.
    pub fn has_distance_form(self) -> bool {
        matches!(
            self,
            PreferenceKind::AfterYearInclusive
                | PreferenceKind::BeforeYearExclusive
                | PreferenceKind::MaximumAgeRatingInclusive
                | PreferenceKind::ShorterThanExclusive
                | PreferenceKind::MinimumRottenTomatoesScoreInclusive
        )
    }
}

impl fmt::Display for PreferenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A present preference slot, borrowed from a [`Preferences`] bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivePreference<'a> {
    AfterYearInclusive(&'a Preference<u32>),
    BeforeYearExclusive(&'a Preference<u32>),
    MaximumAgeRatingInclusive(&'a Preference<String>),
    ShorterThanExclusive(&'a Preference<String>),
    FavoriteGenre(&'a Preference<String>),
    LeastFavoriteDirector(&'a Preference<String>),
    FavoriteActors(&'a Preference<Vec<String>>),
    FavoritePlotElements(&'a Preference<Vec<String>>),
    MinimumRottenTomatoesScoreInclusive(&'a Preference<u32>),
}

impl ActivePreference<'_> {
    pub fn kind(&self) -> PreferenceKind {
        match self {
            ActivePreference::AfterYearInclusive(_) => PreferenceKind::AfterYearInclusive,
            ActivePreference::BeforeYearExclusive(_) => PreferenceKind::BeforeYearExclusive,
            ActivePreference::MaximumAgeRatingInclusive(_) => {
                PreferenceKind::MaximumAgeRatingInclusive
            }
            ActivePreference::ShorterThanExclusive(_) => PreferenceKind::ShorterThanExclusive,
            ActivePreference::FavoriteGenre(_) => PreferenceKind::FavoriteGenre,
            ActivePreference::LeastFavoriteDirector(_) => PreferenceKind::LeastFavoriteDirector,
            ActivePreference::FavoriteActors(_) => PreferenceKind::FavoriteActors,
            ActivePreference::FavoritePlotElements(_) => PreferenceKind::FavoritePlotElements,
            ActivePreference::MinimumRottenTomatoesScoreInclusive(_) => {
                PreferenceKind::MinimumRottenTomatoesScoreInclusive
            }
        }
    }

    /// The declared weight of the slot.
    pub fn weight(&self) -> u32 {
        match self {
            ActivePreference::AfterYearInclusive(p)
            | ActivePreference::BeforeYearExclusive(p)
            | ActivePreference::MinimumRottenTomatoesScoreInclusive(p) => p.weight,
            ActivePreference::MaximumAgeRatingInclusive(p)
            | ActivePreference::ShorterThanExclusive(p)
            | ActivePreference::FavoriteGenre(p)
            | ActivePreference::LeastFavoriteDirector(p) => p.weight,
            ActivePreference::FavoriteActors(p) | ActivePreference::FavoritePlotElements(p) => {
                p.weight
            }
        }
    }
}

/// A person's preference bundle.
///
/// Unset slots are skipped entirely by scoring: they add nothing to the
/// satisfaction sum or to the weight denominator.
///
/// # Examples
///
/// ```
/// use u_cinerank::model::{PreferenceKind, Preferences};
///
/// let prefs = Preferences::new()
///     .with_after_year_inclusive(2000, 10)
///     .with_favorite_genre("Action", 5);
///
/// let kinds: Vec<PreferenceKind> = prefs.iter().map(|p| p.kind()).collect();
/// assert_eq!(
///     kinds,
///     vec![PreferenceKind::AfterYearInclusive, PreferenceKind::FavoriteGenre]
/// );
/// assert_eq!(prefs.total_weight(), 15);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Preferences {
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "afterYear(inclusive)",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub after_year_inclusive: Option<Preference<u32>>,

    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "beforeYear(exclusive)",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub before_year_exclusive: Option<Preference<u32>>,

    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "maximumAgeRating(inclusive)",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub maximum_age_rating_inclusive: Option<Preference<String>>,

    /// Runtime threshold as `<H>h<M>m<S>s`.
    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "shorterThan(exclusive)",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub shorter_than_exclusive: Option<Preference<String>>,

    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "favoriteGenre",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub favorite_genre: Option<Preference<String>>,

    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "leastFavoriteDirector",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub least_favorite_director: Option<Preference<String>>,

    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "favoriteActors",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub favorite_actors: Option<Preference<Vec<String>>>,

    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "favoritePlotElements",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub favorite_plot_elements: Option<Preference<Vec<String>>>,

    #[cfg_attr(
        feature = "serde",
        serde(
            rename = "minimumRottenTomatoesScore(inclusive)",
            default,
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub minimum_rotten_tomatoes_score_inclusive: Option<Preference<u32>>,
}

impl Preferences {
    /// Creates an empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_after_year_inclusive(mut self, year: u32, weight: u32) -> Self {
        self.after_year_inclusive = Some(Preference::new(year, weight));
        self
    }

    pub fn with_before_year_exclusive(mut self, year: u32, weight: u32) -> Self {
        self.before_year_exclusive = Some(Preference::new(year, weight));
        self
    }

    pub fn with_maximum_age_rating_inclusive(
        mut self,
        rating: impl Into<String>,
        weight: u32,
    ) -> Self {
        self.maximum_age_rating_inclusive = Some(Preference::new(rating.into(), weight));
        self
    }

    pub fn with_shorter_than_exclusive(mut self, runtime: impl Into<String>, weight: u32) -> Self {
        self.shorter_than_exclusive = Some(Preference::new(runtime.into(), weight));
        self
    }

    pub fn with_favorite_genre(mut self, genre: impl Into<String>, weight: u32) -> Self {
        self.favorite_genre = Some(Preference::new(genre.into(), weight));
        self
    }

    pub fn with_least_favorite_director(
        mut self,
        director: impl Into<String>,
        weight: u32,
    ) -> Self {
        self.least_favorite_director = Some(Preference::new(director.into(), weight));
        self
    }

    pub fn with_favorite_actors<I, S>(mut self, actors: I, weight: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let actors = actors.into_iter().map(Into::into).collect();
        self.favorite_actors = Some(Preference::new(actors, weight));
        self
    }

    pub fn with_favorite_plot_elements<I, S>(mut self, elements: I, weight: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let elements = elements.into_iter().map(Into::into).collect();
        self.favorite_plot_elements = Some(Preference::new(elements, weight));
        self
    }

    pub fn with_minimum_rotten_tomatoes_score_inclusive(mut self, score: u32, weight: u32) -> Self {
        self.minimum_rotten_tomatoes_score_inclusive = Some(Preference::new(score, weight));
        self
    }

    /// Iterates present slots in [`PreferenceKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = ActivePreference<'_>> {
        [
            self.after_year_inclusive
                .as_ref()
                .map(ActivePreference::AfterYearInclusive),
            self.before_year_exclusive
                .as_ref()
                .map(ActivePreference::BeforeYearExclusive),
            self.maximum_age_rating_inclusive
                .as_ref()
                .map(ActivePreference::MaximumAgeRatingInclusive),
            self.shorter_than_exclusive
                .as_ref()
                .map(ActivePreference::ShorterThanExclusive),
            self.favorite_genre
                .as_ref()
                .map(ActivePreference::FavoriteGenre),
            self.least_favorite_director
                .as_ref()
                .map(ActivePreference::LeastFavoriteDirector),
            self.favorite_actors
                .as_ref()
                .map(ActivePreference::FavoriteActors),
            self.favorite_plot_elements
                .as_ref()
                .map(ActivePreference::FavoritePlotElements),
            self.minimum_rotten_tomatoes_score_inclusive
                .as_ref()
                .map(ActivePreference::MinimumRottenTomatoesScoreInclusive),
        ]
        .into_iter()
        .flatten()
    }

    /// Returns the slot for `kind`, if set.
    pub fn get(&self, kind: PreferenceKind) -> Option<ActivePreference<'_>> {
        self.iter().find(|p| p.kind() == kind)
    }

    /// Number of present slots.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    /// Sum of the weights of present slots.
    pub fn total_weight(&self) -> u64 {
        self.iter().map(|p| u64::from(p.weight())).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bundle_has_no_slots() {
        let prefs = Preferences::new();
        assert!(prefs.is_empty());
        assert_eq!(prefs.len(), 0);
        assert_eq!(prefs.total_weight(), 0);
        assert_eq!(prefs.iter().count(), 0);
    }

    #[test]
    fn test_iteration_follows_kind_order() {
        // Built out of order on purpose.
        let prefs = Preferences::new()
            .with_minimum_rotten_tomatoes_score_inclusive(70, 1)
            .with_favorite_actors(["Chris Evans"], 2)
            .with_after_year_inclusive(2000, 3);

        let kinds: Vec<PreferenceKind> = prefs.iter().map(|p| p.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                PreferenceKind::AfterYearInclusive,
                PreferenceKind::FavoriteActors,
                PreferenceKind::MinimumRottenTomatoesScoreInclusive,
            ]
        );
        assert_eq!(prefs.total_weight(), 6);
    }

    #[test]
    fn test_get_by_kind() {
        let prefs = Preferences::new().with_favorite_genre("Drama", 4);

        match prefs.get(PreferenceKind::FavoriteGenre) {
            Some(ActivePreference::FavoriteGenre(p)) => {
                assert_eq!(p.value, "Drama");
                assert_eq!(p.weight, 4);
            }
            other => panic!("unexpected slot: {other:?}"),
        }
        assert!(prefs.get(PreferenceKind::FavoriteActors).is_none());
    }

    #[test]
    fn test_zero_weight_slot_is_still_present() {
        let prefs = Preferences::new().with_favorite_genre("Drama", 0);
        assert_eq!(prefs.len(), 1);
        assert_eq!(prefs.total_weight(), 0);
    }

    #[test]
    fn test_distance_form_kinds() {
        let graduated: Vec<PreferenceKind> = PreferenceKind::ALL
            .into_iter()
            .filter(|k| k.has_distance_form())
            .collect();
        assert_eq!(graduated.len(), 5);
        assert!(!PreferenceKind::FavoriteGenre.has_distance_form());
        assert!(!PreferenceKind::LeastFavoriteDirector.has_distance_form());
    }

    #[test]
    fn test_wire_names_are_unique() {
        let mut names: Vec<&str> = PreferenceKind::ALL.iter().map(|k| k.wire_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 9);
    }
}
