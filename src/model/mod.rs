//! Domain entities: movies, people, and their preference bundles.
//!
//! # Key Types
//!
//! - [`Movie`]: catalog metadata plus the per-pass [`Statistic`]
//! - [`Person`]: a named [`Preferences`] bundle
//! - [`Preference`]: a `(value, weight)` pair
//! - [`ActivePreference`]: a borrowed, present slot tagged by [`PreferenceKind`]
//! - [`ContentRating`]: the `G` .. `NC-17` ladder

mod preferences;
mod rating;
mod types;

pub use preferences::{ActivePreference, Preference, PreferenceKind, Preferences};
pub use rating::ContentRating;
pub use types::{Movie, Person, Statistic};
