//! Movie catalog and challenge input.
//!
//! Resolves movie ids to [`Movie`](crate::model::Movie) metadata through a
//! local JSON cache backed by the OMDb API, and reads the challenge
//! document naming the movies and the group.
//!
//! # Key Types
//!
//! - [`MovieSource`]: id-to-movie lookup (implemented by [`OmdbClient`])
//! - [`MovieCache`]: pretty-printed JSON cache file
//! - [`MovieCatalog`]: cache-first lookup that fetches only what is missing
//! - [`ChallengeDocument`]: token, movie ids, and people

mod cache;
mod challenge;
mod error;
mod omdb;
mod source;
mod store;

pub use cache::{MovieCache, DEFAULT_CACHE_FILE};
pub use challenge::{load_challenge, ChallengeDocument, Prompt};
pub use error::{CatalogError, CatalogResult};
pub use omdb::{OmdbClient, OmdbMapper, OmdbMovie, OmdbRating, OMDB_BASE_ENV};
pub use source::MovieSource;
pub use store::MovieCatalog;
