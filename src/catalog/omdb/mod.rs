//! OMDb remote catalog.

mod client;
mod dto;
mod mapper;

pub use client::{OmdbClient, OMDB_BASE_ENV};
pub use dto::{OmdbMovie, OmdbRating};
pub use mapper::OmdbMapper;
