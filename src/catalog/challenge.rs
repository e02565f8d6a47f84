//! Challenge document input.

use super::error::CatalogResult;
use crate::model::Person;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// The ranking request: a token, the movie ids to rank, and the group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChallengeDocument {
    pub token: String,
    pub prompt: Prompt,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    #[serde(default)]
    pub movies: Vec<String>,
    #[serde(default)]
    pub people: Vec<Person>,
}

impl ChallengeDocument {
    pub fn from_json(text: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Reads a challenge document from `path`.
pub fn load_challenge(path: impl AsRef<Path>) -> CatalogResult<ChallengeDocument> {
    let path = path.as_ref();
    let doc = ChallengeDocument::from_json(&fs::read_to_string(path)?)?;
    debug!(
        path = %path.display(),
        movies = doc.prompt.movies.len(),
        people = doc.prompt.people.len(),
        "loaded challenge"
    );
    Ok(doc)
}
