//! On-disk movie cache.

use super::error::CatalogResult;
use crate::model::Movie;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default cache file name.
pub const DEFAULT_CACHE_FILE: &str = "movies.json";

/// JSON file holding an array of movies.
///
/// The file is pretty-printed with two-space indentation and uses the
/// [`Movie`] field names (`ID`, `Title`, ...). Ranking statistics are
/// never written.
#[derive(Debug, Clone)]
pub struct MovieCache {
    path: PathBuf,
}

impl MovieCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All cached movies in file order. A missing file is an empty cache.
    pub fn entries(&self) -> CatalogResult<Vec<Movie>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no movie cache");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_str(&text)?)
    }

    /// Cached movies keyed by id.
    pub fn load(&self) -> CatalogResult<HashMap<String, Movie>> {
        Ok(self
            .entries()?
            .into_iter()
            .map(|m| (m.id.clone(), m))
            .collect())
    }

    /// Replaces the cache file with `movies`.
    pub fn store(&self, movies: &[Movie]) -> CatalogResult<()> {
        let data = serde_json::to_string_pretty(movies)?;
        fs::write(&self.path, data)?;
        debug!(path = %self.path.display(), count = movies.len(), "stored movie cache");
        Ok(())
    }
}

impl Default for MovieCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_FILE)
    }
}
