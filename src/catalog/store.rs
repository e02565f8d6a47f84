use super::cache::MovieCache;
use super::error::CatalogResult;
use super::source::MovieSource;
use crate::model::Movie;
use std::collections::HashMap;
use tracing::debug;

/// Cache-first movie lookup backed by a [`MovieSource`].
pub struct MovieCatalog<S> {
    source: S,
    cache: MovieCache,
}

impl<S: MovieSource> MovieCatalog<S> {
    pub fn new(source: S, cache: MovieCache) -> Self {
        Self { source, cache }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache(&self) -> &MovieCache {
        &self.cache
    }

    /// Returns the movies for `ids`, in request order.
    ///
    /// Cached movies are used as-is. Missing ids are fetched from the
    /// source one at a time, and the merged set is written back to the
    /// cache. When every id is cached the source is never called and the
    /// cache file is left untouched.
    pub fn fetch_movies(&self, ids: &[String]) -> CatalogResult<Vec<Movie>> {
        let mut entries = self.cache.entries()?;
        let cached = entries.len();
        let mut known: HashMap<String, usize> = entries
            .iter()
            .enumerate()
            .map(|(i, m)| (m.id.clone(), i))
            .collect();

        let mut out = Vec::with_capacity(ids.len());
        for id in ids {
            let idx = match known.get(id) {
                Some(&idx) => idx,
                None => {
                    let movie = self.source.fetch(id)?;
                    entries.push(movie);
                    known.insert(id.clone(), entries.len() - 1);
                    entries.len() - 1
                }
            };
            out.push(entries[idx].clone());
        }

        let fetched = entries.len() - cached;
        debug!(requested = ids.len(), fetched, "resolved movies");
        if fetched > 0 {
            self.cache.store(&entries)?;
        }
        Ok(out)
    }
}
