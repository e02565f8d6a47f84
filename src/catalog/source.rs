use super::error::CatalogResult;
use crate::model::Movie;

/// Resolves a movie id to its metadata.
pub trait MovieSource {
    fn fetch(&self, id: &str) -> CatalogResult<Movie>;
}

impl<S: MovieSource + ?Sized> MovieSource for &S {
    fn fetch(&self, id: &str) -> CatalogResult<Movie> {
        (**self).fetch(id)
    }
}
