use super::dto::OmdbMovie;
use super::mapper::OmdbMapper;
use crate::catalog::error::{CatalogError, CatalogResult};
use crate::catalog::source::MovieSource;
use crate::model::Movie;
use reqwest::blocking::Client;
use std::time::Duration;
use tracing::info;

/// Environment variable holding the OMDb base URL (including the API key).
pub const OMDB_BASE_ENV: &str = "OMDB_BASE";

/// Blocking OMDb lookup by IMDb id.
pub struct OmdbClient {
    client: Client,
    base_url: String,
}

impl OmdbClient {
    /// Creates a client for `base_url`, e.g. `https://www.omdbapi.com/?apikey=KEY`.
    ///
    /// Requests go to `{base_url}&i={id}`.
    pub fn new(base_url: impl Into<String>) -> CatalogResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("u-cinerank/0.1")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Reads the base URL from `OMDB_BASE`, loading `.env` first if present.
    pub fn from_env() -> CatalogResult<Self> {
        // A missing .env is fine; the variable may come from the process environment.
        let _ = dotenvy::dotenv();
        let base = std::env::var(OMDB_BASE_ENV).map_err(|_| CatalogError::MissingEnv(OMDB_BASE_ENV))?;
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, id: &str) -> String {
        format!("{}&i={}", self.base_url, id)
    }
}

impl MovieSource for OmdbClient {
    fn fetch(&self, id: &str) -> CatalogResult<Movie> {
        info!(id, "fetching movie from OMDb");
        let dto: OmdbMovie = self
            .client
            .get(self.url_for(id))
            .send()?
            .error_for_status()?
            .json()?;
        OmdbMapper::to_domain(id, dto)
    }
}
