//! Catalog errors.

use thiserror::Error;

/// Failure while loading movies or the challenge document.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("invalid {field}: {value:?}")]
    InvalidField { field: &'static str, value: String },

    #[error("no Rotten Tomatoes rating for {id}")]
    MissingRottenTomatoes { id: String },

    #[error("upstream rejected {id}: {message}")]
    Upstream { id: String, message: String },
}

pub type CatalogResult<T> = Result<T, CatalogError>;
