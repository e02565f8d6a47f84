use super::dto::OmdbMovie;
use crate::catalog::error::{CatalogError, CatalogResult};
use crate::model::Movie;

const ROTTEN_TOMATOES: &str = "Rotten Tomatoes";

pub struct OmdbMapper;

impl OmdbMapper {
    /// Converts an OMDb record into a [`Movie`] with the given id.
    pub fn to_domain(id: &str, dto: OmdbMovie) -> CatalogResult<Movie> {
        if dto.response.as_deref() == Some("False") {
            return Err(CatalogError::Upstream {
                id: id.to_string(),
                message: dto.error.unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        let year = parse_number("Year", &dto.year)?;
        let runtime = parse_number("Runtime", dto.runtime.trim_end_matches(" min"))?;
        let rotten_tomatoes = Self::rotten_tomatoes(id, &dto)?;

        Ok(Movie {
            id: id.to_string(),
            title: dto.title,
            year,
            rated: dto.rated,
            runtime,
            genres: split_list(&dto.genre),
            director: dto.director,
            actors: split_list(&dto.actors),
            plot: dto.plot,
            rotten_tomatoes,
            statistic: None,
        })
    }

    fn rotten_tomatoes(id: &str, dto: &OmdbMovie) -> CatalogResult<u32> {
        let rating = dto
            .ratings
            .iter()
            .find(|r| r.source == ROTTEN_TOMATOES)
            .ok_or_else(|| CatalogError::MissingRottenTomatoes { id: id.to_string() })?;
        parse_number("Rotten Tomatoes", rating.value.trim_end_matches('%'))
    }
}

fn parse_number(field: &'static str, text: &str) -> CatalogResult<u32> {
    text.parse().map_err(|_| CatalogError::InvalidField {
        field,
        value: text.to_string(),
    })
}

fn split_list(text: &str) -> Vec<String> {
    text.split(", ").map(str::to_string).collect()
}
