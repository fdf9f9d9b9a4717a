//! HTTP handlers for movies. Movies are read-only over HTTP.

use super::parse_item_id;
use crate::{
    errors::AppError,
    models::movie::{Movie, MovieFilter},
    services::catalog_service::CatalogService,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query params accepted by `GET /movies/`.
///
/// Kept as strings: an empty value (`?genre_id=`) means "no filter", and a
/// value that cannot equal any integer id simply matches nothing.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MoviesQuery {
    /// Only movies by this director
    pub director_id: Option<String>,
    /// Only movies of this genre
    pub genre_id: Option<String>,
}

/// One parsed filter parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
enum IdFilter {
    Unset,
    Id(i64),
    /// No row can match, e.g. `abc` or `3.5`.
    Unmatchable,
}

impl MoviesQuery {
    /// `None` when some filter can never match, so the result is empty.
    fn into_filter(self) -> Option<MovieFilter> {
        let director_id = parse_filter(self.director_id.as_deref());
        let genre_id = parse_filter(self.genre_id.as_deref());

        let resolve = |f: IdFilter| match f {
            IdFilter::Unset => Some(None),
            IdFilter::Id(id) => Some(Some(id)),
            IdFilter::Unmatchable => None,
        };

        Some(MovieFilter {
            director_id: resolve(director_id)?,
            genre_id: resolve(genre_id)?,
        })
    }
}

/// GET `/movies/` — supports ?director_id=&genre_id=, combined with AND.
#[utoipa::path(
    get,
    path = "/movies/",
    tag = "movies",
    params(MoviesQuery),
    responses((status = 200, description = "Matching movies, by id", body = Vec<Movie>))
)]
pub async fn list_movies(
    State(service): State<CatalogService>,
    Query(q): Query<MoviesQuery>,
) -> Result<Json<Vec<Movie>>, AppError> {
    match q.into_filter() {
        Some(filter) => Ok(Json(service.list_movies(&filter).await?)),
        None => Ok(Json(Vec::new())),
    }
}

/// GET `/movies/{id}`
#[utoipa::path(
    get,
    path = "/movies/{id}",
    tag = "movies",
    params(("id" = i64, Path, description = "Movie id")),
    responses(
        (status = 200, description = "The movie", body = Movie),
        (status = 404, description = "No such movie", body = String)
    )
)]
pub async fn get_movie(
    State(service): State<CatalogService>,
    Path(raw_id): Path<String>,
) -> Result<Json<Movie>, AppError> {
    let id = parse_item_id("movie", &raw_id)?;
    Ok(Json(service.get_movie(id).await?))
}

/// Integers match as is; integral decimals such as `3.0` match id 3.
fn parse_filter(raw: Option<&str>) -> IdFilter {
    let value = match raw.map(str::trim) {
        None | Some("") => return IdFilter::Unset,
        Some(value) => value,
    };

    if let Ok(id) = value.parse::<i64>() {
        return IdFilter::Id(id);
    }

    match value.parse::<f64>() {
        Ok(f) if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            IdFilter::Id(f as i64)
        }
        _ => IdFilter::Unmatchable,
    }
}
