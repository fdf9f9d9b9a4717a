//! Generated OpenAPI description of the catalog, served at `/swagger.json`.

use crate::{
    handlers::{
        movie_handlers,
        named_handlers::{directors, genres},
    },
    models::{
        movie::Movie,
        named::{NamedPayload, NamedRecord},
    },
};
use axum::Json;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie catalog API",
        description = "Movies, directors and genres. Movies are read-only."
    ),
    paths(
        movie_handlers::list_movies,
        movie_handlers::get_movie,
        directors::list,
        directors::create,
        directors::fetch,
        directors::replace,
        directors::patch,
        directors::remove,
        genres::list,
        genres::create,
        genres::fetch,
        genres::replace,
        genres::patch,
        genres::remove
    ),
    components(schemas(Movie, NamedRecord, NamedPayload)),
    tags(
        (name = "movies", description = "Movie listing and lookup"),
        (name = "directors", description = "Director CRUD"),
        (name = "genres", description = "Genre CRUD")
    )
)]
pub struct ApiDoc;

/// `GET /swagger.json`
pub async fn swagger_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
