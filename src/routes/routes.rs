//! Defines routes for the catalog API.
//!
//! ## Structure
//! - **Movies** (read-only)
//!   - `GET    /movies/`      — list movies (supports director_id, genre_id)
//!   - `GET    /movies/{id}`  — fetch one movie
//!
//! - **Directors** and **Genres** (same shape, see `named_handlers`)
//!   - `GET    /directors/`      — list
//!   - `POST   /directors/`      — create
//!   - `GET    /directors/{id}`  — fetch one
//!   - `PUT    /directors/{id}`  — full update
//!   - `PATCH  /directors/{id}`  — partial update
//!   - `DELETE /directors/{id}`  — delete
//!
//! - `GET /swagger.json` — OpenAPI description of the above
//!
//! Collection paths also answer without the trailing slash.

use crate::{
    handlers::{
        health_handlers::{healthz, readyz},
        movie_handlers::{get_movie, list_movies},
        named_handlers::{directors, genres},
    },
    openapi::swagger_json,
    services::catalog_service::CatalogService,
};
use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

/// Build and return the router for all catalog routes.
///
/// The router carries shared state (`CatalogService`) to all handlers.
pub fn routes() -> Router<CatalogService> {
    Router::new()
        // health endpoints (mounted at root)
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/swagger.json", get(swagger_json))
        // Movie routes
        .route("/movies/", get(list_movies))
        .route("/movies", get(list_movies))
        .route("/movies/{id}", get(get_movie))
        .merge(directors::router())
        .merge(genres::router())
        .layer(TraceLayer::new_for_http())
}
