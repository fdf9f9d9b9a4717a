//! Movie catalog: a REST façade over a small SQLite catalog of movies,
//! directors and genres.

pub mod config;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod services;

use axum::Router;
use services::catalog_service::CatalogService;

/// The full application router, ready to serve.
pub fn app(service: CatalogService) -> Router {
    routes::routes::routes().with_state(service)
}
