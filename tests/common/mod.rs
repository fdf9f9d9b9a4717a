#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, Response, header::CONTENT_TYPE};
use tempfile::TempDir;
use tower::ServiceExt;

use movie_catalog::db;
use movie_catalog::models::movie::{Movie, NewMovie};
use movie_catalog::models::named::{Directors, Genres};
use movie_catalog::services::catalog_service::CatalogService;

/// A catalog backed by a fresh SQLite file in a temporary directory.
///
/// The directory (and database) is removed when this value is dropped.
pub struct TestCatalog {
    pub service: CatalogService,
    _dir: TempDir,
}

impl TestCatalog {
    pub async fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let url = format!("sqlite://{}", dir.path().join("catalog.db").display());
        let pool = db::connect(&url).await.unwrap();
        db::init_schema(&pool).await.unwrap();

        Self {
            service: CatalogService::new(Arc::new(pool)),
            _dir: dir,
        }
    }

    /// The full application router over this catalog.
    pub fn app(&self) -> Router {
        movie_catalog::app(self.service.clone())
    }

    pub async fn director(&self, name: &str) -> i64 {
        self.service
            .create_named::<Directors>(Some(name.to_string()))
            .await
            .unwrap()
            .id
    }

    pub async fn genre(&self, name: &str) -> i64 {
        self.service
            .create_named::<Genres>(Some(name.to_string()))
            .await
            .unwrap()
            .id
    }

    pub async fn movie(
        &self,
        title: &str,
        director_id: Option<i64>,
        genre_id: Option<i64>,
    ) -> Movie {
        self.service
            .create_movie(&NewMovie {
                title: Some(title.to_string()),
                year: Some(2000),
                rating: Some(7.5),
                director_id,
                genre_id,
                ..Default::default()
            })
            .await
            .unwrap()
    }
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}
