//! HTTP-level tests for the read-only movie endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::{TestCatalog, body_json, delete, get, send};
use serde_json::json;

fn titles(list: &serde_json::Value) -> Vec<&str> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|m| m["title"].as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn get_movie_renders_references_by_name() {
    let catalog = TestCatalog::new().await;
    let nolan = catalog.director("Christopher Nolan").await;
    let scifi = catalog.genre("Science Fiction").await;
    let movie = catalog.movie("Interstellar", Some(nolan), Some(scifi)).await;

    let response = get(catalog.app(), &format!("/movies/{}", movie.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await,
        json!({
            "id": movie.id,
            "title": "Interstellar",
            "description": null,
            "trailer": null,
            "year": 2000,
            "rating": 7.5,
            "genre": "Science Fiction",
            "director": "Christopher Nolan",
        })
    );
}

#[tokio::test]
async fn missing_movie_returns_404_message() {
    let catalog = TestCatalog::new().await;

    let response = get(catalog.app(), "/movies/5").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!("There's no movie with id 5"));
}

#[tokio::test]
async fn list_without_filters_returns_all_movies() {
    let catalog = TestCatalog::new().await;
    catalog.movie("A", None, None).await;
    catalog.movie("B", None, None).await;

    let response = get(catalog.app(), "/movies/").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(titles(&body_json(response).await), vec!["A", "B"]);
}

#[tokio::test]
async fn filters_combine_as_intersection() {
    let catalog = TestCatalog::new().await;
    let d1 = catalog.director("D1").await;
    let d2 = catalog.director("D2").await;
    let g1 = catalog.genre("G1").await;
    let g2 = catalog.genre("G2").await;

    catalog.movie("d1-g1", Some(d1), Some(g1)).await;
    catalog.movie("d1-g2", Some(d1), Some(g2)).await;
    catalog.movie("d2-g1", Some(d2), Some(g1)).await;
    catalog.movie("d2-g2", Some(d2), Some(g2)).await;

    let app = catalog.app();

    let response = get(app.clone(), &format!("/movies/?director_id={d1}")).await;
    assert_eq!(titles(&body_json(response).await), vec!["d1-g1", "d1-g2"]);

    let response = get(app.clone(), &format!("/movies/?genre_id={g1}")).await;
    assert_eq!(titles(&body_json(response).await), vec!["d1-g1", "d2-g1"]);

    let response = get(app.clone(), &format!("/movies/?director_id={d1}&genre_id={g2}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(titles(&body_json(response).await), vec!["d1-g2"]);

    let response = get(app, &format!("/movies?genre_id={g2}&director_id={d2}")).await;
    assert_eq!(titles(&body_json(response).await), vec!["d2-g2"]);
}

#[tokio::test]
async fn filter_with_no_match_returns_empty_list() {
    let catalog = TestCatalog::new().await;
    catalog.movie("Lonely", None, None).await;

    let response = get(catalog.app(), "/movies/?director_id=3&genre_id=5").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn empty_filter_value_is_ignored() {
    let catalog = TestCatalog::new().await;
    catalog.movie("Any", None, None).await;

    let response = get(catalog.app(), "/movies/?director_id=&genre_id=").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(titles(&body_json(response).await), vec!["Any"]);
}

#[tokio::test]
async fn non_integer_filter_matches_nothing() {
    let catalog = TestCatalog::new().await;
    catalog.movie("Unfiltered", None, None).await;

    let response = get(catalog.app(), "/movies/?director_id=nolan").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));

    let response = get(catalog.app(), "/movies/?genre_id=2.5").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!([]));
}

#[tokio::test]
async fn integral_decimal_filter_matches_integer_id() {
    let catalog = TestCatalog::new().await;
    let d1 = catalog.director("D1").await;
    let d2 = catalog.director("D2").await;
    catalog.movie("by-d1", Some(d1), None).await;
    catalog.movie("by-d2", Some(d2), None).await;

    let response = get(catalog.app(), &format!("/movies/?director_id={d2}.0")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(titles(&body_json(response).await), vec!["by-d2"]);
}

#[tokio::test]
async fn non_numeric_movie_id_is_not_found() {
    let catalog = TestCatalog::new().await;

    let response = get(catalog.app(), "/movies/abc").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await, json!("There's no movie with id abc"));
}

#[tokio::test]
async fn deleting_referenced_director_leaves_dangling_reference() {
    let catalog = TestCatalog::new().await;
    let director = catalog.director("Gone").await;
    let genre = catalog.genre("Still Here").await;
    let movie = catalog.movie("Orphan", Some(director), Some(genre)).await;

    let response = delete(catalog.app(), &format!("/directors/{director}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(catalog.app(), &format!("/movies/{}", movie.id)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["director"], json!(null));
    assert_eq!(json["genre"], "Still Here");

    // The foreign key itself is not repaired, so filtering still finds it.
    let response = get(catalog.app(), &format!("/movies/?director_id={director}")).await;
    assert_eq!(titles(&body_json(response).await), vec!["Orphan"]);
}

#[tokio::test]
async fn movies_are_read_only() {
    let catalog = TestCatalog::new().await;
    let movie = catalog.movie("Fixed", None, None).await;

    let response = send(
        catalog.app(),
        Method::POST,
        "/movies/",
        Some(json!({ "title": "New" })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = delete(catalog.app(), &format!("/movies/{}", movie.id)).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
