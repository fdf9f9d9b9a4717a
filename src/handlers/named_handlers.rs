//! HTTP handlers for directors and genres.
//!
//! The handler bodies are generic over the `NamedTable` marker. The
//! `named_resource!` macro stamps out one documented module per table
//! (`directors`, `genres`) with concrete handlers and its router.
//! Mutations answer with a short confirmation message, not the row.

use super::parse_item_id;
use crate::{
    errors::AppError,
    models::named::{Directors, Genres, NamedPayload, NamedRecord, NamedTable},
    services::catalog_service::CatalogService,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

async fn list_named<K: NamedTable>(
    service: CatalogService,
) -> Result<Json<Vec<NamedRecord>>, AppError> {
    Ok(Json(service.list_named::<K>().await?))
}

async fn get_named<K: NamedTable>(
    service: CatalogService,
    raw_id: &str,
) -> Result<Json<NamedRecord>, AppError> {
    let id = parse_item_id(K::NOUN, raw_id)?;
    Ok(Json(service.get_named::<K>(id).await?))
}

async fn create_named<K: NamedTable>(
    service: CatalogService,
    payload: NamedPayload,
) -> Result<(StatusCode, Json<String>), AppError> {
    service.create_named::<K>(payload.name_or_null()).await?;
    Ok((StatusCode::CREATED, Json(format!("New {} is added", K::NOUN))))
}

/// Full update; a missing `name` stores null.
async fn put_named<K: NamedTable>(
    service: CatalogService,
    raw_id: &str,
    payload: NamedPayload,
) -> Result<(StatusCode, Json<String>), AppError> {
    let id = parse_item_id(K::NOUN, raw_id)?;
    service
        .update_named::<K>(id, payload.name_or_null())
        .await?;
    Ok(changed::<K>(id))
}

/// Writes `name` only when the key is present.
///
/// Without the key the row is left as is and the answer is still 204.
async fn patch_named<K: NamedTable>(
    service: CatalogService,
    raw_id: &str,
    payload: NamedPayload,
) -> Result<(StatusCode, Json<String>), AppError> {
    let id = parse_item_id(K::NOUN, raw_id)?;
    service.get_named::<K>(id).await?;

    match payload.name {
        Some(name) => {
            service.update_named::<K>(id, name).await?;
            Ok(changed::<K>(id))
        }
        None => Ok((
            StatusCode::NO_CONTENT,
            Json(format!("{} with id {} is unchanged", K::TITLE, id)),
        )),
    }
}

async fn delete_named<K: NamedTable>(
    service: CatalogService,
    raw_id: &str,
) -> Result<(StatusCode, Json<String>), AppError> {
    let id = parse_item_id(K::NOUN, raw_id)?;
    service.delete_named::<K>(id).await?;
    Ok((
        StatusCode::NO_CONTENT,
        Json(format!("{} with id {} is deleted", K::TITLE, id)),
    ))
}

fn changed<K: NamedTable>(id: i64) -> (StatusCode, Json<String>) {
    (
        StatusCode::NO_CONTENT,
        Json(format!("{} with id {} is changed", K::TITLE, id)),
    )
}

/// Concrete, OpenAPI-annotated handlers plus the router for one table.
///
/// Path and tag arguments must be plain string literals because
/// `#[utoipa::path]` reads them at expansion time.
macro_rules! named_resource {
    ($module:ident, $table:ty, $tag:tt, $base:tt, $collection:tt, $item:tt) => {
        pub mod $module {
            use super::*;
            use axum::{Router, routing::get};

            /// Collection and item routes, with and without the trailing slash.
            pub fn router() -> Router<CatalogService> {
                let collection = get(list).post(create);

                Router::new()
                    .route($collection, collection.clone())
                    .route($base, collection)
                    .route($item, get(fetch).put(replace).patch(patch).delete(remove))
            }

            #[utoipa::path(
                get,
                path = $collection,
                tag = $tag,
                operation_id = concat!("list_", $tag),
                responses((status = 200, description = "Every row, by id", body = Vec<NamedRecord>))
            )]
            pub async fn list(
                State(service): State<CatalogService>,
            ) -> Result<Json<Vec<NamedRecord>>, AppError> {
                list_named::<$table>(service).await
            }

            #[utoipa::path(
                post,
                path = $collection,
                tag = $tag,
                operation_id = concat!("create_", $tag),
                request_body = NamedPayload,
                responses((status = 201, description = "Row created", body = String))
            )]
            pub async fn create(
                State(service): State<CatalogService>,
                Json(payload): Json<NamedPayload>,
            ) -> Result<impl IntoResponse, AppError> {
                create_named::<$table>(service, payload).await
            }

            #[utoipa::path(
                get,
                path = $item,
                tag = $tag,
                operation_id = concat!("get_", $tag),
                params(("id" = i64, Path, description = "Row id")),
                responses(
                    (status = 200, description = "The row", body = NamedRecord),
                    (status = 404, description = "No such row", body = String)
                )
            )]
            pub async fn fetch(
                State(service): State<CatalogService>,
                Path(id): Path<String>,
            ) -> Result<Json<NamedRecord>, AppError> {
                get_named::<$table>(service, &id).await
            }

            #[utoipa::path(
                put,
                path = $item,
                tag = $tag,
                operation_id = concat!("replace_", $tag),
                params(("id" = i64, Path, description = "Row id")),
                request_body = NamedPayload,
                responses(
                    (status = 204, description = "Name overwritten; a missing name stores null"),
                    (status = 404, description = "No such row", body = String)
                )
            )]
            pub async fn replace(
                State(service): State<CatalogService>,
                Path(id): Path<String>,
                Json(payload): Json<NamedPayload>,
            ) -> Result<impl IntoResponse, AppError> {
                put_named::<$table>(service, &id, payload).await
            }

            #[utoipa::path(
                patch,
                path = $item,
                tag = $tag,
                operation_id = concat!("patch_", $tag),
                params(("id" = i64, Path, description = "Row id")),
                request_body = NamedPayload,
                responses(
                    (status = 204, description = "Name written if present, otherwise unchanged"),
                    (status = 404, description = "No such row", body = String)
                )
            )]
            pub async fn patch(
                State(service): State<CatalogService>,
                Path(id): Path<String>,
                Json(payload): Json<NamedPayload>,
            ) -> Result<impl IntoResponse, AppError> {
                patch_named::<$table>(service, &id, payload).await
            }

            #[utoipa::path(
                delete,
                path = $item,
                tag = $tag,
                operation_id = concat!("delete_", $tag),
                params(("id" = i64, Path, description = "Row id")),
                responses(
                    (status = 204, description = "Row deleted; movies keep the dangling id"),
                    (status = 404, description = "No such row", body = String)
                )
            )]
            pub async fn remove(
                State(service): State<CatalogService>,
                Path(id): Path<String>,
            ) -> Result<impl IntoResponse, AppError> {
                delete_named::<$table>(service, &id).await
            }
        }
    };
}

named_resource!(
    directors,
    Directors,
    "directors",
    "/directors",
    "/directors/",
    "/directors/{id}"
);
named_resource!(
    genres,
    Genres,
    "genres",
    "/genres",
    "/genres/",
    "/genres/{id}"
);
