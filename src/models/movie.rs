//! Represents a movie and its references to a director and a genre.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A movie as returned to clients.
///
/// Loaded with the referenced director and genre names joined in, so the
/// references dump as plain strings. A null or dangling reference dumps as
/// `null`.
#[derive(Serialize, Clone, FromRow, Debug, PartialEq, ToSchema)]
pub struct Movie {
    pub id: i64,
    pub title: Option<String>,
    pub description: Option<String>,

    /// Trailer URL.
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,

    /// Name of the referenced genre.
    pub genre: Option<String>,

    /// Name of the referenced director.
    pub director: Option<String>,

    #[serde(skip)]
    pub genre_id: Option<i64>,

    #[serde(skip)]
    pub director_id: Option<i64>,
}

/// Fields for inserting a movie row.
///
/// Movies are read-only over HTTP; rows come from a seed fixture or from
/// direct store calls. `id` is honoured only when importing a fixture.
#[derive(Deserialize, Clone, Debug, Default)]
pub struct NewMovie {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub trailer: Option<String>,
    pub year: Option<i64>,
    pub rating: Option<f64>,
    pub genre_id: Option<i64>,
    pub director_id: Option<i64>,
}

/// Equality filters for listing movies. Both set means both must match.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MovieFilter {
    pub director_id: Option<i64>,
    pub genre_id: Option<i64>,
}
