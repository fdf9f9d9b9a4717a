//! Directors and genres: two tables with the same `{id, name}` shape.

use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A table holding `{id, name}` rows.
///
/// Implemented by zero-sized markers so the store and handlers can be written
/// once and mounted for both directors and genres.
pub trait NamedTable: Send + Sync + 'static {
    /// SQL table name.
    const TABLE: &'static str;
    /// Lowercase noun used in messages ("director").
    const NOUN: &'static str;
    /// Capitalised noun used at the start of messages ("Director").
    const TITLE: &'static str;
}

pub struct Directors;

impl NamedTable for Directors {
    const TABLE: &'static str = "director";
    const NOUN: &'static str = "director";
    const TITLE: &'static str = "Director";
}

pub struct Genres;

impl NamedTable for Genres {
    const TABLE: &'static str = "genre";
    const NOUN: &'static str = "genre";
    const TITLE: &'static str = "Genre";
}

/// A stored director or genre.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq, ToSchema)]
pub struct NamedRecord {
    /// Store-assigned id, never reused.
    pub id: i64,

    /// Display name. Not validated, may be null.
    pub name: Option<String>,
}

/// Request body for create/update of a director or genre.
///
/// `name` is the only settable field. Other keys, including `id`, are
/// ignored. The outer `Option` records whether the key was sent at all so a
/// partial update can tell `{}` apart from `{"name": null}`.
#[derive(Deserialize, Debug, Default, PartialEq, ToSchema)]
pub struct NamedPayload {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
}

impl NamedPayload {
    /// Value to store on create or full update; a missing key means null.
    pub fn name_or_null(self) -> Option<String> {
        self.name.flatten()
    }
}

/// Marks a field as present even when its value is `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
