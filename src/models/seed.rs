//! JSON fixture format for bulk-loading a catalog.

use super::movie::NewMovie;
use serde::Deserialize;

/// Directors, genres and movies to import, in that order.
///
/// Every row may carry its own `id` so movies can reference directors and
/// genres from the same file.
#[derive(Deserialize, Debug, Default)]
pub struct CatalogSeed {
    #[serde(default)]
    pub directors: Vec<SeedNamed>,
    #[serde(default)]
    pub genres: Vec<SeedNamed>,
    #[serde(default)]
    pub movies: Vec<NewMovie>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SeedNamed {
    #[serde(default)]
    pub id: Option<i64>,
    pub name: Option<String>,
}
