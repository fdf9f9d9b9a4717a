//! src/services/catalog_service.rs
//!
//! CatalogService — the relational store behind the HTTP handlers. Directors
//! and genres share one code path through the `NamedTable` markers; movies
//! are read with their director and genre names joined in.

use crate::models::{
    movie::{Movie, MovieFilter, NewMovie},
    named::{Directors, Genres, NamedRecord, NamedTable},
    seed::{CatalogSeed, SeedNamed},
};
use sqlx::{QueryBuilder, SqlitePool, Transaction, sqlite::Sqlite};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

const MOVIE_SELECT: &str = "SELECT m.id, m.title, m.description, m.trailer, m.year, m.rating, \
     g.name AS genre, d.name AS director, m.genre_id, m.director_id \
     FROM movie m \
     LEFT JOIN genre g ON g.id = m.genre_id \
     LEFT JOIN director d ON d.id = m.director_id";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("There's no {noun} with id {id}")]
    NotFound { noun: &'static str, id: i64 },
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Rows inserted by [`CatalogService::seed`]. Rows whose id already existed
/// are not counted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub directors: u64,
    pub genres: u64,
    pub movies: u64,
}

/// CatalogService provides the catalog's data access:
/// - point lookups and full listings for directors, genres and movies
/// - create/update/delete for directors and genres
/// - movie inserts and fixture import for loading data
///
/// Every mutation is a single statement that commits on its own. Foreign
/// keys are not enforced, so deletes never cascade.
#[derive(Clone)]
pub struct CatalogService {
    /// Shared SQLite connection pool.
    pub db: Arc<SqlitePool>,
}

impl CatalogService {
    pub fn new(db: Arc<SqlitePool>) -> Self {
        Self { db }
    }

    /// Round-trip a trivial query; used by the readiness probe.
    pub async fn ping(&self) -> CatalogResult<i64> {
        Ok(sqlx::query_scalar::<_, i64>("SELECT 1")
            .fetch_one(&*self.db)
            .await?)
    }

    /// All rows of a named table, ordered by id.
    pub async fn list_named<K: NamedTable>(&self) -> CatalogResult<Vec<NamedRecord>> {
        let sql = format!("SELECT id, name FROM {} ORDER BY id", K::TABLE);
        let rows = sqlx::query_as::<_, NamedRecord>(&sql)
            .fetch_all(&*self.db)
            .await?;
        debug!("listed {} {} rows", rows.len(), K::NOUN);
        Ok(rows)
    }

    /// Fetch one director or genre by id.
    pub async fn get_named<K: NamedTable>(&self, id: i64) -> CatalogResult<NamedRecord> {
        let sql = format!("SELECT id, name FROM {} WHERE id = ?", K::TABLE);
        sqlx::query_as::<_, NamedRecord>(&sql)
            .bind(id)
            .fetch_optional(&*self.db)
            .await?
            .ok_or(CatalogError::NotFound { noun: K::NOUN, id })
    }

    /// Insert a new row and return it with its assigned id.
    pub async fn create_named<K: NamedTable>(
        &self,
        name: Option<String>,
    ) -> CatalogResult<NamedRecord> {
        let sql = format!("INSERT INTO {} (name) VALUES (?) RETURNING id, name", K::TABLE);
        let record = sqlx::query_as::<_, NamedRecord>(&sql)
            .bind(name)
            .fetch_one(&*self.db)
            .await?;
        info!("created {} {}", K::NOUN, record.id);
        Ok(record)
    }

    /// Overwrite the name of an existing row.
    ///
    /// Returns NotFound when no row has this id.
    pub async fn update_named<K: NamedTable>(
        &self,
        id: i64,
        name: Option<String>,
    ) -> CatalogResult<NamedRecord> {
        let sql = format!(
            "UPDATE {} SET name = ? WHERE id = ? RETURNING id, name",
            K::TABLE
        );
        let record = sqlx::query_as::<_, NamedRecord>(&sql)
            .bind(name)
            .bind(id)
            .fetch_optional(&*self.db)
            .await?
            .ok_or(CatalogError::NotFound { noun: K::NOUN, id })?;
        info!("updated {} {}", K::NOUN, id);
        Ok(record)
    }

    /// Delete a row. Movies referencing it keep the now-dangling id.
    pub async fn delete_named<K: NamedTable>(&self, id: i64) -> CatalogResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?", K::TABLE);
        let result = sqlx::query(&sql).bind(id).execute(&*self.db).await?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::NotFound { noun: K::NOUN, id });
        }

        info!("deleted {} {}", K::NOUN, id);
        Ok(())
    }

    /// List movies, optionally narrowed by director and/or genre.
    ///
    /// When both filters are set a movie must match both.
    pub async fn list_movies(&self, filter: &MovieFilter) -> CatalogResult<Vec<Movie>> {
        let mut builder = QueryBuilder::<Sqlite>::new(MOVIE_SELECT);
        builder.push(" WHERE 1 = 1");

        if let Some(director_id) = filter.director_id {
            builder.push(" AND m.director_id = ");
            builder.push_bind(director_id);
        }
        if let Some(genre_id) = filter.genre_id {
            builder.push(" AND m.genre_id = ");
            builder.push_bind(genre_id);
        }

        builder.push(" ORDER BY m.id ASC");

        let rows: Vec<Movie> = builder.build_query_as().fetch_all(&*self.db).await?;
        debug!("listed {} movies with filter {:?}", rows.len(), filter);
        Ok(rows)
    }

    pub async fn get_movie(&self, id: i64) -> CatalogResult<Movie> {
        let sql = format!("{} WHERE m.id = ?", MOVIE_SELECT);
        sqlx::query_as::<_, Movie>(&sql)
            .bind(id)
            .fetch_optional(&*self.db)
            .await?
            .ok_or(CatalogError::NotFound { noun: "movie", id })
    }

    /// Insert a movie and return it as clients would see it.
    ///
    /// `director_id` and `genre_id` are stored as given, even if no such row
    /// exists.
    pub async fn create_movie(&self, movie: &NewMovie) -> CatalogResult<Movie> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO movie (id, title, description, trailer, year, rating, genre_id, director_id)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id",
        )
        .bind(movie.id)
        .bind(&movie.title)
        .bind(&movie.description)
        .bind(&movie.trailer)
        .bind(movie.year)
        .bind(movie.rating)
        .bind(movie.genre_id)
        .bind(movie.director_id)
        .fetch_one(&*self.db)
        .await?;

        info!("created movie {}", id);
        self.get_movie(id).await
    }

    /// Import a fixture in one transaction.
    ///
    /// Rows keep their explicit ids when given. A row whose id is already
    /// taken is skipped, so importing the same fixture twice is harmless.
    pub async fn seed(&self, seed: &CatalogSeed) -> CatalogResult<SeedReport> {
        let mut tx = self.db.begin().await?;

        let directors = seed_named::<Directors>(&mut tx, &seed.directors).await?;
        let genres = seed_named::<Genres>(&mut tx, &seed.genres).await?;

        let mut movies = 0;
        for movie in &seed.movies {
            let result = sqlx::query(
                "INSERT OR IGNORE INTO movie
                    (id, title, description, trailer, year, rating, genre_id, director_id)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
            )
            .bind(movie.id)
            .bind(&movie.title)
            .bind(&movie.description)
            .bind(&movie.trailer)
            .bind(movie.year)
            .bind(movie.rating)
            .bind(movie.genre_id)
            .bind(movie.director_id)
            .execute(&mut *tx)
            .await?;
            movies += result.rows_affected();
        }

        tx.commit().await?;

        let report = SeedReport {
            directors,
            genres,
            movies,
        };
        info!("seeded catalog: {:?}", report);
        Ok(report)
    }
}

async fn seed_named<K: NamedTable>(
    tx: &mut Transaction<'_, Sqlite>,
    rows: &[SeedNamed],
) -> CatalogResult<u64> {
    let sql = format!("INSERT OR IGNORE INTO {} (id, name) VALUES (?, ?)", K::TABLE);
    let mut inserted = 0;
    for row in rows {
        let result = sqlx::query(&sql)
            .bind(row.id)
            .bind(&row.name)
            .execute(&mut **tx)
            .await?;
        inserted += result.rows_affected();
    }
    Ok(inserted)
}
