//! SQLite connection setup and schema bootstrap.

use anyhow::{Context, Result};
use sqlx::{
    SqlitePool,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
};
use std::str::FromStr;

/// Table definitions, applied with `CREATE TABLE IF NOT EXISTS` on every boot.
const SCHEMA_SQL: &str = include_str!("../migrations/0001_init.sql");

/// Open a pool against `database_url`, creating the database file if missing.
///
/// Foreign keys are declared in the schema but not enforced: deleting a
/// director or genre leaves movies pointing at the removed id.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(database_url)
        .with_context(|| format!("parsing database url `{}`", database_url))?
        .create_if_missing(true)
        .foreign_keys(false);

    tracing::debug!("Connecting to SQLite => {}", database_url);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .with_context(|| format!("connecting to `{}`", database_url))?;

    Ok(pool)
}

/// Create the catalog tables if they do not exist yet.
pub async fn init_schema(db: &SqlitePool) -> Result<()> {
    let statements = SCHEMA_SQL
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();

    tracing::info!("Applying {} schema statements...", statements.len());

    for stmt in statements {
        tracing::debug!("Executing schema SQL: {}", stmt);
        sqlx::query(stmt)
            .execute(db)
            .await
            .context("applying catalog schema")?;
    }

    Ok(())
}
