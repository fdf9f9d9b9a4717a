use anyhow::{Context, Result};
use movie_catalog::{
    config, db, models::seed::CatalogSeed, services::catalog_service::CatalogService,
};
use std::{io::ErrorKind, path::Path, sync::Arc};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // --- Logging setup ---
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // --- Parse config + init-db flag ---
    let (cfg, init_db) = config::AppConfig::from_env_and_args()?;

    tracing::info!("Starting movie-catalog with config: {:?}", cfg);

    // --- Initialize SQLite connection + schema ---
    let pool = Arc::new(db::connect(&cfg.database_url).await?);
    db::init_schema(&pool).await?;

    // --- Initialize core service ---
    let catalog = CatalogService::new(pool);

    if let Some(path) = cfg.seed.as_deref() {
        import_seed(&catalog, path).await?;
    }

    if init_db {
        tracing::info!("Database initialization complete.");
        return Ok(()); // exit after schema + seed
    }

    // --- Build router ---
    let app = movie_catalog::app(catalog);

    // --- Start server ---
    let addr = cfg.addr();
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err)
            if err.kind() == ErrorKind::PermissionDenied
                && matches!(cfg.host.as_str(), "0.0.0.0" | "::") =>
        {
            let fallback_addr = format!("127.0.0.1:{}", cfg.port);
            tracing::warn!(
                "Permission denied binding to {} ({}). Falling back to {}",
                addr,
                err,
                fallback_addr
            );
            TcpListener::bind(&fallback_addr).await?
        }
        Err(err) => return Err(err.into()),
    };

    tracing::info!("Server listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

/// Load a JSON fixture from disk and import it into the catalog.
async fn import_seed(catalog: &CatalogService, path: &Path) -> Result<()> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("reading seed file {}", path.display()))?;
    let seed: CatalogSeed = serde_json::from_str(&raw)
        .with_context(|| format!("parsing seed file {}", path.display()))?;

    let report = catalog.seed(&seed).await.context("importing seed data")?;
    tracing::info!(
        "Imported {} directors, {} genres, {} movies from {}",
        report.directors,
        report.genres,
        report.movies,
        path.display()
    );

    Ok(())
}
