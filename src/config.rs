use anyhow::{Context, Result};
use clap::Parser;
use std::{env, path::PathBuf};

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub seed: Option<PathBuf>,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Movie, director and genre catalog API")]
pub struct Args {
    /// Host to bind to (overrides MOVIE_CATALOG_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides MOVIE_CATALOG_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Database URL (overrides MOVIE_CATALOG_DATABASE_URL)
    #[arg(long)]
    pub database_url: Option<String>,

    /// JSON fixture with directors, genres and movies to import at boot
    #[arg(long)]
    pub seed: Option<PathBuf>,

    /// Create the schema (and import --seed, if given) then exit
    #[arg(long)]
    pub init_db: bool,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig and init-db flag.
    pub fn from_env_and_args() -> Result<(Self, bool)> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<(Self, bool)> {
        // --- Environment fallback ---
        let env_host = env::var("MOVIE_CATALOG_HOST").unwrap_or_else(|_| "127.0.0.1".into());
        let env_port = match env::var("MOVIE_CATALOG_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing MOVIE_CATALOG_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 5000,
            Err(err) => return Err(err).context("reading MOVIE_CATALOG_PORT"),
        };
        let env_db =
            env::var("MOVIE_CATALOG_DATABASE_URL").unwrap_or_else(|_| "sqlite://test.db".into());

        // --- Merge ---
        let cfg = Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            database_url: args.database_url.unwrap_or(env_db),
            seed: args.seed,
        };

        Ok((cfg, args.init_db))
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
