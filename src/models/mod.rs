//! Data models for the movie catalog.
//!
//! Row types map to the SQLite tables via `sqlx::FromRow` and dump to JSON
//! via `serde`. Payload types list the fields a client is allowed to set.

pub mod movie;
pub mod named;
pub mod seed;
