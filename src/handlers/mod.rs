use crate::errors::AppError;

pub mod health_handlers;
pub mod movie_handlers;
pub mod named_handlers;

/// Parse an `{id}` path segment.
///
/// Ids are taken as strings so that a segment which is not an integer is
/// answered like any other unknown id: 404 with the usual message.
pub(crate) fn parse_item_id(noun: &str, raw: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::not_found(format!("There's no {} with id {}", noun, raw)))
}
