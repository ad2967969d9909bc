//! Database access layer
//!
//! One module per table group. Functions take the pool and return
//! `sqlx::Error`; rows are plain structs converted into `shared` models.

pub mod attendance;
pub mod employees;
pub mod events;
pub mod feedback;
pub mod sessions;
pub mod users;

use std::str::FromStr;

/// Parse an enum column stored in its wire spelling
pub(crate) fn parse_column<T>(value: &str) -> Result<T, sqlx::Error>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.parse().map_err(|e| sqlx::Error::Decode(Box::new(e)))
}
