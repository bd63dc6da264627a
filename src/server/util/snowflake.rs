//! Conversions between Discord snowflakes and their stored form.
//!
//! Snowflakes are `u64` but stored in `BIGINT` columns as the `i64` with the same bit
//! pattern, so values above `i64::MAX` survive a round trip.

use crate::server::error::AppError;

/// Rejects the zero id, which no Discord object has and Serenity's id types refuse.
///
/// # Returns
/// - `Ok(id)` - A non-zero id
/// - `Err(AppError::BadRequest)` - `id` is zero
pub fn require_id(id: u64, kind: &str) -> Result<u64, AppError> {
    if id == 0 {
        return Err(AppError::BadRequest(format!("Invalid {} id 0", kind)));
    }

    Ok(id)
}

/// Converts a snowflake to its stored `i64` form.
pub fn to_db(id: u64) -> i64 {
    id as i64
}

/// Converts a stored `i64` back to the snowflake.
pub fn from_db(id: i64) -> u64 {
    id as u64
}
