pub mod analytics;
pub mod auth;
pub mod health;
pub mod menu_items;
pub mod orders;
pub mod reports;
pub mod sessions;
pub mod setup;
pub mod stations;
pub mod users;

use crate::infrastructure::http::middleware::error::{ApiError, ApiResult};
use std::str::FromStr;

/// Parses a required enum field from a request body.
pub(crate) fn parse_field<T>(raw: &str) -> ApiResult<T>
where
    T: FromStr<Err = String>,
{
    raw.parse::<T>().map_err(ApiError::BadRequest)
}
