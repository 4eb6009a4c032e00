//! Query and response shape shared by every list endpoint.

use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use std::str::FromStr;

pub const MAX_LIST_LIMIT: i64 = 500;

/// Literal meaning "no filter on this field".
pub const ALL: &str = "all";

/// Parses an optional filter parameter. Absent, blank and `all` mean no
/// filter; anything else must name a variant of `T`.
pub fn parse_filter<T>(field: &str, raw: Option<&str>) -> DomainResult<Option<T>>
where
    T: FromStr,
{
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if value.eq_ignore_ascii_case(ALL) {
        return Ok(None);
    }

    value.parse::<T>().map(Some).map_err(|_| {
        DomainError::ValidationError(format!("Invalid value '{}' for filter '{}'", value, field))
    })
}

/// Parses the optional `limit` parameter: positive, clamped to
/// [`MAX_LIST_LIMIT`].
pub fn parse_limit(raw: Option<&str>) -> DomainResult<Option<i64>> {
    let Some(value) = raw.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };

    match value.parse::<i64>() {
        Ok(limit) if limit > 0 => Ok(Some(limit.min(MAX_LIST_LIMIT))),
        _ => Err(DomainError::ValidationError(
            "limit must be a positive integer".to_string(),
        )),
    }
}

/// SQL `LIMIT` operand; `-1` means unbounded in SQLite.
pub fn sql_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(-1)
}

/// A page of records together with aggregates computed over the whole
/// collection.
#[derive(Debug, Clone, Serialize)]
pub struct Listing<T, S> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
    pub stats: S,
}

impl<T, S> Listing<T, S> {
    pub fn new(data: Vec<T>, stats: S) -> Self {
        Self {
            success: true,
            count: data.len(),
            data,
            stats,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Listing<U, S> {
        Listing::new(self.data.into_iter().map(f).collect(), self.stats)
    }
}

/// `{ success: true, data }` envelope for single-record responses.
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
