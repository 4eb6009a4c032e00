pub mod email_validator;

use chrono::{DateTime, SecondsFormat, Utc};

/// Storage form of every timestamp: RFC 3339, UTC, fixed millisecond width,
/// so lexicographic order in the store matches chronological order.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw).map(|dt| dt.with_timezone(&Utc))
}
