//! Lenient timestamp parsing for the inbound JSON record.
//!
//! Upstream feeds are inconsistent about how they write `PublishDate`: some
//! send a full RFC 3339 timestamp, some an unzoned seconds-precision
//! timestamp, some a bare calendar date. All three deserialize to a
//! [`NaiveDateTime`] (bare dates become midnight). Serialization always emits
//! the unzoned seconds-precision form, which is also the form the XML layer
//! renders.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer, de};

/// The canonical render format for publication timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a timestamp string in any of the accepted forms.
///
/// Accepted, in order of preference:
/// 1. RFC 3339 (`2024-06-15T10:30:00Z`, offset forms) — the offset is
///    discarded after normalizing to UTC
/// 2. Unzoned date-time (`2024-06-15T10:30:00`, optional fractional seconds)
/// 3. Bare calendar date (`2024-06-15`) — interpreted as midnight
///
/// # Errors
///
/// Returns the underlying chrono parse error of the last attempted form when
/// none of them match.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.naive_utc());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(dt);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map(|d| d.and_time(chrono::NaiveTime::MIN))
}

/// Render a timestamp in the canonical unzoned seconds-precision form.
#[must_use]
pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Serde deserializer for lenient timestamp fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(|e| de::Error::custom(format!("invalid timestamp {raw:?}: {e}")))
}

/// Serde serializer emitting the canonical form.
pub fn serialize<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_timestamp(ts))
}
