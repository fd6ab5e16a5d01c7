//! # Temporal Types — UTC Timestamps
//!
//! Defines [`Timestamp`], a UTC-only instant, and [`TimestampInput`], the set
//! of shapes a caller may supply when a record's creation time is given
//! explicitly.
//!
//! Timestamps serialize as ISO 8601 / RFC 3339 with a `Z` suffix. Sub-second
//! precision is kept, so a supplied instant comes back out exactly as it went
//! in and survives a JSON round trip unchanged.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A UTC instant.
///
/// # Construction
///
/// - [`Timestamp::now()`] — a single read of the current UTC clock.
/// - [`Timestamp::from_utc()`] — from a `DateTime<Utc>`.
/// - [`Timestamp::parse()`] — from an RFC 3339 string with any offset.
/// - [`Timestamp::coerce()`] — from any [`TimestampInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp from the current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Parse an RFC 3339 string, converting any offset to UTC.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] if the string is not
    /// valid RFC 3339.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        DateTime::parse_from_rfc3339(s)
            .map(|dt| Self(dt.with_timezone(&Utc)))
            .map_err(|e| ValidationError::InvalidTimestamp {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// Create a timestamp from Unix epoch milliseconds.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidTimestamp`] if the value is outside
    /// the representable range.
    pub fn from_epoch_millis(millis: i64) -> Result<Self, ValidationError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidTimestamp {
                value: millis.to_string(),
                reason: "epoch milliseconds out of range".to_string(),
            })
    }

    /// Coerce a caller-supplied value into a UTC timestamp.
    pub fn coerce(input: TimestampInput) -> Result<Self, ValidationError> {
        match input {
            TimestampInput::Instant(dt) => Ok(Self(dt)),
            TimestampInput::EpochMillis(ms) => Self::from_epoch_millis(ms),
            TimestampInput::Text(s) => Self::parse(&s),
        }
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Unix epoch timestamp in milliseconds.
    pub fn epoch_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Render as ISO 8601 with `Z` suffix (e.g., `2023-01-01T00:00:00Z`).
    ///
    /// Fractional seconds appear only when present.
    pub fn to_iso8601(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

/// A creation time as supplied by a caller, before coercion.
///
/// Deserializes untagged: an RFC 3339 string becomes [`Instant`](Self::Instant),
/// an integer becomes [`EpochMillis`](Self::EpochMillis), and any other string
/// is kept as [`Text`](Self::Text) so that coercion can report it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimestampInput {
    /// An already-resolved UTC instant.
    Instant(DateTime<Utc>),
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// Free text expected to hold an RFC 3339 timestamp.
    Text(String),
}

impl From<Timestamp> for TimestampInput {
    fn from(ts: Timestamp) -> Self {
        Self::Instant(ts.0)
    }
}

impl From<DateTime<Utc>> for TimestampInput {
    fn from(dt: DateTime<Utc>) -> Self {
        Self::Instant(dt)
    }
}

impl From<i64> for TimestampInput {
    fn from(ms: i64) -> Self {
        Self::EpochMillis(ms)
    }
}

impl From<String> for TimestampInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for TimestampInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}
