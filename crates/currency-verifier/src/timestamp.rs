// crates/currency-verifier/src/timestamp.rs
// ============================================================================
// Module: Timestamp Conversion
// Description: UNIX epoch seconds to calendar dates in the evaluation zone.
// Purpose: Compare response timestamps against the local calendar date.
// Dependencies: time, serde_json, log
// ============================================================================

//! ## Overview
//! The API reports `timestamp` as UNIX epoch seconds. Verification converts it
//! to a `YYYY-MM-DD` date in the zone of the machine running the checks and
//! compares it with that machine's current date. The comparison is inherently
//! unstable within seconds of local midnight; that is accepted, not corrected.
//!
//! The local offset is resolved once per [`DateContext`]. When the platform
//! cannot report it (for example in multi-threaded processes on some Unix
//! targets), UTC is used and a warning is logged.

use log::warn;
use serde_json::Value;
use thiserror::Error;
use time::Date;
use time::OffsetDateTime;
use time::UtcOffset;
use time::macros::format_description;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Timestamp conversion errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimestampError {
    /// The field is not an integer number of seconds.
    #[error("timestamp is not an integer: {0}")]
    NotInteger(String),
    /// The seconds value falls outside the representable date range.
    #[error("timestamp out of range: {0}")]
    OutOfRange(i64),
    /// The date could not be formatted.
    #[error("date formatting failed: {0}")]
    Format(String),
}

// ============================================================================
// SECTION: Date Context
// ============================================================================

/// Zone and current date used to evaluate timestamp checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateContext {
    /// Offset applied to UNIX timestamps before taking the date.
    offset: UtcOffset,
    /// Current calendar date in `offset`.
    today: Date,
}

impl DateContext {
    /// Captures the local offset and today's local date.
    #[must_use]
    pub fn local_now() -> Self {
        let offset = UtcOffset::current_local_offset().unwrap_or_else(|err| {
            warn!("local utc offset unavailable, falling back to UTC: {err}");
            UtcOffset::UTC
        });
        let now = OffsetDateTime::now_utc();
        let today = now.checked_to_offset(offset).unwrap_or(now).date();
        Self {
            offset,
            today,
        }
    }

    /// Builds a context with an explicit offset and date.
    #[must_use]
    pub const fn fixed(offset: UtcOffset, today: Date) -> Self {
        Self {
            offset,
            today,
        }
    }

    /// Returns the evaluation offset.
    #[must_use]
    pub const fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// Returns the evaluation date.
    #[must_use]
    pub const fn today(&self) -> Date {
        self.today
    }

    /// Converts UNIX seconds to a date in this context's offset.
    ///
    /// # Errors
    ///
    /// Returns [`TimestampError::OutOfRange`] when the value is not representable.
    pub fn date_of(&self, unix_seconds: i64) -> Result<Date, TimestampError> {
        unix_seconds_to_date(unix_seconds, self.offset)
    }
}

// ============================================================================
// SECTION: Conversion
// ============================================================================

/// Converts UNIX epoch seconds to a calendar date at `offset`.
///
/// # Errors
///
/// Returns [`TimestampError::OutOfRange`] when the value is not representable.
pub fn unix_seconds_to_date(unix_seconds: i64, offset: UtcOffset) -> Result<Date, TimestampError> {
    OffsetDateTime::from_unix_timestamp(unix_seconds)
        .ok()
        .and_then(|instant| instant.checked_to_offset(offset))
        .map(OffsetDateTime::date)
        .ok_or(TimestampError::OutOfRange(unix_seconds))
}

/// Formats a date as `YYYY-MM-DD`.
///
/// # Errors
///
/// Returns [`TimestampError::Format`] when formatting fails.
pub fn format_iso_date(date: Date) -> Result<String, TimestampError> {
    date.format(format_description!("[year]-[month]-[day]"))
        .map_err(|err| TimestampError::Format(err.to_string()))
}

/// Reads UNIX seconds from a JSON value.
///
/// # Errors
///
/// Returns [`TimestampError::NotInteger`] for anything other than an integer.
pub fn unix_seconds_from_value(value: &Value) -> Result<i64, TimestampError> {
    value.as_i64().ok_or_else(|| TimestampError::NotInteger(value.to_string()))
}
