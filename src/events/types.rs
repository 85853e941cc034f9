//! Wire and domain types for the calendar API
//!
//! Requests deserialize leniently (missing fields fall back to defaults) so
//! the handlers can report the same field-level diagnostics for a missing
//! value as for an invalid one, instead of a generic body-rejection.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Owner key for events. A user exists implicitly once it owns at least
/// one event; there is no registry.
pub type UserId = u64;

/// Caller-generated identifier, unique within its owning user.
pub type EventId = Uuid;

/// A single scheduled item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub date: DateTime<Utc>,
    pub text: String,
}

/// Calendar date crossing the textual boundary as `YYYY-MM-DD`.
///
/// Internally a full UTC timestamp (midnight on deserialization); the store
/// compares full instants, so a `Date` parsed from the wire only ever
/// matches events created through the same boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Date(pub DateTime<Utc>);

impl Date {
    /// Parse a `YYYY-MM-DD` string into midnight UTC.
    pub fn parse(s: &str) -> Result<Self, DateFormatError> {
        let day = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| DateFormatError)?;
        let midnight = day.and_hms_opt(0, 0, 0).ok_or(DateFormatError)?;
        Ok(Self(Utc.from_utc_datetime(&midnight)))
    }
}

/// Rejection for anything that is not a `YYYY-MM-DD` calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid date format, expected: YYYY-MM-DD")]
pub struct DateFormatError;

impl From<DateTime<Utc>> for Date {
    fn from(ts: DateTime<Utc>) -> Self {
        Self(ts)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.format("%Y-%m-%d").to_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Request bodies
// =============================================================================

/// Body for POST /v1/create_event
#[derive(Debug, Default, Deserialize)]
pub struct CreateRequest {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub date: Option<Date>,
    #[serde(default)]
    pub text: String,
}

/// Body for POST /v1/update_event
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRequest {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub date: Option<Date>,
    #[serde(default)]
    pub text: String,
}

/// Body for POST /v1/delete_event
#[derive(Debug, Default, Deserialize)]
pub struct DeleteRequest {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub uid: String,
}

// =============================================================================
// Responses
// =============================================================================

/// Response envelope for a single event
#[derive(Debug, Serialize, Deserialize)]
pub struct EventResponse {
    pub result: ResultEvent,
}

/// One event as it crosses the textual boundary
#[derive(Debug, Serialize, Deserialize)]
pub struct ResultEvent {
    pub user_id: UserId,
    pub uid: Uuid,
    pub date: Date,
    pub text: String,
}

impl ResultEvent {
    pub fn new(user_id: UserId, uid: EventId, event: &Event) -> Self {
        Self {
            user_id,
            uid,
            date: Date::from(event.date),
            text: event.text.clone(),
        }
    }
}

/// Error body: `{"error": "<message>"}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
