//! Models for the shift session lifecycle.
//!
//! A shift session records when an agent started working, where, and (once
//! closed) when and where the shift ended. The database enforces that at most
//! one session per user is open at any time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Sentinel stored when the client platform has no geolocation support.
pub const LOCATION_UNSUPPORTED: &str = "unsupported";
/// Sentinel stored when geolocation was denied or errored.
pub const LOCATION_UNAVAILABLE: &str = "denied/error";

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize, ToSchema)]
#[sqlx(type_name = "TEXT", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
/// Lifecycle state of a shift session. Transitions `open -> closed` once.
pub enum SessionState {
    Open,
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of one shift.
pub struct ShiftSession {
    /// Unique identifier for the session record.
    pub id: Uuid,
    /// Display name of the agent working the shift, immutable.
    pub user_name: String,
    /// Current lifecycle state.
    pub state: SessionState,
    /// Timestamp when the shift was started.
    pub started_at: DateTime<Utc>,
    /// Start location: `"lat, lng"` or a sentinel string.
    pub start_location: String,
    /// Timestamp when the shift ended; set only on close.
    pub ended_at: Option<DateTime<Utc>>,
    /// End location; set only on close, same shape as `start_location`.
    pub end_location: Option<String>,
    /// Server-assigned ordering timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields needed to open a new shift session.
#[derive(Debug, Clone)]
pub struct NewShiftSession {
    pub user_name: String,
    pub started_at: DateTime<Utc>,
    pub start_location: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// Best-effort geolocation reading reported by the client.
///
/// Absence of a usable position must never block starting or closing a
/// shift; the non-coordinate variants are stored as fixed sentinel strings.
pub enum ReportedLocation {
    /// A successful position fix.
    Coordinates { lat: f64, lng: f64 },
    /// The client platform does not support geolocation.
    Unsupported,
    /// Geolocation permission was denied or acquisition failed.
    Unavailable,
}

impl ReportedLocation {
    /// Renders the reading to the string persisted on the session record.
    pub fn as_record(&self) -> String {
        match self {
            ReportedLocation::Coordinates { lat, lng } => format!("{}, {}", lat, lng),
            ReportedLocation::Unsupported => LOCATION_UNSUPPORTED.to_string(),
            ReportedLocation::Unavailable => LOCATION_UNAVAILABLE.to_string(),
        }
    }
}

impl Default for ReportedLocation {
    // A missing reading is treated the same as a failed one.
    fn default() -> Self {
        ReportedLocation::Unavailable
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Payload for starting or closing a shift.
pub struct ShiftActionRequest {
    #[serde(default)]
    pub location: ReportedLocation,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Answer to "does this user have an open shift right now?".
pub struct ShiftStatusResponse {
    pub open: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<ShiftSession>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_render_as_lat_comma_lng() {
        let loc = ReportedLocation::Coordinates {
            lat: -12.0464,
            lng: -77.0428,
        };
        assert_eq!(loc.as_record(), "-12.0464, -77.0428");
    }

    #[test]
    fn sentinels_render_fixed_strings() {
        assert_eq!(ReportedLocation::Unsupported.as_record(), "unsupported");
        assert_eq!(ReportedLocation::Unavailable.as_record(), "denied/error");
    }

    #[test]
    fn reported_location_deserializes_tagged() {
        let loc: ReportedLocation =
            serde_json::from_str(r#"{"kind":"coordinates","lat":1.5,"lng":-2.0}"#).unwrap();
        assert!(matches!(loc, ReportedLocation::Coordinates { .. }));

        let loc: ReportedLocation = serde_json::from_str(r#"{"kind":"unsupported"}"#).unwrap();
        assert!(matches!(loc, ReportedLocation::Unsupported));
    }

    #[test]
    fn missing_location_defaults_to_unavailable() {
        let req: ShiftActionRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.location.as_record(), "denied/error");
    }

    #[test]
    fn session_state_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(SessionState::Open).unwrap(),
            serde_json::Value::String("open".into())
        );
        assert_eq!(
            serde_json::to_value(SessionState::Closed).unwrap(),
            serde_json::Value::String("closed".into())
        );
    }
}
