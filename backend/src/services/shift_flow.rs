//! Shift session lifecycle orchestration.
//!
//! `ShiftFlow` is the piece the menu and logout screens drive: it answers
//! "is a shift open?", starts a shift on explicit confirmation, closes it
//! on logout, and decides whether a logout may proceed. Status checks are
//! read-only; records are only ever written by `start` and `close`. Nothing
//! here retries; every retry is a new user-initiated request.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::error::AppError;
use crate::models::shift_session::{NewShiftSession, ReportedLocation, ShiftSession};
use crate::repositories::shift_session::ShiftSessionStore;

#[derive(Clone)]
pub struct ShiftFlow {
    store: Arc<dyn ShiftSessionStore>,
}

/// Outcome of a logout request, computed before any credentials are revoked.
#[derive(Debug)]
pub struct LogoutResolution {
    /// The session that was closed as part of logging out, when the user
    /// asked to end their shift.
    pub closed_session: Option<ShiftSession>,
}

impl ShiftFlow {
    pub fn new(store: Arc<dyn ShiftSessionStore>) -> Self {
        Self { store }
    }

    /// Returns the user's open session, if any. Never writes.
    pub async fn status(&self, user_name: &str) -> Result<Option<ShiftSession>, AppError> {
        self.store.find_open_for_user(user_name).await
    }

    /// Starts a shift for the user. The store's conditional insert makes
    /// this safe against a second tab racing the same confirmation: exactly
    /// one of them wins, the other gets a conflict.
    pub async fn start(
        &self,
        user_name: &str,
        location: &ReportedLocation,
        started_at: DateTime<Utc>,
    ) -> Result<ShiftSession, AppError> {
        let new = NewShiftSession {
            user_name: user_name.to_string(),
            started_at,
            start_location: location.as_record(),
        };
        self.store
            .open(new)
            .await?
            .ok_or_else(|| AppError::Conflict("A shift is already open for this user".into()))
    }

    /// Closes the user's open shift, recording end time and location.
    pub async fn close(
        &self,
        user_name: &str,
        location: &ReportedLocation,
        ended_at: DateTime<Utc>,
    ) -> Result<ShiftSession, AppError> {
        self.store
            .close_open_for_user(user_name, ended_at, &location.as_record())
            .await?
            .ok_or_else(|| AppError::NotFound("No open shift to close".into()))
    }

    /// Resolves a logout request. When the user chose to end their shift the
    /// close must succeed first; any failure propagates so the caller never
    /// revokes credentials after a failed close. When the user declined, no
    /// session record is touched.
    pub async fn resolve_logout(
        &self,
        user_name: &str,
        end_shift: bool,
        location: &ReportedLocation,
        now: DateTime<Utc>,
    ) -> Result<LogoutResolution, AppError> {
        if !end_shift {
            return Ok(LogoutResolution {
                closed_session: None,
            });
        }

        let session = self.close(user_name, location, now).await?;
        Ok(LogoutResolution {
            closed_session: Some(session),
        })
    }

    /// Lists the user's recent shifts, newest first.
    pub async fn history(
        &self,
        user_name: &str,
        limit: i64,
    ) -> Result<Vec<ShiftSession>, AppError> {
        self.store.list_for_user(user_name, limit).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift_session::SessionState;
    use crate::repositories::shift_session::MockShiftSessionStore;
    use uuid::Uuid;

    fn open_session(user_name: &str) -> ShiftSession {
        let now = Utc::now();
        ShiftSession {
            id: Uuid::new_v4(),
            user_name: user_name.to_string(),
            state: SessionState::Open,
            started_at: now,
            start_location: "-12.0464, -77.0428".into(),
            ended_at: None,
            end_location: None,
            created_at: now,
        }
    }

    fn closed_session(user_name: &str, end_location: &str) -> ShiftSession {
        let mut session = open_session(user_name);
        session.state = SessionState::Closed;
        session.ended_at = Some(Utc::now());
        session.end_location = Some(end_location.to_string());
        session
    }

    fn flow_with(store: MockShiftSessionStore) -> ShiftFlow {
        ShiftFlow::new(Arc::new(store))
    }

    #[tokio::test]
    async fn status_never_writes() {
        let mut store = MockShiftSessionStore::new();
        store
            .expect_find_open_for_user()
            .times(3)
            .returning(|_| Ok(None));
        store.expect_open().never();
        store.expect_close_open_for_user().never();

        let flow = flow_with(store);
        for _ in 0..3 {
            let status = flow.status("Juan Perez").await.unwrap();
            assert!(status.is_none());
        }
    }

    #[tokio::test]
    async fn start_creates_exactly_one_open_session() {
        let mut store = MockShiftSessionStore::new();
        store
            .expect_open()
            .times(1)
            .withf(|new: &NewShiftSession| {
                new.user_name == "Juan Perez" && new.start_location == "-12.5, -77.1"
            })
            .returning(|new| {
                let mut session = open_session(&new.user_name);
                session.start_location = new.start_location;
                Ok(Some(session))
            });

        let flow = flow_with(store);
        let location = ReportedLocation::Coordinates {
            lat: -12.5,
            lng: -77.1,
        };
        let session = flow
            .start("Juan Perez", &location, Utc::now())
            .await
            .unwrap();
        assert_eq!(session.state, SessionState::Open);
        assert_eq!(session.start_location, "-12.5, -77.1");
    }

    #[tokio::test]
    async fn start_with_existing_open_session_is_a_conflict() {
        let mut store = MockShiftSessionStore::new();
        store.expect_open().times(1).returning(|_| Ok(None));

        let flow = flow_with(store);
        let result = flow
            .start("Juan Perez", &ReportedLocation::Unavailable, Utc::now())
            .await;
        assert!(matches!(result, Err(AppError::Conflict(_))));
    }

    #[tokio::test]
    async fn denied_geolocation_does_not_block_start() {
        let mut store = MockShiftSessionStore::new();
        store
            .expect_open()
            .times(1)
            .withf(|new: &NewShiftSession| new.start_location == "denied/error")
            .returning(|new| {
                let mut session = open_session(&new.user_name);
                session.start_location = new.start_location;
                Ok(Some(session))
            });

        let flow = flow_with(store);
        let session = flow
            .start("Juan Perez", &ReportedLocation::Unavailable, Utc::now())
            .await
            .unwrap();
        assert_eq!(session.start_location, "denied/error");
    }

    #[tokio::test]
    async fn close_transitions_the_open_session() {
        let mut store = MockShiftSessionStore::new();
        store
            .expect_close_open_for_user()
            .times(1)
            .withf(|user, _, location| user == "Juan Perez" && location == "unsupported")
            .returning(|user, _, location| Ok(Some(closed_session(user, location))));

        let flow = flow_with(store);
        let session = flow
            .close("Juan Perez", &ReportedLocation::Unsupported, Utc::now())
            .await
            .unwrap();
        assert_eq!(session.state, SessionState::Closed);
        assert_eq!(session.end_location.as_deref(), Some("unsupported"));
    }

    #[tokio::test]
    async fn close_without_open_session_is_not_found() {
        let mut store = MockShiftSessionStore::new();
        store
            .expect_close_open_for_user()
            .times(1)
            .returning(|_, _, _| Ok(None));

        let flow = flow_with(store);
        let result = flow
            .close("Juan Perez", &ReportedLocation::Unavailable, Utc::now())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn logout_without_ending_shift_touches_no_records() {
        let mut store = MockShiftSessionStore::new();
        store.expect_open().never();
        store.expect_close_open_for_user().never();

        let flow = flow_with(store);
        let resolution = flow
            .resolve_logout(
                "Juan Perez",
                false,
                &ReportedLocation::Unavailable,
                Utc::now(),
            )
            .await
            .unwrap();
        assert!(resolution.closed_session.is_none());
    }

    #[tokio::test]
    async fn logout_ending_shift_closes_that_session() {
        let mut store = MockShiftSessionStore::new();
        store
            .expect_close_open_for_user()
            .times(1)
            .returning(|user, _, location| Ok(Some(closed_session(user, location))));

        let flow = flow_with(store);
        let resolution = flow
            .resolve_logout(
                "Juan Perez",
                true,
                &ReportedLocation::Coordinates {
                    lat: -12.0,
                    lng: -77.0,
                },
                Utc::now(),
            )
            .await
            .unwrap();
        let session = resolution.closed_session.expect("session closed");
        assert_eq!(session.state, SessionState::Closed);
    }

    #[tokio::test]
    async fn logout_fails_when_close_fails() {
        let mut store = MockShiftSessionStore::new();
        store
            .expect_close_open_for_user()
            .times(1)
            .returning(|_, _, _| {
                Err(AppError::InternalServerError(anyhow::anyhow!(
                    "connection reset"
                )))
            });

        let flow = flow_with(store);
        let result = flow
            .resolve_logout(
                "Juan Perez",
                true,
                &ReportedLocation::Unavailable,
                Utc::now(),
            )
            .await;
        // The caller must not revoke credentials when this errors.
        assert!(matches!(result, Err(AppError::InternalServerError(_))));
    }
}
