//! Shift session store: trait for dependency injection, Postgres
//! implementation for production.
//!
//! The one-open-shift-per-user invariant lives in the database (partial
//! unique index on `user_name WHERE state = 'open'`), so opening and closing
//! are conditional writes rather than check-then-act sequences.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::db::connection::DbPool;
use crate::error::AppError;
use crate::models::shift_session::{NewShiftSession, ShiftSession};

const SESSION_COLUMNS: &str =
    "id, user_name, state, started_at, start_location, ended_at, end_location, created_at";

/// Store for shift session records.
///
/// Designed to be mockable with mockall; use `MockShiftSessionStore` in
/// tests to exercise the flow logic without a database.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShiftSessionStore: Send + Sync {
    /// Finds the user's open session, if any.
    async fn find_open_for_user(&self, user_name: &str)
        -> Result<Option<ShiftSession>, AppError>;

    /// Creates a new open session, unless one is already open for the user.
    /// Returns `None` when the conditional insert lost to an existing open
    /// session.
    async fn open(&self, new: NewShiftSession) -> Result<Option<ShiftSession>, AppError>;

    /// Closes the user's open session with the given end time and location.
    /// Returns `None` when no session was open.
    async fn close_open_for_user(
        &self,
        user_name: &str,
        ended_at: DateTime<Utc>,
        end_location: &str,
    ) -> Result<Option<ShiftSession>, AppError>;

    /// Lists the user's most recent sessions, newest first.
    async fn list_for_user(
        &self,
        user_name: &str,
        limit: i64,
    ) -> Result<Vec<ShiftSession>, AppError>;
}

pub struct PgShiftSessionStore {
    pool: DbPool,
}

impl PgShiftSessionStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShiftSessionStore for PgShiftSessionStore {
    async fn find_open_for_user(
        &self,
        user_name: &str,
    ) -> Result<Option<ShiftSession>, AppError> {
        let session = sqlx::query_as::<_, ShiftSession>(&format!(
            r#"
            SELECT {SESSION_COLUMNS}
            FROM shift_sessions
            WHERE user_name = $1 AND state = 'open'
            LIMIT 1
            "#,
        ))
        .bind(user_name)
        .fetch_optional(self.pool.as_ref())
        .await?;
        Ok(session)
    }

    async fn open(&self, new: NewShiftSession) -> Result<Option<ShiftSession>, AppError> {
        let session = sqlx::query_as::<_, ShiftSession>(&format!(
            r#"
            INSERT INTO shift_sessions (id, user_name, state, started_at, start_location)
            VALUES ($1, $2, 'open', $3, $4)
            ON CONFLICT (user_name) WHERE state = 'open' DO NOTHING
            RETURNING {SESSION_COLUMNS}
            "#,
        ))
        .bind(Uuid::new_v4())
        .bind(&new.user_name)
        .bind(new.started_at)
        .bind(&new.start_location)
        .fetch_optional(self.pool.as_ref())
        .await?;
        Ok(session)
    }

    async fn close_open_for_user(
        &self,
        user_name: &str,
        ended_at: DateTime<Utc>,
        end_location: &str,
    ) -> Result<Option<ShiftSession>, AppError> {
        let session = sqlx::query_as::<_, ShiftSession>(&format!(
            r#"
            UPDATE shift_sessions
            SET state = 'closed', ended_at = $2, end_location = $3
            WHERE user_name = $1 AND state = 'open'
            RETURNING {SESSION_COLUMNS}
            "#,
        ))
        .bind(user_name)
        .bind(ended_at)
        .bind(end_location)
        .fetch_optional(self.pool.as_ref())
        .await?;
        Ok(session)
    }

    async fn list_for_user(
        &self,
        user_name: &str,
        limit: i64,
    ) -> Result<Vec<ShiftSession>, AppError> {
        let sessions = sqlx::query_as::<_, ShiftSession>(&format!(
            r#"
            SELECT {SESSION_COLUMNS}
            FROM shift_sessions
            WHERE user_name = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        ))
        .bind(user_name)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;
        Ok(sessions)
    }
}
