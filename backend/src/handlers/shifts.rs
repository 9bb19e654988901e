//! Shift session handlers.
//!
//! Shift records are keyed by display name, resolved through the directory
//! at request time so a renamed employee keeps one continuous history under
//! the new name from that point on.

use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppError,
    models::shift_session::{ShiftActionRequest, ShiftSession, ShiftStatusResponse},
    models::user::User,
    models::ListQuery,
    repositories::directory,
    state::AppState,
    utils::time::{local_date_string, local_time_string},
};

#[derive(Debug, Serialize, ToSchema)]
/// A shift session plus its start instant rendered in the app timezone.
pub struct ShiftActionResponse {
    pub session: ShiftSession,
    /// `DD/MM/YYYY` in the configured timezone.
    pub local_date: String,
    /// 24h `HH:MM:SS` in the configured timezone.
    pub local_time: String,
}

pub async fn status(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<ShiftStatusResponse>, AppError> {
    let display_name = directory::resolve_display_name(state.pool.as_ref(), &user).await;
    let session = state.shift_flow().status(&display_name).await?;
    Ok(Json(ShiftStatusResponse {
        open: session.is_some(),
        session,
    }))
}

pub async fn start(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<ShiftActionRequest>,
) -> Result<(StatusCode, Json<ShiftActionResponse>), AppError> {
    let display_name = directory::resolve_display_name(state.pool.as_ref(), &user).await;
    let session = state
        .shift_flow()
        .start(&display_name, &payload.location, Utc::now())
        .await?;

    tracing::info!(user = %display_name, session_id = %session.id, "Shift started");

    Ok((
        StatusCode::CREATED,
        Json(action_response(session, &state)),
    ))
}

pub async fn close(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<ShiftActionRequest>,
) -> Result<Json<ShiftActionResponse>, AppError> {
    let display_name = directory::resolve_display_name(state.pool.as_ref(), &user).await;
    let session = state
        .shift_flow()
        .close(&display_name, &payload.location, Utc::now())
        .await?;

    tracing::info!(user = %display_name, session_id = %session.id, "Shift closed");

    Ok(Json(action_response(session, &state)))
}

pub async fn history(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ShiftSession>>, AppError> {
    let display_name = directory::resolve_display_name(state.pool.as_ref(), &user).await;
    let sessions = state
        .shift_flow()
        .history(&display_name, query.limit())
        .await?;
    Ok(Json(sessions))
}

fn action_response(session: ShiftSession, state: &AppState) -> ShiftActionResponse {
    let tz = &state.config.time_zone;
    let instant = session.ended_at.unwrap_or(session.started_at);
    ShiftActionResponse {
        local_date: local_date_string(instant, tz),
        local_time: local_time_string(instant, tz),
        session,
    }
}
