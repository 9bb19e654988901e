//! Authentication handlers: login, token refresh and logout.
//!
//! Logout is shift-aware: when the client asks to end the open shift, the
//! close must succeed before any refresh token is revoked, so a failed close
//! leaves the user logged in with the shift still open.

use axum::{
    extract::{Extension, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppError,
    models::shift_session::{ReportedLocation, ShiftSession},
    models::user::{LoginRequest, LoginResponse, User, UserResponse},
    repositories::auth as auth_repo,
    state::AppState,
    utils::{
        identity::{normalize_identifier, IdentityError},
        jwt::{create_access_token, create_refresh_token, decode_refresh_token,
            verify_refresh_token, RefreshToken},
        password::verify_password,
    },
};

const BAD_CREDENTIALS: &str = "Invalid username or password";

#[derive(Debug, Deserialize, ToSchema)]
pub struct RefreshRequest {
    pub refresh_token: String,
}

#[derive(Debug, Deserialize, ToSchema)]
/// Payload for logging out.
pub struct LogoutRequest {
    /// Whether the user's open shift should be closed as part of logout.
    #[serde(default)]
    pub end_shift: bool,
    /// Geolocation reading to record on the closed shift.
    #[serde(default)]
    pub location: ReportedLocation,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LogoutResponse {
    /// Whether a shift was closed as part of this logout.
    pub shift_closed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub closed_session: Option<ShiftSession>,
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let username =
        normalize_identifier(&payload.identifier, &state.config.default_email_domain)
            .map_err(|err| match err {
                IdentityError::Empty => AppError::BadRequest("Identifier is required".into()),
                IdentityError::MalformedEmail => {
                    AppError::BadRequest("Invalid email format".into())
                }
            })?;

    let user = auth_repo::find_user_by_username(state.pool.as_ref(), &username)
        .await?
        .ok_or_else(|| AppError::Unauthorized(BAD_CREDENTIALS.into()))?;

    if !verify_password(&payload.password, &user.password_hash)? {
        return Err(AppError::Unauthorized(BAD_CREDENTIALS.into()));
    }

    let response = issue_tokens(&state, user).await?;
    Ok(Json(response))
}

pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let (token_id, token_secret) = decode_refresh_token(&payload.refresh_token)
        .map_err(|_| AppError::Unauthorized("Invalid or expired refresh token".into()))?;

    let record = auth_repo::fetch_valid_refresh_token(state.pool.as_ref(), &token_id, Utc::now())
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid or expired refresh token".into()))?;

    if !verify_refresh_token(&token_secret, &record.token_hash)? {
        return Err(AppError::Unauthorized("Invalid or expired refresh token".into()));
    }

    let user = auth_repo::find_user_by_id(state.pool.as_ref(), record.user_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".into()))?;

    // Rotate: the presented token is single-use.
    auth_repo::delete_refresh_token_by_id(state.pool.as_ref(), &token_id).await?;

    let response = issue_tokens(&state, user).await?;
    Ok(Json(response))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<LogoutRequest>,
) -> Result<Json<LogoutResponse>, AppError> {
    let display_name =
        crate::repositories::directory::resolve_display_name(state.pool.as_ref(), &user).await;

    // Close first. An error here propagates and no tokens are revoked, so
    // the user stays signed in to retry.
    let resolution = state
        .shift_flow()
        .resolve_logout(&display_name, payload.end_shift, &payload.location, Utc::now())
        .await?;

    auth_repo::delete_refresh_tokens_for_user(state.pool.as_ref(), user.id).await?;

    tracing::info!(
        user = %user.username,
        shift_closed = resolution.closed_session.is_some(),
        "User logged out"
    );

    Ok(Json(LogoutResponse {
        shift_closed: resolution.closed_session.is_some(),
        closed_session: resolution.closed_session,
    }))
}

async fn issue_tokens(state: &AppState, user: User) -> Result<LoginResponse, AppError> {
    let access_token = create_access_token(
        user.id,
        user.username.clone(),
        user.role.as_str().to_string(),
        &state.config.jwt_secret,
        state.config.jwt_expiration_hours,
    )?;

    let refresh_token: RefreshToken =
        create_refresh_token(user.id, state.config.refresh_token_expiration_days)?;
    auth_repo::insert_refresh_token(state.pool.as_ref(), &refresh_token).await?;

    Ok(LoginResponse {
        access_token,
        refresh_token: refresh_token.encoded(),
        user: UserResponse::from(user),
    })
}
