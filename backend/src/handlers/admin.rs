//! Admin handlers for account management.

use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::{
    error::AppError,
    models::user::{User, UserResponse, UserRole},
    repositories::auth as auth_repo,
    state::AppState,
    utils::{
        identity::{normalize_identifier, IdentityError},
        password::hash_password,
    },
};

#[derive(Debug, Deserialize, ToSchema, Validate)]
/// Payload for creating a user account.
pub struct CreateUserRequest {
    /// Full email or bare employee code.
    #[validate(length(min = 1, message = "Identifier is required"))]
    pub identifier: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
}

pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    payload.validate()?;

    let username = normalize_identifier(&payload.identifier, &state.config.default_email_domain)
        .map_err(|err| match err {
            IdentityError::Empty => AppError::BadRequest("Identifier is required".into()),
            IdentityError::MalformedEmail => AppError::BadRequest("Invalid email format".into()),
        })?;

    if auth_repo::find_user_by_username(state.pool.as_ref(), &username)
        .await?
        .is_some()
    {
        return Err(AppError::Conflict("Username already exists".into()));
    }

    let password_hash = hash_password(&payload.password)?;
    let user = User::new(username, password_hash, payload.role);
    auth_repo::insert_user(state.pool.as_ref(), &user).await?;

    tracing::info!(user = %user.username, role = user.role.as_str(), "User created");

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
