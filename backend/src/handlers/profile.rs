//! Profile handler: who am I, and what name do I appear under.

use axum::{
    extract::{Extension, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::{
    error::AppError, models::user::User, repositories::directory, state::AppState,
};

#[derive(Debug, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub username: String,
    pub role: String,
    /// The local part of the login email.
    pub employee_code: String,
    /// Directory name when one exists, otherwise the employee code.
    pub display_name: String,
}

pub async fn me(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<Json<ProfileResponse>, AppError> {
    let display_name = directory::resolve_display_name(state.pool.as_ref(), &user).await;
    Ok(Json(ProfileResponse {
        id: user.id,
        employee_code: user.employee_code(),
        role: user.role.as_str().to_string(),
        username: user.username,
        display_name,
    }))
}
