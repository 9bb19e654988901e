//! Checklist submission handlers.

use axum::{
    extract::{Extension, Query, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppError,
    models::checklist::{ChecklistSubmission, CreateChecklistRequest},
    models::user::User,
    models::ListQuery,
    repositories::{checklist, directory},
    state::AppState,
};

pub async fn submit(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Json(payload): Json<CreateChecklistRequest>,
) -> Result<(StatusCode, Json<ChecklistSubmission>), AppError> {
    payload.validate()?;

    let display_name = directory::resolve_display_name(state.pool.as_ref(), &user).await;
    let submission = ChecklistSubmission {
        id: Uuid::new_v4(),
        user_id: user.id,
        user_name: display_name,
        roles: payload
            .roles
            .iter()
            .map(|role| role.as_str().to_string())
            .collect(),
        answers: Value::Object(payload.answers),
        observations: payload
            .observations
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty()),
        created_at: Utc::now(),
    };

    checklist::insert_submission(state.pool.as_ref(), &submission).await?;

    tracing::info!(
        user = %submission.user_name,
        roles = ?submission.roles,
        "Checklist submitted"
    );

    Ok((StatusCode::CREATED, Json(submission)))
}

pub async fn list_mine(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ChecklistSubmission>>, AppError> {
    let submissions =
        checklist::list_submissions_for_user(state.pool.as_ref(), user.id, query.limit()).await?;
    Ok(Json(submissions))
}
