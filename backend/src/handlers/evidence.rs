//! Exercise evidence handlers.
//!
//! Same shape as incident reports: a `routine` text field names the exercise
//! the photo documents.

use axum::{
    extract::{Extension, Multipart, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    handlers::uploads::read_photo_form,
    models::evidence::ExerciseEvidence,
    models::user::User,
    models::ListQuery,
    repositories::{directory, evidence},
    state::AppState,
};

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ExerciseEvidence>), AppError> {
    let upload = read_photo_form(multipart, "routine").await?;

    let key = format!("exercises/{}.{}", Uuid::new_v4(), upload.extension);
    state.media.put(&key, &upload.photo).await?;

    let display_name = directory::resolve_display_name(state.pool.as_ref(), &user).await;
    let record = ExerciseEvidence::new(display_name, upload.text, state.media.public_url(&key));
    evidence::insert_evidence(state.pool.as_ref(), &record).await?;

    tracing::info!(user = %record.user_name, evidence_id = %record.id, "Exercise evidence stored");

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn list_mine(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ExerciseEvidence>>, AppError> {
    let display_name = directory::resolve_display_name(state.pool.as_ref(), &user).await;
    let records =
        evidence::list_evidence_for_user(state.pool.as_ref(), &display_name, query.limit())
            .await?;
    Ok(Json(records))
}
