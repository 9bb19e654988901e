//! Incident report handlers.
//!
//! Reports arrive as multipart forms: a `description` text field plus a
//! `photo` file. The photo is persisted to blob storage before the record
//! is written, so a stored record always points at an existing image.

use axum::{
    extract::{Extension, Multipart, Query, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    error::AppError,
    handlers::uploads::read_photo_form,
    models::incident::IncidentReport,
    models::user::User,
    models::ListQuery,
    repositories::{directory, incident},
    state::AppState,
};

pub async fn create(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<IncidentReport>), AppError> {
    let upload = read_photo_form(multipart, "description").await?;

    let key = format!("incidents/{}.{}", Uuid::new_v4(), upload.extension);
    state.media.put(&key, &upload.photo).await?;

    let display_name = directory::resolve_display_name(state.pool.as_ref(), &user).await;
    let report = IncidentReport::new(display_name, upload.text, state.media.public_url(&key));
    incident::insert_report(state.pool.as_ref(), &report).await?;

    tracing::info!(user = %report.user_name, report_id = %report.id, "Incident reported");

    Ok((StatusCode::CREATED, Json(report)))
}

pub async fn list_mine(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<IncidentReport>>, AppError> {
    let display_name = directory::resolve_display_name(state.pool.as_ref(), &user).await;
    let reports =
        incident::list_reports_for_user(state.pool.as_ref(), &display_name, query.limit())
            .await?;
    Ok(Json(reports))
}
