//! Admin handlers for the display-name directory.

use axum::{
    extract::{Path, State},
    Json,
};
use validator::Validate;

use crate::{
    error::AppError,
    models::directory::{DirectoryEntry, UpsertDirectoryEntry},
    repositories::directory,
    state::AppState,
};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<DirectoryEntry>>, AppError> {
    let entries = directory::list_entries(state.pool.as_ref()).await?;
    Ok(Json(entries))
}

pub async fn get(
    State(state): State<AppState>,
    Path(employee_code): Path<String>,
) -> Result<Json<DirectoryEntry>, AppError> {
    let entry = directory::find_entry(state.pool.as_ref(), &employee_code)
        .await?
        .ok_or_else(|| AppError::NotFound("Directory entry not found".into()))?;
    Ok(Json(entry))
}

pub async fn upsert(
    State(state): State<AppState>,
    Path(employee_code): Path<String>,
    Json(payload): Json<UpsertDirectoryEntry>,
) -> Result<Json<DirectoryEntry>, AppError> {
    payload.validate()?;

    let code = employee_code.trim();
    if code.is_empty() {
        return Err(AppError::BadRequest("Employee code is required".into()));
    }

    let entry =
        directory::upsert_entry(state.pool.as_ref(), code, payload.full_name.trim()).await?;

    tracing::info!(employee_code = %entry.employee_code, "Directory entry updated");

    Ok(Json(entry))
}
