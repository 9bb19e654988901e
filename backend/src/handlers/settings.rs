//! App-wide settings handlers.
//!
//! The only setting today is the siren color shown on the agent menu; any
//! authenticated user may read it, only admins may change it.

use axum::{extract::State, Json};
use validator::Validate;

use crate::{
    error::AppError,
    models::settings::{SirenSetting, UpdateSirenSetting},
    repositories::settings,
    state::AppState,
};

pub async fn get_siren(State(state): State<AppState>) -> Result<Json<SirenSetting>, AppError> {
    let color = settings::get_siren_color(state.pool.as_ref()).await?;
    Ok(Json(SirenSetting { color }))
}

pub async fn update_siren(
    State(state): State<AppState>,
    Json(payload): Json<UpdateSirenSetting>,
) -> Result<Json<SirenSetting>, AppError> {
    payload.validate()?;

    let color = payload.color.to_lowercase();
    settings::set_siren_color(state.pool.as_ref(), &color).await?;

    tracing::info!(color = %color, "Siren color updated");

    Ok(Json(SirenSetting { color }))
}
