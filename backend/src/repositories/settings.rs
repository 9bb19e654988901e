//! Database access for app-wide settings.

use sqlx::{PgPool, Row};

use crate::models::settings::DEFAULT_SIREN_COLOR;

const SIREN_COLOR_KEY: &str = "siren_color";

pub async fn get_siren_color(pool: &PgPool) -> Result<String, sqlx::Error> {
    let row = sqlx::query("SELECT value FROM app_settings WHERE key = $1")
        .bind(SIREN_COLOR_KEY)
        .fetch_optional(pool)
        .await?;
    Ok(row
        .map(|r| r.get::<String, _>("value"))
        .unwrap_or_else(|| DEFAULT_SIREN_COLOR.to_string()))
}

pub async fn set_siren_color(pool: &PgPool, color: &str) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO app_settings (key, value, updated_at)
        VALUES ($1, $2, now())
        ON CONFLICT (key)
        DO UPDATE SET value = EXCLUDED.value, updated_at = now()
        "#,
    )
    .bind(SIREN_COLOR_KEY)
    .bind(color)
    .execute(pool)
    .await
    .map(|_| ())
}
