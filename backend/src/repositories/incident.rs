//! Database access for incident reports.

use sqlx::PgPool;

use crate::models::incident::IncidentReport;

pub async fn insert_report(pool: &PgPool, report: &IncidentReport) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO incident_reports (id, user_name, description, photo_url, created_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(report.id)
    .bind(&report.user_name)
    .bind(&report.description)
    .bind(&report.photo_url)
    .bind(report.created_at)
    .execute(pool)
    .await
    .map(|_| ())
}

pub async fn list_reports_for_user(
    pool: &PgPool,
    user_name: &str,
    limit: i64,
) -> Result<Vec<IncidentReport>, sqlx::Error> {
    sqlx::query_as::<_, IncidentReport>(
        r#"
        SELECT id, user_name, description, photo_url, created_at
        FROM incident_reports
        WHERE user_name = $1
        ORDER BY created_at DESC, id DESC
        LIMIT $2
        "#,
    )
    .bind(user_name)
    .bind(limit)
    .fetch_all(pool)
    .await
}
