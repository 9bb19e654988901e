//! Database access for checklist submissions.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::checklist::ChecklistSubmission;

const CHECKLIST_COLUMNS: &str =
    "id, user_id, user_name, roles, answers, observations, created_at";

pub async fn insert_submission(
    pool: &PgPool,
    submission: &ChecklistSubmission,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO checklist_submissions
            (id, user_id, user_name, roles, answers, observations, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(submission.id)
    .bind(submission.user_id)
    .bind(&submission.user_name)
    .bind(&submission.roles)
    .bind(&submission.answers)
    .bind(&submission.observations)
    .bind(submission.created_at)
    .execute(pool)
    .await
    .map(|_| ())
}

pub async fn list_submissions_for_user(
    pool: &PgPool,
    user_id: Uuid,
    limit: i64,
) -> Result<Vec<ChecklistSubmission>, sqlx::Error> {
    sqlx::query_as::<_, ChecklistSubmission>(&format!(
        r#"
        SELECT {CHECKLIST_COLUMNS}
        FROM checklist_submissions
        WHERE user_id = $1
        ORDER BY created_at DESC, id DESC
        LIMIT $2
        "#,
    ))
    .bind(user_id)
    .bind(limit)
    .fetch_all(pool)
    .await
}
