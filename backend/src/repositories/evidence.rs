//! Database access for exercise evidence.

use sqlx::PgPool;

use crate::models::evidence::ExerciseEvidence;

pub async fn insert_evidence(
    pool: &PgPool,
    evidence: &ExerciseEvidence,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO exercise_evidence (id, user_name, routine, photo_url, created_at)
        VALUES ($1, $2, $3, $4, $5)
        "#,
    )
    .bind(evidence.id)
    .bind(&evidence.user_name)
    .bind(&evidence.routine)
    .bind(&evidence.photo_url)
    .bind(evidence.created_at)
    .execute(pool)
    .await
    .map(|_| ())
}

pub async fn list_evidence_for_user(
    pool: &PgPool,
    user_name: &str,
    limit: i64,
) -> Result<Vec<ExerciseEvidence>, sqlx::Error> {
    sqlx::query_as::<_, ExerciseEvidence>(
        r#"
        SELECT id, user_name, routine, photo_url, created_at
        FROM exercise_evidence
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
