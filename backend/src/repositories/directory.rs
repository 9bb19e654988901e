//! Database access for the display-name directory.

use sqlx::PgPool;

use crate::models::directory::DirectoryEntry;
use crate::models::user::User;

pub async fn find_entry(
    pool: &PgPool,
    employee_code: &str,
) -> Result<Option<DirectoryEntry>, sqlx::Error> {
    sqlx::query_as::<_, DirectoryEntry>(
        r#"
        SELECT employee_code, full_name, updated_at
        FROM directory_entries
        WHERE employee_code = $1
        "#,
    )
    .bind(employee_code)
    .fetch_optional(pool)
    .await
}

pub async fn upsert_entry(
    pool: &PgPool,
    employee_code: &str,
    full_name: &str,
) -> Result<DirectoryEntry, sqlx::Error> {
    sqlx::query_as::<_, DirectoryEntry>(
        r#"
        INSERT INTO directory_entries (employee_code, full_name, updated_at)
        VALUES ($1, $2, now())
        ON CONFLICT (employee_code)
        DO UPDATE SET full_name = EXCLUDED.full_name, updated_at = now()
        RETURNING employee_code, full_name, updated_at
        "#,
    )
    .bind(employee_code)
    .bind(full_name)
    .fetch_one(pool)
    .await
}

pub async fn list_entries(pool: &PgPool) -> Result<Vec<DirectoryEntry>, sqlx::Error> {
    sqlx::query_as::<_, DirectoryEntry>(
        r#"
        SELECT employee_code, full_name, updated_at
        FROM directory_entries
        ORDER BY employee_code
        "#,
    )
    .fetch_all(pool)
    .await
}

/// Resolves the display name for a user: directory entry when present,
/// otherwise the employee code. A lookup failure also falls back to the
/// code so a directory outage never blocks the user.
pub async fn resolve_display_name(pool: &PgPool, user: &User) -> String {
    let code = user.employee_code();
    let lookup = find_entry(pool, &code).await;
    if let Err(err) = &lookup {
        tracing::warn!(employee_code = %code, error = ?err, "Directory lookup failed");
    }
    display_name_or_code(lookup.ok().flatten(), code)
}

fn display_name_or_code(entry: Option<DirectoryEntry>, code: String) -> String {
    entry.map(|e| e.full_name).unwrap_or(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn uses_directory_name_when_entry_exists() {
        let entry = DirectoryEntry {
            employee_code: "48291734".into(),
            full_name: "Juan Perez".into(),
            updated_at: Utc::now(),
        };
        assert_eq!(
            display_name_or_code(Some(entry), "48291734".into()),
            "Juan Perez"
        );
    }

    #[test]
    fn falls_back_to_employee_code_without_entry() {
        assert_eq!(display_name_or_code(None, "48291734".into()), "48291734");
    }
}
