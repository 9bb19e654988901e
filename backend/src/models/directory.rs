//! Models for the employee-code to display-name directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// One directory mapping. Users without an entry fall back to their
/// employee code everywhere a display name is shown or recorded.
pub struct DirectoryEntry {
    pub employee_code: String,
    pub full_name: String,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
/// Payload for creating or replacing a directory entry.
pub struct UpsertDirectoryEntry {
    #[validate(length(min = 1, max = 200, message = "Full name is required"))]
    pub full_name: String,
}
