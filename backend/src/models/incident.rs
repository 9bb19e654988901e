//! Models for incident reports with photo evidence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of one incident report.
pub struct IncidentReport {
    pub id: Uuid,
    /// Display name of the reporting agent.
    pub user_name: String,
    pub description: String,
    /// Public URL of the uploaded photo.
    pub photo_url: String,
    pub created_at: DateTime<Utc>,
}

impl IncidentReport {
    pub fn new(user_name: String, description: String, photo_url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_name,
            description,
            photo_url,
            created_at: Utc::now(),
        }
    }
}
