//! Models for exercise evidence photos.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of one exercise evidence submission.
pub struct ExerciseEvidence {
    pub id: Uuid,
    /// Display name of the submitting agent.
    pub user_name: String,
    /// Name of the routine the photo documents.
    pub routine: String,
    /// Public URL of the uploaded photo.
    pub photo_url: String,
    pub created_at: DateTime<Utc>,
}

impl ExerciseEvidence {
    pub fn new(user_name: String, routine: String, photo_url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_name,
            routine,
            photo_url,
            created_at: Utc::now(),
        }
    }
}
