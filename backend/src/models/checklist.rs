//! Models for unified checklist submissions.
//!
//! A submission covers one or both duty roles (escort, driver); the
//! standalone driver form is the single-role `driver` variant of the same
//! record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::validation::rules;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
/// Duty role a checklist covers.
pub enum ChecklistRole {
    Escort,
    Driver,
}

impl ChecklistRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecklistRole::Escort => "escort",
            ChecklistRole::Driver => "driver",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of a submitted checklist.
pub struct ChecklistSubmission {
    pub id: Uuid,
    pub user_id: Uuid,
    /// Display name of the submitter at submission time.
    pub user_name: String,
    /// Duty roles the submission covers.
    pub roles: Vec<String>,
    /// Question -> answer map as submitted.
    #[schema(value_type = Object)]
    pub answers: Value,
    pub observations: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
/// Payload for submitting a checklist.
pub struct CreateChecklistRequest {
    #[validate(length(min = 1, message = "At least one role is required"))]
    pub roles: Vec<ChecklistRole>,
    #[validate(custom(function = rules::validate_answers))]
    #[schema(value_type = Object)]
    pub answers: serde_json::Map<String, Value>,
    #[serde(default)]
    pub observations: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> CreateChecklistRequest {
        let mut answers = serde_json::Map::new();
        answers.insert("lights_ok".into(), Value::String("yes".into()));
        CreateChecklistRequest {
            roles: vec![ChecklistRole::Driver],
            answers,
            observations: None,
        }
    }

    #[test]
    fn accepts_valid_payload() {
        assert!(valid_payload().validate().is_ok());
    }

    #[test]
    fn rejects_empty_roles() {
        let mut payload = valid_payload();
        payload.roles.clear();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn rejects_empty_answers() {
        let mut payload = valid_payload();
        payload.answers.clear();
        assert!(payload.validate().is_err());
    }

    #[test]
    fn roles_deserialize_lowercase() {
        let role: ChecklistRole = serde_json::from_str("\"escort\"").unwrap();
        assert_eq!(role, ChecklistRole::Escort);
        let role: ChecklistRole = serde_json::from_str("\"driver\"").unwrap();
        assert_eq!(role, ChecklistRole::Driver);
    }
}
