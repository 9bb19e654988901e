//! Models that represent user accounts and authentication payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
/// Database representation of an authenticated user account.
pub struct User {
    /// Unique identifier for the user.
    pub id: Uuid,
    /// Full login email, immutable after creation.
    pub username: String,
    /// Argon2 hash of the user's password.
    pub password_hash: String,
    /// Role describing the user's privileges.
    pub role: UserRole,
    /// Creation timestamp for auditing.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp for auditing.
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, sqlx::Type, ToSchema, Default)]
#[sqlx(type_name = "TEXT", rename_all = "snake_case")]
#[schema(rename_all = "snake_case")]
/// Supported user roles stored in the database.
pub enum UserRole {
    /// Field agent with access to shifts, checklists and reports.
    #[default]
    Agent,
    /// Administrator role with elevated permissions.
    Admin,
}

impl UserRole {
    /// Returns the canonical snake_case representation of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Agent => "agent",
            UserRole::Admin => "admin",
        }
    }
}

impl Serialize for UserRole {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "agent" => Ok(UserRole::Agent),
            "admin" => Ok(UserRole::Admin),
            // tolerate common legacy casings
            "Agent" | "AGENT" => Ok(UserRole::Agent),
            "Admin" | "ADMIN" => Ok(UserRole::Admin),
            other => Err(serde::de::Error::unknown_variant(
                other,
                &["agent", "admin"],
            )),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Credentials submitted by a user attempting to authenticate.
///
/// The identifier may be a full email or a bare employee code; codes are
/// completed with the configured default domain before lookup.
pub struct LoginRequest {
    pub identifier: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Authentication tokens returned after a successful login.
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Public-facing representation of a user returned by the API.
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        UserResponse {
            id: user.id,
            username: user.username,
            role: user.role.as_str().to_string(),
        }
    }
}

impl User {
    /// Constructs a new user with freshly generated identifiers.
    pub fn new(username: String, password_hash: String, role: UserRole) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            password_hash,
            role,
            created_at: now,
            updated_at: now,
        }
    }

    /// Returns `true` when the user holds the `Admin` role.
    pub fn is_admin(&self) -> bool {
        matches!(self.role, UserRole::Admin)
    }

    /// Returns the employee code: the login email's local part, trimmed.
    pub fn employee_code(&self) -> String {
        self.username
            .split('@')
            .next()
            .unwrap_or(&self.username)
            .trim()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn user_role_serde_accepts_and_emits_snake_case() {
        let a: UserRole = serde_json::from_str("\"agent\"").unwrap();
        let b: UserRole = serde_json::from_str("\"admin\"").unwrap();
        assert!(matches!(a, UserRole::Agent));
        assert!(matches!(b, UserRole::Admin));

        // Tolerate legacy casings
        let a2: UserRole = serde_json::from_str("\"Agent\"").unwrap();
        let b2: UserRole = serde_json::from_str("\"ADMIN\"").unwrap();
        assert!(matches!(a2, UserRole::Agent));
        assert!(matches!(b2, UserRole::Admin));

        let sa = serde_json::to_value(UserRole::Agent).unwrap();
        let sb = serde_json::to_value(UserRole::Admin).unwrap();
        assert_eq!(sa, Value::String("agent".into()));
        assert_eq!(sb, Value::String("admin".into()));
    }

    #[test]
    fn employee_code_is_email_local_part() {
        let user = User::new("482917@example.com".into(), "hash".into(), UserRole::Agent);
        assert_eq!(user.employee_code(), "482917");
    }

    #[test]
    fn employee_code_falls_back_to_username_without_at() {
        let user = User::new("plainname".into(), "hash".into(), UserRole::Agent);
        assert_eq!(user.employee_code(), "plainname");
    }

    #[test]
    fn user_response_role_is_snake_case_string() {
        let user = User::new("a@example.com".into(), "hash".into(), UserRole::Admin);
        let resp: UserResponse = user.into();
        assert_eq!(resp.role, "admin");
    }
}
