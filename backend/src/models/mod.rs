//! Data models shared across database access and API handlers.

use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

pub mod checklist;
pub mod directory;
pub mod evidence;
pub mod incident;
pub mod settings;
pub mod shift_session;
pub mod user;

/// Query parameters for listing endpoints.
#[derive(Debug, Clone, Deserialize, IntoParams, ToSchema)]
pub struct ListQuery {
    /// Maximum number of records to return (default: 50, max: 200).
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

impl ListQuery {
    /// Returns a clamped limit value (1..=200).
    pub fn limit(&self) -> i64 {
        self.limit.clamp(1, 200)
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            limit: default_limit(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_clamps_limit() {
        assert_eq!(ListQuery { limit: 0 }.limit(), 1);
        assert_eq!(ListQuery { limit: 5000 }.limit(), 200);
        assert_eq!(ListQuery::default().limit(), 50);
    }
}
