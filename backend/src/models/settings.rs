//! Models for app-wide settings.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::rules;

/// Color applied when no siren setting has been stored yet.
pub const DEFAULT_SIREN_COLOR: &str = "#00ff00";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
/// Current siren color as a hex string.
pub struct SirenSetting {
    pub color: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
/// Payload for updating the siren color.
pub struct UpdateSirenSetting {
    /// `#RGB` or `#RRGGBB` hex color.
    #[validate(custom(function = rules::validate_hex_color))]
    pub color: String,
}
