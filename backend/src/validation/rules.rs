//! Common validation rules shared across request payloads.

use serde_json::Value;
use validator::ValidationError;

/// Validates a hex color string.
///
/// Requirements:
/// - Leading `#`
/// - 3 or 6 hex digits
pub fn validate_hex_color(color: &str) -> Result<(), ValidationError> {
    let Some(digits) = color.strip_prefix('#') else {
        return Err(ValidationError::new("hex_color_missing_hash"));
    };

    if digits.len() != 3 && digits.len() != 6 {
        return Err(ValidationError::new("hex_color_invalid_length"));
    }

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ValidationError::new("hex_color_invalid_characters"));
    }

    Ok(())
}

/// Validates a checklist answer map.
///
/// Requirements:
/// - At least one answered question
/// - No blank question keys
pub fn validate_answers(answers: &serde_json::Map<String, Value>) -> Result<(), ValidationError> {
    if answers.is_empty() {
        return Err(ValidationError::new("answers_empty"));
    }

    if answers.keys().any(|key| key.trim().is_empty()) {
        return Err(ValidationError::new("answers_blank_question"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_color_accepts_three_and_six_digits() {
        assert!(validate_hex_color("#00ff00").is_ok());
        assert!(validate_hex_color("#0F0").is_ok());
        assert!(validate_hex_color("#AbCdEf").is_ok());
    }

    #[test]
    fn hex_color_rejects_missing_hash() {
        assert!(validate_hex_color("00ff00").is_err());
    }

    #[test]
    fn hex_color_rejects_bad_length() {
        assert!(validate_hex_color("#ff").is_err());
        assert!(validate_hex_color("#ffff").is_err());
        assert!(validate_hex_color("#ff00ff00").is_err());
    }

    #[test]
    fn hex_color_rejects_non_hex_digits() {
        assert!(validate_hex_color("#00gg00").is_err());
    }

    #[test]
    fn answers_rejects_empty_map() {
        let answers = serde_json::Map::new();
        assert!(validate_answers(&answers).is_err());
    }

    #[test]
    fn answers_rejects_blank_question() {
        let mut answers = serde_json::Map::new();
        answers.insert("  ".into(), Value::String("yes".into()));
        assert!(validate_answers(&answers).is_err());
    }

    #[test]
    fn answers_accepts_valid_map() {
        let mut answers = serde_json::Map::new();
        answers.insert("brakes_ok".into(), Value::String("yes".into()));
        assert!(validate_answers(&answers).is_ok());
    }
}
