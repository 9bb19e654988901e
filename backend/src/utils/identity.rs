//! Login identifier normalization.
//!
//! Agents sign in with either a full email or a bare employee code (typically
//! a national ID number). Codes are completed with the configured default
//! domain; anything already email-shaped is checked before the credential
//! store is ever consulted.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentityError {
    #[error("Identifier is required")]
    Empty,
    #[error("Invalid email format")]
    MalformedEmail,
}

/// Normalizes a raw login identifier into a full email address.
pub fn normalize_identifier(raw: &str, default_domain: &str) -> Result<String, IdentityError> {
    let identifier = raw.trim();
    if identifier.is_empty() {
        return Err(IdentityError::Empty);
    }

    if !identifier.contains('@') {
        return Ok(format!("{}@{}", identifier, default_domain));
    }

    if is_email_shaped(identifier) {
        Ok(identifier.to_string())
    } else {
        Err(IdentityError::MalformedEmail)
    }
}

// local@domain.tld: exactly one '@', no whitespace, dotted domain.
fn is_email_shaped(candidate: &str) -> bool {
    let mut parts = candidate.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.contains('@') || domain.chars().any(char::is_whitespace) {
        return false;
    }

    match domain.rsplit_once('.') {
        Some((name, tld)) => !name.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Derives the employee code from a normalized identifier.
pub fn employee_code(identifier: &str) -> String {
    identifier
        .split('@')
        .next()
        .unwrap_or(identifier)
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_default_domain_to_bare_code() {
        let result = normalize_identifier("48291734", "example.com").unwrap();
        assert_eq!(result, "48291734@example.com");
    }

    #[test]
    fn trims_before_normalizing() {
        let result = normalize_identifier("  48291734  ", "example.com").unwrap();
        assert_eq!(result, "48291734@example.com");
    }

    #[test]
    fn keeps_well_formed_email_untouched() {
        let result = normalize_identifier("jperez@example.com", "other.com").unwrap();
        assert_eq!(result, "jperez@example.com");
    }

    #[test]
    fn rejects_empty_identifier() {
        assert_eq!(
            normalize_identifier("   ", "example.com"),
            Err(IdentityError::Empty)
        );
    }

    #[test]
    fn rejects_malformed_email_shapes() {
        for candidate in [
            "user@",
            "@domain.com",
            "user@domain",
            "user@@domain.com",
            "us er@domain.com",
            "user@dom ain.com",
            "user@.com",
            "user@domain.",
        ] {
            assert_eq!(
                normalize_identifier(candidate, "example.com"),
                Err(IdentityError::MalformedEmail),
                "should reject {candidate:?}"
            );
        }
    }

    #[test]
    fn employee_code_strips_domain() {
        assert_eq!(employee_code("48291734@example.com"), "48291734");
        assert_eq!(employee_code("plain"), "plain");
    }
}
