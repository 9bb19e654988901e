use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub username: String,
    pub role: String,
    pub exp: i64,    // expiration time
    pub iat: i64,    // issued at
    pub jti: String, // JWT ID
}

/// A freshly minted refresh token. Only the hash is persisted; the
/// plaintext secret leaves the server once, inside `encoded()`.
#[derive(Debug)]
pub struct RefreshToken {
    pub id: String,
    pub user_id: Uuid,
    pub token_hash: String,
    pub expires_at: chrono::DateTime<Utc>,
    secret: String,
}

impl Claims {
    pub fn new(user_id: Uuid, username: String, role: String, expiration_hours: u64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiration_hours as i64);

        Self {
            sub: user_id.to_string(),
            username,
            role,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        }
    }
}

impl RefreshToken {
    /// Returns the client-facing form: `<token id>.<secret>`.
    pub fn encoded(&self) -> String {
        format!("{}.{}", self.id, self.secret)
    }
}

pub fn create_access_token(
    user_id: Uuid,
    username: String,
    role: String,
    secret: &str,
    expiration_hours: u64,
) -> anyhow::Result<String> {
    let claims = Claims::new(user_id, username, role, expiration_hours);
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;

    Ok(token)
}

pub fn create_refresh_token(user_id: Uuid, expiration_days: u64) -> anyhow::Result<RefreshToken> {
    let secret = Uuid::new_v4().to_string();
    let token_hash = hash_refresh_token(&secret)?;
    let expires_at = Utc::now() + Duration::days(expiration_days as i64);

    Ok(RefreshToken {
        id: Uuid::new_v4().to_string(),
        user_id,
        token_hash,
        expires_at,
        secret,
    })
}

/// Splits a client-supplied refresh token into `(token id, secret)`.
pub fn decode_refresh_token(raw: &str) -> anyhow::Result<(String, String)> {
    let (id, secret) = raw
        .split_once('.')
        .ok_or_else(|| anyhow::anyhow!("Malformed refresh token"))?;
    if id.is_empty() || secret.is_empty() {
        return Err(anyhow::anyhow!("Malformed refresh token"));
    }
    Ok((id.to_string(), secret.to_string()))
}

pub fn verify_access_token(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let validation = Validation::default();
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )?;

    Ok(token_data.claims)
}

pub fn hash_refresh_token(token: &str) -> anyhow::Result<String> {
    use argon2::password_hash::{rand_core::OsRng, SaltString};
    use argon2::{Argon2, PasswordHasher};

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let token_hash = argon2
        .hash_password(token.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash refresh token: {}", e))?;

    Ok(token_hash.to_string())
}

pub fn verify_refresh_token(token: &str, hash: &str) -> anyhow::Result<bool> {
    use argon2::password_hash::PasswordHash;
    use argon2::{Argon2, PasswordVerifier};

    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| anyhow::anyhow!("Invalid refresh token hash: {}", e))?;

    let argon2 = Argon2::default();
    let result = argon2.verify_password(token.as_bytes(), &parsed_hash);

    match result {
        Ok(_) => Ok(true),
        Err(argon2::password_hash::Error::Password) => Ok(false),
        Err(e) => Err(anyhow::anyhow!("Refresh token verification error: {}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_and_verify_access_token() {
        let user_id = Uuid::new_v4();
        let token =
            create_access_token(user_id, "bob@example.com".into(), "agent".into(), "secret", 1)
                .expect("create token");
        let claims = verify_access_token(&token, "secret").expect("verify token");
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.username, "bob@example.com");
        assert_eq!(claims.role, "agent");
    }

    #[test]
    fn verify_rejects_wrong_secret() {
        let token = create_access_token(
            Uuid::new_v4(),
            "bob@example.com".into(),
            "agent".into(),
            "secret",
            1,
        )
        .unwrap();
        assert!(verify_access_token(&token, "other-secret").is_err());
    }

    #[test]
    fn refresh_token_roundtrip() {
        let token = create_refresh_token(Uuid::new_v4(), 7).expect("create refresh token");
        let (id, secret) = decode_refresh_token(&token.encoded()).expect("decode");
        assert_eq!(id, token.id);
        assert!(verify_refresh_token(&secret, &token.token_hash).unwrap());
        assert!(!verify_refresh_token("bogus", &token.token_hash).unwrap());
    }

    #[test]
    fn decode_rejects_malformed_refresh_token() {
        assert!(decode_refresh_token("no-separator").is_err());
        assert!(decode_refresh_token(".secret-only").is_err());
        assert!(decode_refresh_token("id-only.").is_err());
    }
}
