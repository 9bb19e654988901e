use anyhow::anyhow;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_expiration_hours: u64,
    pub refresh_token_expiration_days: u64,
    pub time_zone: Tz,
    /// Domain appended to login identifiers that carry no '@'.
    pub default_email_domain: String,
    /// Directory where uploaded photos are stored.
    pub media_root: String,
    /// URL prefix under which stored photos are served.
    pub media_public_base: String,
    pub login_rate_limit_max_attempts: u32,
    pub login_rate_limit_window_seconds: u64,
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .unwrap_or_else(|_| "postgres://localhost/fieldops".to_string());

        let database_max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .unwrap_or(10);

        let jwt_secret = env::var("JWT_SECRET")
            .unwrap_or_else(|_| "your-secret-key-change-this-in-production".to_string());

        let jwt_expiration_hours = env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "1".to_string())
            .parse()
            .unwrap_or(1);

        let refresh_token_expiration_days = env::var("REFRESH_TOKEN_EXPIRATION_DAYS")
            .unwrap_or_else(|_| "7".to_string())
            .parse()
            .unwrap_or(7);

        let time_zone_name = env::var("APP_TIMEZONE").unwrap_or_else(|_| "America/Lima".to_string());
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid APP_TIMEZONE value: {}", time_zone_name))?;

        let default_email_domain =
            env::var("DEFAULT_EMAIL_DOMAIN").unwrap_or_else(|_| "example.com".to_string());

        let media_root = env::var("MEDIA_ROOT").unwrap_or_else(|_| "./media".to_string());
        let media_public_base =
            env::var("MEDIA_PUBLIC_BASE").unwrap_or_else(|_| "/media".to_string());

        let login_rate_limit_max_attempts = env::var("LOGIN_RATE_LIMIT_MAX_ATTEMPTS")
            .unwrap_or_else(|_| "15".to_string())
            .parse()
            .unwrap_or(15);

        let login_rate_limit_window_seconds = env::var("LOGIN_RATE_LIMIT_WINDOW_SECONDS")
            .unwrap_or_else(|_| "900".to_string())
            .parse()
            .unwrap_or(900);

        Ok(Config {
            database_url,
            database_max_connections,
            jwt_secret,
            jwt_expiration_hours,
            refresh_token_expiration_days,
            time_zone,
            default_email_domain,
            media_root,
            media_public_base,
            login_rate_limit_max_attempts,
            login_rate_limit_window_seconds,
        })
    }
}
