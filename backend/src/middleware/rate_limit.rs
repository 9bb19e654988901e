//! Per-IP sliding-window rate limiting for the login endpoint.
//!
//! Failed-credential hammering is answered with 429 once an address exhausts
//! its window, mirroring the "too many attempts, wait a few minutes" behavior
//! agents see in the app.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, Instant};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug)]
struct AttemptWindow {
    attempts: VecDeque<Instant>,
}

const STORE_CLEANUP_THRESHOLD: usize = 10_000;

fn attempt_store() -> &'static Mutex<HashMap<String, AttemptWindow>> {
    static STORE: OnceLock<Mutex<HashMap<String, AttemptWindow>>> = OnceLock::new();
    STORE.get_or_init(|| Mutex::new(HashMap::new()))
}

pub async fn login_rate_limit(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let key = client_ip(request.headers()).unwrap_or_else(|| "unknown".to_string());
    let max_attempts = state.config.login_rate_limit_max_attempts.max(1) as usize;
    let window = Duration::from_secs(state.config.login_rate_limit_window_seconds.max(1));
    let now = Instant::now();

    let allowed = {
        let mut store = attempt_store().lock().unwrap_or_else(|e| e.into_inner());
        if store.len() > STORE_CLEANUP_THRESHOLD {
            store.retain(|_, entry| {
                prune_expired(entry, now, window);
                !entry.attempts.is_empty()
            });
        }

        let entry = store.entry(key).or_insert_with(|| AttemptWindow {
            attempts: VecDeque::new(),
        });
        prune_expired(entry, now, window);
        if entry.attempts.len() >= max_attempts {
            false
        } else {
            entry.attempts.push_back(now);
            true
        }
    };

    if !allowed {
        return AppError::TooManyRequests(
            "Too many login attempts. Please wait a few minutes.".into(),
        )
        .into_response();
    }

    next.run(request).await
}

fn prune_expired(entry: &mut AttemptWindow, now: Instant, window: Duration) {
    while let Some(oldest) = entry.attempts.front() {
        if now.duration_since(*oldest) >= window {
            entry.attempts.pop_front();
        } else {
            break;
        }
    }
}

fn client_ip(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get("x-forwarded-for").and_then(|v| v.to_str().ok()) {
        return value
            .split(',')
            .next()
            .map(|ip| ip.trim().to_string())
            .filter(|ip| !ip.is_empty());
    }
    headers
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(|ip| ip.trim().to_string())
        .filter(|ip| !ip.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn client_ip_prefers_first_forwarded_entry() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static("203.0.113.7, 10.0.0.1"),
        );
        assert_eq!(client_ip(&headers).as_deref(), Some("203.0.113.7"));
    }

    #[test]
    fn client_ip_falls_back_to_real_ip() {
        let mut headers = HeaderMap::new();
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.4"));
        assert_eq!(client_ip(&headers).as_deref(), Some("198.51.100.4"));
    }

    #[test]
    fn client_ip_missing_headers_is_none() {
        assert_eq!(client_ip(&HeaderMap::new()), None);
    }

    #[test]
    fn prune_drops_only_expired_attempts() {
        let window = Duration::from_secs(60);
        let now = Instant::now();
        let mut entry = AttemptWindow {
            attempts: VecDeque::from([now - Duration::from_secs(120), now]),
        };
        prune_expired(&mut entry, now, window);
        assert_eq!(entry.attempts.len(), 1);
    }
}
