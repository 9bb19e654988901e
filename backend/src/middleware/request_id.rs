//! Request correlation.
//!
//! Every request carries a `RequestId`: the caller's `x-request-id` (or
//! `x-correlation-id`) when present, otherwise a fresh UUID. The id is
//! available as a request extension and echoed on the response.

use axum::{
    extract::Request,
    http::{HeaderMap, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");
const CORRELATION_ID_HEADER: HeaderName = HeaderName::from_static("x-correlation-id");

#[derive(Clone, Debug)]
pub struct RequestId(pub String);

pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = resolve_id(req.headers());
    req.extensions_mut().insert(RequestId(id.clone()));

    let mut response = next.run(req).await;
    if let Ok(value) = HeaderValue::from_str(&id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

fn resolve_id(headers: &HeaderMap) -> String {
    headers
        .get(&REQUEST_ID_HEADER)
        .or_else(|| headers.get(&CORRELATION_ID_HEADER))
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_request_id_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-request-id", HeaderValue::from_static("req-1"));
        headers.insert("x-correlation-id", HeaderValue::from_static("corr-1"));
        assert_eq!(resolve_id(&headers), "req-1");
    }

    #[test]
    fn resolve_falls_back_to_correlation_id() {
        let mut headers = HeaderMap::new();
        headers.insert("x-correlation-id", HeaderValue::from_static("corr-2"));
        assert_eq!(resolve_id(&headers), "corr-2");
    }

    #[test]
    fn resolve_generates_uuid_when_absent() {
        let id = resolve_id(&HeaderMap::new());
        assert!(Uuid::parse_str(&id).is_ok());
    }
}
