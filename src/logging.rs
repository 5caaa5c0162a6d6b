//! Middleware for logging requests and responses.

use std::error::Error as _;

use axum::{
    body::{Body, Bytes, to_bytes},
    extract::Request,
    http::{request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};
use http_body_util::LengthLimitError;

use crate::Error;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If the request or response body is longer than [LOG_BODY_LENGTH_LIMIT]
/// bytes, it is truncated and the full body is logged at the `debug` level.
///
/// Request bodies larger than [REQUEST_BODY_LIMIT] bytes are rejected with
/// `413 Payload Too Large` before they reach a handler.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_bytes = match to_bytes(body, REQUEST_BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(error) if is_length_limit_error(&error) => {
            tracing::warn!("Rejected request body larger than {REQUEST_BODY_LIMIT} bytes");
            return Error::PayloadTooLarge(error.to_string()).into_response();
        }
        Err(error) => {
            tracing::error!("Could not read request body: {error}");
            return Error::UnreadableBody(error.to_string()).into_response();
        }
    };
    log_request(&parts, &body_text(&body_bytes));

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(error) => {
            tracing::error!("Could not read response body: {error}");
            return Error::ResponseBodyError(error.to_string()).into_response();
        }
    };
    log_response(&parts, &body_text(&body_bytes));

    Response::from_parts(parts, Body::from(body_bytes))
}

/// The maximum number of bytes of a body that is logged at the `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// The largest request body, in bytes, that is read into memory.
///
/// Matches the default limit of axum's body extractors.
pub const REQUEST_BODY_LIMIT: usize = 2 * 1024 * 1024;

fn is_length_limit_error(error: &axum::Error) -> bool {
    error
        .source()
        .is_some_and(|source| source.is::<LengthLimitError>())
}

fn body_text(bytes: &Bytes) -> String {
    String::from_utf8_lossy(bytes).to_string()
}

/// Cut `body` down to at most [LOG_BODY_LENGTH_LIMIT] bytes without splitting
/// a UTF-8 character.
fn truncate(body: &str) -> Option<&str> {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return None;
    }

    let end = (0..=LOG_BODY_LENGTH_LIMIT)
        .rev()
        .find(|index| body.is_char_boundary(*index))
        .unwrap_or(0);

    Some(&body[..end])
}

fn log_request(parts: &request::Parts, body: &str) {
    let method = &parts.method;
    let uri = &parts.uri;

    match truncate(body) {
        Some(truncated) => {
            tracing::info!("Received request: {method} {uri}\nbody: {truncated}...");
            tracing::debug!("Full request body: {body:?}");
        }
        None => tracing::info!("Received request: {method} {uri}\nbody: {body:?}"),
    }
}

fn log_response(parts: &response::Parts, body: &str) {
    let status = parts.status;

    match truncate(body) {
        Some(truncated) => {
            tracing::info!("Sending response: {status}\nbody: {truncated}...");
            tracing::debug!("Full response body: {body:?}");
        }
        None => tracing::info!("Sending response: {status}\nbody: {body:?}"),
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, http::StatusCode, middleware, routing::post};
    use axum_test::TestServer;
    use serde_json::Value;

    use super::{LOG_BODY_LENGTH_LIMIT, REQUEST_BODY_LIMIT, logging_middleware, truncate};

    fn get_echo_server() -> TestServer {
        let app = Router::new()
            .route("/echo", post(|body: String| async move { body }))
            .layer(middleware::from_fn(logging_middleware));

        TestServer::try_new(app).expect("Could not create test server.")
    }

    #[test]
    fn short_bodies_are_not_truncated() {
        assert_eq!(truncate("{\"type\":\"income\"}"), None);
    }

    #[test]
    fn long_bodies_are_truncated_to_limit() {
        let body = "a".repeat(LOG_BODY_LENGTH_LIMIT * 2);

        assert_eq!(truncate(&body).map(str::len), Some(LOG_BODY_LENGTH_LIMIT));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let body = "é".repeat(LOG_BODY_LENGTH_LIMIT);

        let truncated = truncate(&body).expect("body should be truncated");

        assert!(truncated.len() <= LOG_BODY_LENGTH_LIMIT);
        assert!(truncated.chars().all(|c| c == 'é'));
    }

    #[tokio::test]
    async fn middleware_passes_body_through() {
        let server = get_echo_server();
        let body = "x".repeat(LOG_BODY_LENGTH_LIMIT + 10);

        let response = server.post("/echo").text(&body).await;

        response.assert_status_ok();
        response.assert_text(body);
    }

    #[tokio::test]
    async fn body_at_limit_is_accepted() {
        let server = get_echo_server();
        let body = "x".repeat(REQUEST_BODY_LIMIT);

        let response = server.post("/echo").text(&body).await;

        response.assert_status_ok();
    }

    #[tokio::test]
    async fn body_over_limit_is_payload_too_large() {
        let server = get_echo_server();
        let body = "x".repeat(REQUEST_BODY_LIMIT + 1);

        let response = server.post("/echo").text(&body).await;

        response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
        assert!(response.json::<Value>()["error"].is_string());
    }
}
