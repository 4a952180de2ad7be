//! Request identification.
//!
//! # Responsibilities
//! - Stamp every request with an `x-request-id` (UUID v4) as early as
//!   possible, for log correlation
//! - Echo the id on the response so clients can quote it
//!
//! # Design Decisions
//! - An id supplied by the client is preserved, never regenerated

use axum::body::Body;
use axum::http::{header::HeaderName, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;
use uuid::Uuid;

/// Correlation id header.
pub const X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Ensure the request carries an `x-request-id` and mirror it on the
/// response.
pub async fn stamp_request_id(mut request: Request<Body>, next: Next) -> Response {
    let id = request
        .headers()
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    // UUIDs and anything the client already sent as a header are valid
    // header values.
    if let Ok(value) = HeaderValue::from_str(&id) {
        request.headers_mut().insert(X_REQUEST_ID.clone(), value.clone());
        let mut response = next.run(request).await;
        response.headers_mut().insert(X_REQUEST_ID.clone(), value);
        response
    } else {
        next.run(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::middleware;
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(middleware::from_fn(stamp_request_id))
    }

    #[tokio::test]
    async fn test_id_generated_when_missing() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let id = response
            .headers()
            .get(&X_REQUEST_ID)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert!(Uuid::parse_str(id).is_ok());
    }

    #[tokio::test]
    async fn test_client_id_preserved() {
        let response = app()
            .oneshot(
                Request::get("/")
                    .header(&X_REQUEST_ID, "caller-chosen")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(&X_REQUEST_ID).and_then(|v| v.to_str().ok()),
            Some("caller-chosen")
        );
    }
}
