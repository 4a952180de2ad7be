//! Response interceptor.
//!
//! # Responsibilities
//! - Run after a controlled handler produced its body, before transmission
//! - Write the provider's value into the `Custom-Header` response header
//!
//! # Design Decisions
//! - Applied as a route-scoped layer, so it is only ever invoked for
//!   responses of controlled endpoints
//! - `insert` overwrites any existing value rather than appending
//! - Body, status, and content type are never touched
//! - A provider value that is not a legal header value surfaces as the
//!   framework-generic 500 response

use axum::body::Body;
use axum::extract::State;
use axum::http::{header::HeaderName, HeaderValue, Request, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::http::server::AppState;

/// Header written by the interceptor.
pub const CUSTOM_HEADER: HeaderName = HeaderName::from_static("custom-header");

/// Inject the provider's message into the response of a controlled endpoint.
///
/// The provider is consulted freshly on every invocation; its value is never
/// cached across responses.
pub async fn apply_header_advice(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    let message = state.provider.message();
    match HeaderValue::from_str(&message) {
        Ok(value) => {
            if state.observability.log_advice {
                tracing::debug!(header = %CUSTOM_HEADER, "Injecting response header");
            }
            response.headers_mut().insert(CUSTOM_HEADER, value);
            response
        }
        Err(_) => {
            tracing::error!(
                "Header value provider returned a value that is not a valid HTTP header"
            );
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
