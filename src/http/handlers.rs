//! Endpoint handlers.
//!
//! Both handlers are hardcoded success paths; which of them gets the
//! `Custom-Header` is decided entirely by registration in `server.rs`.

use axum::Json;
use serde_json::{json, Value};

/// `GET /endpoint1`. Registered controlled, so its response passes through
/// the interceptor.
pub async fn endpoint1() -> Json<Value> {
    Json(json!({
        "message": "Hello, World!",
    }))
}

/// `GET /endpoint2`. Uncontrolled; the response goes out as produced.
pub async fn endpoint2() -> Json<Value> {
    Json(json!({
        "message": "Hello again, World!",
    }))
}
