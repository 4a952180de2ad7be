//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (add request ID)
//!     → handlers.rs (produce JSON body)
//!     → [controlled routes only] advice interceptor sets Custom-Header
//!     → Send to client
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use request::{stamp_request_id, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
