//! Endpoint registration and capability partitioning.
//!
//! # Responsibilities
//! - Describe each endpoint as (path, handler, controlled flag)
//! - Split registered endpoints into advised and plain routers
//!
//! # Design Decisions
//! - The controlled flag is an explicit registration-time attribute, checked
//!   once while building the router; uncontrolled endpoints never touch the
//!   interceptor at request time
//! - Registration is immutable after startup (thread-safe without locks)

use axum::routing::MethodRouter;
use axum::Router;

/// A registered endpoint: a path, its handler, and whether responses from it
/// are subject to the response interceptor.
pub struct Endpoint<S> {
    /// Route path (axum syntax).
    pub path: &'static str,

    /// Method router producing the response body.
    pub handler: MethodRouter<S>,

    /// Whether the response interceptor applies to this endpoint.
    pub controlled: bool,
}

impl<S> Endpoint<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Register an endpoint. Endpoints are uncontrolled by default.
    pub fn new(path: &'static str, handler: MethodRouter<S>) -> Self {
        Self {
            path,
            handler,
            controlled: false,
        }
    }

    /// Mark this endpoint as controlled: its responses pass through the
    /// interceptor before transmission.
    pub fn controlled(mut self) -> Self {
        self.controlled = true;
        self
    }
}

/// Partition registered endpoints into (controlled, uncontrolled) routers.
///
/// The caller layers the interceptor onto the controlled router only, then
/// merges the two. This keeps the capability check out of the request path
/// entirely.
pub fn partition<S>(endpoints: Vec<Endpoint<S>>) -> (Router<S>, Router<S>)
where
    S: Clone + Send + Sync + 'static,
{
    let mut controlled = Router::new();
    let mut uncontrolled = Router::new();

    for endpoint in endpoints {
        if endpoint.controlled {
            controlled = controlled.route(endpoint.path, endpoint.handler);
        } else {
            uncontrolled = uncontrolled.route(endpoint.path, endpoint.handler);
        }
    }

    (controlled, uncontrolled)
}
