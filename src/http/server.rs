//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Register endpoints with their controlled flag
//! - Wire up middleware (tracing, timeout, request ID)
//! - Layer the response interceptor onto controlled routes only
//! - Bind server to listener and serve with graceful shutdown

use std::sync::Arc;
use std::time::Duration;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::advice::interceptor::apply_header_advice;
use crate::advice::provider::{HeaderValueProvider, StaticMessageProvider};
use crate::advice::registry::{partition, Endpoint};
use crate::config::{ObservabilityConfig, ServiceConfig};
use crate::http::handlers;
use crate::http::request::stamp_request_id;

/// Application state injected into handlers and the interceptor.
#[derive(Clone)]
pub struct AppState {
    /// Source of the `Custom-Header` value, bound once at construction.
    pub provider: Arc<dyn HeaderValueProvider>,
    pub observability: ObservabilityConfig,
}

/// HTTP server for the service.
pub struct HttpServer {
    router: Router,
    config: ServiceConfig,
}

impl HttpServer {
    /// Create a server using the default provider configured in `[advice]`.
    pub fn new(config: ServiceConfig) -> Self {
        let provider = Arc::new(StaticMessageProvider::new(config.advice.message.clone()));
        Self::with_provider(config, provider)
    }

    /// Create a server with an explicit header value provider. Used by tests
    /// and embedders substituting their own implementation.
    pub fn with_provider(config: ServiceConfig, provider: Arc<dyn HeaderValueProvider>) -> Self {
        let state = AppState {
            provider,
            observability: config.observability.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The endpoint registry is the single place deciding which routes are
    /// controlled; the interceptor is layered onto that partition only.
    fn build_router(config: &ServiceConfig, state: AppState) -> Router {
        let endpoints = vec![
            Endpoint::new("/endpoint1", get(handlers::endpoint1)).controlled(),
            Endpoint::new("/endpoint2", get(handlers::endpoint2)),
        ];

        let (controlled, uncontrolled) = partition(endpoints);
        let controlled = controlled.route_layer(middleware::from_fn_with_state(
            state.clone(),
            apply_header_advice,
        ));

        controlled
            .merge(uncontrolled)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(middleware::from_fn(stamp_request_id))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
