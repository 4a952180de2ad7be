//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use response_advice::advice::HeaderValueProvider;
use response_advice::config::ServiceConfig;
use response_advice::http::HttpServer;

/// Start the real server on an ephemeral port with an explicit provider.
/// Returns the bound address.
pub async fn spawn_server(
    config: ServiceConfig,
    provider: Arc<dyn HeaderValueProvider>,
) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::with_provider(config, provider);
    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    addr
}

/// Start the server with the default provider configured in `[advice]`.
#[allow(dead_code)]
pub async fn spawn_default_server(config: ServiceConfig) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config);
    tokio::spawn(async move {
        server.run(listener).await.unwrap();
    });

    addr
}
