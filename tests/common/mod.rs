//! Shared utilities for integration testing.

use std::net::SocketAddr;

use solsec_site::config::SiteConfig;
use solsec_site::http::HttpServer;
use solsec_site::lifecycle::Shutdown;
use tokio::net::TcpListener;

/// Start the site server on an ephemeral port.
///
/// Returns the bound address and the shutdown handle that keeps the server
/// alive; trigger it to stop the server.
pub async fn start_site() -> (SocketAddr, Shutdown) {
    let config = SiteConfig::default();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    let server = HttpServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// A client that talks straight to the local server.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
