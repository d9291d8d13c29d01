//! Test server wrapper that starts Faultline on a random port

use std::net::SocketAddr;

use faultline_config::Config;
use faultline_server::Server;
use tokio_util::sync::CancellationToken;

/// A running test server instance
pub struct TestServer {
    addr: SocketAddr,
    shutdown: CancellationToken,
    client: reqwest::Client,
}

impl TestServer {
    /// Start a test server with the given configuration
    ///
    /// Binds to the configured listen address, port 0 for automatic assignment
    pub async fn start(config: Config) -> anyhow::Result<Self> {
        let server = Server::new(&config);
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        let listener = tokio::net::TcpListener::bind(server.listen_address()).await?;
        let addr = listener.local_addr()?;

        tokio::spawn(async move {
            axum::serve(listener, server.into_router())
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        let client = reqwest::Client::new();

        Ok(Self { addr, shutdown, client })
    }

    /// Base URL of the running test server
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Get a reference to the HTTP client
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
