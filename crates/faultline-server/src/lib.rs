mod error;
mod health;
mod routes;

use std::net::SocketAddr;

use axum::Router;
use faultline_config::Config;
use faultline_middleware::ErrorTranslator;
use tower_http::trace::TraceLayer;

pub use error::ApiError;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    pub fn new(config: &Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let translator = ErrorTranslator::builder()
            .custom_error::<ApiError>()
            .log_unclassified(config.errors.log_unclassified)
            .build();

        let mut app = routes::demo_router();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Only covers routes registered so far
        app = app.method_not_allowed_fallback(routes::method_not_allowed);

        // Error translation (innermost, sees handler results first)
        app = translator.wrap(app);

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        Self { router: app, listen_address }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
