//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use faultline_config::Config;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder bound to an ephemeral local port
    pub fn new() -> Self {
        let mut config = Config::default();
        config.server.listen_address = Some(SocketAddr::from(([127, 0, 0, 1], 0)));
        config.errors.log_unclassified = false;

        Self { config }
    }

    /// Move the health endpoint
    pub fn with_health_path(mut self, path: &str) -> Self {
        self.config.server.health.path = path.to_owned();
        self
    }

    /// Disable health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
