#![allow(clippy::must_use_candidate)]

mod env;
pub mod errors;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use errors::*;
pub use health::*;
pub use server::*;
pub use telemetry::*;

/// Top-level Faultline configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Error translation configuration
    #[serde(default)]
    pub errors: ErrorsConfig,
    /// Logging configuration
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}
