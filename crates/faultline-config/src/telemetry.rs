use serde::Deserialize;

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TelemetryConfig {
    /// Default `EnvFilter` directive, overridden by `RUST_LOG`
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Output format for log lines
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable single-line output
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

fn default_filter() -> String {
    "info".to_string()
}
