use serde::Deserialize;

/// Error translation configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorsConfig {
    /// Log errors that fall through to the generic 500 response
    #[serde(default = "default_log_unclassified")]
    pub log_unclassified: bool,
}

impl Default for ErrorsConfig {
    fn default() -> Self {
        Self {
            log_unclassified: default_log_unclassified(),
        }
    }
}

#[allow(clippy::missing_const_for_fn)]
fn default_log_unclassified() -> bool {
    true
}
