use std::path::Path;

use anyhow::Context;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if [`Config::parse`] fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;

        Self::parse(&raw)
    }

    /// Parse configuration from TOML text
    ///
    /// Expands `{{ env.VAR }}` placeholders, deserializes, then validates.
    ///
    /// # Errors
    ///
    /// Returns an error if variable expansion, TOML parsing, or validation fails
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let expanded = crate::env::expand_env(raw).context("config variable expansion failed")?;

        let config: Self = toml::from_str(&expanded).context("failed to parse config")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the health path is not absolute or the log filter is empty
    pub fn validate(&self) -> anyhow::Result<()> {
        let health = &self.server.health;
        if health.enabled && !health.path.starts_with('/') {
            anyhow::bail!("server.health.path must start with '/', got `{}`", health.path);
        }

        if self.telemetry.filter.trim().is_empty() {
            anyhow::bail!("telemetry.filter must not be empty");
        }

        Ok(())
    }
}
