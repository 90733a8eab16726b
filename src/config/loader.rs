//! Configuration loading
//!
//! Handles loading configuration from the config file and applying
//! environment variable overrides on top of it.

use super::{colors, defaults, paths, schema::Config};
use anyhow::{Context, Result};
use std::path::Path;

/// Environment variable overriding `server.url`
pub const SERVER_ENV: &str = "ARGOCD_SERVER";

/// Environment variable carrying a pre-issued API token
pub const AUTH_TOKEN_ENV: &str = "ARGOCD_AUTH_TOKEN";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers applied
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides
    /// 2. Root config file
    /// 3. Built-in defaults
    pub fn load() -> Result<Config> {
        let path = paths::root_config_path();
        let config = if path.exists() {
            Self::load_file(&path)?
        } else {
            tracing::debug!("No config file at {}, using defaults", path.display());
            Self::load_defaults()
        };

        Ok(Self::apply_env_overrides(config))
    }

    /// Load configuration from a file
    pub fn load_file(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        // An empty file is a valid, all-defaults config
        if contents.trim().is_empty() {
            return Ok(Self::load_defaults());
        }

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the config file, failing on anything that would be
    /// silently replaced by a default at runtime
    pub fn validate() -> Result<()> {
        let path = paths::root_config_path();
        if path.exists() {
            let config = Self::load_file(&path)?;
            Self::check(&config)?;
            Self::check_colors(&config)?;
        }

        let _ = Self::load().context("Failed to load merged configuration")?;

        Ok(())
    }

    /// Semantic checks beyond what deserialization enforces
    ///
    /// Colours are not checked here; an unparsable colour falls back to the
    /// default when the theme is built.
    pub fn check(config: &Config) -> Result<()> {
        url::Url::parse(&config.server.url)
            .with_context(|| format!("server.url is not a valid URL: {}", config.server.url))?;

        if config.server.timeout_secs == 0 {
            anyhow::bail!("server.timeoutSecs must be greater than 0");
        }

        if config.ui.page_size == 0 {
            anyhow::bail!("ui.pageSize must be greater than 0");
        }

        Ok(())
    }

    /// Strict colour check used by `config validate`
    pub fn check_colors(config: &Config) -> Result<()> {
        for (key, value) in colors::entries(&config.colors) {
            colors::parse_color(value)
                .with_context(|| format!("colors.{} is not a valid colour", key))?;
        }

        Ok(())
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        if let Ok(server) = std::env::var(SERVER_ENV) {
            if !server.is_empty() {
                config.server.url = server;
            }
        }

        config
    }

    /// Token from the environment, if one was provided
    pub fn auth_token() -> Option<String> {
        std::env::var(AUTH_TOKEN_ENV)
            .ok()
            .filter(|token| !token.is_empty())
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}
