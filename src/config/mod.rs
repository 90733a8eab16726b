//! Configuration system for argocd-tui
//!
//! A single YAML file (`config.yaml` in the config directory) layered over
//! built-in defaults, with environment variable overrides applied last.

pub mod colors;
pub mod defaults;
pub mod loader;
pub mod paths;
pub mod schema;

pub use loader::ConfigLoader;
pub use schema::{ColorConfig, Config, ServerConfig, UiConfig};

/// Get a configuration value by key (dot notation)
pub fn get_config_value(config: &Config, key: &str) -> anyhow::Result<String> {
    match key {
        "server.url" => Ok(config.server.url.clone()),
        "server.insecure" => Ok(config.server.insecure.to_string()),
        "server.timeoutSecs" => Ok(config.server.timeout_secs.to_string()),
        "server.usernameEnv" => Ok(config.server.username_env.clone()),
        "server.passwordEnv" => Ok(config.server.password_env.clone()),
        "ui.enableMouse" => Ok(config.ui.enable_mouse.to_string()),
        "ui.escapeClearsFilter" => Ok(config.ui.escape_clears_filter.to_string()),
        "ui.pageSize" => Ok(config.ui.page_size.to_string()),
        _ => {
            if let Some(color_key) = key.strip_prefix("colors.") {
                if let Some((_, value)) = colors::entries(&config.colors)
                    .into_iter()
                    .find(|(k, _)| *k == color_key)
                {
                    return Ok(value.to_string());
                }
            }
            Err(anyhow::anyhow!("Unknown configuration key: {}", key))
        }
    }
}

/// Set a configuration value by key (dot notation)
pub fn set_config_value(config: &mut Config, key: &str, value: &str) -> anyhow::Result<()> {
    use anyhow::Context;
    match key {
        "server.url" => {
            url::Url::parse(value).context("server.url must be a valid URL")?;
            config.server.url = value.to_string();
        }
        "server.insecure" => {
            config.server.insecure = value
                .parse()
                .context("server.insecure must be 'true' or 'false'")?;
        }
        "server.timeoutSecs" => {
            config.server.timeout_secs = value
                .parse()
                .context("server.timeoutSecs must be a number")?;
        }
        "server.usernameEnv" => {
            config.server.username_env = value.to_string();
        }
        "server.passwordEnv" => {
            config.server.password_env = value.to_string();
        }
        "ui.enableMouse" => {
            config.ui.enable_mouse = value
                .parse()
                .context("ui.enableMouse must be 'true' or 'false'")?;
        }
        "ui.escapeClearsFilter" => {
            config.ui.escape_clears_filter = value
                .parse()
                .context("ui.escapeClearsFilter must be 'true' or 'false'")?;
        }
        "ui.pageSize" => {
            let size: usize = value.parse().context("ui.pageSize must be a number")?;
            if size == 0 {
                return Err(anyhow::anyhow!("ui.pageSize must be greater than 0"));
            }
            config.ui.page_size = size;
        }
        _ => {
            let slot = key
                .strip_prefix("colors.")
                .and_then(|color_key| colors::slot_mut(&mut config.colors, color_key))
                .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", key))?;
            colors::parse_color(value).with_context(|| format!("Invalid colour for {}", key))?;
            *slot = value.to_string();
        }
    }

    Ok(())
}
