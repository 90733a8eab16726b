//! CLI command handlers

use anyhow::{Context, Result};
use clap::Subcommand;

use crate::config::{ConfigLoader, defaults, paths};

/// Configuration management subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get configuration value
    Get {
        /// Configuration key (e.g., "server.url", "colors.healthy")
        key: Option<String>,
    },
    /// Set configuration value
    Set {
        /// Configuration key (e.g., "server.url", "ui.pageSize")
        key: String,
        /// Configuration value
        value: String,
    },
    /// List all configuration
    List,
    /// Show configuration file path
    Path,
    /// Validate configuration
    Validate,
    /// Write a commented default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Handle configuration subcommands
pub fn handle_config_command(cmd: ConfigSubcommand) -> Result<()> {
    match cmd {
        ConfigSubcommand::Get { key } => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;

            if let Some(key) = key {
                let value = crate::config::get_config_value(&config, &key)?;
                println!("{}", value);
            } else {
                let yaml =
                    serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
                print!("{}", yaml);
            }
        }
        ConfigSubcommand::Set { key, value } => {
            // Start from the file only; env overrides must not be persisted
            let path = paths::root_config_path();
            let mut config = if path.exists() {
                ConfigLoader::load_file(&path)?
            } else {
                ConfigLoader::load_defaults()
            };

            crate::config::set_config_value(&mut config, &key, &value)
                .with_context(|| format!("Failed to set {} = {}", key, value))?;

            ConfigLoader::save_root(&config).context("Failed to save configuration")?;
            println!("Configuration saved");
        }
        ConfigSubcommand::List => {
            let config = ConfigLoader::load().context("Failed to load configuration")?;
            let yaml =
                serde_yaml::to_string(&config).context("Failed to serialize configuration")?;
            print!("{}", yaml);
        }
        ConfigSubcommand::Path => {
            println!("{}", paths::root_config_path().display());
        }
        ConfigSubcommand::Validate => match ConfigLoader::validate() {
            Ok(()) => println!("Configuration is valid"),
            Err(e) => {
                eprintln!("Configuration validation failed: {:#}", e);
                std::process::exit(1);
            }
        },
        ConfigSubcommand::Init { force } => {
            let path = paths::root_config_path();
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
            if let Some(parent) = path.parent() {
                paths::ensure_dir(parent)?;
            }
            std::fs::write(&path, defaults::CONFIG_TEMPLATE)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Wrote {}", path.display());
        }
    }

    Ok(())
}
