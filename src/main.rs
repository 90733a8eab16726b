//! argocd-tui - a keyboard-driven terminal dashboard for Argo CD
//!
//! Lists the applications known to an Argo CD server and the resource tree
//! of the highlighted one.

use anyhow::{Context, Result};
use argocd_tui::argocd::HttpApiClient;
use argocd_tui::cli::{ConfigSubcommand, handle_config_command, init_logging};
use argocd_tui::config::ConfigLoader;
use argocd_tui::services::ResourceStore;
use argocd_tui::tui::{self, App, Theme};
use clap::{Parser, Subcommand};
use std::sync::Arc;

/// argocd-tui - a keyboard-driven terminal dashboard for Argo CD
#[derive(Parser, Debug)]
#[command(name = "argocd-tui")]
#[command(version)]
#[command(about = "A keyboard-driven terminal dashboard for Argo CD applications", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(long, short = 'd')]
    debug: bool,

    /// Argo CD server URL, overrides the configuration file
    #[arg(long, short = 's')]
    server: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Main commands
#[derive(Subcommand, Debug)]
enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(Command::Config { subcommand }) = args.command {
        return handle_config_command(subcommand);
    }

    let log_file = init_logging(args.debug);

    // Print log file location to stderr before starting TUI (so it doesn't interfere)
    if let Some(ref log_path) = log_file {
        eprintln!(
            "Debug logging enabled. Logs written to: {}",
            log_path.display()
        );
    }

    let mut config = ConfigLoader::load().context("Failed to load configuration")?;
    if let Some(server) = args.server {
        config.server.url = server;
    }
    ConfigLoader::check(&config).context("Invalid configuration")?;

    let theme = Theme::from_colors(&config.colors);

    tracing::debug!("Connecting to {}", config.server.url);
    let client = HttpApiClient::connect(&config.server, ConfigLoader::auth_token())
        .await
        .with_context(|| format!("Failed to connect to {}", config.server.url))?;

    let store = ResourceStore::new(Arc::new(client));
    let app = App::new(store, config, theme);

    tui::run_tui(app).await
}
