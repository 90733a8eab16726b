//! Configuration schema definitions
//!
//! Defines the structure of the configuration file using serde for serialization.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Argo CD server connection
    #[serde(default)]
    pub server: ServerConfig,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,

    /// Colour scheme
    #[serde(default)]
    pub colors: ColorConfig,
}

/// Argo CD server connection settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    /// Base URL of the Argo CD API server
    #[serde(default = "default_server_url")]
    pub url: String,

    /// Skip TLS certificate verification
    #[serde(default = "default_true")]
    pub insecure: bool,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Environment variable holding the login username
    #[serde(default = "default_username_env")]
    pub username_env: String,

    /// Environment variable holding the login password
    #[serde(default = "default_password_env")]
    pub password_env: String,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    /// Enable mouse capture
    #[serde(default = "default_false")]
    pub enable_mouse: bool,

    /// Cancelling the search bar also clears the filter it targets
    #[serde(default = "default_true")]
    pub escape_clears_filter: bool,

    /// Rows moved by PageUp / PageDown
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

/// Colour scheme
///
/// Values are colour names (`red`, `skyblue`), hex strings (`#87ceeb`) or
/// `default` for the terminal's own colour.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColorConfig {
    #[serde(default = "default_text_color")]
    pub text: String,
    #[serde(default = "default_border_color")]
    pub border: String,
    #[serde(default = "default_header_color")]
    pub header: String,
    #[serde(default = "default_foreground_color")]
    pub foreground: String,
    #[serde(default = "default_selected_color")]
    pub selected: String,
    #[serde(default = "default_background_color")]
    pub background: String,
    #[serde(default = "default_progressing_color")]
    pub progressing: String,
    #[serde(default = "default_missing_color")]
    pub missing: String,
    #[serde(default = "default_healthy_color")]
    pub healthy: String,
    #[serde(default = "default_degraded_color")]
    pub degraded: String,
    #[serde(default = "default_unknown_color")]
    pub unknown: String,
}

// Default value functions
fn default_server_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_username_env() -> String {
    "ARGOCD_USERNAME".to_string()
}

fn default_password_env() -> String {
    "ARGOCD_PASSWORD".to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_text_color() -> String {
    "white".to_string()
}

fn default_border_color() -> String {
    "darkslategray".to_string()
}

fn default_header_color() -> String {
    "gray".to_string()
}

fn default_foreground_color() -> String {
    "whitesmoke".to_string()
}

fn default_selected_color() -> String {
    "skyblue".to_string()
}

fn default_background_color() -> String {
    "default".to_string()
}

fn default_progressing_color() -> String {
    "lightblue".to_string()
}

fn default_missing_color() -> String {
    "lightyellow".to_string()
}

fn default_healthy_color() -> String {
    "lightgreen".to_string()
}

fn default_degraded_color() -> String {
    "red".to_string()
}

fn default_unknown_color() -> String {
    "darkgray".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: default_server_url(),
            insecure: default_true(),
            timeout_secs: default_timeout_secs(),
            username_env: default_username_env(),
            password_env: default_password_env(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_mouse: default_false(),
            escape_clears_filter: default_true(),
            page_size: default_page_size(),
        }
    }
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            text: default_text_color(),
            border: default_border_color(),
            header: default_header_color(),
            foreground: default_foreground_color(),
            selected: default_selected_color(),
            background: default_background_color(),
            progressing: default_progressing_color(),
            missing: default_missing_color(),
            healthy: default_healthy_color(),
            degraded: default_degraded_color(),
            unknown: default_unknown_color(),
        }
    }
}
