//! Argo CD TUI Library
//!
//! This library provides the core functionality for the argocd-tui
//! dashboard. It can be used both as a binary and as a library for testing.

pub mod argocd;
pub mod cli;
pub mod config;
pub mod services;
pub mod tui;

// Re-export commonly used types for convenience
pub use argocd::{ApiClient, Application, FetchError, HealthStatus, HttpApiClient, ResourceNode};
pub use services::ResourceStore;
