//! Argo CD API access
//!
//! Wire types and the HTTP client used to fetch applications and their
//! resource trees.

pub mod client;
pub mod models;

pub use client::{ApiClient, FetchError, HttpApiClient};
pub use models::{Application, Health, HealthStatus, ResourceNode};
