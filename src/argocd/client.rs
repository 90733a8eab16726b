//! Argo CD REST client
//!
//! The dashboard only needs two calls from the remote API, captured by the
//! [`ApiClient`] trait. [`HttpApiClient`] implements them over HTTP with a
//! bearer token obtained from `POST /api/v1/session`.

use super::models::{
    Application, ApplicationListResponse, ResourceNode, ResourceTreeResponse, SessionToken,
};
use crate::config::ServerConfig;
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Failure of a single remote call
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connection refused, timeout, TLS, ...)
    #[error("request to {url} failed: {message}")]
    Remote { url: String, message: String },

    /// The server answered with a non-2xx status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body could not be decoded into the expected shape
    #[error("failed to decode response from {url}: {message}")]
    Decode { url: String, message: String },
}

/// The remote calls the dashboard depends on
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClient: Send + Sync {
    /// List every application visible to the session
    async fn list_applications(&self) -> Result<Vec<Application>, FetchError>;

    /// Fetch the flattened resource tree of one application
    async fn get_resource_tree(&self, app_name: &str) -> Result<Vec<ResourceNode>, FetchError>;
}

/// HTTP implementation of [`ApiClient`]
pub struct HttpApiClient {
    client: reqwest::Client,
    base: Url,
    token: String,
}

impl HttpApiClient {
    /// Build a client and authenticate against the server
    ///
    /// If `token` is provided the session login is skipped. Otherwise the
    /// username and password are read from the environment variables named in
    /// the server configuration.
    pub async fn connect(server: &ServerConfig, token: Option<String>) -> Result<Self> {
        let base = parse_base_url(&server.url)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(server.timeout_secs))
            .danger_accept_invalid_certs(server.insecure)
            .build()
            .context("Failed to create HTTP client")?;

        let token = match token {
            Some(token) => {
                tracing::debug!("Using pre-issued auth token for {}", base);
                token
            }
            None => Self::login(&client, &base, server).await?,
        };

        Ok(Self {
            client,
            base,
            token,
        })
    }

    /// Exchange username/password for a session token
    async fn login(client: &reqwest::Client, base: &Url, server: &ServerConfig) -> Result<String> {
        let username = std::env::var(&server.username_env).with_context(|| {
            format!(
                "Environment variable {} not set (required for login)",
                server.username_env
            )
        })?;
        let password = std::env::var(&server.password_env).with_context(|| {
            format!(
                "Environment variable {} not set (required for login)",
                server.password_env
            )
        })?;

        let url = endpoint(base, &["session"]);
        tracing::debug!("Logging in to {} as {}", url, username);

        let resp = client
            .post(url.clone())
            .json(&serde_json::json!({
                "username": username,
                "password": password,
            }))
            .send()
            .await
            .with_context(|| format!("Failed to reach {}", url))?;

        if !resp.status().is_success() {
            anyhow::bail!("Login failed: {} (status: {})", url, resp.status());
        }

        let session: SessionToken = resp
            .json()
            .await
            .context("Failed to parse session token")?;

        tracing::info!("Logged in to {}", base);
        Ok(session.token)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, FetchError> {
        tracing::debug!("GET {}", url);

        let resp = self
            .client
            .get(url.clone())
            .bearer_auth(&self.token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Remote {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        if !resp.status().is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: resp.status().as_u16(),
            });
        }

        let body = resp.bytes().await.map_err(|e| FetchError::Remote {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl ApiClient for HttpApiClient {
    async fn list_applications(&self) -> Result<Vec<Application>, FetchError> {
        let list: ApplicationListResponse =
            self.get_json(endpoint(&self.base, &["applications"])).await?;
        Ok(list.items.into_iter().map(Application::from).collect())
    }

    async fn get_resource_tree(&self, app_name: &str) -> Result<Vec<ResourceNode>, FetchError> {
        let url = endpoint(&self.base, &["applications", app_name, "resource-tree"]);
        let tree: ResourceTreeResponse = self.get_json(url).await?;
        Ok(tree.nodes)
    }
}

/// Validate the configured server URL
fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).with_context(|| format!("Invalid server URL: {}", raw))?;
    if url.cannot_be_a_base() {
        anyhow::bail!("Server URL cannot be used as a base: {}", raw);
    }
    Ok(url)
}

/// Build `{base}/api/v1/{segments...}`, percent-encoding each segment
fn endpoint(base: &Url, segments: &[&str]) -> Url {
    let mut url = base.clone();
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(["api", "v1"]).extend(segments);
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_building() {
        let base = parse_base_url("http://localhost:8080").unwrap();
        assert_eq!(
            endpoint(&base, &["applications"]).as_str(),
            "http://localhost:8080/api/v1/applications"
        );
        assert_eq!(
            endpoint(&base, &["applications", "guestbook", "resource-tree"]).as_str(),
            "http://localhost:8080/api/v1/applications/guestbook/resource-tree"
        );
    }

    #[test]
    fn test_endpoint_keeps_path_prefix() {
        let base = parse_base_url("https://argo.example.com/argocd/").unwrap();
        assert_eq!(
            endpoint(&base, &["session"]).as_str(),
            "https://argo.example.com/argocd/api/v1/session"
        );
    }

    #[test]
    fn test_endpoint_encodes_segments() {
        let base = parse_base_url("http://localhost:8080").unwrap();
        assert_eq!(
            endpoint(&base, &["applications", "a b", "resource-tree"]).as_str(),
            "http://localhost:8080/api/v1/applications/a%20b/resource-tree"
        );
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(parse_base_url("not a url").is_err());
        assert!(parse_base_url("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_fetch_error_messages() {
        let err = FetchError::Status {
            url: "http://localhost:8080/api/v1/applications".to_string(),
            status: 403,
        };
        assert_eq!(
            err.to_string(),
            "http://localhost:8080/api/v1/applications returned HTTP 403"
        );
    }
}
