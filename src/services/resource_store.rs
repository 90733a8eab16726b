//! Resource store
//!
//! Holds the last fetched application list and the resource tree of the
//! currently selected application. Every load goes to the API client; there
//! is no cache. A failed load leaves the previously held data untouched.

use crate::argocd::{ApiClient, Application, FetchError, ResourceNode};
use std::sync::Arc;

/// Last known remote state
pub struct ResourceStore {
    client: Arc<dyn ApiClient>,
    applications: Vec<Application>,
    selected_app: Option<String>,
    resources: Vec<ResourceNode>,
    last_refresh: Option<chrono::DateTime<chrono::Local>>,
}

impl ResourceStore {
    pub fn new(client: Arc<dyn ApiClient>) -> Self {
        Self {
            client,
            applications: Vec::new(),
            selected_app: None,
            resources: Vec::new(),
            last_refresh: None,
        }
    }

    /// Replace the application list with a fresh listing
    ///
    /// Returns the number of applications loaded. On failure the previous
    /// list is retained.
    pub async fn load_applications(&mut self) -> Result<usize, FetchError> {
        match self.client.list_applications().await {
            Ok(applications) => {
                tracing::info!("Loaded {} applications", applications.len());
                self.applications = applications;
                self.last_refresh = Some(chrono::Local::now());
                Ok(self.applications.len())
            }
            Err(e) => {
                tracing::warn!("Failed to load applications: {}", e);
                Err(e)
            }
        }
    }

    /// Replace the displayed resource set with the tree of `app_name`
    ///
    /// Always issues a remote call, even if `app_name` is already selected.
    /// On failure the previous selection and resources are retained.
    pub async fn load_resources(&mut self, app_name: &str) -> Result<usize, FetchError> {
        match self.client.get_resource_tree(app_name).await {
            Ok(nodes) => {
                tracing::debug!("Loaded {} resources for {}", nodes.len(), app_name);
                self.selected_app = Some(app_name.to_string());
                self.resources = nodes;
                Ok(self.resources.len())
            }
            Err(e) => {
                tracing::warn!("Failed to load resources for {}: {}", app_name, e);
                Err(e)
            }
        }
    }

    /// Forget the selected application and its resource tree
    pub fn clear_selection(&mut self) {
        self.selected_app = None;
        self.resources.clear();
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn resources(&self) -> &[ResourceNode] {
        &self.resources
    }

    /// Application whose resources are currently held
    pub fn selected_app(&self) -> Option<&str> {
        self.selected_app.as_deref()
    }

    pub fn last_refresh(&self) -> Option<chrono::DateTime<chrono::Local>> {
        self.last_refresh
    }
}
