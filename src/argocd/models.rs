//! Argo CD data model
//!
//! Display-facing types (`Application`, `ResourceNode`) plus the wire shapes
//! returned by the Argo CD REST API. Wire types are decoded leniently: every
//! field the dashboard does not strictly need is optional or defaulted.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Health of an application or a resource as reported by Argo CD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Progressing,
    Missing,
    #[default]
    Unknown,
}

impl HealthStatus {
    /// Get the display name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Degraded => "Degraded",
            HealthStatus::Progressing => "Progressing",
            HealthStatus::Missing => "Missing",
            HealthStatus::Unknown => "Unknown",
        }
    }

    /// Parse free text into a status; anything unrecognised is `Unknown`
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or(HealthStatus::Unknown)
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HealthStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Healthy" => Ok(HealthStatus::Healthy),
            "Degraded" => Ok(HealthStatus::Degraded),
            "Progressing" => Ok(HealthStatus::Progressing),
            "Missing" => Ok(HealthStatus::Missing),
            "Unknown" => Ok(HealthStatus::Unknown),
            _ => Err(format!("Unknown health status: {}", s)),
        }
    }
}

/// A deployable unit reported by `GET /api/v1/applications`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub name: String,
    pub health: HealthStatus,
}

impl Application {
    pub fn new(name: impl Into<String>, health: HealthStatus) -> Self {
        Self {
            name: name.into(),
            health,
        }
    }
}

/// Health block of a resource node; status is kept as free text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    #[serde(default)]
    pub status: String,
}

/// One node of an application's resource tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceNode {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub resource_version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub health: Health,
}

impl ResourceNode {
    pub fn health_status(&self) -> HealthStatus {
        HealthStatus::parse_lenient(&self.health.status)
    }

    /// Images joined for a single table cell
    pub fn images_display(&self) -> String {
        if self.images.is_empty() {
            "-".to_string()
        } else {
            self.images.join(", ")
        }
    }
}

/// `GET /api/v1/applications/{name}/resource-tree` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResourceTreeResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<ResourceNode>,
}

/// `GET /api/v1/applications` response
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationListResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<ApplicationItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationItem {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub status: Option<ApplicationStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ObjectMeta {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApplicationStatus {
    #[serde(default)]
    pub health: Option<Health>,
}

impl From<ApplicationItem> for Application {
    fn from(item: ApplicationItem) -> Self {
        let health = item
            .status
            .and_then(|s| s.health)
            .map(|h| HealthStatus::parse_lenient(&h.status))
            .unwrap_or_default();
        Application::new(item.metadata.name, health)
    }
}

/// `POST /api/v1/session` response
#[derive(Debug, Clone, Deserialize)]
pub struct SessionToken {
    pub token: String,
}

/// Argo CD serialises empty collections as `null`
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_parse() {
        assert_eq!(HealthStatus::parse_lenient("Healthy"), HealthStatus::Healthy);
        assert_eq!(HealthStatus::parse_lenient("Degraded"), HealthStatus::Degraded);
        assert_eq!(HealthStatus::parse_lenient("Suspended"), HealthStatus::Unknown);
        assert_eq!(HealthStatus::parse_lenient(""), HealthStatus::Unknown);
    }

    #[test]
    fn test_health_status_display_matches_parse() {
        for status in [
            HealthStatus::Healthy,
            HealthStatus::Degraded,
            HealthStatus::Progressing,
            HealthStatus::Missing,
            HealthStatus::Unknown,
        ] {
            assert_eq!(HealthStatus::parse_lenient(status.as_str()), status);
        }
    }

    #[test]
    fn test_decode_application_list() {
        let body = r#"{
            "metadata": {"resourceVersion": "123"},
            "items": [
                {"metadata": {"name": "guestbook"}, "status": {"health": {"status": "Healthy"}}},
                {"metadata": {"name": "broken"}, "status": {"health": {"status": "Degraded"}}},
                {"metadata": {"name": "fresh"}}
            ]
        }"#;
        let list: ApplicationListResponse = serde_json::from_str(body).unwrap();
        let apps: Vec<Application> = list.items.into_iter().map(Application::from).collect();

        assert_eq!(
            apps,
            vec![
                Application::new("guestbook", HealthStatus::Healthy),
                Application::new("broken", HealthStatus::Degraded),
                Application::new("fresh", HealthStatus::Unknown),
            ]
        );
    }

    #[test]
    fn test_decode_null_items() {
        let list: ApplicationListResponse = serde_json::from_str(r#"{"items": null}"#).unwrap();
        assert!(list.items.is_empty());
    }

    #[test]
    fn test_decode_resource_tree() {
        let body = r#"{
            "nodes": [
                {
                    "version": "v1",
                    "kind": "Deployment",
                    "namespace": "default",
                    "name": "nginx",
                    "uid": "abc",
                    "resourceVersion": "42",
                    "images": ["nginx:1.25"],
                    "health": {"status": "Progressing"},
                    "createdAt": "2024-01-01T00:00:00Z"
                },
                {"kind": "Service", "name": "nginx-svc", "images": null}
            ]
        }"#;
        let tree: ResourceTreeResponse = serde_json::from_str(body).unwrap();

        assert_eq!(tree.nodes.len(), 2);
        let deployment = &tree.nodes[0];
        assert_eq!(deployment.resource_version, "42");
        assert_eq!(deployment.images, vec!["nginx:1.25".to_string()]);
        assert_eq!(deployment.health_status(), HealthStatus::Progressing);

        let service = &tree.nodes[1];
        assert!(service.images.is_empty());
        assert_eq!(service.images_display(), "-");
        assert_eq!(service.health_status(), HealthStatus::Unknown);
    }
}
