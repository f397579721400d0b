//! Railway resource models.
//!
//! Typed shapes for the listing queries. Railway exposes collections as
//! relay-style connections (`edges[].node`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A relay-style connection wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection<T> {
    /// Edges of the connection.
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
}

/// A single connection edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<T> {
    /// The node at this edge.
    pub node: T,
}

impl<T> Connection<T> {
    /// Unwraps the edges into their nodes, preserving order.
    #[must_use]
    pub fn into_nodes(self) -> Vec<T> {
        self.edges.into_iter().map(|edge| edge.node).collect()
    }
}

/// A Railway project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Project ID.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An environment within a project (e.g. `production`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    /// Environment ID.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// A service within a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Service ID.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// A single deployment of a service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    /// Deployment ID.
    pub id: String,
    /// Deployment status as reported by Railway (e.g. `SUCCESS`, `CRASHED`).
    pub status: String,
    /// When the deployment was created.
    pub created_at: DateTime<Utc>,
    /// Public static URL, if the service exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_url: Option<String>,
}
