//! GraphQL request and response envelopes.
//!
//! Defines the wire shapes exchanged with a GraphQL endpoint and the
//! normalization rule applied to every response: a response carrying an
//! `errors` key is a failure, regardless of any co-present `data`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// A single GraphQL operation: the query document and its variables.
///
/// Requests are immutable once built; construct a new one per attempt.
///
/// # Example
///
/// ```
/// use shared::models::GraphQlRequest;
///
/// let request = GraphQlRequest::new("query getDeployment($id: String!) { deployment(id: $id) { id } }")
///     .with_variable("id", "dep-123");
///
/// assert_eq!(request.variables().get("id"), Some(&serde_json::json!("dep-123")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQlRequest {
    query: String,
    #[serde(skip_serializing_if = "Map::is_empty")]
    variables: Map<String, Value>,
}

impl GraphQlRequest {
    /// Creates a request with no variables.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: Map::new(),
        }
    }

    /// Adds a variable to the request.
    #[must_use]
    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.variables.insert(name.into(), value.into());
        self
    }

    /// Returns the query document.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Returns the variables map.
    #[must_use]
    pub fn variables(&self) -> &Map<String, Value> {
        &self.variables
    }
}

/// A single entry from a GraphQL `errors` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQlError {
    /// Human-readable error message.
    #[serde(default)]
    pub message: String,

    /// Source locations in the query document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locations: Option<Value>,

    /// Response path the error applies to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,

    /// Server-specific error details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

/// Reasons a well-formed GraphQL response carries no usable data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphQlFailure {
    /// The server returned an `errors` list.
    #[error("GraphQL errors: {}", join_messages(.0))]
    Errors(Vec<GraphQlError>),

    /// Neither errors nor a non-null `data` field were present.
    #[error("GraphQL response contained no data")]
    MissingData,
}

fn join_messages(errors: &[GraphQlError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Raw GraphQL response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphQlResponse {
    /// The `data` subtree, if present.
    #[serde(default)]
    pub data: Option<Value>,

    /// The `errors` list, if the key was present at all.
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl GraphQlResponse {
    /// Normalizes the response into its `data` subtree or a failure.
    ///
    /// Any `errors` key wins over `data`; partial results are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the response carries an `errors` list (even an empty one)
    /// - `data` is missing or `null`
    pub fn into_data(self) -> Result<Value, GraphQlFailure> {
        if let Some(errors) = self.errors {
            return Err(GraphQlFailure::Errors(errors));
        }
        match self.data {
            Some(Value::Null) | None => Err(GraphQlFailure::MissingData),
            Some(data) => Ok(data),
        }
    }
}
