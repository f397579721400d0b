//! Deployment log retrieval.
//!
//! The field that exposes deployment logs is not stable across Railway schema
//! versions. Retrieval is therefore a discovery problem: an ordered table of
//! [`LogStrategy`] candidates, each pairing a query document with the
//! [`ExtractionPath`] where that document's logs would appear, is tried one by
//! one until a candidate yields a value.
//!
//! - A failed query (transport or GraphQL errors) moves on to the next
//!   candidate.
//! - A successful query whose path does not resolve is a miss and also moves
//!   on.
//! - The first resolved value wins; later candidates are never queried.
//! - Exhausting the table returns `None`; it is not an error.

use crate::client::QueryClient;
use shared::models::{GraphQlRequest, LogPayload};
use shared::query::ExtractionPath;

const DEPLOYMENT_LOGS_QUERY: &str = r"
query getDeploymentLogs($deploymentId: String!, $limit: Int) {
  deploymentLogs(deploymentId: $deploymentId, limit: $limit) {
    logs
  }
}
";

const DEPLOYMENT_NODE_LOGS_QUERY: &str = r"
query getDeployment($id: String!) {
  deployment(id: $id) {
    id
    logs
  }
}
";

const DEPLOYMENT_NODE_BUILD_LOGS_QUERY: &str = r"
query getDeployment($id: String!) {
  deployment(id: $id) {
    id
    buildLogs
  }
}
";

const NODE_INTERFACE_LOGS_QUERY: &str = r"
query getNode($id: ID!) {
  node(id: $id) {
    ... on Deployment {
      id
      logs
    }
  }
}
";

/// How a candidate's variables are built from the deployment ID and limit.
///
/// The ID-typed and string-typed shapes carry the same input value; the
/// difference lives in the query document's variable declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableShape {
    /// `{deploymentId: String!, limit: Int}`
    DeploymentIdWithLimit,
    /// `{id: String!}`
    StringId,
    /// `{id: ID!}`
    NodeId,
}

impl VariableShape {
    fn request(self, query: &str, deployment_id: &str, limit: u32) -> GraphQlRequest {
        let request = GraphQlRequest::new(query);
        match self {
            Self::DeploymentIdWithLimit => request
                .with_variable("deploymentId", deployment_id)
                .with_variable("limit", limit),
            Self::StringId | Self::NodeId => request.with_variable("id", deployment_id),
        }
    }
}

/// One candidate query shape for obtaining deployment logs.
#[derive(Debug, Clone)]
pub struct LogStrategy {
    /// Short name used in log lines.
    pub name: &'static str,
    /// GraphQL document.
    pub query: &'static str,
    /// Variable layout expected by `query`.
    pub variables: VariableShape,
    /// Location of the logs inside a successful response's `data`.
    pub path: ExtractionPath,
}

impl LogStrategy {
    /// Builds the request for this candidate.
    #[must_use]
    pub fn request(&self, deployment_id: &str, limit: u32) -> GraphQlRequest {
        self.variables.request(self.query, deployment_id, limit)
    }
}

/// The built-in candidates, in the order they are tried.
#[must_use]
pub fn default_strategies() -> Vec<LogStrategy> {
    vec![
        LogStrategy {
            name: "deploymentLogs",
            query: DEPLOYMENT_LOGS_QUERY,
            variables: VariableShape::DeploymentIdWithLimit,
            path: ExtractionPath::new(["deploymentLogs", "logs"]),
        },
        LogStrategy {
            name: "deployment.logs",
            query: DEPLOYMENT_NODE_LOGS_QUERY,
            variables: VariableShape::StringId,
            path: ExtractionPath::new(["deployment", "logs"]),
        },
        LogStrategy {
            name: "deployment.buildLogs",
            query: DEPLOYMENT_NODE_BUILD_LOGS_QUERY,
            variables: VariableShape::StringId,
            path: ExtractionPath::new(["deployment", "buildLogs"]),
        },
        LogStrategy {
            name: "node interface",
            query: NODE_INTERFACE_LOGS_QUERY,
            variables: VariableShape::NodeId,
            path: ExtractionPath::new(["node", "logs"]),
        },
    ]
}

/// Logs obtained by a successful candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLogs {
    /// Name of the candidate that answered.
    pub strategy: &'static str,
    /// The log payload found at the candidate's path.
    pub payload: LogPayload,
}

/// Tries each [`LogStrategy`] in order until one yields logs.
pub struct LogResolver<'a, C: ?Sized> {
    client: &'a C,
    strategies: Vec<LogStrategy>,
    diagnostics: bool,
}

impl<'a, C> LogResolver<'a, C>
where
    C: QueryClient + ?Sized,
{
    /// Creates a resolver using [`default_strategies`].
    #[must_use]
    pub fn new(client: &'a C) -> Self {
        Self::with_strategies(client, default_strategies())
    }

    /// Creates a resolver with a custom candidate table.
    #[must_use]
    pub fn with_strategies(client: &'a C, strategies: Vec<LogStrategy>) -> Self {
        Self {
            client,
            strategies,
            diagnostics: false,
        }
    }

    /// Logs each candidate's query document and variables when enabled.
    #[must_use]
    pub fn with_diagnostics(mut self, enabled: bool) -> Self {
        self.diagnostics = enabled;
        self
    }

    /// Returns the candidate table.
    #[must_use]
    pub fn strategies(&self) -> &[LogStrategy] {
        &self.strategies
    }

    /// Fetches logs for `deployment_id`, returning `None` once every
    /// candidate has failed or missed.
    ///
    /// A log field that is present but `null` counts as a miss and the
    /// search moves on to the next candidate.
    pub async fn resolve(&self, deployment_id: &str, limit: u32) -> Option<ResolvedLogs> {
        for (index, strategy) in self.strategies.iter().enumerate() {
            let attempt = index + 1;
            if let Some(payload) = self.attempt(attempt, strategy, deployment_id, limit).await {
                tracing::info!(
                    attempt,
                    strategy = strategy.name,
                    kind = payload.kind(),
                    "Fetched deployment logs"
                );
                return Some(ResolvedLogs {
                    strategy: strategy.name,
                    payload,
                });
            }
        }

        tracing::warn!(
            attempts = self.strategies.len(),
            deployment_id,
            "All log query approaches failed"
        );
        None
    }

    async fn attempt(
        &self,
        attempt: usize,
        strategy: &LogStrategy,
        deployment_id: &str,
        limit: u32,
    ) -> Option<LogPayload> {
        tracing::info!(attempt, strategy = strategy.name, "Querying deployment logs");

        let request = strategy.request(deployment_id, limit);
        if self.diagnostics {
            tracing::info!(
                attempt,
                query = request.query(),
                variables = %serde_json::Value::Object(request.variables().clone()),
                "Query details"
            );
        }

        let data = match self.client.execute(&request).await {
            Ok(data) => data,
            Err(err) => {
                if let Some(details) = err.graphql_details() {
                    tracing::warn!(attempt, strategy = strategy.name, errors = %details, "GraphQL errors");
                } else {
                    tracing::warn!(attempt, strategy = strategy.name, error = %err, "Query failed");
                }
                return None;
            }
        };

        let found = strategy.path.resolve(&data).cloned();
        if found.is_none() {
            tracing::debug!(
                attempt,
                strategy = strategy.name,
                path = %strategy.path,
                "Log field not present"
            );
        }
        found.map(LogPayload::from)
    }
}
