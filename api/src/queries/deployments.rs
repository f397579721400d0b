//! Deployment listing.

use super::fetch_nodes;
use crate::client::{QueryClient, QueryError};
use shared::models::{Deployment, GraphQlRequest};
use shared::query::ExtractionPath;

const LIST_DEPLOYMENTS: &str = r"
query getDeployments($projectId: String!, $environmentId: String!, $serviceId: String!, $first: Int) {
  deployments(
    first: $first
    input: {
      projectId: $projectId
      environmentId: $environmentId
      serviceId: $serviceId
    }
  ) {
    edges {
      node {
        id
        status
        createdAt
        staticUrl
      }
    }
  }
}
";

/// Identifies the service whose deployments are listed.
#[derive(Debug, Clone, Copy)]
pub struct DeploymentScope<'a> {
    /// Project ID.
    pub project_id: &'a str,
    /// Environment ID.
    pub environment_id: &'a str,
    /// Service ID.
    pub service_id: &'a str,
}

/// Lists the most recent deployments of a service, at most `first` of them.
///
/// # Errors
///
/// Returns an error if the query fails or the records cannot be decoded.
pub async fn list_deployments<C>(
    client: &C,
    scope: DeploymentScope<'_>,
    first: u32,
) -> Result<Vec<Deployment>, QueryError>
where
    C: QueryClient + ?Sized,
{
    let request = GraphQlRequest::new(LIST_DEPLOYMENTS)
        .with_variable("projectId", scope.project_id)
        .with_variable("environmentId", scope.environment_id)
        .with_variable("serviceId", scope.service_id)
        .with_variable("first", first);
    fetch_nodes(client, &request, &ExtractionPath::new(["deployments"])).await
}
