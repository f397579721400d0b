//! Environment listing.

use super::fetch_nodes;
use crate::client::{QueryClient, QueryError};
use shared::models::{Environment, GraphQlRequest};
use shared::query::ExtractionPath;

const LIST_ENVIRONMENTS: &str = r"
query getProject($projectId: String!) {
  project(id: $projectId) {
    id
    name
    environments {
      edges {
        node {
          id
          name
        }
      }
    }
  }
}
";

/// Lists the environments of a project.
///
/// An unknown project (`project: null`) yields an empty list.
///
/// # Errors
///
/// Returns an error if the query fails or the records cannot be decoded.
pub async fn list_environments<C>(
    client: &C,
    project_id: &str,
) -> Result<Vec<Environment>, QueryError>
where
    C: QueryClient + ?Sized,
{
    let request = GraphQlRequest::new(LIST_ENVIRONMENTS).with_variable("projectId", project_id);
    fetch_nodes(
        client,
        &request,
        &ExtractionPath::new(["project", "environments"]),
    )
    .await
}
