//! Service listing.

use super::fetch_nodes;
use crate::client::{QueryClient, QueryError};
use shared::models::{GraphQlRequest, Service};
use shared::query::ExtractionPath;

const LIST_SERVICES: &str = r"
query getProject($projectId: String!) {
  project(id: $projectId) {
    id
    name
    services {
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

/// Lists the services of a project.
///
/// # Errors
///
/// Returns an error if the query fails or the records cannot be decoded.
pub async fn list_services<C>(client: &C, project_id: &str) -> Result<Vec<Service>, QueryError>
where
    C: QueryClient + ?Sized,
{
    let request = GraphQlRequest::new(LIST_SERVICES).with_variable("projectId", project_id);
    fetch_nodes(client, &request, &ExtractionPath::new(["project", "services"])).await
}
