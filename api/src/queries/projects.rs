//! Project listing.

use super::fetch_nodes;
use crate::client::{QueryClient, QueryError};
use shared::models::{GraphQlRequest, Project};
use shared::query::ExtractionPath;

const LIST_PROJECTS: &str = r"
query {
  projects {
    edges {
      node {
        id
        name
        description
      }
    }
  }
}
";

/// Lists all projects visible to the token.
///
/// # Errors
///
/// Returns an error if the query fails or the records cannot be decoded.
pub async fn list_projects<C>(client: &C) -> Result<Vec<Project>, QueryError>
where
    C: QueryClient + ?Sized,
{
    let request = GraphQlRequest::new(LIST_PROJECTS);
    fetch_nodes(client, &request, &ExtractionPath::new(["projects"])).await
}
