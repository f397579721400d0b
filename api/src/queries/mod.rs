//! Railway GraphQL operations.
//!
//! Listing operations are single request/response wrappers that unwrap a
//! relay connection into typed records. Log retrieval lives in [`logs`].

pub mod deployments;
pub mod environments;
pub mod logs;
pub mod projects;
pub mod services;

pub use deployments::{list_deployments, DeploymentScope};
pub use environments::list_environments;
pub use logs::{default_strategies, LogResolver, LogStrategy, ResolvedLogs, VariableShape};
pub use projects::list_projects;
pub use services::list_services;

use crate::client::{QueryClient, QueryError};
use serde::de::DeserializeOwned;
use shared::models::{Connection, GraphQlRequest};
use shared::query::ExtractionPath;

/// Executes `request` and decodes the connection found at `path`.
///
/// A path that does not resolve (e.g. `project` is `null`) yields an empty
/// list.
async fn fetch_nodes<C, T>(
    client: &C,
    request: &GraphQlRequest,
    path: &ExtractionPath,
) -> Result<Vec<T>, QueryError>
where
    C: QueryClient + ?Sized,
    T: DeserializeOwned,
{
    let data = client.execute(request).await?;
    let Some(connection) = path.resolve(&data) else {
        tracing::debug!(%path, "Connection not present in response");
        return Ok(Vec::new());
    };
    let connection: Connection<T> = serde_json::from_value(connection.clone())?;
    Ok(connection.into_nodes())
}
