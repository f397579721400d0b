//! GraphQL query client.
//!
//! [`QueryClient`] is the seam between the query logic and the transport.
//! [`RailwayClient`] implements it over HTTPS with `reqwest`.

use crate::config::Config;
use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use shared::models::{GraphQlFailure, GraphQlRequest, GraphQlResponse};
use thiserror::Error;

/// Errors that can occur while executing a GraphQL operation.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Network, TLS, timeout, non-2xx status, or undecodable body.
    #[error("API request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with an `errors` list, or with no data at all.
    #[error(transparent)]
    GraphQl(#[from] GraphQlFailure),

    /// The data did not match the expected record shape.
    #[error("Unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API token cannot be sent as a header value.
    #[error("API token is not a valid header value")]
    InvalidToken(#[from] header::InvalidHeaderValue),
}

impl QueryError {
    /// Pretty-printed GraphQL error list, if the server returned one.
    #[must_use]
    pub fn graphql_details(&self) -> Option<String> {
        match self {
            Self::GraphQl(GraphQlFailure::Errors(errors)) => {
                serde_json::to_string_pretty(errors).ok()
            }
            _ => None,
        }
    }
}

/// Executes GraphQL operations.
///
/// Implementations return the response's `data` subtree verbatim, or a
/// [`QueryError`]. They never panic on transport or server failures.
#[async_trait]
pub trait QueryClient: Send + Sync {
    /// Executes a single operation.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails at the transport level, the
    /// server returns GraphQL errors, or the response carries no data.
    async fn execute(&self, request: &GraphQlRequest) -> Result<Value, QueryError>;
}

/// HTTPS client for the Railway GraphQL API.
///
/// Sends `POST {api_url}` with a bearer token and a 30 second timeout.
#[derive(Debug, Clone)]
pub struct RailwayClient {
    http: Client,
    api_url: String,
}

impl RailwayClient {
    /// Builds a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the token is not a valid header value or the
    /// underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self, QueryError> {
        let mut default_headers = header::HeaderMap::new();
        let mut authorization =
            header::HeaderValue::from_str(&format!("Bearer {}", config.api_token))?;
        authorization.set_sensitive(true);
        default_headers.insert(header::AUTHORIZATION, authorization);
        default_headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    /// Returns the endpoint URL.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

#[async_trait]
impl QueryClient for RailwayClient {
    async fn execute(&self, request: &GraphQlRequest) -> Result<Value, QueryError> {
        tracing::debug!(url = %self.api_url, "Sending GraphQL request");

        let response: GraphQlResponse = self
            .http
            .post(&self.api_url)
            .json(request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(response.into_data()?)
    }
}
