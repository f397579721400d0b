//! Common test utilities and helpers for integration tests.
//!
//! This module provides a mock GraphQL endpoint and helpers for building
//! clients and canned responses against it.

use api::{Config, RailwayClient};
use serde_json::{json, Value};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token used by every test client.
pub const TEST_TOKEN: &str = "test-token";

/// Path the mock GraphQL endpoint is mounted on.
pub const GRAPHQL_PATH: &str = "/graphql/v2";

/// Creates a configuration pointing at the mock server.
pub fn test_config(server: &MockServer) -> Config {
    Config::new(TEST_TOKEN).with_api_url(format!("{}{GRAPHQL_PATH}", server.uri()))
}

/// Creates a client pointing at the mock server.
pub fn test_client(server: &MockServer) -> RailwayClient {
    RailwayClient::new(&test_config(server)).unwrap()
}

/// A 200 response carrying `data`.
pub fn data_response(data: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({ "data": data }))
}

/// A 200 response carrying a GraphQL `errors` list.
pub fn errors_response(messages: &[&str]) -> ResponseTemplate {
    let errors: Vec<Value> = messages.iter().map(|m| json!({ "message": m })).collect();
    ResponseTemplate::new(200).set_body_json(json!({ "data": null, "errors": errors }))
}

/// Mounts a response for POSTs whose `query` equals `query` exactly.
///
/// # Arguments
///
/// * `server` - The mock server
/// * `query` - The GraphQL document to match
/// * `response` - The canned response
/// * `expected_calls` - How many times the mock must be hit
pub async fn mount_query(
    server: &MockServer,
    query: &str,
    response: ResponseTemplate,
    expected_calls: u64,
) {
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_partial_json(json!({ "query": query })))
        .respond_with(response)
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// Returns the `query` field of every request the server received, in order.
pub async fn received_queries(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| {
            let body: Value = serde_json::from_slice(&request.body).unwrap();
            body["query"].as_str().unwrap().to_string()
        })
        .collect()
}
