//! Integration tests for deployment log retrieval.
//!
//! Tests cover:
//! - First-success-wins over HTTP
//! - Fallback through failed and missing query shapes
//! - Exhaustion
//! - Saving resolved logs to disk

use api::queries::default_strategies;
use api::LogResolver;
use serde_json::json;
use shared::models::LogPayload;
use shared::storage::LogFileStore;
use wiremock::MockServer;
use wiremock::ResponseTemplate;

use super::common::{
    data_response, errors_response, mount_query, received_queries, test_client,
};

fn strategy_queries() -> Vec<String> {
    default_strategies()
        .iter()
        .map(|s| s.query.to_string())
        .collect()
}

#[tokio::test]
async fn test_first_strategy_answers() {
    let server = MockServer::start().await;
    let queries = strategy_queries();
    mount_query(
        &server,
        &queries[0],
        data_response(json!({"deploymentLogs": {"logs": "booting\nready"}})),
        1,
    )
    .await;

    let client = test_client(&server);
    let resolved = LogResolver::new(&client).resolve("dep-1", 1000).await.unwrap();

    assert_eq!(resolved.strategy, "deploymentLogs");
    assert_eq!(resolved.payload, LogPayload::Text("booting\nready".to_string()));
    assert_eq!(received_queries(&server).await, queries[..1].to_vec());
}

#[tokio::test]
async fn test_fallback_to_build_logs() {
    let server = MockServer::start().await;
    let queries = strategy_queries();
    mount_query(
        &server,
        &queries[0],
        errors_response(&["Cannot query field \"deploymentLogs\" on type \"Query\"."]),
        1,
    )
    .await;
    mount_query(
        &server,
        &queries[1],
        errors_response(&["Cannot query field \"logs\" on type \"Deployment\"."]),
        1,
    )
    .await;
    mount_query(
        &server,
        &queries[2],
        data_response(json!({"deployment": {
            "id": "dep-1",
            "buildLogs": [{"message": "npm install", "severity": "info"}, "build finished"]
        }})),
        1,
    )
    .await;
    mount_query(&server, &queries[3], data_response(json!({})), 0).await;

    let client = test_client(&server);
    let resolved = LogResolver::new(&client).resolve("dep-1", 1000).await.unwrap();

    assert_eq!(resolved.strategy, "deployment.buildLogs");
    assert_eq!(received_queries(&server).await, queries[..3].to_vec());
}

#[tokio::test]
async fn test_exhaustion_tries_each_strategy_once() {
    let server = MockServer::start().await;
    let queries = strategy_queries();
    mount_query(&server, &queries[0], ResponseTemplate::new(400), 1).await;
    mount_query(&server, &queries[1], data_response(json!({"deployment": null})), 1).await;
    mount_query(
        &server,
        &queries[2],
        data_response(json!({"deployment": {"id": "dep-1"}})),
        1,
    )
    .await;
    mount_query(&server, &queries[3], data_response(json!({"node": {}})), 1).await;

    let client = test_client(&server);
    let resolved = LogResolver::new(&client)
        .with_diagnostics(true)
        .resolve("dep-1", 1000)
        .await;

    assert!(resolved.is_none());
    assert_eq!(received_queries(&server).await, queries);
}

#[tokio::test]
async fn test_resolved_logs_saved_to_file() {
    let server = MockServer::start().await;
    let queries = strategy_queries();
    mount_query(&server, &queries[0], ResponseTemplate::new(500), 1).await;
    mount_query(
        &server,
        &queries[1],
        data_response(json!({"deployment": {"id": "dep-1", "logs": [{"a": 1}, "plain"]}})),
        1,
    )
    .await;

    let client = test_client(&server);
    let resolved = LogResolver::new(&client).resolve("dep-1", 1000).await.unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = LogFileStore::new(dir.path())
        .save(&resolved.payload, "deployment_dep-1")
        .unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "{\"a\":1}\nplain\n");
    let name = path.file_name().unwrap().to_str().unwrap();
    assert!(name.starts_with("deployment_dep-1_"));
    assert!(name.ends_with(".log"));
}
