//! Integration tests for the listing operations.
//!
//! Tests cover:
//! - Projects, environments, services and deployments over HTTP
//! - Unknown project handling
//! - Failure propagation

use api::queries::{
    list_deployments, list_environments, list_projects, list_services, DeploymentScope,
};
use api::QueryError;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{data_response, test_client};

#[tokio::test]
async fn test_list_projects() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(data_response(json!({
            "projects": {"edges": [
                {"node": {"id": "p1", "name": "openproject", "description": "Project management"}}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let projects = list_projects(&test_client(&server)).await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].id, "p1");
    assert_eq!(projects[0].description.as_deref(), Some("Project management"));
}

#[tokio::test]
async fn test_list_environments_for_project() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"variables": {"projectId": "p1"}})))
        .respond_with(data_response(json!({
            "project": {
                "id": "p1",
                "name": "openproject",
                "environments": {"edges": [
                    {"node": {"id": "e1", "name": "production"}},
                    {"node": {"id": "e2", "name": "staging"}}
                ]}
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let environments = list_environments(&test_client(&server), "p1").await.unwrap();

    assert_eq!(environments.len(), 2);
    assert_eq!(environments[1].name, "staging");
}

#[tokio::test]
async fn test_list_services_unknown_project_is_empty() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(data_response(json!({"project": null})))
        .mount(&server)
        .await;

    let services = list_services(&test_client(&server), "nope").await.unwrap();

    assert!(services.is_empty());
}

#[tokio::test]
async fn test_list_deployments_with_scope() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"variables": {
            "projectId": "p1",
            "environmentId": "e1",
            "serviceId": "s1",
            "first": 3
        }})))
        .respond_with(data_response(json!({
            "deployments": {"edges": [
                {"node": {
                    "id": "dep-2",
                    "status": "SUCCESS",
                    "createdAt": "2024-02-01T08:00:00Z",
                    "staticUrl": "openproject.up.railway.app"
                }},
                {"node": {
                    "id": "dep-1",
                    "status": "CRASHED",
                    "createdAt": "2024-01-31T08:00:00Z",
                    "staticUrl": null
                }}
            ]}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let scope = DeploymentScope {
        project_id: "p1",
        environment_id: "e1",
        service_id: "s1",
    };
    let deployments = list_deployments(&test_client(&server), scope, 3)
        .await
        .unwrap();

    assert_eq!(deployments.len(), 2);
    assert_eq!(deployments[0].id, "dep-2");
    assert_eq!(deployments[1].status, "CRASHED");
}

#[tokio::test]
async fn test_listing_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = list_projects(&test_client(&server)).await;

    assert!(matches!(result, Err(QueryError::Transport(_))));
}
