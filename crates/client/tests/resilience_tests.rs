//! Behavior of the resilient data client across live, degraded, and
//! erroring backends.

use axum::{http::StatusCode, routing::get, routing::post, Json, Router};
use prepmaster_catalog::{default_mcqs_for_topic, default_problems};
use prepmaster_client::{ClientConfig, ResilientDataClient, SessionContext};
use std::sync::Arc;
use std::time::Duration;

mod common;

fn client_for(base_url: &str) -> ResilientDataClient {
    let config = ClientConfig::new(base_url).with_timeout(Duration::from_secs(2));
    ResilientDataClient::new(config, Arc::new(SessionContext::default()))
}

#[tokio::test]
async fn offline_problem_list_is_the_bundled_dataset() {
    let client = client_for(&common::unreachable_backend());

    let problems = client.list_problems().await.unwrap();

    assert_eq!(problems, default_problems());
    assert_eq!(problems.len(), 2);
    assert_eq!(problems[0].title, "Two Sum");
    assert_eq!(problems[1].title, "Valid Parentheses");
    // Full starter-code maps survive the fallback path.
    for problem in &problems {
        assert_eq!(problem.starter_code.len(), 4);
        assert!(problem.starter_code_for("python").is_some());
    }
}

#[tokio::test]
async fn offline_mcq_queries_filter_by_topic_like_the_live_path() {
    let client = client_for(&common::unreachable_backend());

    let java = client.list_mcqs_by_topic("java").await.unwrap();
    assert_eq!(java, default_mcqs_for_topic("java"));
    assert_eq!(java.len(), 2);
    assert!(java.iter().all(|q| q.topic_id == "java"));
    assert!(java.iter().all(|q| q.has_valid_answer()));

    let unknown = client.list_mcqs_by_topic("quantum").await.unwrap();
    assert!(unknown.is_empty());
}

#[tokio::test]
async fn offline_submission_reports_optimistic_acceptance() {
    let client = client_for(&common::unreachable_backend());

    let outcome = client.submit_solution("1", "function twoSum() {}").await.unwrap();
    assert_eq!(outcome.status, "Accepted");
    assert_eq!(outcome.points, 50);
}

#[tokio::test]
async fn live_problem_list_comes_from_the_server() {
    let router = Router::new().route(
        "/api/problems",
        get(|| async {
            Json(serde_json::json!([{
                "_id": "99",
                "title": "Server Problem",
                "difficulty": "Medium",
                "category": "Graphs",
                "description": "from the live store",
                "constraints": [],
                "examples": [],
                "starterCode": { "javascript": "// live" }
            }]))
        }),
    );
    let base = common::spawn_backend(router).await;
    let client = client_for(&base);

    let problems = client.list_problems().await.unwrap();
    assert_eq!(problems.len(), 1);
    assert_eq!(problems[0].id, "99");
    assert_eq!(problems[0].title, "Server Problem");
}

#[tokio::test]
async fn server_errors_degrade_to_fallback_but_client_errors_surface() {
    // 500 is an availability failure: callers still get data.
    let failing = Router::new().route(
        "/api/problems",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = common::spawn_backend(failing).await;
    let client = client_for(&base);

    let problems = client.list_problems().await.unwrap();
    assert_eq!(problems, default_problems());

    // 401 is not: masking it with fallback data would hide a real bug.
    let rejecting = Router::new().route(
        "/api/problems",
        get(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "error": "Missing authorization token" })),
            )
        }),
    );
    let base = common::spawn_backend(rejecting).await;
    let client = client_for(&base);

    let err = client.list_problems().await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn bad_credentials_surface_instead_of_minting_a_mock_session() {
    let router = Router::new().route(
        "/api/auth/login",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(serde_json::json!({ "error": "Invalid credentials" })),
            )
        }),
    );
    let base = common::spawn_backend(router).await;
    let client = client_for(&base);

    let err = client.login("a@x.com", "wrong").await.unwrap_err();
    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn offline_login_degrades_to_the_deterministic_mock_session() {
    let client = client_for(&common::unreachable_backend());

    let session = client.login("a@x.com", "pw1").await.unwrap();
    assert_eq!(session.token, "mock_token");
    assert_eq!(session.user.email, "a@x.com");
    assert_eq!(session.user.points, 1250);
}

#[tokio::test]
async fn bearer_token_is_attached_when_the_session_has_one() {
    use axum::http::HeaderMap;

    fn bearer_of(headers: &HeaderMap) -> String {
        headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string()
    }

    let router = Router::new()
        .route(
            "/api/auth/me",
            get(|headers: HeaderMap| async move {
                assert_eq!(bearer_of(&headers), "Bearer tok-123");
                Json(serde_json::json!({
                    "id": "u1", "name": "Alice", "email": "a@x.com"
                }))
            }),
        )
        .route(
            "/api/problems",
            get(|headers: HeaderMap| async move {
                assert_eq!(bearer_of(&headers), "Bearer tok-123");
                Json(serde_json::json!([]))
            }),
        );
    let base = common::spawn_backend(router).await;

    let session = Arc::new(SessionContext::default());
    let config = ClientConfig::new(&base).with_timeout(Duration::from_secs(2));
    let client = ResilientDataClient::new(config, session.clone());

    // Establish the token through the manager path used in production.
    let dir = tempfile::tempdir().unwrap();
    let store = prepmaster_client::TokenStore::new(dir.path());
    store.save("tok-123").unwrap();
    let mut manager = prepmaster_client::AuthSessionManager::new(store, session);
    manager.restore(&client).await;

    let problems = client.list_problems().await.unwrap();
    assert!(problems.is_empty());
}
