use super::support::StubStore;
use crate::chat::ChatEngine;
use crate::constants::DEFAULT_MESSAGE;
use crate::http::handlers::HealthResponse;
use crate::http::router;
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use std::sync::Arc;

async fn spawn_server(store: Arc<StubStore>) -> String {
    let engine = Arc::new(ChatEngine::new(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(engine)).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_chat_returns_plain_text() {
    let store = Arc::new(StubStore::returning(&["A", "B", "C"]));
    let base = spawn_server(Arc::clone(&store)).await;

    let response = reqwest::Client::new()
        .get(format!("{}/chat", base))
        .query(&[("message", "x")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/plain"), "got {}", content_type);
    assert_eq!(response.text().await.unwrap(), "A,B,C");
    assert_eq!(store.requests()[0].query, "x");
}

#[tokio::test]
async fn test_chat_decodes_message_parameter() {
    let store = Arc::new(StubStore::returning(&["A"]));
    let base = spawn_server(Arc::clone(&store)).await;

    let response = reqwest::Client::new()
        .get(format!("{}/chat", base))
        .query(&[("message", "heart rate & sleep, tracking")])
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.requests()[0].query, "heart rate & sleep, tracking");
}

#[tokio::test]
async fn test_chat_without_message_uses_default() {
    let store = Arc::new(StubStore::returning(&["A"]));
    let base = spawn_server(Arc::clone(&store)).await;

    let response = reqwest::get(format!("{}/chat", base)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(store.requests()[0].query, DEFAULT_MESSAGE);
    assert_eq!(store.requests()[0].top_k, 10);
}

#[tokio::test]
async fn test_chat_with_no_documents_is_empty_ok() {
    let store = Arc::new(StubStore::returning(&[]));
    let base = spawn_server(store).await;

    let response = reqwest::get(format!("{}/chat?message=x", base)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "");
}

#[tokio::test]
async fn test_chat_with_fifteen_documents_returns_ten() {
    let store = Arc::new(StubStore::with_count(15));
    let base = spawn_server(store).await;

    let body = reqwest::get(format!("{}/chat?message=x", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert_eq!(body, "D0,D1,D2,D3,D4,D5,D6,D7,D8,D9");
}

#[tokio::test]
async fn test_chat_store_failure_is_server_error() {
    let store = Arc::new(StubStore::failing());
    let base = spawn_server(store).await;

    let response = reqwest::get(format!("{}/chat?message=x", base)).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = response.text().await.unwrap();
    assert!(!body.contains("connection refused"));
}

#[tokio::test]
async fn test_health_reports_store_state() {
    let healthy = spawn_server(Arc::new(StubStore::returning(&[]))).await;
    let response = reqwest::get(format!("{}/health", healthy)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.json::<HealthResponse>().await.unwrap(),
        HealthResponse {
            status: "SERVING".to_string()
        }
    );

    let broken = spawn_server(Arc::new(StubStore::failing())).await;
    let response = reqwest::get(format!("{}/health", broken)).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(
        response.json::<HealthResponse>().await.unwrap().status,
        "NOT_SERVING"
    );
}
