use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, sample_models, Fixture, ModelsEnvelope};
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn get(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

// --- root ---

#[tokio::test]
async fn root_reports_running() {
    let resp = app(Fixture::Models(Vec::new())).oneshot(get("/")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["message"], "gglib API is running!");
}

// --- list ---

#[tokio::test]
async fn list_models_empty() {
    let resp = app(Fixture::Models(Vec::new()))
        .oneshot(get("/api/models"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: ModelsEnvelope = body_json(resp).await;
    assert!(envelope.models.is_empty());
}

#[tokio::test]
async fn list_models_returns_fixture_in_order() {
    let resp = app(Fixture::Models(sample_models()))
        .oneshot(get("/api/models"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let envelope: ModelsEnvelope = body_json(resp).await;
    assert_eq!(envelope.models, sample_models());
}

#[tokio::test]
async fn list_models_wraps_list_in_envelope() {
    let resp = app(Fixture::Models(sample_models()))
        .oneshot(get("/api/models"))
        .await
        .unwrap();

    let body: serde_json::Value = body_json(resp).await;
    assert!(body.is_object());
    assert_eq!(body["models"].as_array().unwrap().len(), 2);
}

// --- failures ---

#[tokio::test]
async fn status_fixture_returns_that_status() {
    let resp = app(Fixture::Status(500)).oneshot(get("/api/models")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let resp = app(Fixture::Status(503)).oneshot(get("/api/models")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn invalid_status_falls_back_to_500() {
    let resp = app(Fixture::Status(42)).oneshot(get("/api/models")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn raw_fixture_is_served_verbatim() {
    let resp = app(Fixture::Raw(r#"{"items":[]}"#.to_string()))
        .oneshot(get("/api/models"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await, r#"{"items":[]}"#.as_bytes());
}

// --- routing ---

#[tokio::test]
async fn unknown_route_returns_404() {
    let resp = app(Fixture::Models(Vec::new()))
        .oneshot(get("/api/unknown"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_to_models_not_allowed() {
    let req = Request::builder()
        .method("POST")
        .uri("/api/models")
        .body(String::new())
        .unwrap();
    let resp = app(Fixture::Models(Vec::new())).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}
