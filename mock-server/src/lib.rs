use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub parameters: f64,
    pub max_context: i64,
    pub file_path: String,
    pub file_size: i64,
    pub created_on: String,
}

#[derive(Serialize, Deserialize)]
pub struct ModelsEnvelope {
    pub models: Vec<Model>,
}

/// What `GET /api/models` answers with.
#[derive(Clone, Debug)]
pub enum Fixture {
    /// 200 with a well-formed envelope.
    Models(Vec<Model>),
    /// The given status with a small JSON error body.
    Status(u16),
    /// 200 with this exact body, for malformed or oddly shaped responses.
    Raw(String),
}

pub fn sample_models() -> Vec<Model> {
    vec![
        Model {
            id: Some(1),
            name: "Llama-2-7B-Chat".to_string(),
            parameters: 7.0,
            max_context: 4096,
            file_path: "/models/llama-2-7b-chat.gguf".to_string(),
            file_size: 13_481_000_000,
            created_on: "2025-08-15T10:30:00".to_string(),
        },
        Model {
            id: Some(2),
            name: "Mistral-7B-Instruct".to_string(),
            parameters: 7.2,
            max_context: 32768,
            file_path: "/models/mistral-7b-instruct.gguf".to_string(),
            file_size: 4_368_439_584,
            created_on: "2025-08-16T09:00:00".to_string(),
        },
    ]
}

pub fn app(fixture: Fixture) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/models", get(list_models))
        .with_state(Arc::new(fixture))
}

pub async fn run(listener: TcpListener, fixture: Fixture) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, ?fixture, "mock server listening");
    }
    axum::serve(listener, app(fixture)).await
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": "gglib API is running!" }))
}

async fn list_models(State(fixture): State<Arc<Fixture>>) -> Response {
    tracing::debug!(?fixture, "serving /api/models");
    match fixture.as_ref() {
        Fixture::Models(models) => Json(ModelsEnvelope {
            models: models.clone(),
        })
        .into_response(),
        Fixture::Status(code) => {
            let status = StatusCode::from_u16(*code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            (status, Json(json!({ "detail": status.to_string() }))).into_response()
        }
        Fixture::Raw(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
    }
}
