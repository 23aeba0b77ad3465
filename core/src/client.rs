//! Stateless HTTP request builder and response parser for the models API.
//!
//! # Design
//! `ModelClient` holds only a `base_url`. The list operation is split into
//! `build_list_models`, which produces an `HttpRequest`, and
//! `parse_list_models`, which consumes an `HttpResponse`. The host executes
//! the HTTP round-trip in between.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Model, ModelsEnvelope};

/// Where the gglib API listens unless told otherwise.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

const MODELS_PATH: &str = "/api/models";
const MODELS_FIELD: &str = "models";

/// Synchronous, stateless client for the models API.
#[derive(Debug, Clone)]
pub struct ModelClient {
    base_url: String,
}

impl Default for ModelClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ModelClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_models(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{MODELS_PATH}", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    /// Unwrap the `{ "models": [...] }` envelope.
    ///
    /// A body without the `models` field is an error, not an empty list.
    /// Every record must be a JSON object.
    pub fn parse_list_models(&self, response: HttpResponse) -> Result<Vec<Model>, ApiError> {
        check_status(&response)?;
        let body: serde_json::Value =
            serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        let models = body.get(MODELS_FIELD).ok_or(ApiError::MissingField(MODELS_FIELD))?;
        if let Some(index) = models
            .as_array()
            .and_then(|records| records.iter().position(|record| !record.is_object()))
        {
            return Err(ApiError::Deserialization(format!(
                "model record {index} is not an object"
            )));
        }
        let envelope: ModelsEnvelope =
            serde_json::from_value(body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
        Ok(envelope.models)
    }
}

/// Any non-2xx status is a failure, whatever the body says.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
