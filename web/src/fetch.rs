//! Executes the core's requests over the network with reqwest.
//!
//! One call, one GET. No retries, no timeout, no caching.

use gglib_core::{ApiError, HttpMethod, HttpRequest, HttpResponse, Model, ModelClient};

/// Run `req` and hand back the response as plain data.
///
/// Non-2xx statuses are returned as responses, not errors; only a failed
/// round-trip is an `ApiError::Transport`.
pub async fn execute(http: &reqwest::Client, req: HttpRequest) -> Result<HttpResponse, ApiError> {
    let method = match req.method {
        HttpMethod::Get => reqwest::Method::GET,
    };
    let mut builder = http.request(method, &req.url);
    for (name, value) in &req.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let response = builder
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = response.status().as_u16();
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}

/// Fetch the model list from `GET <base_url>/api/models`.
pub async fn get_models(client: &ModelClient, http: &reqwest::Client) -> Result<Vec<Model>, ApiError> {
    let req = client.build_list_models();
    tracing::debug!(url = %req.url, "fetching models");

    let result = match execute(http, req).await {
        Ok(response) => client.parse_list_models(response),
        Err(err) => Err(err),
    };
    match &result {
        Ok(models) => tracing::debug!(count = models.len(), "fetched models"),
        Err(err) => tracing::error!(error = %err, "Failed to fetch models"),
    }
    result
}
