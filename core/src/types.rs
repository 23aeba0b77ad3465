//! Domain DTOs for the gglib models API.
//!
//! # Design
//! These types mirror the API's schema but are defined independently of the
//! mock-server crate. Integration tests catch any schema drift between the two.
//!
//! Every `Model` field decodes leniently: a missing, `null`, or mistyped value
//! becomes `None` instead of failing the whole list. The viewer displays what
//! the server sent and leaves validation to the server.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};

/// A stored model artifact as returned by `GET /api/models`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Model {
    /// Absent until the record is persisted.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub name: Option<String>,
    /// Parameter count in billions, e.g. `7.0`.
    #[serde(default, deserialize_with = "lenient")]
    pub parameters: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    pub max_context: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub file_path: Option<String>,
    /// Size of the model file in bytes.
    #[serde(default, deserialize_with = "lenient")]
    pub file_size: Option<i64>,
    #[serde(default, deserialize_with = "lenient")]
    pub created_on: Option<String>,
}

/// The `{ "models": [...] }` wrapper around the list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ModelsEnvelope {
    pub models: Vec<Model>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
