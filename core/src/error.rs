//! Error types for the models API client.
//!
//! # Design
//! Four variants keep the cause precise for logs and tests, while
//! [`ErrorKind`] folds them into the two kinds the page cares about:
//! the request failed, or the body had the wrong shape.

use thiserror::Error;

/// Errors returned while fetching and parsing the model list.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server returned a non-2xx status.
    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    /// The response body was not the JSON we expected.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The envelope parsed but lacks a required field.
    #[error("response is missing the `{0}` field")]
    MissingField(&'static str),
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network failure or non-2xx status.
    Transport,
    /// Body missing the expected structure.
    Parse,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Transport(_) | ApiError::Status { .. } => ErrorKind::Transport,
            ApiError::Deserialization(_) | ApiError::MissingField(_) => ErrorKind::Parse,
        }
    }
}
