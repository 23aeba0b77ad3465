//! Sans-IO core for the gglib model viewer.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern), then turns the result into a
//! rendered page. The host executes the actual HTTP round-trip and drives the
//! page's single state transition.
//!
//! # Design
//! - `ModelClient` is stateless; it holds only `base_url`.
//! - The list operation is split into `build_list_models` and
//!   `parse_list_models`, so the I/O boundary is explicit.
//! - `PageState` and `card::render` are pure; a `View` is plain data the
//!   host can print or inspect.
//! - DTOs are defined independently from the mock-server crate; integration
//!   tests catch schema drift.

pub mod card;
pub mod client;
pub mod error;
pub mod http;
pub mod page;
pub mod types;

pub use card::Card;
pub use client::{ModelClient, DEFAULT_BASE_URL};
pub use error::{ApiError, ErrorKind};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use page::{Element, PageState, Style, View};
pub use types::{Model, ModelsEnvelope};
