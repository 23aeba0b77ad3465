//! Host side of the gglib model viewer.
//!
//! # Overview
//! `gglib-core` builds requests and renders pages without doing any IO. This
//! crate performs the HTTP round-trip with reqwest and drives the page's
//! single load on the tokio runtime.

pub mod controller;
pub mod fetch;

pub use controller::PageController;
pub use fetch::get_models;
