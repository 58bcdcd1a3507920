//! agronomist-server: HTTP host for AIAgronomist
//!
//! Serves each page as HTML (one request = one render pass) and exposes
//! the same display trees over a small JSON API.

pub mod http;
pub mod views;

pub use http::{build_router, run_server, ApiError, ServerConfig, ServerError};
