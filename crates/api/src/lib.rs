//! HTTP API: server, routing, and request/response mapping.

pub mod app;
pub mod config;
pub mod middleware;

pub use app::{build_app, services::AppServices};
pub use config::ApiConfig;
