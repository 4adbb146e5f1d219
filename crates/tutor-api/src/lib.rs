//! # tutor-api
//!
//! HTTP API layer for the tutoring backend built on Axum.
//!
//! Exposes CRUD and criteria search for every entity, a few association
//! endpoints, and a health check, together with middleware (CORS,
//! compression, tracing, request logging), extractors, and error mapping.

pub mod app;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use error::ApiError;
pub use state::AppState;
