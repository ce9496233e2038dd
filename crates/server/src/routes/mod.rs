//! API route handlers
//!
//! This module contains all HTTP endpoint implementations for the Haven
//! server. Routes are organized by functionality:
//!
//! - `health`: Health checks, readiness, and metrics
//! - `stories`: Story submission, metadata generation, counters, stats
//! - `matching`: Mentor/group matching and resource personalization
//! - `resources`: Resource search

pub mod health;
pub mod matching;
pub mod resources;
pub mod stories;

use crate::error::{ServerError, ServerResult};
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

/// API version and base info
///
/// Returns server information including version and available endpoints.
/// This is the root endpoint (GET /) and requires no authentication.
pub async fn api_info() -> ServerResult<impl IntoResponse> {
    Ok(Json(json!({
        "name": "Haven Server",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1",
        "endpoints": [
            "/api/v1/stories",
            "/api/v1/stories/media",
            "/api/v1/stories/metadata",
            "/api/v1/stories/stats",
            "/api/v1/stories/{id}/comments",
            "/api/v1/match",
            "/api/v1/resources/personalize",
            "/api/v1/resources/search",
            "/health",
            "/ready",
            "/metrics"
        ]
    })))
}

/// 404 Not Found handler
///
/// Returns a standardized error response for undefined routes.
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
