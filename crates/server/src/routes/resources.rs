use crate::error::ServerResult;
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use haven::search::{search_resources, SearchFilters};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Resource search request
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub query: String,

    #[serde(default)]
    pub filters: SearchFilters,
}

/// Search the resource catalog.
///
/// Filters narrow the catalog before scoring; results are ranked and
/// truncated to 10. The interpretation string echoes the literal query
/// so identical queries produce identical bytes.
pub async fn search(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<SearchRequest>,
) -> ServerResult<impl IntoResponse> {
    let outcome = search_resources(state.catalog.resources(), &request.query, &request.filters)?;
    Ok(Json(json!({
        "results": outcome.results,
        "search_interpretation": outcome.interpretation,
        "total_results": outcome.total_results,
    })))
}
