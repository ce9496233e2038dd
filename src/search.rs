//! Free-text resource search: filter, score, rank, interpret.

use serde::{Deserialize, Serialize};

use crate::catalog::{Resource, ResourceType};
use crate::ranking::{rank, Scored, SEARCH_LIMIT};
use crate::scoring::search_score;

/// Optional narrowing applied before scoring.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchFilters {
    /// Exact resource-type filter.
    #[serde(rename = "type")]
    pub resource_type: Option<ResourceType>,

    /// Any-of category filter: a resource survives when it carries at
    /// least one of the listed categories.
    #[serde(default)]
    pub categories: Option<Vec<String>>,
}

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("search query must not be empty")]
    EmptyQuery,
}

/// A ranked result list plus the deterministic interpretation string.
#[derive(Debug, Serialize)]
pub struct SearchOutcome {
    pub results: Vec<Scored<Resource>>,
    pub interpretation: String,
    pub total_results: usize,
}

/// Joined searchable text of one resource: title, description, tags,
/// categories.
fn haystack(resource: &Resource) -> String {
    let mut parts: Vec<&str> = vec![&resource.title, &resource.description];
    parts.extend(resource.tags.iter().map(String::as_str));
    parts.extend(resource.categories.iter().map(String::as_str));
    parts.join(" ")
}

/// Filters `resources`, scores survivors against `query`, and returns
/// the top results (limit 10). An empty or whitespace-only query is a
/// caller error.
pub fn search_resources(
    resources: &[Resource],
    query: &str,
    filters: &SearchFilters,
) -> Result<SearchOutcome, SearchError> {
    let needle = query.trim();
    if needle.is_empty() {
        return Err(SearchError::EmptyQuery);
    }

    let scored: Vec<Scored<Resource>> = resources
        .iter()
        .filter(|r| {
            filters
                .resource_type
                .map_or(true, |wanted| r.resource_type == wanted)
        })
        .filter(|r| {
            filters.categories.as_ref().map_or(true, |wanted| {
                wanted.iter().any(|c| r.categories.contains(c))
            })
        })
        .map(|r| {
            let relevance = search_score(needle, &haystack(r));
            Scored {
                item: r.clone(),
                score: relevance.score,
                reason: relevance.reason,
            }
        })
        .collect();

    let results = rank(scored, SEARCH_LIMIT);
    let total_results = results.len();
    Ok(SearchOutcome {
        interpretation: format!("Showing support resources matching \"{needle}\""),
        results,
        total_results,
    })
}
