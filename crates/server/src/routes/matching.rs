use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use haven::ranking::{rank, Scored, GROUP_LIMIT, MENTOR_LIMIT, RESOURCE_LIMIT};
use haven::scoring::{
    overlap_score, MATCH_BASE, MATCH_WEIGHT, PERSONALIZE_BASE, PERSONALIZE_WEIGHT,
};
use haven::{Mentor, Resource, SupportGroup};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Requester profile. Ephemeral: supplied per request, never stored.
#[derive(Debug, Deserialize)]
pub struct ProfileRequest {
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
}

impl ProfileRequest {
    /// Deduplicated challenge + interest tags, challenges first.
    fn tags(&self) -> ServerResult<Vec<String>> {
        let mut tags: Vec<String> = Vec::new();
        for tag in self.challenges.iter().chain(self.interests.iter()) {
            let tag = tag.trim();
            if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
                tags.push(tag.to_string());
            }
        }
        if tags.is_empty() {
            return Err(ServerError::Validation(
                "Profile must include at least one challenge or interest".to_string(),
            ));
        }
        Ok(tags)
    }
}

/// Match response
#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub mentors: Vec<Scored<Mentor>>,
    #[serde(rename = "supportGroups")]
    pub support_groups: Vec<Scored<SupportGroup>>,
}

/// Match the requester profile against active mentors and open support
/// groups. Each partition is scored and ranked independently (top 3).
pub async fn match_support(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<ProfileRequest>,
) -> ServerResult<impl IntoResponse> {
    let profile = request.tags()?;

    let mentors: Vec<Scored<Mentor>> = state
        .catalog
        .matchable_mentors()
        .map(|mentor| {
            let mut item_tags = mentor.expertise.clone();
            item_tags.extend(mentor.interests.iter().cloned());
            let relevance = overlap_score(MATCH_BASE, MATCH_WEIGHT, &profile, &item_tags);
            Scored {
                item: mentor.clone(),
                score: relevance.score,
                reason: relevance.reason,
            }
        })
        .collect();

    let groups: Vec<Scored<SupportGroup>> = state
        .catalog
        .open_groups()
        .map(|group| {
            let relevance = overlap_score(MATCH_BASE, MATCH_WEIGHT, &profile, &group.focus_areas);
            Scored {
                item: group.clone(),
                score: relevance.score,
                reason: relevance.reason,
            }
        })
        .collect();

    Ok(Json(MatchResponse {
        mentors: rank(mentors, MENTOR_LIMIT),
        support_groups: rank(groups, GROUP_LIMIT),
    }))
}

/// Personalization response
#[derive(Debug, Serialize)]
pub struct PersonalizeResponse {
    pub recommendations: Vec<Scored<Resource>>,
    pub strategy: String,
    pub total_recommendations: usize,
}

/// Rank the resource catalog against the requester profile (top 10).
pub async fn personalize_resources(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<ProfileRequest>,
) -> ServerResult<impl IntoResponse> {
    let profile = request.tags()?;

    let scored: Vec<Scored<Resource>> = state
        .catalog
        .resources()
        .iter()
        .map(|resource| {
            let mut item_tags = resource.categories.clone();
            item_tags.extend(resource.tags.iter().cloned());
            let relevance =
                overlap_score(PERSONALIZE_BASE, PERSONALIZE_WEIGHT, &profile, &item_tags);
            Scored {
                item: resource.clone(),
                score: relevance.score,
                reason: relevance.reason,
            }
        })
        .collect();

    let recommendations = rank(scored, RESOURCE_LIMIT);
    let total_recommendations = recommendations.len();
    Ok(Json(PersonalizeResponse {
        recommendations,
        strategy: "profile_overlap".to_string(),
        total_recommendations,
    }))
}
