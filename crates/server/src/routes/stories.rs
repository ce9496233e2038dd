use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use axum::extract::{Multipart, Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use haven::story::{NewStory, StoryPatch, StoryStatus, TOPICS};
use haven::{enrich, story_stats, ModerationResult, ModerationSource};
use metrics::counter;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

/// Text-only story submission
#[derive(Debug, Deserialize)]
pub struct SubmitStoryRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author_name: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub media_urls: Vec<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
}

fn require(field: &'static str, value: &str) -> ServerResult<()> {
    if value.trim().is_empty() {
        return Err(ServerError::Validation(format!(
            "Missing required field: {field}"
        )));
    }
    Ok(())
}

fn validate_submission(request: &SubmitStoryRequest) -> ServerResult<()> {
    require("title", &request.title)?;
    require("author_name", &request.author_name)?;
    require("content", &request.content)?;
    require("topic", &request.topic)?;
    if !TOPICS.contains(&request.topic.as_str()) {
        return Err(ServerError::Validation(format!(
            "Unknown topic: {}",
            request.topic
        )));
    }
    Ok(())
}

fn moderation_source_label(source: ModerationSource) -> &'static str {
    match source {
        ModerationSource::Openai => "openai",
        ModerationSource::Local => "local",
    }
}

/// Moderation rejection body: a specific, actionable message citing the
/// reason and which scorer produced the verdict.
fn rejection_response(verdict: &ModerationResult) -> Response {
    counter!("haven_moderation_rejected_total").increment(1);
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "Story rejected by content moderation",
            "moderation": {
                "reason": verdict.reason,
                "source": verdict.source,
            }
        })),
    )
        .into_response()
}

/// Shared submission pipeline: moderate, enrich, persist.
async fn run_submission(
    state: &ServerState,
    request: SubmitStoryRequest,
) -> ServerResult<Response> {
    validate_submission(&request)?;
    let store = state.story_store()?;

    let verdict = state.gate.moderate(&request.content).await;
    counter!(
        "haven_moderation_verdicts_total",
        "source" => moderation_source_label(verdict.source)
    )
    .increment(1);
    if !verdict.is_clean {
        return Ok(rejection_response(&verdict));
    }

    let summary = enrich::summarize(&request.content);
    let tags = enrich::infer_tags(&request.content, Some(&request.topic));
    let story = store.create(NewStory {
        title: request.title,
        author_name: request.author_name,
        content: request.content,
        topic: request.topic,
        media_urls: request.media_urls,
        audio_url: request.audio_url,
        summary,
        tags,
        status: StoryStatus::Pending,
    });

    counter!("haven_stories_submitted_total").increment(1);
    Ok(Json(json!({ "success": true, "story": story })).into_response())
}

/// Submit a text-only story.
///
/// The content passes through the moderation gate before anything is
/// stored; a rejection carries the reason and the verdict's provenance.
pub async fn submit_story(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<SubmitStoryRequest>,
) -> ServerResult<Response> {
    run_submission(&state, request).await
}

/// Submit a story with media attachments (multipart).
///
/// File parts are recorded as media/audio references on the story;
/// upload and storage of the bytes themselves live outside this service.
pub async fn submit_story_media(
    State(state): State<Arc<ServerState>>,
    mut multipart: Multipart,
) -> ServerResult<Response> {
    let mut request = SubmitStoryRequest {
        title: String::new(),
        author_name: String::new(),
        content: String::new(),
        topic: String::new(),
        media_urls: Vec::new(),
        audio_url: None,
    };

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => request.title = field.text().await?,
            "author_name" => request.author_name = field.text().await?,
            "content" => request.content = field.text().await?,
            "topic" => request.topic = field.text().await?,
            "media" => {
                let file_name = field.file_name().unwrap_or("attachment").to_string();
                // reference only; bytes are handled by the upload service
                let _ = field.bytes().await?;
                request.media_urls.push(format!("uploads/{file_name}"));
            }
            "audio" => {
                let file_name = field.file_name().unwrap_or("audio").to_string();
                let _ = field.bytes().await?;
                request.audio_url = Some(format!("uploads/{file_name}"));
            }
            _ => {
                tracing::debug!(field = %name, "ignoring unknown multipart field");
            }
        }
    }

    run_submission(&state, request).await
}

/// Metadata generation request
#[derive(Debug, Deserialize)]
pub struct GenerateMetadataRequest {
    #[serde(default)]
    pub story_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// Generate a summary and tag set for existing story text.
///
/// Best-effort: when the story is known to the registry its derived
/// fields are refreshed in place, but the generated metadata is returned
/// either way.
pub async fn generate_metadata(
    State(state): State<Arc<ServerState>>,
    Json(request): Json<GenerateMetadataRequest>,
) -> ServerResult<impl IntoResponse> {
    require("story_id", &request.story_id)?;
    require("content", &request.content)?;

    let summary = enrich::summarize(&request.content);
    let inference_text = format!("{} {}", request.title, request.content);
    let tags = enrich::infer_tags(&inference_text, None);

    if let Some(store) = state.store.as_ref() {
        store.update(
            &request.story_id,
            StoryPatch {
                summary: Some(summary.clone()),
                tags: Some(tags.clone()),
                ..StoryPatch::default()
            },
        );
    }

    Ok(Json(json!({
        "success": true,
        "summary": summary,
        "tags": tags,
    })))
}

/// Comment-count update request. `increment` is kept as raw JSON so a
/// missing field and a non-numeric value produce distinct messages.
#[derive(Debug, Deserialize)]
pub struct UpdateCommentCountRequest {
    #[serde(default)]
    pub increment: Option<serde_json::Value>,
}

/// Apply a signed increment to a story's comment count, clamped at zero.
pub async fn update_comment_count(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    Json(request): Json<UpdateCommentCountRequest>,
) -> ServerResult<impl IntoResponse> {
    let raw = request
        .increment
        .ok_or_else(|| ServerError::Validation("Missing required field: increment".to_string()))?;
    // `as_i64` admits exactly the JSON integers in i64 range, so a
    // fractional or astronomically large increment never applies a
    // delta other than the one requested.
    let delta = raw.as_i64().ok_or_else(|| {
        ServerError::Validation("Field 'increment' must be a finite integer".to_string())
    })?;

    let store = state.story_store()?;
    let story = store
        .get(&id)
        .ok_or_else(|| ServerError::StoryNotFound(id.clone()))?;

    let new_count = (story.comment_count as i64)
        .saturating_add(delta)
        .clamp(0, u32::MAX as i64) as u32;
    store
        .update(
            &id,
            StoryPatch {
                comment_count: Some(new_count),
                ..StoryPatch::default()
            },
        )
        .ok_or_else(|| ServerError::StoryNotFound(id.clone()))?;

    Ok(Json(json!({ "success": true, "newCount": new_count })))
}

/// List all stories, oldest first.
pub async fn list_stories(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    let store = state.story_store()?;
    let stories = store.list();
    let total = stories.len();
    Ok(Json(json!({
        "stories": stories,
        "total": total,
    })))
}

/// Registry statistics: totals per status and the most frequent topic.
pub async fn stats(State(state): State<Arc<ServerState>>) -> ServerResult<impl IntoResponse> {
    let store = state.story_store()?;
    let stats = story_stats(&store.list());
    Ok(Json(stats))
}
