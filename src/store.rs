//! The mutable story registry.
//!
//! The only mutable entity in the core. The registry sits behind the
//! [`StoryStore`] trait so the same logic can run against any backing
//! store; the in-memory implementation is the production default and the
//! test fake at once. Identifier generation is injected through
//! [`IdGenerator`] so tests can supply deterministic IDs.
//!
//! Concurrent create/update calls observe last-write-wins merges; no
//! multi-writer consistency is promised here.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;

use crate::story::{NewStory, Story, StoryPatch};

/// Source of fresh story identifiers. Collision-resistant for the
/// process lifetime; not required to be globally unique.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Production identifier source.
#[derive(Debug, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Deterministic sequence for tests: `story-1`, `story-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl IdGenerator for SequentialIdGenerator {
    fn generate(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        format!("story-{n}")
    }
}

/// Create/patch/read operations over the story registry. No field-level
/// validation happens here; that is the caller's responsibility.
pub trait StoryStore: Send + Sync {
    /// Assigns a fresh identifier and creation timestamp, fills counter
    /// defaults, and stores the record.
    fn create(&self, new: NewStory) -> Story;

    /// Merges `patch` over the existing record. Returns the updated
    /// record, or `None` for an unknown identifier.
    fn update(&self, id: &str, patch: StoryPatch) -> Option<Story>;

    fn get(&self, id: &str) -> Option<Story>;

    /// All stories, oldest first.
    fn list(&self) -> Vec<Story>;
}

/// In-memory registry over a concurrent map.
pub struct InMemoryStoryStore {
    stories: DashMap<String, Story>,
    ids: Arc<dyn IdGenerator>,
}

impl InMemoryStoryStore {
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(UuidIdGenerator))
    }

    pub fn with_id_generator(ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            stories: DashMap::new(),
            ids,
        }
    }
}

impl Default for InMemoryStoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StoryStore for InMemoryStoryStore {
    fn create(&self, new: NewStory) -> Story {
        let story = Story {
            id: self.ids.generate(),
            title: new.title,
            author_name: new.author_name,
            content: new.content,
            topic: new.topic,
            media_urls: new.media_urls,
            audio_url: new.audio_url,
            summary: new.summary,
            tags: new.tags,
            status: new.status,
            comment_count: 0,
            like_count: 0,
            created_at: Utc::now(),
        };
        self.stories.insert(story.id.clone(), story.clone());
        story
    }

    fn update(&self, id: &str, patch: StoryPatch) -> Option<Story> {
        let mut entry = self.stories.get_mut(id)?;
        let story = entry.value_mut();
        if let Some(title) = patch.title {
            story.title = title;
        }
        if let Some(content) = patch.content {
            story.content = content;
        }
        if let Some(summary) = patch.summary {
            story.summary = summary;
        }
        if let Some(tags) = patch.tags {
            story.tags = tags;
        }
        if let Some(status) = patch.status {
            story.status = status;
        }
        if let Some(comment_count) = patch.comment_count {
            story.comment_count = comment_count;
        }
        if let Some(like_count) = patch.like_count {
            story.like_count = like_count;
        }
        if let Some(media_urls) = patch.media_urls {
            story.media_urls = media_urls;
        }
        if let Some(audio_url) = patch.audio_url {
            story.audio_url = Some(audio_url);
        }
        Some(story.clone())
    }

    fn get(&self, id: &str) -> Option<Story> {
        self.stories.get(id).map(|entry| entry.value().clone())
    }

    fn list(&self) -> Vec<Story> {
        let mut stories: Vec<Story> = self
            .stories
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        stories.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        stories
    }
}
