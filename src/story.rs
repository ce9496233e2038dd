//! Story records and registry-level statistics.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Closed set of topic codes a story can carry.
pub const TOPICS: &[&str] = &[
    "academic_stress",
    "family_expectations",
    "cultural_identity",
    "mental_health",
    "relationships",
    "future_anxiety",
];

/// Moderation/publication status of a story. Set by the calling
/// workflow, not by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoryStatus {
    Pending,
    Approved,
}

/// A published or pending community story. Created by the submission
/// workflow, mutated only through field-level patches, never hard-deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub author_name: String,
    pub content: String,
    pub topic: String,
    #[serde(default)]
    pub media_urls: Vec<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    /// Derived summary, at most 180 visible characters.
    pub summary: String,
    /// Derived tag set, at most 5 entries.
    pub tags: Vec<String>,
    pub status: StoryStatus,
    pub comment_count: u32,
    pub like_count: u32,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a story. Identifier, timestamp, and
/// counter defaults are filled in by the store.
#[derive(Debug, Clone)]
pub struct NewStory {
    pub title: String,
    pub author_name: String,
    pub content: String,
    pub topic: String,
    pub media_urls: Vec<String>,
    pub audio_url: Option<String>,
    pub summary: String,
    pub tags: Vec<String>,
    pub status: StoryStatus,
}

/// Field-level patch merged over an existing story. `None` leaves the
/// field untouched; the store performs no validation of its own.
#[derive(Debug, Clone, Default)]
pub struct StoryPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub summary: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<StoryStatus>,
    pub comment_count: Option<u32>,
    pub like_count: Option<u32>,
    pub media_urls: Option<Vec<String>>,
    pub audio_url: Option<String>,
}

/// Aggregate view over the story registry.
#[derive(Debug, Clone, Serialize)]
pub struct StoryStats {
    pub total_stories: usize,
    pub approved: usize,
    pub pending: usize,
    /// Most frequent topic across all stories, `"N/A"` when the
    /// registry is empty. Ties resolve to the earliest-seen topic.
    pub top_topic: String,
}

/// Computes registry statistics over `stories`.
pub fn story_stats(stories: &[Story]) -> StoryStats {
    let approved = stories
        .iter()
        .filter(|s| s.status == StoryStatus::Approved)
        .count();

    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for story in stories {
        let count = counts.entry(story.topic.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(story.topic.as_str());
        }
        *count += 1;
    }

    let mut top: Option<(&str, usize)> = None;
    for topic in &first_seen {
        let count = counts[*topic];
        if top.map_or(true, |(_, best)| count > best) {
            top = Some((topic, count));
        }
    }
    let top_topic = top
        .map(|(topic, _)| topic.to_string())
        .unwrap_or_else(|| "N/A".to_string());

    StoryStats {
        total_stories: stories.len(),
        approved,
        pending: stories.len() - approved,
        top_topic,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(topic: &str, status: StoryStatus) -> Story {
        Story {
            id: format!("story-{topic}"),
            title: "t".to_string(),
            author_name: "a".to_string(),
            content: "c".to_string(),
            topic: topic.to_string(),
            media_urls: Vec::new(),
            audio_url: None,
            summary: "c".to_string(),
            tags: Vec::new(),
            status,
            comment_count: 0,
            like_count: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn empty_registry_reports_na_topic() {
        let stats = story_stats(&[]);
        assert_eq!(stats.total_stories, 0);
        assert_eq!(stats.top_topic, "N/A");
    }

    #[test]
    fn most_frequent_topic_wins() {
        let stories = vec![
            story("mental_health", StoryStatus::Approved),
            story("academic_stress", StoryStatus::Pending),
            story("academic_stress", StoryStatus::Approved),
        ];
        let stats = story_stats(&stories);
        assert_eq!(stats.top_topic, "academic_stress");
        assert_eq!(stats.approved, 2);
        assert_eq!(stats.pending, 1);
    }

    #[test]
    fn topic_ties_resolve_to_earliest_seen() {
        let stories = vec![
            story("relationships", StoryStatus::Pending),
            story("future_anxiety", StoryStatus::Pending),
        ];
        assert_eq!(story_stats(&stories).top_topic, "relationships");
    }
}
