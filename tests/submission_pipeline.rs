//! End-to-end exercise of the core pipeline: moderate, enrich, store,
//! score, rank. Mirrors what the HTTP layer does per request, without
//! the HTTP layer.

use std::sync::Arc;

use haven::ranking::{rank, Scored, MENTOR_LIMIT};
use haven::scoring::{overlap_score, MATCH_BASE, MATCH_WEIGHT};
use haven::store::SequentialIdGenerator;
use haven::story::{NewStory, StoryStatus};
use haven::{enrich, Catalog, InMemoryStoryStore, ModerationConfig, ModerationGate, StoryStore};

#[tokio::test]
async fn clean_submission_flows_through_to_ranked_matches() {
    let gate = ModerationGate::new(ModerationConfig::default());
    let store = InMemoryStoryStore::with_id_generator(Arc::new(SequentialIdGenerator::default()));
    let catalog = Catalog::seed();

    let content = "I feel so stressed about my grades and my family";
    let verdict = gate.moderate(content).await;
    assert!(verdict.is_clean);

    let story = store.create(NewStory {
        title: "Finals week".to_string(),
        author_name: "Mira".to_string(),
        content: content.to_string(),
        topic: "academic_stress".to_string(),
        media_urls: Vec::new(),
        audio_url: None,
        summary: enrich::summarize(content),
        tags: enrich::infer_tags(content, Some("academic_stress")),
        status: StoryStatus::Pending,
    });
    assert_eq!(story.id, "story-1");
    assert_eq!(story.tags[0], "academic_stress");

    // the story's own tags double as a requester profile
    let scored: Vec<Scored<String>> = catalog
        .matchable_mentors()
        .map(|mentor| {
            let mut item_tags = mentor.expertise.clone();
            item_tags.extend(mentor.interests.iter().cloned());
            let relevance = overlap_score(MATCH_BASE, MATCH_WEIGHT, &story.tags, &item_tags);
            Scored {
                item: mentor.id.clone(),
                score: relevance.score,
                reason: relevance.reason,
            }
        })
        .collect();
    let ranked = rank(scored, MENTOR_LIMIT);

    assert!(!ranked.is_empty() && ranked.len() <= MENTOR_LIMIT);
    // every score respects the additive floor, and ordering is descending
    let mut last = u32::MAX;
    for hit in &ranked {
        assert!(hit.score >= MATCH_BASE);
        assert!(hit.score <= last);
        last = hit.score;
    }
}

#[tokio::test]
async fn flagged_submission_never_reaches_the_store() {
    let gate = ModerationGate::new(ModerationConfig::default());
    let store = InMemoryStoryStore::new();

    let verdict = gate.moderate("this whole year was shit").await;
    assert!(!verdict.is_clean);

    // caller stops at the gate; the registry stays empty
    assert!(store.list().is_empty());
}
