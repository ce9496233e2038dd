//! Moderation-and-matching core for the Haven peer-support platform.
//!
//! This crate stitches together the decision logic behind story
//! publication and support matching so callers (the HTTP layer in
//! `crates/server`, jobs, tests) can operate over the in-memory catalogs
//! with a single API entry point:
//!
//! - [`moderation`]: content-safety gate. Tries an AI classifier first
//!   and falls back to a deterministic local blocklist scan, always
//!   producing a verdict with provenance.
//! - [`enrich`]: derives a short summary and a small topic-tag set from
//!   submitted story text.
//! - [`catalog`]: immutable seed registries of mentors, support groups,
//!   and informational resources.
//! - [`store`]: the mutable story registry behind the [`store::StoryStore`]
//!   trait, with identifier generation injected for deterministic tests.
//! - [`scoring`] / [`ranking`]: pure relevance scoring and stable
//!   descending ranking with per-call-site result limits.
//! - [`search`]: free-text resource search with filtering and a
//!   deterministic interpretation string.

pub mod catalog;
pub mod enrich;
pub mod moderation;
pub mod ranking;
pub mod scoring;
pub mod search;
pub mod store;
pub mod story;
pub mod text;

pub use catalog::{Catalog, GroupStatus, Mentor, MentorStatus, Resource, ResourceType, SupportGroup};
pub use moderation::{ModerationConfig, ModerationGate, ModerationResult, ModerationSource};
pub use ranking::{rank, Scored, GROUP_LIMIT, MENTOR_LIMIT, RESOURCE_LIMIT, SEARCH_LIMIT};
pub use scoring::{overlap_score, search_score, Relevance};
pub use search::{search_resources, SearchError, SearchFilters, SearchOutcome};
pub use store::{IdGenerator, InMemoryStoryStore, StoryStore, UuidIdGenerator};
pub use story::{story_stats, NewStory, Story, StoryPatch, StoryStats, StoryStatus, TOPICS};
