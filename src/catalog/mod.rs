//! Immutable in-memory catalogs of mentors, support groups, and
//! informational resources.
//!
//! The catalogs are seeded once at startup ([`Catalog::seed`]) and are
//! read-only for the life of the process. Matching only considers
//! `active` mentors and `open` groups; a group at capacity stays
//! matchable (capacity flagging happens downstream).

pub mod seed;

use serde::{Deserialize, Serialize};

/// Kind of informational resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Article,
    Guide,
    Tool,
    Video,
    Worksheet,
}

/// An entry in the read-only resource catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub difficulty: String,
    pub read_time_minutes: u32,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MentorStatus {
    Active,
    Inactive,
}

/// A volunteer mentor. Only `active` mentors are matchable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mentor {
    pub id: String,
    pub name: String,
    pub age: u32,
    pub status: MentorStatus,
    pub expertise: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub availability: String,
    pub bio: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupStatus {
    Open,
    Closed,
}

/// A peer support group. Only `open` groups are matchable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SupportGroup {
    pub id: String,
    pub name: String,
    pub status: GroupStatus,
    pub focus_areas: Vec<String>,
    pub age_range: String,
    pub meeting_schedule: String,
    pub meeting_format: String,
    pub current_members: u32,
    pub max_members: u32,
    pub description: String,
}

/// Process-lifetime registry of the three read-only catalogs.
#[derive(Debug, Clone)]
pub struct Catalog {
    mentors: Vec<Mentor>,
    support_groups: Vec<SupportGroup>,
    resources: Vec<Resource>,
}

impl Catalog {
    /// Builds the seeded production catalog.
    pub fn seed() -> Self {
        Self {
            mentors: seed::mentors(),
            support_groups: seed::support_groups(),
            resources: seed::resources(),
        }
    }

    /// Builds a catalog from explicit entries, for tests and fixtures.
    pub fn new(
        mentors: Vec<Mentor>,
        support_groups: Vec<SupportGroup>,
        resources: Vec<Resource>,
    ) -> Self {
        Self {
            mentors,
            support_groups,
            resources,
        }
    }

    pub fn mentors(&self) -> &[Mentor] {
        &self.mentors
    }

    pub fn support_groups(&self) -> &[SupportGroup] {
        &self.support_groups
    }

    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    /// Mentors eligible for matching, in catalog order.
    pub fn matchable_mentors(&self) -> impl Iterator<Item = &Mentor> {
        self.mentors
            .iter()
            .filter(|m| m.status == MentorStatus::Active)
    }

    /// Groups eligible for matching, in catalog order.
    pub fn open_groups(&self) -> impl Iterator<Item = &SupportGroup> {
        self.support_groups
            .iter()
            .filter(|g| g.status == GroupStatus::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_catalog_is_nonempty() {
        let catalog = Catalog::seed();
        assert!(!catalog.mentors().is_empty());
        assert!(!catalog.support_groups().is_empty());
        assert!(!catalog.resources().is_empty());
    }

    #[test]
    fn inactive_mentors_and_closed_groups_are_not_matchable() {
        let catalog = Catalog::seed();
        assert!(catalog
            .matchable_mentors()
            .all(|m| m.status == MentorStatus::Active));
        assert!(catalog.open_groups().all(|g| g.status == GroupStatus::Open));
        // the seed deliberately includes both kinds
        assert!(catalog.matchable_mentors().count() < catalog.mentors().len());
        assert!(catalog.open_groups().count() < catalog.support_groups().len());
    }
}
