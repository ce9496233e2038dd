//! Pure relevance scoring between a requester profile and catalog items.
//!
//! Two variants share the module:
//!
//! - the additive overlap score used for mentor/group matching and
//!   resource personalization (`BASE + overlap * WEIGHT`), and
//! - the binary-tiered search score (substring hit in the item's
//!   searchable text or not).
//!
//! Everything here is deterministic: same inputs, same score and reason.

/// Base score for mentor and support-group matching.
pub const MATCH_BASE: u32 = 65;
/// Per-shared-tag weight for mentor and support-group matching.
pub const MATCH_WEIGHT: u32 = 10;

/// Base score for resource personalization.
pub const PERSONALIZE_BASE: u32 = 60;
/// Per-shared-tag weight for resource personalization.
pub const PERSONALIZE_WEIGHT: u32 = 15;

/// Search score when the query appears in the item's searchable text.
pub const SEARCH_HIT: u32 = 90;
/// Search score when it does not.
pub const SEARCH_MISS: u32 = 55;

/// A computed score plus its human-readable justification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relevance {
    pub score: u32,
    pub reason: String,
}

/// Additive overlap score: `base + |requester ∩ item| * weight`.
/// Overlap is exact set intersection, no partial or fuzzy credit.
/// The reason names the shared tags when there are any.
pub fn overlap_score(base: u32, weight: u32, requester: &[String], item: &[String]) -> Relevance {
    let mut shared: Vec<&str> = Vec::new();
    for tag in requester {
        if item.iter().any(|t| t == tag) && !shared.contains(&tag.as_str()) {
            shared.push(tag);
        }
    }

    let score = base + shared.len() as u32 * weight;
    let reason = if shared.is_empty() {
        "A broadly relevant match for your profile".to_string()
    } else {
        format!("Matches your focus on {}", shared.join(", "))
    };
    Relevance { score, reason }
}

/// Binary-tiered search score. `haystack` must already contain the
/// item's searchable text; matching is a case-folded substring test.
pub fn search_score(query: &str, haystack: &str) -> Relevance {
    let hit = haystack.to_lowercase().contains(&query.to_lowercase());
    if hit {
        Relevance {
            score: SEARCH_HIT,
            reason: format!("Directly mentions \"{query}\""),
        }
    } else {
        Relevance {
            score: SEARCH_MISS,
            reason: "Related to your search".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn score_is_base_plus_overlap_times_weight() {
        let requester = tags(&["academic_stress"]);
        let strong = overlap_score(
            MATCH_BASE,
            MATCH_WEIGHT,
            &requester,
            &tags(&["academic_stress", "family_pressures"]),
        );
        let weak = overlap_score(
            MATCH_BASE,
            MATCH_WEIGHT,
            &requester,
            &tags(&["cultural_identity"]),
        );
        assert_eq!(strong.score, 75);
        assert_eq!(weak.score, 65);
    }

    #[test]
    fn score_is_strictly_monotonic_in_overlap() {
        let item = tags(&["a", "b", "c"]);
        let mut previous = None;
        for requester in [
            tags(&[]),
            tags(&["a"]),
            tags(&["a", "b"]),
            tags(&["a", "b", "c"]),
        ] {
            let score = overlap_score(PERSONALIZE_BASE, PERSONALIZE_WEIGHT, &requester, &item).score;
            if let Some(prev) = previous {
                assert!(score > prev);
            }
            previous = Some(score);
        }
    }

    #[test]
    fn duplicate_requester_tags_count_once() {
        let rel = overlap_score(
            MATCH_BASE,
            MATCH_WEIGHT,
            &tags(&["a", "a"]),
            &tags(&["a"]),
        );
        assert_eq!(rel.score, MATCH_BASE + MATCH_WEIGHT);
    }

    #[test]
    fn reason_names_shared_tags_or_falls_back() {
        let requester = tags(&["mental_health"]);
        let hit = overlap_score(MATCH_BASE, MATCH_WEIGHT, &requester, &tags(&["mental_health"]));
        assert!(hit.reason.contains("mental_health"));
        let miss = overlap_score(MATCH_BASE, MATCH_WEIGHT, &requester, &tags(&["other"]));
        assert_eq!(miss.reason, "A broadly relevant match for your profile");
    }

    #[test]
    fn search_score_is_tiered_on_literal_substring() {
        let haystack = "recognizing burnout early mental_health school_pressure \
                        what it looks like and how to reduce burnout";
        assert_eq!(search_score("stress", haystack).score, SEARCH_MISS);
        assert_eq!(search_score("burnout", haystack).score, SEARCH_HIT);
        assert_eq!(search_score("BURNOUT", haystack).score, SEARCH_HIT);
    }
}
