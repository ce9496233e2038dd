//! Stable descending ranking with per-call-site result limits.

use serde::Serialize;

/// Result-size limit for mentor matching.
pub const MENTOR_LIMIT: usize = 3;
/// Result-size limit for support-group matching.
pub const GROUP_LIMIT: usize = 3;
/// Result-size limit for resource personalization.
pub const RESOURCE_LIMIT: usize = 10;
/// Result-size limit for resource search.
pub const SEARCH_LIMIT: usize = 10;

/// A catalog item carrying its computed relevance. Serializes the item's
/// own fields inline plus `match_score` and `match_reason`.
#[derive(Debug, Clone, Serialize)]
pub struct Scored<T> {
    #[serde(flatten)]
    pub item: T,
    #[serde(rename = "match_score")]
    pub score: u32,
    #[serde(rename = "match_reason")]
    pub reason: String,
}

/// Sorts descending by score and truncates to `limit`. The sort is
/// stable: equal scores retain their original catalog order.
pub fn rank<T>(mut scored: Vec<Scored<T>>, limit: usize) -> Vec<Scored<T>> {
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(name: &str, score: u32) -> Scored<String> {
        Scored {
            item: name.to_string(),
            score,
            reason: String::new(),
        }
    }

    #[test]
    fn sorts_descending_and_truncates() {
        let ranked = rank(vec![scored("low", 55), scored("high", 90), scored("mid", 70)], 2);
        let names: Vec<&str> = ranked.iter().map(|s| s.item.as_str()).collect();
        assert_eq!(names, vec!["high", "mid"]);
    }

    #[test]
    fn equal_scores_keep_catalog_order() {
        let ranked = rank(
            vec![
                scored("first", 65),
                scored("second", 65),
                scored("third", 75),
                scored("fourth", 65),
            ],
            10,
        );
        let names: Vec<&str> = ranked.iter().map(|s| s.item.as_str()).collect();
        assert_eq!(names, vec!["third", "first", "second", "fourth"]);
    }

    #[test]
    fn limit_larger_than_input_is_harmless() {
        assert_eq!(rank(vec![scored("only", 60)], 10).len(), 1);
        assert!(rank(Vec::<Scored<String>>::new(), 3).is_empty());
    }
}
