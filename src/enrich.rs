//! Story enrichment: summary derivation and lightweight tag inference.

/// Longest summary we ever store, in visible characters including the
/// ellipsis marker.
pub const SUMMARY_MAX_CHARS: usize = 180;

/// Characters kept from the original text when truncating.
const SUMMARY_KEEP_CHARS: usize = 177;

/// Upper bound on inferred tags per story.
pub const MAX_TAGS: usize = 5;

/// Keyword rules applied in order: any listed needle present in the
/// case-folded text adds the tag.
const KEYWORD_TAGS: &[(&[&str], &str)] = &[
    (&["family"], "family_expectations"),
    (&["school", "grade"], "school_pressure"),
    (&["identity"], "identity"),
    (&["stress", "anx"], "mental_health"),
];

/// Returns `text` unchanged when it is at most [`SUMMARY_MAX_CHARS`]
/// characters, otherwise the first 177 characters followed by `"..."`.
/// Counts are in `char`s so multi-byte text never splits mid-character.
pub fn summarize(text: &str) -> String {
    if text.chars().count() > SUMMARY_MAX_CHARS {
        let mut summary: String = text.chars().take(SUMMARY_KEEP_CHARS).collect();
        summary.push_str("...");
        summary
    } else {
        text.to_string()
    }
}

/// Derives up to [`MAX_TAGS`] topic tags from `text`. The topic code, if
/// supplied, is seeded first; keyword-detected tags follow in rule
/// order. Insertion order is preserved and duplicates are impossible.
pub fn infer_tags(text: &str, topic: Option<&str>) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut tags: Vec<String> = Vec::new();

    if let Some(topic) = topic {
        push_unique(&mut tags, topic);
    }
    for (needles, tag) in KEYWORD_TAGS {
        if needles.iter().any(|needle| lowered.contains(needle)) {
            push_unique(&mut tags, tag);
        }
    }
    tags
}

fn push_unique(tags: &mut Vec<String>, tag: &str) {
    if tags.len() < MAX_TAGS && !tags.iter().any(|existing| existing == tag) {
        tags.push(tag.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_passes_through() {
        assert_eq!(summarize("a short story"), "a short story");
    }

    #[test]
    fn exactly_180_chars_is_not_truncated() {
        let text = "x".repeat(180);
        assert_eq!(summarize(&text), text);
    }

    #[test]
    fn long_text_truncates_to_exactly_180() {
        let text = "y".repeat(400);
        let summary = summarize(&text);
        assert_eq!(summary.chars().count(), 180);
        assert!(summary.ends_with("..."));
        assert_eq!(&summary[..177], &text[..177]);
    }

    #[test]
    fn summarize_is_idempotent() {
        let long = "z".repeat(500);
        for text in ["short", &long] {
            let once = summarize(text);
            assert_eq!(summarize(&once), once);
        }
    }

    #[test]
    fn counts_chars_not_bytes() {
        let text = "é".repeat(200);
        let summary = summarize(&text);
        assert_eq!(summary.chars().count(), 180);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn topic_seeds_first_then_keyword_tags() {
        let tags = infer_tags(
            "I feel so stressed about my grades and my family",
            Some("academic_stress"),
        );
        assert_eq!(
            tags,
            vec![
                "academic_stress",
                "family_expectations",
                "school_pressure",
                "mental_health",
            ]
        );
    }

    #[test]
    fn never_more_than_five_tags_and_no_duplicates() {
        let tags = infer_tags(
            "family school identity stress anxiety grades",
            Some("mental_health"),
        );
        assert!(tags.len() <= MAX_TAGS);
        let mut deduped = tags.clone();
        deduped.dedup();
        assert_eq!(deduped, tags);
        // topic duplicates a keyword tag: set semantics keep one copy
        assert_eq!(
            tags.iter().filter(|t| *t == "mental_health").count(),
            1
        );
    }

    #[test]
    fn anx_prefix_detects_anxiety() {
        assert_eq!(infer_tags("so anxious lately", None), vec!["mental_health"]);
    }

    #[test]
    fn no_signals_yields_no_tags() {
        assert!(infer_tags("a quiet afternoon walk", None).is_empty());
    }
}
