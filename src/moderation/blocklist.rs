//! Deterministic local blocklist scanner.
//!
//! The fallback path of the moderation gate. Entries are matched against
//! the normalized text with whole-word boundaries so that a term embedded
//! in an unrelated longer token ("hello", "bassist") never trips the
//! scanner. Multi-word entries are supported; they match the same way on
//! the space-collapsed text.

use crate::text::normalize_for_match;

/// Fixed list of terms that always block publication. Entries must be in
/// normalized form (lowercase, single spaces).
const BLOCKLIST: &[&str] = &[
    "fuck",
    "shit",
    "bitch",
    "asshole",
    "bastard",
    "cunt",
    "whore",
    "slut",
    "dumbass",
    "ass",
    "hell",
    "kill yourself",
    "kys",
];

/// Scans `text` for blocklisted terms. Returns the first matching entry,
/// or `None` when the text is clean. Empty input never matches.
pub fn scan(text: &str) -> Option<&'static str> {
    let padded = format!(" {} ", normalize_for_match(text));
    BLOCKLIST
        .iter()
        .find(|term| padded.contains(&format!(" {term} ")))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_whole_words_any_case() {
        assert_eq!(scan("what the HELL is this"), Some("hell"));
        assert_eq!(scan("Shit happens."), Some("shit"));
    }

    #[test]
    fn ignores_terms_inside_longer_tokens() {
        assert_eq!(scan("hello there"), None);
        assert_eq!(scan("the bassist played a classic"), None);
        assert_eq!(scan("mishits and shellfish"), None);
    }

    #[test]
    fn punctuation_does_not_hide_a_term() {
        assert_eq!(scan("what the h-e... hell!?"), Some("hell"));
    }

    #[test]
    fn matches_multi_word_entries() {
        assert_eq!(scan("just go Kill   Yourself"), Some("kill yourself"));
        assert_eq!(scan("a killer yourself quiz"), None);
    }

    #[test]
    fn empty_text_is_clean() {
        assert_eq!(scan(""), None);
        assert_eq!(scan("   "), None);
    }
}
