//! Text normalization for safe matching.

/// Case-folds `input` and replaces every character outside `[a-z0-9]`
/// with a space, collapsing whitespace runs and trimming the ends.
///
/// Blocklist scanning and any other token-level matching goes through
/// this so that punctuation, casing, and exotic separators cannot hide
/// or fabricate a match.
pub fn normalize_for_match(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;
    for ch in input.chars() {
        let ch = ch.to_ascii_lowercase();
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            out.push(ch);
            pending_space = false;
        } else {
            pending_space = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(normalize_for_match("Hello, World!"), "hello world");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(normalize_for_match("a\t\t b\n\nc"), "a b c");
    }

    #[test]
    fn drops_non_ascii_letters() {
        assert_eq!(normalize_for_match("café-3"), "caf 3");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_for_match(""), "");
        assert_eq!(normalize_for_match("!!!"), "");
    }
}
