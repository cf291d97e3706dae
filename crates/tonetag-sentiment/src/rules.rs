//! Static keyword rule sets.

/// Substrings that force a `Neutral` label. Checked before [`NEGATIVE_KEYWORDS`].
pub const NEUTRAL_KEYWORDS: &[&str] = &["okay", "nothing special", "average", "alright", "fine"];

/// Substrings that force a `Negative` label when no neutral keyword is present.
pub const NEGATIVE_KEYWORDS: &[&str] = &[
    "can't stand",
    "too hot",
    "uncomfortable",
    "hate",
    "terrible",
    "worst",
    "disappointed",
];

/// Return the first keyword of `set` (in set order) that occurs in `lowered`.
///
/// Plain substring search: no word boundaries, so `"fine"` also matches inside
/// `"refined"`. Callers pass already lower-cased text.
#[must_use]
pub fn find_keyword(lowered: &str, set: &'static [&'static str]) -> Option<&'static str> {
    set.iter().copied().find(|keyword| lowered.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_sets_are_lowercase() {
        for keyword in NEUTRAL_KEYWORDS.iter().chain(NEGATIVE_KEYWORDS) {
            assert_eq!(*keyword, keyword.to_lowercase());
        }
    }

    #[test]
    fn finds_multi_word_keyword() {
        assert_eq!(
            find_keyword("it's okay, but nothing special.", NEUTRAL_KEYWORDS),
            Some("okay")
        );
        assert_eq!(
            find_keyword("i can't stand it", NEGATIVE_KEYWORDS),
            Some("can't stand")
        );
    }

    #[test]
    fn returns_first_keyword_in_set_order() {
        // "too hot" precedes "uncomfortable" in the set even though it appears later in the text.
        assert_eq!(
            find_keyword("uncomfortable and too hot", NEGATIVE_KEYWORDS),
            Some("too hot")
        );
    }

    #[test]
    fn matches_inside_larger_words() {
        assert_eq!(find_keyword("a refined taste", NEUTRAL_KEYWORDS), Some("fine"));
        assert_eq!(find_keyword("whatever", NEGATIVE_KEYWORDS), Some("hate"));
        assert_eq!(find_keyword("a calm day", NEGATIVE_KEYWORDS), None);
    }

    #[test]
    fn no_match_on_empty_text() {
        assert_eq!(find_keyword("", NEUTRAL_KEYWORDS), None);
        assert_eq!(find_keyword("", NEGATIVE_KEYWORDS), None);
    }
}
