//! General-purpose word-weight lexicon used as the default polarity estimator.

use crate::error::SentimentError;
use crate::estimator::PolarityEstimator;

/// General English word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative.
pub(crate) const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("amazing", 0.6),
    ("awesome", 0.8),
    ("beautiful", 0.85),
    ("best", 1.0),
    ("better", 0.5),
    ("brilliant", 0.9),
    ("delicious", 0.7),
    ("enjoy", 0.4),
    ("enjoyed", 0.4),
    ("excellent", 1.0),
    ("fantastic", 0.4),
    ("favorite", 0.5),
    ("fun", 0.3),
    ("glad", 0.5),
    ("good", 0.7),
    ("grateful", 0.5),
    ("great", 0.8),
    ("happy", 0.8),
    ("incredible", 0.9),
    ("interesting", 0.5),
    ("like", 0.2),
    ("love", 0.5),
    ("loved", 0.7),
    ("nice", 0.6),
    ("perfect", 1.0),
    ("pleasant", 0.7),
    ("positive", 0.23),
    ("recommend", 0.4),
    ("wonderful", 1.0),
    // Negative signals
    ("angry", -0.5),
    ("annoying", -0.8),
    ("awful", -1.0),
    ("bad", -0.7),
    ("boring", -1.0),
    ("broke", -0.4),
    ("broken", -0.4),
    ("disappointed", -0.75),
    ("disappointing", -0.6),
    ("frustrating", -0.4),
    ("horrible", -1.0),
    ("poor", -0.4),
    ("regret", -0.5),
    ("rude", -0.3),
    ("sad", -0.5),
    ("slow", -0.3),
    ("terrible", -1.0),
    ("ugly", -0.7),
    ("uncomfortable", -0.5),
    ("unhappy", -0.6),
    ("useless", -0.5),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wrong", -0.5),
];

/// Words that amplify the weight of the word right after them.
const INTENSIFIERS: &[&str] = &[
    "very",
    "so",
    "really",
    "absolutely",
    "extremely",
    "incredibly",
    "too",
];

/// Words that flip and soften a weighted word up to two positions later.
const NEGATORS: &[&str] = &[
    "not", "no", "never", "don't", "doesn't", "didn't", "isn't", "wasn't", "aren't", "won't",
    "can't", "couldn't",
];

const INTENSIFIER_FACTOR: f32 = 1.3;
const NEGATION_FACTOR: f32 = -0.5;
const NEGATION_WINDOW: usize = 2;

/// Score a text string using the general lexicon.
///
/// Splits text into lowercase words, applies intensifier and negation
/// modifiers, averages the matching weights, and clamps the result to
/// `[-1.0, 1.0]`. Returns `0.0` for empty or unknown text.
#[must_use]
pub fn lexicon_score(text: &str) -> f32 {
    let words: Vec<String> = text
        .split_whitespace()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect();

    let mut total = 0.0_f32;
    let mut hits = 0_usize;

    for (i, word) in words.iter().enumerate() {
        let Some(mut weight) = lookup(word) else {
            continue;
        };

        if i > 0 && INTENSIFIERS.contains(&words[i - 1].as_str()) {
            weight *= INTENSIFIER_FACTOR;
        }

        let window = &words[i.saturating_sub(NEGATION_WINDOW)..i];
        if window.iter().any(|w| NEGATORS.contains(&w.as_str())) {
            weight *= NEGATION_FACTOR;
        }

        total += weight;
        hits += 1;
    }

    if hits == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let denom = hits as f32;
    (total / denom).clamp(-1.0, 1.0)
}

fn normalize_word(word: &str) -> String {
    word.replace('\u{2019}', "'")
        .trim_matches(|c: char| !c.is_alphabetic())
        .to_lowercase()
}

fn lookup(word: &str) -> Option<f32> {
    LEXICON
        .iter()
        .find(|(lex_word, _)| *lex_word == word)
        .map(|&(_, weight)| weight)
}

/// [`PolarityEstimator`] backed by [`lexicon_score`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconEstimator;

impl PolarityEstimator for LexiconEstimator {
    fn estimate(&self, text: &str) -> Result<f32, SentimentError> {
        Ok(lexicon_score(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(lexicon_score(""), 0.0);
    }

    #[test]
    fn whitespace_only_returns_zero() {
        assert_eq!(lexicon_score("   "), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(lexicon_score("the quick brown fox"), 0.0);
    }

    #[test]
    fn positive_keyword_returns_positive() {
        let score = lexicon_score("this product is great");
        assert!(score > 0.0, "expected positive score, got {score}");
    }

    #[test]
    fn negative_keyword_returns_negative() {
        let score = lexicon_score("the service was terrible");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn score_is_mean_of_hits() {
        // good (0.7) + bad (-0.7) averages to zero
        let score = lexicon_score("good start, bad ending");
        assert!(score.abs() < 1e-6, "expected ~0.0, got {score}");
    }

    #[test]
    fn negation_flips_and_softens() {
        let plain = lexicon_score("good");
        let negated = lexicon_score("not good");
        assert!(negated < 0.0, "expected negative score, got {negated}");
        assert!(negated.abs() < plain, "negation should soften the weight");
    }

    #[test]
    fn negation_reaches_two_words_back() {
        let score = lexicon_score("it's not very good");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn negation_with_curly_apostrophe() {
        let score = lexicon_score("I don\u{2019}t like it");
        assert!(score < 0.0, "expected negative score, got {score}");
    }

    #[test]
    fn intensifier_amplifies() {
        assert!(lexicon_score("very good") > lexicon_score("good"));
    }

    #[test]
    fn score_clamps_to_positive_one() {
        let score = lexicon_score("absolutely perfect");
        assert_eq!(score, 1.0, "expected score clamped to 1.0, got {score}");
    }

    #[test]
    fn score_clamps_to_negative_one() {
        let score = lexicon_score("extremely awful");
        assert_eq!(score, -1.0, "expected score clamped to -1.0, got {score}");
    }

    #[test]
    fn punctuation_stripped_from_words() {
        let score = lexicon_score("great!");
        assert!(
            score > 0.0,
            "expected positive score for 'great!', got {score}"
        );
    }

    #[test]
    fn estimator_is_deterministic() {
        let text = "I absolutely love this product! It exceeded all my expectations.";
        let first = LexiconEstimator.estimate(text).unwrap();
        let second = LexiconEstimator.estimate(text).unwrap();
        assert_eq!(first, second);
        assert!(first > 0.05, "expected positive polarity, got {first}");
    }
}
