//! Ordered rule evaluation on top of an estimator's polarity.
//!
//! Evaluation order is neutral keywords, then negative keywords, then the
//! polarity thresholds. The keyword sets overlap in practice ("fine" next to
//! "terrible"), so the order decides the label and must not change.

use tonetag_core::SentimentLabel;

use crate::error::SentimentError;
use crate::estimator::PolarityEstimator;
use crate::rules::{find_keyword, NEGATIVE_KEYWORDS, NEUTRAL_KEYWORDS};
use crate::types::{Classification, MatchedRule};

/// Polarity strictly above this is `Positive` when no keyword matched.
pub const POSITIVE_THRESHOLD: f32 = 0.05;
/// Polarity strictly below this is `Negative` when no keyword matched.
pub const NEGATIVE_THRESHOLD: f32 = -0.05;

/// Classifies texts with an injected [`PolarityEstimator`].
#[derive(Debug, Clone)]
pub struct SentimentClassifier<E> {
    estimator: E,
}

impl<E: PolarityEstimator> SentimentClassifier<E> {
    #[must_use]
    pub fn new(estimator: E) -> Self {
        Self { estimator }
    }

    /// Classify one text.
    ///
    /// # Errors
    ///
    /// Returns the estimator's error unchanged, or
    /// [`SentimentError::InvalidPolarity`] if the estimator produced a value
    /// outside `[-1.0, 1.0]`.
    pub fn classify(&self, text: &str) -> Result<Classification, SentimentError> {
        classify_with(&self.estimator, text)
    }

    /// Classify each text independently; one failure does not affect the others.
    #[must_use]
    pub fn classify_batch<S: AsRef<str>>(
        &self,
        texts: &[S],
    ) -> Vec<Result<Classification, SentimentError>> {
        texts
            .iter()
            .map(|text| self.classify(text.as_ref()))
            .collect()
    }
}

/// Classify `text` with a borrowed estimator.
///
/// # Errors
///
/// See [`SentimentClassifier::classify`].
pub fn classify_with<E>(estimator: &E, text: &str) -> Result<Classification, SentimentError>
where
    E: PolarityEstimator + ?Sized,
{
    let polarity = estimator.estimate(text)?;
    if !(-1.0..=1.0).contains(&polarity) {
        return Err(SentimentError::InvalidPolarity(polarity));
    }

    let (label, rule) = apply_rules(text, polarity);
    tracing::debug!(%label, polarity, ?rule, "classified text");

    Ok(Classification {
        label,
        polarity,
        rule,
    })
}

/// Apply the keyword overrides and threshold fallback to a known polarity.
#[must_use]
pub fn apply_rules(text: &str, polarity: f32) -> (SentimentLabel, MatchedRule) {
    let lowered = text.to_lowercase();

    if let Some(keyword) = find_keyword(&lowered, NEUTRAL_KEYWORDS) {
        return (SentimentLabel::Neutral, MatchedRule::NeutralKeyword(keyword));
    }

    if let Some(keyword) = find_keyword(&lowered, NEGATIVE_KEYWORDS) {
        return (
            SentimentLabel::Negative,
            MatchedRule::NegativeKeyword(keyword),
        );
    }

    (threshold_label(polarity), MatchedRule::Threshold)
}

/// Map a polarity to a label using the exclusive `±0.05` bounds.
#[must_use]
pub fn threshold_label(polarity: f32) -> SentimentLabel {
    if polarity > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if polarity < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    }
}

#[cfg(test)]
#[path = "classifier_test.rs"]
mod tests;
