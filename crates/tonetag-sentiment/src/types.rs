use serde::Serialize;
use tonetag_core::SentimentLabel;

/// Which step of the ordered evaluation decided the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "keyword", rename_all = "snake_case")]
pub enum MatchedRule {
    /// A neutral-indicator keyword occurred in the text.
    NeutralKeyword(&'static str),
    /// A negative-indicator keyword occurred and no neutral one did.
    NegativeKeyword(&'static str),
    /// No keyword matched; the label comes from the polarity thresholds.
    Threshold,
}

/// Result of classifying one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Classification {
    pub label: SentimentLabel,
    /// Raw estimator output, never adjusted by rule application.
    pub polarity: f32,
    pub rule: MatchedRule,
}
