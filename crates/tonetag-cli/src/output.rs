//! Rendering of classification results.

use std::fmt::Write as _;

use serde::Serialize;
use tonetag_core::SentimentLabel;
use tonetag_sentiment::{Classification, MatchedRule};

/// One input text together with its classification.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ClassifiedText<'a> {
    pub text: &'a str,
    pub label: SentimentLabel,
    pub polarity: f32,
    pub rule: MatchedRule,
}

impl<'a> ClassifiedText<'a> {
    pub(crate) fn new(text: &'a str, classification: Classification) -> Self {
        Self {
            text,
            label: classification.label,
            polarity: classification.polarity,
            rule: classification.rule,
        }
    }
}

/// Human-readable listing, one block per text.
pub(crate) fn render_text(header: Option<&str>, items: &[ClassifiedText<'_>]) -> String {
    let mut out = String::new();
    if let Some(header) = header {
        let _ = writeln!(out, "{header}\n");
    }
    for item in items {
        let _ = writeln!(out, "Text: {}", item.text);
        let _ = writeln!(
            out,
            "Sentiment: {} (Polarity: {:?})\n",
            item.label, item.polarity
        );
    }
    out
}

/// Pretty-printed JSON array of results.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub(crate) fn render_json(items: &[ClassifiedText<'_>]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(items)
}
