//! Rule-assisted sentiment classification for tonetag.
//!
//! A [`PolarityEstimator`] scores text in `[-1.0, 1.0]`; the
//! [`SentimentClassifier`] then applies keyword overrides (neutral first,
//! then negative) before falling back to polarity thresholds.

pub mod classifier;
pub mod error;
pub mod estimator;
pub mod lexicon;
pub mod rules;
pub mod types;

pub use classifier::{apply_rules, classify_with, threshold_label, SentimentClassifier};
pub use error::SentimentError;
pub use estimator::PolarityEstimator;
pub use lexicon::{lexicon_score, LexiconEstimator};
pub use rules::{find_keyword, NEGATIVE_KEYWORDS, NEUTRAL_KEYWORDS};
pub use tonetag_core::SentimentLabel;
pub use types::{Classification, MatchedRule};
