use crate::error::SentimentError;

/// A general-purpose polarity source.
///
/// Implementations return a score in `[-1.0, 1.0]`: negative for negative
/// sentiment, positive for positive, `0.0` for neutral. They should be
/// deterministic for a given text.
pub trait PolarityEstimator {
    /// Estimate the polarity of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::Estimator`] when the estimator cannot score the text.
    fn estimate(&self, text: &str) -> Result<f32, SentimentError>;
}

impl<F> PolarityEstimator for F
where
    F: Fn(&str) -> Result<f32, SentimentError>,
{
    fn estimate(&self, text: &str) -> Result<f32, SentimentError> {
        self(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_acts_as_estimator() {
        let fixed = |_: &str| -> Result<f32, SentimentError> { Ok(0.25) };
        assert_eq!(fixed.estimate("anything").unwrap(), 0.25);
    }

    #[test]
    fn boxed_closure_usable_as_trait_object() {
        let estimate = |text: &str| -> Result<f32, SentimentError> {
            if text.is_empty() {
                Err(SentimentError::estimator("empty"))
            } else {
                Ok(-0.5)
            }
        };
        let boxed: Box<dyn PolarityEstimator> = Box::new(estimate);
        assert_eq!(boxed.estimate("x").unwrap(), -0.5);
        assert!(matches!(
            boxed.estimate(""),
            Err(SentimentError::Estimator(_))
        ));
    }
}
