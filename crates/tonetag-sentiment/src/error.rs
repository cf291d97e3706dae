use thiserror::Error;

#[derive(Debug, Error)]
pub enum SentimentError {
    #[error("polarity estimator failed: {0}")]
    Estimator(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("polarity estimator returned {0}, expected a value in [-1.0, 1.0]")]
    InvalidPolarity(f32),
}

impl SentimentError {
    /// Wrap any estimator-side failure.
    #[must_use]
    pub fn estimator<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Self::Estimator(err.into())
    }
}
