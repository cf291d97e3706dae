use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for env var {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read texts file {path}: {source}")]
    TextsFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse texts file: {0}")]
    TextsFileParse(#[from] serde_yaml::Error),

    #[error("texts file validation failed: {0}")]
    Validation(String),
}
