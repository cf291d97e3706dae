//! Shared types and configuration for tonetag.

mod app_config;
mod config;
mod error;
mod label;
mod texts;

pub use app_config::{AppConfig, OutputFormat};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::ConfigError;
pub use label::SentimentLabel;
pub use texts::{load_texts, TextsFile};
