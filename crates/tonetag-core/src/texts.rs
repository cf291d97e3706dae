use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// A YAML file holding the texts to classify in one batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextsFile {
    pub texts: Vec<String>,
}

/// Load and validate a texts file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or holds no texts.
pub fn load_texts(path: &Path) -> Result<TextsFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::TextsFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_texts(&content)
}

fn parse_texts(content: &str) -> Result<TextsFile, ConfigError> {
    let texts_file: TextsFile = serde_yaml::from_str(content)?;

    if texts_file.texts.is_empty() {
        return Err(ConfigError::Validation(
            "texts list must contain at least one entry".to_string(),
        ));
    }

    Ok(texts_file)
}
