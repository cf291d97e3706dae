use crate::ConfigError;

/// How classification results are rendered by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ConfigError::InvalidEnvVar {
                var: "TONETAG_OUTPUT".to_string(),
                reason: format!("expected 'text' or 'json', got '{other}'"),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub log_level: String,
    /// Raw `TONETAG_OUTPUT` value. Resolved lazily so a command-line format
    /// flag can take over before it is ever validated.
    pub output: String,
}

impl AppConfig {
    /// Parse the configured output format.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvVar` if `TONETAG_OUTPUT` is neither `text` nor `json`.
    pub fn output_format(&self) -> Result<OutputFormat, ConfigError> {
        self.output.parse()
    }
}
