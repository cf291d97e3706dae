use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tonetag_core::{AppConfig, ConfigError, OutputFormat};
use tonetag_sentiment::{LexiconEstimator, PolarityEstimator, SentimentClassifier};
use tracing_subscriber::EnvFilter;

mod output;
mod samples;

use output::ClassifiedText;

#[derive(Debug, Parser)]
#[command(name = "tonetag")]
#[command(about = "Tag short texts as Positive, Negative, or Neutral")]
struct Cli {
    /// Output format (overrides `TONETAG_OUTPUT`)
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a single text
    Classify {
        /// The text to classify
        text: String,
    },
    /// Classify the built-in sample texts
    Samples,
    /// Classify every entry of a YAML file shaped like `texts: [...]`
    Batch {
        /// Path to the texts file
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = tonetag_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let format = resolve_format(cli.format, &config)?;
    tracing::debug!(%format, "starting tonetag");

    let classifier = SentimentClassifier::new(LexiconEstimator);

    match cli.command {
        Commands::Classify { text } => {
            let classification = classifier.classify(&text)?;
            let items = [ClassifiedText::new(&text, classification)];
            emit(format, None, &items)?;
        }
        Commands::Samples => {
            let items = classify_all(&classifier, samples::SAMPLE_TEXTS)?;
            emit(format, Some(samples::SAMPLES_HEADER), &items)?;
        }
        Commands::Batch { path } => {
            let file = tonetag_core::load_texts(&path)?;
            tracing::info!(path = %path.display(), count = file.texts.len(), "loaded texts");
            let items = classify_all(&classifier, &file.texts)?;
            emit(format, None, &items)?;
        }
    }

    Ok(())
}

/// Pick the output format: the `--format` flag wins, otherwise `TONETAG_OUTPUT`.
///
/// The env value is only validated when no flag was given.
fn resolve_format(
    flag: Option<FormatArg>,
    config: &AppConfig,
) -> Result<OutputFormat, ConfigError> {
    match flag {
        Some(arg) => Ok(arg.into()),
        None => config.output_format(),
    }
}

/// Classify every text, logging and skipping the ones that fail.
///
/// # Errors
///
/// Returns an error only if every text failed to classify.
fn classify_all<'a, E, S>(
    classifier: &SentimentClassifier<E>,
    texts: &'a [S],
) -> anyhow::Result<Vec<ClassifiedText<'a>>>
where
    E: PolarityEstimator,
    S: AsRef<str>,
{
    let mut items = Vec::with_capacity(texts.len());
    let mut failed: usize = 0;

    for (text, result) in texts.iter().zip(classifier.classify_batch(texts)) {
        let text: &str = text.as_ref();
        match result {
            Ok(classification) => items.push(ClassifiedText::new(text, classification)),
            Err(e) => {
                failed += 1;
                tracing::warn!(text, error = %e, "classification failed; skipping");
            }
        }
    }

    if !texts.is_empty() && items.is_empty() {
        anyhow::bail!("all {failed} texts failed to classify");
    }

    Ok(items)
}

fn emit(
    format: OutputFormat,
    header: Option<&str>,
    items: &[ClassifiedText<'_>],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => print!("{}", output::render_text(header, items)),
        OutputFormat::Json => println!("{}", output::render_json(items)?),
    }
    Ok(())
}
