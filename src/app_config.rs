use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use url::Url;

use crate::errors::AppError;

/// Settings for one docproof run, stored as JSON (`conf.json` by default)
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory holding the article to process; the first `.docx` found is used
    #[serde(default = "default_input_dir")]
    pub input_dir: PathBuf,

    /// Path of the generated report, overwritten on every run
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,

    /// Maximum chunk length in characters
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Completion service config
    #[serde(default)]
    pub completion: CompletionConfig,

    /// Editorial pipeline config
    #[serde(default)]
    pub editorial: EditorialConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Completion service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CompletionConfig {
    // @field: Model (engine) identifier
    #[serde(default = "default_model")]
    pub model: String,

    // @field: API key
    #[serde(default = "String::new")]
    pub api_key: String,

    // @field: Service URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Sampling temperature, 0.0 to 2.0
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    // @field: Max output tokens per completion
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    // @field: Number of candidates requested
    #[serde(default = "default_candidate_count")]
    pub n: u32,

    // @field: Optional stop sequences
    #[serde(default)]
    pub stop: Option<Vec<String>>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: String::new(),
            endpoint: default_endpoint(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            n: default_candidate_count(),
            stop: None,
        }
    }
}

/// Editorial pipeline settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EditorialConfig {
    /// Generate a short heading for every chunk and prepend it before proofreading
    #[serde(default)]
    pub generate_headings: bool,

    /// Closed vocabulary for tags-from-list; free-form tags are told to avoid it
    #[serde(default = "default_tag_vocabulary")]
    pub tag_vocabulary: Vec<String>,

    /// Total soft summary length, divided between chunks
    #[serde(default = "default_summary_budget_chars")]
    pub summary_budget_chars: usize,

    /// How much of the running summary feeds the document-level prompts
    #[serde(default = "default_summary_excerpt_chars")]
    pub summary_excerpt_chars: usize,
}

impl Default for EditorialConfig {
    fn default() -> Self {
        Self {
            generate_headings: false,
            tag_vocabulary: default_tag_vocabulary(),
            summary_budget_chars: default_summary_budget_chars(),
            summary_excerpt_chars: default_summary_excerpt_chars(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

fn default_input_dir() -> PathBuf {
    PathBuf::from("article")
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output/output.docx")
}

fn default_chunk_size() -> usize {
    4000
}

fn default_model() -> String {
    "gpt-3.5-turbo-instruct".to_string()
}

fn default_endpoint() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_temperature() -> f32 {
    0.5
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_candidate_count() -> u32 {
    1
}

fn default_summary_budget_chars() -> usize {
    10000
}

fn default_summary_excerpt_chars() -> usize {
    5000
}

fn default_tag_vocabulary() -> Vec<String> {
    [
        "stosunki międzynarodowe",
        "gospodarka",
        "społeczeństwo",
        "historia",
        "kultura",
        "Kościół",
        "idee",
    ]
    .iter()
    .map(|tag| tag.to_string())
    .collect()
}

impl Config {
    /// Read a JSON config; fields missing from the file take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Cannot open config {:?}", path))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid JSON in config {:?}", path))
    }

    /// Write the config as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).context("Cannot serialize config")?;
        std::fs::write(path, json).with_context(|| format!("Cannot write config {:?}", path))
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> std::result::Result<(), AppError> {
        if self.chunk_size == 0 {
            return Err(AppError::Config("chunk_size must be greater than zero".to_string()));
        }

        self.completion.validate()?;

        if self.editorial.tag_vocabulary.is_empty() {
            return Err(AppError::Config("tag_vocabulary must contain at least one tag".to_string()));
        }

        Ok(())
    }
}

impl CompletionConfig {
    /// Validate the completion settings
    pub fn validate(&self) -> std::result::Result<(), AppError> {
        if self.model.trim().is_empty() {
            return Err(AppError::Config("Completion model must not be empty".to_string()));
        }

        if self.api_key.is_empty() {
            return Err(AppError::Config(
                "API key is required (config, --api-key or OPENAI_API_KEY)".to_string(),
            ));
        }

        let url = Url::parse(&self.endpoint)
            .map_err(|e| AppError::Config(format!("Invalid endpoint '{}': {}", self.endpoint, e)))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(AppError::Config(format!("Unsupported endpoint scheme: {}", url.scheme())));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(AppError::Config(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            )));
        }

        if self.max_tokens == 0 {
            return Err(AppError::Config("max_tokens must be greater than zero".to_string()));
        }

        if self.n == 0 {
            return Err(AppError::Config("n must be at least 1".to_string()));
        }

        Ok(())
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            input_dir: default_input_dir(),
            output_path: default_output_path(),
            chunk_size: default_chunk_size(),
            completion: CompletionConfig::default(),
            editorial: EditorialConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}
