use anyhow::{Context, Result};
use log::{info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::document::{DocumentReader, DocumentWriter};
use crate::document_processor::DocumentProcessor;
use crate::file_utils::FileManager;
use crate::proofreading::{Editor, OutputRecord, Proofreader};
use crate::providers::openai::OpenAI;
use crate::providers::{CompletionParameters, Provider};

// @module: Application controller for article proofreading

/// Main application controller: one article in, one report out
pub struct Controller<P: Provider> {
    // @field: App configuration
    config: Config,
    // @field: Editorial pipeline
    proofreader: Proofreader<P>,
}

impl Controller<OpenAI> {
    // @method: Create a controller talking to the configured OpenAI endpoint
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate().context("Configuration validation failed")?;
        let provider = OpenAI::new(config.completion.api_key.clone(), config.completion.endpoint.clone());
        Ok(Self::with_provider(config, provider))
    }
}

impl<P: Provider> Controller<P> {
    // @method: Create a controller around any provider
    pub fn with_provider(config: Config, provider: P) -> Self {
        let editor = Editor::new(provider, CompletionParameters::from(&config.completion));
        let proofreader = Proofreader::new(editor, config.editorial.clone());
        Self { config, proofreader }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn proofreader(&self) -> &Proofreader<P> {
        &self.proofreader
    }

    /// Process the first `.docx` in the configured input directory
    pub async fn run(&self) -> Result<PathBuf> {
        let input_file = FileManager::first_docx(&self.config.input_dir)
            .context("Failed to locate the input article")?;
        info!("Input article: {:?}", input_file);
        self.run_file(&input_file).await?;
        Ok(self.config.output_path.clone())
    }

    /// Read, chunk, proofread and write one article.
    ///
    /// The report is written only after every completion has succeeded.
    pub async fn run_file(&self, input_file: &Path) -> Result<OutputRecord> {
        let start_time = std::time::Instant::now();

        let article = DocumentReader::new(input_file)
            .read_docx()
            .context("Failed to read the input article")?;
        info!("Article read. First 10 chars: {}", article.chars().take(10).collect::<String>());

        let chunks = DocumentProcessor::new(&article).chunk_document(self.config.chunk_size);
        info!("Number of chunks: {}", chunks.len());
        if chunks.is_empty() {
            warn!("Article {:?} has no text; the report will only contain document-level sections", input_file);
        }

        let record = self.proofreader
            .process_document(&chunks)
            .await
            .context("Proofreading failed")?;

        DocumentWriter::new(&self.config.output_path)
            .write_document(&record)
            .context("Failed to write the report")?;

        info!("Run complete in {:.1}s", start_time.elapsed().as_secs_f64());
        Ok(record)
    }
}
