use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info};
use std::time::Instant;

use crate::app_config::EditorialConfig;
use crate::document_processor::Chunk;
use crate::errors::ProofreadingError;
use crate::providers::Provider;
use super::editor::Editor;
use super::prompts::summary_target_length;
use super::state::{ChunkOutcome, OutputRecord, ProofreadingState};

/// Drives the editorial pipeline over a chunked document
pub struct Proofreader<P: Provider> {
    editor: Editor<P>,
    options: EditorialConfig,
}

impl<P: Provider> Proofreader<P> {
    pub fn new(editor: Editor<P>, options: EditorialConfig) -> Self {
        Self { editor, options }
    }

    pub fn editor(&self) -> &Editor<P> {
        &self.editor
    }

    /// Run one chunk through heading (optional), proofreading, summary and quotes.
    ///
    /// `chunk_count` is the size of the whole chunk sequence and sets the soft
    /// summary target.
    pub async fn process_chunk(&self, chunk: &Chunk, chunk_count: usize) -> Result<ChunkOutcome, ProofreadingError> {
        let (heading, text) = if self.options.generate_headings {
            let heading = self.editor.create_heading(&chunk.text).await?;
            let text = format!("\n\n{}\n\n{}", heading, chunk.text);
            (Some(heading), text)
        } else {
            (None, chunk.text.clone())
        };

        let corrected = self.editor.proofread(&text).await?;
        let target = summary_target_length(self.options.summary_budget_chars, chunk_count);
        let summary = self.editor.summarize(&text, target).await?;
        let quotes = self.editor.get_quotes(&chunk.text).await?;

        Ok(ChunkOutcome {
            heading,
            corrected,
            summary,
            quotes,
        })
    }

    /// Process every chunk in order, then derive the document-level artifacts.
    ///
    /// The first failing completion aborts the whole document.
    pub async fn process_document(&self, chunks: &[Chunk]) -> Result<OutputRecord, ProofreadingError> {
        info!("Beginning document processing ({} chunks)", chunks.len());
        let start_time = Instant::now();

        let progress_bar = ProgressBar::new(chunks.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} chunks ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(template_result.progress_chars("#>-"));

        let mut state = ProofreadingState::new();
        for chunk in chunks {
            if chunk.is_blank() {
                debug!("Skipping blank chunk {}", chunk.index);
                progress_bar.inc(1);
                continue;
            }

            progress_bar.set_message(format!("chunk {}", chunk.index + 1));
            debug!("Processing chunk {} beginning with: {}", chunk.index, chunk.preview());

            let outcome = match self.process_chunk(chunk, chunks.len()).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    progress_bar.abandon_with_message("failed");
                    return Err(e);
                }
            };
            state = state.absorb(outcome);

            progress_bar.inc(1);
            info!("Chunk {}/{} done. Time elapsed: {:.1}s",
                  chunk.index + 1, chunks.len(), start_time.elapsed().as_secs_f64());
        }
        progress_bar.finish_and_clear();

        let record = self.finish(state).await?;
        info!("Document processed in {:.1}s", start_time.elapsed().as_secs_f64());
        Ok(record)
    }

    /// Derive titles, leads and tags from the summary excerpt and assemble the record
    pub async fn finish(&self, state: ProofreadingState) -> Result<OutputRecord, ProofreadingError> {
        let summary = state.summary_excerpt(self.options.summary_excerpt_chars);
        let vocabulary = &self.options.tag_vocabulary;

        let titles = self.editor.create_titles(&summary).await?;
        let leads = self.editor.create_leads(&summary).await?;
        let tags_from_list = self.editor.create_tags_from_list(&summary, vocabulary).await?;
        let tags = self.editor.create_tags(&summary, vocabulary).await?;

        Ok(OutputRecord {
            titles,
            leads,
            tags_from_list,
            tags,
            quotes: state.quotes,
            output_text: state.output_text,
        })
    }
}
