/*!
 * Editorial operations backed by a completion provider.
 *
 * Every operation renders one prompt template, performs exactly one completion
 * call and returns the first candidate with surrounding whitespace removed.
 * List operations split that text on line breaks without validating the count.
 */

use log::debug;

use crate::errors::ProviderError;
use crate::providers::{CompletionParameters, CompletionRequest, Provider};
use super::prompts;

/// Runs editorial prompts against a provider
#[derive(Debug)]
pub struct Editor<P: Provider> {
    provider: P,
    parameters: CompletionParameters,
}

impl<P: Provider> Editor<P> {
    pub fn new(provider: P, parameters: CompletionParameters) -> Self {
        Self { provider, parameters }
    }

    /// The underlying provider
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Send a prompt and return the trimmed first candidate
    pub async fn ask(&self, prompt: String) -> Result<String, ProviderError> {
        let request = CompletionRequest::new(prompt, self.parameters.clone());
        let response = self.provider.complete(request).await?;
        if let Some(usage) = response.usage {
            debug!("{} usage: {} prompt / {} completion tokens",
                   self.provider.name(), usage.prompt_tokens, usage.completion_tokens);
        }
        Ok(response.first_text()?.trim().to_string())
    }

    /// Send a prompt and split the answer into lines
    pub async fn ask_lines(&self, prompt: String) -> Result<Vec<String>, ProviderError> {
        let text = self.ask(prompt).await?;
        Ok(split_lines(&text))
    }

    pub async fn proofread(&self, text: &str) -> Result<String, ProviderError> {
        debug!("Proofreading text beginning with: {}", preview(text));
        self.ask(prompts::proofread_prompt(text)).await
    }

    /// Summarize one chunk; the length target is guidance for the model only
    pub async fn summarize(&self, text: &str, target_length: usize) -> Result<String, ProviderError> {
        debug!("Summarizing text beginning with: {} (target {} chars)", preview(text), target_length);
        self.ask(prompts::summarize_prompt(text, target_length)).await
    }

    pub async fn create_heading(&self, text: &str) -> Result<String, ProviderError> {
        debug!("Creating heading for text beginning with: {}", preview(text));
        self.ask(prompts::heading_prompt(text)).await
    }

    pub async fn get_quotes(&self, text: &str) -> Result<Vec<String>, ProviderError> {
        debug!("Getting quotes from text beginning with: {}", preview(text));
        self.ask_lines(prompts::quotes_prompt(text)).await
    }

    pub async fn create_titles(&self, summary: &str) -> Result<Vec<String>, ProviderError> {
        debug!("Creating titles for summary beginning with: {}", preview(summary));
        self.ask_lines(prompts::titles_prompt(summary)).await
    }

    pub async fn create_leads(&self, summary: &str) -> Result<Vec<String>, ProviderError> {
        debug!("Creating leads for summary beginning with: {}", preview(summary));
        self.ask_lines(prompts::leads_prompt(summary)).await
    }

    pub async fn create_tags_from_list(&self, summary: &str, vocabulary: &[String]) -> Result<Vec<String>, ProviderError> {
        debug!("Selecting tags from a vocabulary of {}", vocabulary.len());
        self.ask_lines(prompts::tags_from_list_prompt(summary, vocabulary)).await
    }

    /// Free-form tags; overlap with `vocabulary` is discouraged in the prompt but not filtered
    pub async fn create_tags(&self, summary: &str, vocabulary: &[String]) -> Result<Vec<String>, ProviderError> {
        debug!("Creating free-form tags");
        self.ask_lines(prompts::tags_prompt(summary, vocabulary)).await
    }
}

/// Split a response on line breaks; an empty response yields no lines
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

fn preview(text: &str) -> String {
    text.chars().take(10).collect()
}
