/*!
 * Provider implementations for text-completion services.
 *
 * This module contains client implementations for completion providers:
 * - OpenAI: OpenAI-compatible completions API
 * - Mock: deterministic in-process provider for tests
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::app_config::CompletionConfig;
use crate::errors::ProviderError;

/// Sampling parameters sent with every completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParameters {
    /// Model (engine) identifier
    pub model: String,
    /// Sampling temperature
    pub temperature: f32,
    /// Maximum number of tokens to generate
    pub max_tokens: u32,
    /// Number of candidates to generate
    pub n: u32,
    /// Optional stop sequences
    pub stop: Option<Vec<String>>,
}

impl CompletionParameters {
    /// Create parameters for a model with single-candidate defaults
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            temperature: 0.5,
            max_tokens: 2000,
            n: 1,
            stop: None,
        }
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the maximum number of output tokens
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

impl From<&CompletionConfig> for CompletionParameters {
    fn from(config: &CompletionConfig) -> Self {
        Self {
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
            n: config.n,
            stop: config.stop.clone(),
        }
    }
}

/// A single prompt plus the parameters to complete it with
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The rendered prompt
    pub prompt: String,
    /// Sampling parameters
    pub parameters: CompletionParameters,
}

impl CompletionRequest {
    /// Create a new completion request
    pub fn new(prompt: impl Into<String>, parameters: CompletionParameters) -> Self {
        Self {
            prompt: prompt.into(),
            parameters,
        }
    }
}

/// Token usage information
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TokenUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
}

/// Provider-agnostic completion response
#[derive(Debug, Clone, Default)]
pub struct CompletionResponse {
    /// Candidate continuations, in the order the provider returned them
    pub choices: Vec<String>,
    /// Token usage, when the provider reports it
    pub usage: Option<TokenUsage>,
}

impl CompletionResponse {
    /// Text of the first candidate
    pub fn first_text(&self) -> Result<&str, ProviderError> {
        self.choices
            .first()
            .map(String::as_str)
            .ok_or_else(|| ProviderError::ParseError("Response contained no choices".to_string()))
    }
}

/// Common trait for all completion providers
///
/// This trait defines the interface that all provider implementations must follow,
/// allowing the editorial pipeline to run against a remote service or a test double.
#[async_trait]
pub trait Provider: Send + Sync + Debug {
    /// Complete a request using this provider
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<CompletionResponse, ProviderError>` - The response from the provider or an error
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError>;

    /// Human readable provider name used in logs
    fn name(&self) -> &str;
}

pub mod openai;
pub mod mock;
