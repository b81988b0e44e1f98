use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;
use crate::providers::{CompletionRequest, CompletionResponse, Provider, TokenUsage};

/// OpenAI client for the (legacy) text completions API
#[derive(Debug)]
pub struct OpenAI {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API base URL, e.g. `https://api.openai.com/v1`
    endpoint: String,
}

/// OpenAI completions request body
#[derive(Debug, Serialize)]
pub struct OpenAIRequest {
    /// The model to use
    pub model: String,

    /// The prompt to complete
    pub prompt: String,

    /// Temperature for generation
    pub temperature: f32,

    /// Maximum number of tokens to generate
    pub max_tokens: u32,

    /// Number of candidates to generate
    pub n: u32,

    /// Stop sequences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl From<CompletionRequest> for OpenAIRequest {
    fn from(request: CompletionRequest) -> Self {
        let parameters = request.parameters;
        Self {
            model: parameters.model,
            prompt: request.prompt,
            temperature: parameters.temperature,
            max_tokens: parameters.max_tokens,
            n: parameters.n,
            stop: parameters.stop,
        }
    }
}

/// Token usage information
#[derive(Debug, Deserialize)]
pub struct OpenAIUsage {
    pub prompt_tokens: u64,
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
}

/// A single completion candidate
#[derive(Debug, Deserialize)]
pub struct OpenAIChoice {
    /// Generated text
    pub text: String,
    /// Candidate index
    #[serde(default)]
    pub index: u32,
    /// Why generation stopped
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// OpenAI completions response
#[derive(Debug, Deserialize)]
pub struct OpenAIResponse {
    pub choices: Vec<OpenAIChoice>,
    #[serde(default)]
    pub usage: Option<OpenAIUsage>,
}

impl From<OpenAIResponse> for CompletionResponse {
    fn from(response: OpenAIResponse) -> Self {
        let mut choices = response.choices;
        choices.sort_by_key(|c| c.index);
        Self {
            choices: choices.into_iter().map(|c| c.text).collect(),
            usage: response.usage.map(|u| TokenUsage {
                prompt_tokens: u.prompt_tokens,
                completion_tokens: u.completion_tokens,
            }),
        }
    }
}

impl OpenAI {
    /// Create a new OpenAI client
    ///
    /// The key is taken as an explicit value; nothing is read from the environment here.
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    /// URL of the completions resource
    pub fn completions_url(&self) -> String {
        if self.endpoint.is_empty() {
            "https://api.openai.com/v1/completions".to_string()
        } else {
            format!("{}/completions", self.endpoint.trim_end_matches('/'))
        }
    }

    /// Map a non-success status to the matching provider error
    pub fn error_for_status(status: StatusCode, body: String) -> ProviderError {
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthenticationError(body),
            StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimitExceeded(body),
            _ => ProviderError::ApiError {
                status_code: status.as_u16(),
                message: body,
            },
        }
    }
}

#[async_trait]
impl Provider for OpenAI {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        let api_url = self.completions_url();
        let body = OpenAIRequest::from(request);
        debug!("Sending completion request to {} (model {}, {} prompt chars)",
               api_url, body.model, body.prompt.chars().count());

        let response = self.client.post(&api_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("OpenAI API error ({}): {}", status, error_text);
            return Err(Self::error_for_status(status, error_text));
        }

        let openai_response = response.json::<OpenAIResponse>().await
            .map_err(|e| ProviderError::ParseError(e.to_string()))?;

        Ok(openai_response.into())
    }

    fn name(&self) -> &str {
        "OpenAI"
    }
}
