/*!
 * Mock provider implementation for testing.
 *
 * This module provides a mock provider that simulates different behaviors:
 * - `MockProvider::working(text)` - Always succeeds with the given text
 * - `MockProvider::failing()` - Always fails with an error
 * - `MockProvider::working(text).fail_after(n)` - Succeeds `n` times, then fails
 *
 * Responses can be routed per prompt with `with_rule`, which matches on a
 * substring of the rendered prompt.
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ProviderError;
use crate::providers::{CompletionRequest, CompletionResponse, Provider, TokenUsage};

/// Behavior mode for the mock provider
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds
    Working,
    /// Succeeds for the first `successes` requests, then fails
    FailAfter { successes: usize },
    /// Always fails with an error
    Failing,
}

/// Mock provider for testing the editorial pipeline
#[derive(Debug, Clone)]
pub struct MockProvider {
    behavior: MockBehavior,
    default_response: String,
    /// (prompt substring, response); the first matching rule wins
    rules: Vec<(String, String)>,
    request_count: Arc<AtomicUsize>,
    prompts: Arc<Mutex<Vec<String>>>,
}

impl MockProvider {
    /// Create a new mock provider with the specified behavior
    pub fn new(behavior: MockBehavior, default_response: impl Into<String>) -> Self {
        Self {
            behavior,
            default_response: default_response.into(),
            rules: Vec::new(),
            request_count: Arc::new(AtomicUsize::new(0)),
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a working mock provider that always answers with `response`
    pub fn working(response: impl Into<String>) -> Self {
        Self::new(MockBehavior::Working, response)
    }

    /// Create a failing mock provider that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing, String::new())
    }

    /// Fail every request after the first `successes`
    pub fn fail_after(mut self, successes: usize) -> Self {
        self.behavior = MockBehavior::FailAfter { successes };
        self
    }

    /// Answer with `response` whenever the prompt contains `needle`
    pub fn with_rule(mut self, needle: impl Into<String>, response: impl Into<String>) -> Self {
        self.rules.push((needle.into(), response.into()));
        self
    }

    /// Number of completion calls received so far
    pub fn call_count(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    /// Prompts received so far, in call order
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    fn response_for(&self, prompt: &str) -> String {
        self.rules
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| self.default_response.clone())
    }
}

#[async_trait]
impl Provider for MockProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        self.prompts
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(request.prompt.clone());

        let should_fail = match self.behavior {
            MockBehavior::Working => false,
            MockBehavior::FailAfter { successes } => count >= successes,
            MockBehavior::Failing => true,
        };

        if should_fail {
            return Err(ProviderError::ApiError {
                status_code: 500,
                message: format!("Simulated failure on request {}", count + 1),
            });
        }

        let text = self.response_for(&request.prompt);
        Ok(CompletionResponse {
            usage: Some(TokenUsage {
                prompt_tokens: request.prompt.len() as u64,
                completion_tokens: text.len() as u64,
            }),
            choices: vec![text],
        })
    }

    fn name(&self) -> &str {
        "Mock"
    }
}
