//! Request/response types for the text-generation boundary
//!
//! The boundary is deliberately narrow: a prompt string plus sampling
//! parameters in, generated text out. Provider-specific concerns stay inside
//! the client implementations.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A text-completion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    /// The full prompt text
    pub prompt: String,
    /// Sampling temperature (0.0 - 1.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Creates a new request for the given prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: None,
            max_tokens: None,
        }
    }

    /// Sets the temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the maximum tokens
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// A text-completion response.
#[derive(Debug, Clone)]
pub struct CompletionResponse {
    /// Generated text
    pub text: String,
    /// Time taken for the request
    pub response_time: Duration,
}

impl CompletionResponse {
    /// Creates a new response.
    pub fn text(text: impl Into<String>, response_time: Duration) -> Self {
        Self {
            text: text.into(),
            response_time,
        }
    }
}
