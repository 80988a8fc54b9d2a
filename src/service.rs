//! README service orchestration
//!
//! `ReadmeService` is a thin orchestration layer over the text-generation
//! boundary: it validates input, builds the prompt, sends it, and assembles
//! the response into typed results. It holds no per-session state — the
//! workflow layer owns that.

use crate::analysis::{
    parse_analysis_response, AnalysisReport, GenerationResult, ParseError, ReadmeInput,
    ValidationError,
};
use crate::config::ReadsmithConfig;
use crate::llm::{BackendError, CompletionRequest, GenAIClient, LLMClient};
use crate::prompt::{build_analysis_prompt, build_readme_prompt};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

// Sampling parameters per operation: extraction wants determinism,
// generation wants some freedom.
const ANALYSIS_MAX_TOKENS: u32 = 1000;
const ANALYSIS_TEMPERATURE: f32 = 0.0;
const README_MAX_TOKENS: u32 = 4000;
const README_TEMPERATURE: f32 = 0.7;

/// Errors that can occur during service operations
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Required input fields are missing; no upstream call was made
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The upstream text-generation call failed
    #[error("Generation service error: {0}")]
    Backend(#[from] BackendError),

    /// The upstream response could not be parsed into the expected shape
    #[error("Failed to parse analysis results: {0}")]
    Parse(#[from] ParseError),
}

impl ServiceError {
    /// True when the failure is worth retrying (upstream or parse trouble,
    /// as opposed to invalid input).
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ServiceError::Validation(_))
    }
}

/// High-level README generation service.
///
/// Thread-safe; share across handlers with `Arc`.
pub struct ReadmeService {
    client: Arc<dyn LLMClient>,
}

impl std::fmt::Debug for ReadmeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadmeService")
            .field("backend", &self.client.name())
            .finish()
    }
}

impl ReadmeService {
    /// Creates a service from configuration, wiring up the multi-provider
    /// GenAI client.
    pub async fn new(config: &ReadsmithConfig) -> Result<Self, BackendError> {
        let client = GenAIClient::new(
            config.provider,
            config.model.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
        .await?;

        info!(
            "README service initialized with backend: {} ({})",
            client.name(),
            config.model
        );

        Ok(Self {
            client: Arc::new(client),
        })
    }

    /// Creates a service with a pre-configured client. Used with the mock
    /// client in tests and for custom backends.
    pub fn with_client(client: Arc<dyn LLMClient>) -> Self {
        Self { client }
    }

    /// Analyzes an uploaded manifest file.
    ///
    /// Builds the dialect-aware analysis prompt, sends it upstream, and
    /// assembles the JSON response into an [`AnalysisReport`].
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Backend` when the upstream call fails and
    /// `ServiceError::Parse` when the response is not the expected JSON
    /// shape — the two are kept distinct so clients can word them
    /// differently.
    pub async fn analyze(
        &self,
        content: &str,
        file_name: &str,
    ) -> Result<AnalysisReport, ServiceError> {
        debug!(file_name, "Building analysis prompt");
        let prompt = build_analysis_prompt(content, file_name);

        let request = CompletionRequest::new(prompt)
            .with_max_tokens(ANALYSIS_MAX_TOKENS)
            .with_temperature(ANALYSIS_TEMPERATURE);

        let response = self.client.complete(request).await?;

        debug!(
            elapsed_ms = response.response_time.as_millis() as u64,
            "Analysis response received"
        );

        let report = parse_analysis_response(&response.text)?;
        Ok(report)
    }

    /// Generates a README document from structured input.
    ///
    /// Validates required fields first: an empty project name or description
    /// fails with `ServiceError::Validation` before any upstream call.
    pub async fn generate(&self, input: &ReadmeInput) -> Result<GenerationResult, ServiceError> {
        validate_input(input)?;

        let prompt = build_readme_prompt(input);

        let request = CompletionRequest::new(prompt)
            .with_max_tokens(README_MAX_TOKENS)
            .with_temperature(README_TEMPERATURE);

        let response = self.client.complete(request).await?;

        debug!(
            elapsed_ms = response.response_time.as_millis() as u64,
            "Generation response received"
        );

        if response.text.trim().is_empty() {
            return Err(ParseError::MissingField("markdown".to_string()).into());
        }

        Ok(GenerationResult {
            markdown: response.text,
            input: input.clone(),
        })
    }

    /// Returns the name of the backend being used.
    pub fn backend_name(&self) -> &str {
        self.client.name()
    }

    /// Returns model information for the backend.
    pub fn backend_model_info(&self) -> Option<String> {
        self.client.model_info()
    }
}

fn validate_input(input: &ReadmeInput) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    if input.project_info.name.trim().is_empty() {
        missing.push("projectName");
    }
    if input.project_info.detailed_description.trim().is_empty() {
        missing.push("description");
    }
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError { fields: missing })
    }
}
