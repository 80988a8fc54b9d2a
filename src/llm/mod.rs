//! Text-generation client abstraction
//!
//! This module provides a trait-based abstraction over the external
//! text-generation service, allowing the real multi-provider backend and a
//! scripted mock to be used interchangeably.

mod client;
mod error;
mod genai;
mod mock;
mod types;

pub use client::LLMClient;
pub use error::BackendError;
pub use genai::GenAIClient;
pub use mock::{MockLLMClient, MockResponse};
pub use types::{CompletionRequest, CompletionResponse};
