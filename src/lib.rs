//! readsmith - AI-assisted README generation service
//!
//! This library turns structured project metadata — optionally auto-filled
//! by analyzing an uploaded manifest file — into a generated README
//! document, by building deterministic prompts for an external
//! text-generation service and assembling its responses into typed results.
//!
//! # Core Concepts
//!
//! - **Manifest classification**: an uploaded file name maps to one of the
//!   known manifest dialects, which selects the extraction rules embedded
//!   in the analysis prompt
//! - **Prompt construction**: both the analysis and README prompts are
//!   deterministic functions of their structured input
//! - **Workflow**: a per-session state machine sequences the analyze and
//!   generate calls, with validation, retry, and supersede semantics
//! - **LLM boundary**: the external service is a pluggable [`LLMClient`]
//!   (multi-provider GenAI backend, or a scripted mock in tests)
//!
//! # Example Usage
//!
//! ```no_run
//! use readsmith::{ReadmeService, ReadsmithConfig, WorkflowSession};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ReadsmithConfig::default();
//! let service = Arc::new(ReadmeService::new(&config).await?);
//!
//! let session = WorkflowSession::new(service);
//! session.upload("package.json", "{ \"name\": \"demo\" }").await;
//!
//! session.update_form(|form| {
//!     form.project_info.detailed_description = "A demo project".to_string();
//! });
//!
//! let state = session.submit().await?;
//! println!("Workflow finished in state: {}", state.label());
//! # Ok(())
//! # }
//! ```
//!
//! # Project Structure
//!
//! - [`manifest`]: manifest dialect classification
//! - [`prompt`]: analysis/README prompt builders and the local preview
//! - [`analysis`]: domain types, response assembly, and form merging
//! - [`workflow`]: the generation state machine and session driver
//! - [`llm`]: text-generation client abstraction
//! - [`server`]: the JSON HTTP surface

// Public modules
pub mod analysis;
pub mod cli;
pub mod config;
pub mod llm;
pub mod manifest;
pub mod prompt;
pub mod server;
pub mod service;
pub mod workflow;

// Re-export key types for convenient access
pub use analysis::{
    AnalysisReport, Dependency, Feature, FormState, GenerationResult, LicenseKind, ProjectInfo,
    ProjectLicense, ReadmeInput, TechStackEntry, ValidationError,
};
pub use config::{ConfigError, ReadsmithConfig};
pub use llm::{BackendError, LLMClient, MockLLMClient, MockResponse};
pub use manifest::{classify, ManifestKind};
pub use prompt::{build_analysis_prompt, build_readme_prompt, render_preview};
pub use service::{ReadmeService, ServiceError};
pub use workflow::{WorkflowSession, WorkflowState};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
