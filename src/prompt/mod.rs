//! Prompt construction for the text-generation service
//!
//! Two prompt builders (manifest analysis, README generation) plus the
//! deterministic local preview. Both builders are pure functions of their
//! inputs: no randomness, no external state, and the worst case for odd
//! input is a low-quality prompt, never an error.

mod analyze;
mod instructions;
mod preview;
mod readme;
mod rules;

pub use analyze::{build_analysis_prompt, build_analysis_prompt_for};
pub use instructions::extraction_instructions;
pub use preview::render_preview;
pub use readme::{badge, build_readme_prompt};
