//! Project analysis: domain types, response assembly, and form merging

mod merge;
mod response;
mod types;

pub use merge::{tech_for_dependency, FormState, ValidationError};
pub use response::{extract_json_from_response, normalize_version, parse_analysis_response, ParseError};
pub use types::{
    AnalysisReport, Dependency, Feature, GenerationResult, LicenseKind, ProjectInfo,
    ProjectLicense, ReadmeInput, TechStackEntry,
};
