//! Wire models for the HTTP surface
//!
//! Earlier front-end builds sent features and tech stack as bare strings,
//! later ones as structured objects; the untagged enums below accept both so
//! neither client breaks.

use crate::analysis::{
    Dependency, Feature, ProjectInfo, ProjectLicense, ReadmeInput, TechStackEntry,
};
use serde::{Deserialize, Serialize};

/// `POST /analyze` request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub file_content: String,
    #[serde(default)]
    pub file_name: String,
}

/// `POST /generate` request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub features: Vec<FeatureDto>,
    #[serde(default)]
    pub tech_stack: Vec<TechDto>,
    #[serde(default)]
    pub license: Option<ProjectLicense>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub installation: Vec<String>,
    #[serde(default)]
    pub usage: Vec<String>,
}

/// A feature, either as a bare title or a full object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum FeatureDto {
    Titled(String),
    Full(Feature),
}

impl From<FeatureDto> for Feature {
    fn from(dto: FeatureDto) -> Self {
        match dto {
            FeatureDto::Titled(title) => Feature::titled(title),
            FeatureDto::Full(feature) => feature,
        }
    }
}

/// A tech stack entry, either as a bare name or a full object.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TechDto {
    Name(String),
    Full(TechStackEntry),
}

impl From<TechDto> for TechStackEntry {
    fn from(dto: TechDto) -> Self {
        match dto {
            TechDto::Name(name) => TechStackEntry::new(name),
            TechDto::Full(entry) => entry,
        }
    }
}

impl GenerateRequest {
    /// Maps the flat wire shape into the structured generation input.
    pub fn into_readme_input(self) -> ReadmeInput {
        ReadmeInput {
            project_info: ProjectInfo {
                name: self.project_name,
                short_description: String::new(),
                detailed_description: self.description,
            },
            features: self.features.into_iter().map(Into::into).collect(),
            tech_stack: self.tech_stack.into_iter().map(Into::into).collect(),
            license: self.license.unwrap_or_default(),
            dependencies: self.dependencies,
            installation: self.installation,
            usage: self.usage,
        }
    }
}

/// `POST /generate` success body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub markdown: String,
}

/// Error body for all non-2xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// `GET /health` body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::LicenseKind;

    #[test]
    fn test_analyze_request_wire_names() {
        let request: AnalyzeRequest = serde_json::from_str(
            r#"{"fileContent": "{}", "fileName": "package.json"}"#,
        )
        .unwrap();
        assert_eq!(request.file_content, "{}");
        assert_eq!(request.file_name, "package.json");
    }

    #[test]
    fn test_generate_request_with_string_features() {
        let request: GenerateRequest = serde_json::from_str(
            r#"{
                "projectName": "demo",
                "description": "a demo",
                "features": ["file upload", "user auth"],
                "techStack": ["React"]
            }"#,
        )
        .unwrap();

        let input = request.into_readme_input();
        assert_eq!(input.features.len(), 2);
        assert_eq!(input.features[0].title, "file upload");
        assert_eq!(input.tech_stack[0].name, "React");
        assert_eq!(input.tech_stack[0].version, "latest");
    }

    #[test]
    fn test_generate_request_with_structured_features() {
        let request: GenerateRequest = serde_json::from_str(
            r#"{
                "projectName": "demo",
                "description": "a demo",
                "features": [{"title": "file upload", "description": "drag and drop"}],
                "techStack": [{"name": "React", "version": "18.2.0"}],
                "license": {"type": "MIT", "author": "Jane", "year": "2024"}
            }"#,
        )
        .unwrap();

        let input = request.into_readme_input();
        assert_eq!(input.features[0].description, "drag and drop");
        assert_eq!(input.tech_stack[0].version, "18.2.0");
        assert_eq!(input.license.kind, LicenseKind::Mit);
    }

    #[test]
    fn test_generate_request_defaults() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"projectName": "demo", "description": "d"}"#).unwrap();
        let input = request.into_readme_input();
        assert!(input.features.is_empty());
        assert!(input.dependencies.is_empty());
        assert_eq!(input.license.kind, LicenseKind::Custom);
    }
}
