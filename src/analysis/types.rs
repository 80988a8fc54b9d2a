//! Domain types for project metadata, analysis results, and generated output
//!
//! These are the structured shapes that flow between the HTTP surface, the
//! prompt builders, and the result assembler. Wire names are camelCase to
//! match the JSON the analysis prompt demands from the model.

use serde::{Deserialize, Serialize};

/// Core project metadata, user-entered or auto-filled from a manifest.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub name: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub detailed_description: String,
}

/// A single project feature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

impl Feature {
    /// Creates a title-only feature, as produced by manifest analysis.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            example: None,
        }
    }
}

/// An entry in the project's technology stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TechStackEntry {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

fn default_version() -> String {
    "latest".to_string()
}

impl TechStackEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: default_version(),
            category: None,
            purpose: None,
        }
    }

    /// Name normalized for deduplication.
    pub fn normalized_name(&self) -> String {
        self.name.trim().to_lowercase()
    }
}

/// A dependency extracted from a manifest. Never inferred: only present when
/// the analyzed content declared it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    pub version: String,
}

/// The closed set of recognized license types. Anything ambiguous maps to
/// `Custom`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicenseKind {
    #[serde(rename = "MIT")]
    Mit,
    #[serde(rename = "Apache-2.0")]
    Apache2,
    #[serde(rename = "GPL-3.0")]
    Gpl3,
    #[serde(rename = "BSD-3-Clause")]
    Bsd3Clause,
    #[serde(rename = "ISC")]
    Isc,
    #[default]
    Custom,
}

impl LicenseKind {
    /// The canonical SPDX-style identifier.
    pub fn identifier(&self) -> &'static str {
        match self {
            LicenseKind::Mit => "MIT",
            LicenseKind::Apache2 => "Apache-2.0",
            LicenseKind::Gpl3 => "GPL-3.0",
            LicenseKind::Bsd3Clause => "BSD-3-Clause",
            LicenseKind::Isc => "ISC",
            LicenseKind::Custom => "Custom",
        }
    }

    /// Full display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            LicenseKind::Mit => "MIT License",
            LicenseKind::Apache2 => "Apache License 2.0",
            LicenseKind::Gpl3 => "GNU General Public License v3.0",
            LicenseKind::Bsd3Clause => "BSD 3-Clause License",
            LicenseKind::Isc => "ISC License",
            LicenseKind::Custom => "Custom License",
        }
    }

    /// Canonical reference URL; empty for custom licenses.
    pub fn url(&self) -> &'static str {
        match self {
            LicenseKind::Mit => "https://opensource.org/licenses/MIT",
            LicenseKind::Apache2 => "https://opensource.org/licenses/Apache-2.0",
            LicenseKind::Gpl3 => "https://opensource.org/licenses/GPL-3.0",
            LicenseKind::Bsd3Clause => "https://opensource.org/licenses/BSD-3-Clause",
            LicenseKind::Isc => "https://opensource.org/licenses/ISC",
            LicenseKind::Custom => "",
        }
    }

    /// Parses an identifier, mapping anything unrecognized to `Custom`.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "MIT" => LicenseKind::Mit,
            "Apache-2.0" => LicenseKind::Apache2,
            "GPL-3.0" => LicenseKind::Gpl3,
            "BSD-3-Clause" => LicenseKind::Bsd3Clause,
            "ISC" => LicenseKind::Isc,
            _ => LicenseKind::Custom,
        }
    }
}

impl std::fmt::Display for LicenseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

/// License information for the project.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectLicense {
    #[serde(rename = "type")]
    pub kind: LicenseKind,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub year: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_text: Option<String>,
}

/// The structured input to README generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadmeInput {
    pub project_info: ProjectInfo,
    #[serde(default)]
    pub features: Vec<Feature>,
    #[serde(default)]
    pub tech_stack: Vec<TechStackEntry>,
    #[serde(default)]
    pub license: ProjectLicense,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub installation: Vec<String>,
    #[serde(default)]
    pub usage: Vec<String>,
}

/// The assembled result of a manifest analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub dependencies: Vec<Dependency>,
    #[serde(default)]
    pub installation: Vec<String>,
    #[serde(default)]
    pub usage: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<ProjectLicense>,
}

/// A generated README document together with the input that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    /// The raw markdown returned by the generation service
    pub markdown: String,
    /// The structured input the document was generated from
    pub input: ReadmeInput,
}

impl GenerationResult {
    /// File name for the downloadable artifact: `README-<project>.md`, or
    /// plain `README.md` when the project name is empty.
    pub fn download_file_name(&self) -> String {
        let name = self.input.project_info.name.trim();
        if name.is_empty() {
            "README.md".to_string()
        } else {
            format!("README-{}.md", name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_kind_parse_known() {
        assert_eq!(LicenseKind::parse("MIT"), LicenseKind::Mit);
        assert_eq!(LicenseKind::parse("Apache-2.0"), LicenseKind::Apache2);
        assert_eq!(LicenseKind::parse("GPL-3.0"), LicenseKind::Gpl3);
        assert_eq!(LicenseKind::parse("BSD-3-Clause"), LicenseKind::Bsd3Clause);
        assert_eq!(LicenseKind::parse("ISC"), LicenseKind::Isc);
    }

    #[test]
    fn test_license_kind_parse_ambiguous_maps_to_custom() {
        assert_eq!(LicenseKind::parse("WTFPL"), LicenseKind::Custom);
        assert_eq!(LicenseKind::parse("mit"), LicenseKind::Custom);
        assert_eq!(LicenseKind::parse(""), LicenseKind::Custom);
    }

    #[test]
    fn test_license_kind_serde_identifiers() {
        let json = serde_json::to_string(&LicenseKind::Apache2).unwrap();
        assert_eq!(json, "\"Apache-2.0\"");

        let parsed: LicenseKind = serde_json::from_str("\"BSD-3-Clause\"").unwrap();
        assert_eq!(parsed, LicenseKind::Bsd3Clause);
    }

    #[test]
    fn test_tech_stack_entry_defaults_to_latest() {
        let entry: TechStackEntry = serde_json::from_str(r#"{"name": "React"}"#).unwrap();
        assert_eq!(entry.version, "latest");
    }

    #[test]
    fn test_tech_stack_normalized_name() {
        let entry = TechStackEntry::new("  Next.JS ");
        assert_eq!(entry.normalized_name(), "next.js");
    }

    #[test]
    fn test_download_file_name() {
        let result = GenerationResult {
            markdown: "# demo".to_string(),
            input: ReadmeInput {
                project_info: ProjectInfo {
                    name: "demo-app".to_string(),
                    ..Default::default()
                },
                features: vec![],
                tech_stack: vec![],
                license: ProjectLicense::default(),
                dependencies: vec![],
                installation: vec![],
                usage: vec![],
            },
        };
        assert_eq!(result.download_file_name(), "README-demo-app.md");
    }

    #[test]
    fn test_download_file_name_without_project_name() {
        let result = GenerationResult {
            markdown: String::new(),
            input: ReadmeInput {
                project_info: ProjectInfo::default(),
                features: vec![],
                tech_stack: vec![],
                license: ProjectLicense::default(),
                dependencies: vec![],
                installation: vec![],
                usage: vec![],
            },
        };
        assert_eq!(result.download_file_name(), "README.md");
    }

    #[test]
    fn test_project_license_wire_shape() {
        let license = ProjectLicense {
            kind: LicenseKind::Mit,
            author: "Jane Doe".to_string(),
            year: "2024".to_string(),
            custom_text: None,
        };

        let json = serde_json::to_value(&license).unwrap();
        assert_eq!(json["type"], "MIT");
        assert_eq!(json["author"], "Jane Doe");
        assert_eq!(json["year"], "2024");
    }
}
