//! Analysis prompt assembly
//!
//! Builds the single prompt sent to the text-generation service when a
//! manifest file is uploaded. The output is a deterministic function of
//! (content, file name): sections are assembled in a fixed order and the
//! JSON schema block is always present.

use super::instructions::extraction_instructions;
use super::rules;
use crate::manifest::{classify, ManifestKind};

/// The JSON shape the model must produce, verbatim in every analysis prompt.
const OUTPUT_SCHEMA: &str = r#"Respond ONLY with a valid JSON object in this format:

{
  "projectName": "string (project name if found)",
  "description": "string (project description if found)",
  "techStack": [
    "string (technology name)"
  ],
  "analyzedFeatures": [
    "string (core functionality in 2-3 words)"
  ],
  "dependencies": [
    {
      "name": "string (dependency name)",
      "version": "string (version number)"
    }
  ],
  "installation": [
    "string (installation command)"
  ],
  "usage": [
    "string (usage command)"
  ],
  "license": {
    "type": "string (one of: MIT, Apache-2.0, GPL-3.0, BSD-3-Clause, ISC, or Custom)",
    "author": "string (copyright holder)",
    "year": "string (copyright year)"
  }
}"#;

/// Builds the analysis prompt for an uploaded manifest file.
///
/// Section order: task preamble with the fenced file content, the output
/// schema, license rules, feature rules, dependency rules, dialect-specific
/// extraction instructions (selected by [`classify`]), and the closing
/// compliance block.
pub fn build_analysis_prompt(content: &str, file_name: &str) -> String {
    let kind = classify(file_name);
    build_analysis_prompt_for(content, file_name, kind)
}

/// Same as [`build_analysis_prompt`] with an explicit dialect, for callers
/// that have already classified the file.
pub fn build_analysis_prompt_for(content: &str, file_name: &str, kind: ManifestKind) -> String {
    format!(
        r#"You are a project file analyzer. Extract key functionality and features from the following {file_name} file ({dialect}).

File content:
```
{content}
```

{schema}

Analysis rules:

{license_rules}

{feature_rules}

{dependency_rules}

{installation_rules}

{usage_rules}

{dialect_instructions}

{compliance}"#,
        file_name = file_name,
        dialect = kind.label(),
        content = content,
        schema = OUTPUT_SCHEMA,
        license_rules = rules::LICENSE_RULES,
        feature_rules = rules::FEATURE_RULES,
        dependency_rules = rules::DEPENDENCY_RULES,
        installation_rules = rules::INSTALLATION_RULES,
        usage_rules = rules::USAGE_RULES,
        dialect_instructions = extraction_instructions(kind),
        compliance = rules::COMPLIANCE_RULES,
    )
}
