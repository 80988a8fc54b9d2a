//! Result assembly for text-generation responses
//!
//! Analysis responses are expected to be a single JSON object, but models
//! wrap output in markdown fences or surrounding prose often enough that
//! extraction has to tolerate all three shapes. Parse failures are explicit
//! typed errors: the analysis path never silently degrades to empty data.

use super::types::{AnalysisReport, Dependency, LicenseKind, ProjectLicense};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),
    #[error("Missing required field: {0}")]
    MissingField(String),
    #[error("Parse error: {0}")]
    Other(String),
}

/// The raw JSON shape the analysis prompt instructs the model to produce.
/// `analyzedFeatures` is the model-facing name; the assembled report
/// surfaces it as `features`.
#[derive(Debug, Clone, Deserialize)]
struct RawAnalysis {
    #[serde(rename = "projectName")]
    project_name: Option<String>,
    description: Option<String>,
    #[serde(default, rename = "techStack")]
    tech_stack: Vec<String>,
    #[serde(default, rename = "analyzedFeatures")]
    analyzed_features: Vec<String>,
    #[serde(default)]
    dependencies: Vec<RawDependency>,
    #[serde(default)]
    installation: Vec<String>,
    #[serde(default)]
    usage: Vec<String>,
    license: Option<RawLicense>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawDependency {
    name: String,
    version: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct RawLicense {
    #[serde(rename = "type")]
    kind: Option<String>,
    author: Option<String>,
    // Models emit years as strings or bare numbers
    year: Option<serde_json::Value>,
}

/// Parses an analysis response into an [`AnalysisReport`].
pub fn parse_analysis_response(response: &str) -> Result<AnalysisReport, ParseError> {
    debug!("Parsing analysis response ({} chars)", response.len());

    let json_str = extract_json_from_response(response)?;

    let raw: RawAnalysis = serde_json::from_str(&json_str).map_err(|e| {
        warn!("JSON parse error: {}", e);
        ParseError::InvalidJson(format!(
            "{}: {}",
            e,
            json_str.chars().take(100).collect::<String>()
        ))
    })?;

    Ok(assemble_report(raw))
}

/// Extracts the JSON object from a response that may be plain JSON, a
/// fenced code block, or JSON embedded in prose.
pub fn extract_json_from_response(response: &str) -> Result<String, ParseError> {
    let trimmed = response.trim();

    if trimmed.starts_with('{') && trimmed.ends_with('}') {
        return Ok(trimmed.to_string());
    }

    if trimmed.contains("```") {
        return extract_from_markdown_block(trimmed);
    }

    if let Some(start) = trimmed.find('{') {
        if let Some(end) = trimmed.rfind('}') {
            if start < end {
                return Ok(trimmed[start..=end].to_string());
            }
        }
    }

    Err(ParseError::InvalidJson(
        "No JSON object found in response".to_string(),
    ))
}

fn extract_from_markdown_block(text: &str) -> Result<String, ParseError> {
    let re = Regex::new(r"```(?:json)?\s*\n?([\s\S]*?)\n?```").unwrap();

    if let Some(captures) = re.captures(text) {
        if let Some(json_match) = captures.get(1) {
            let json = json_match.as_str().trim();
            if json.starts_with('{') && json.ends_with('}') {
                return Ok(json.to_string());
            }
        }
    }

    Err(ParseError::InvalidJson(
        "Could not extract JSON from markdown block".to_string(),
    ))
}

fn assemble_report(raw: RawAnalysis) -> AnalysisReport {
    let dependencies = dedupe_dependencies(
        raw.dependencies
            .into_iter()
            .map(|d| Dependency {
                name: d.name.trim().to_string(),
                version: normalize_version(d.version.as_deref().unwrap_or_default()),
            })
            .filter(|d| !d.name.is_empty())
            .collect(),
    );

    AnalysisReport {
        project_name: non_empty(raw.project_name),
        description: non_empty(raw.description),
        tech_stack: dedupe_names(raw.tech_stack),
        features: dedupe_names(raw.analyzed_features),
        dependencies,
        installation: raw.installation,
        usage: raw.usage,
        license: raw.license.map(|l| ProjectLicense {
            kind: LicenseKind::parse(l.kind.as_deref().unwrap_or_default()),
            author: l.author.unwrap_or_default(),
            year: l.year.map(render_year).unwrap_or_default(),
            custom_text: None,
        }),
    }
}

/// Normalizes a version string per the documented mapping: leading range
/// operators (`^`, `~`, `>=`, `<=`, `>`, `<`, `=`) and a `v` prefix are
/// stripped; an empty version becomes "latest".
pub fn normalize_version(version: &str) -> String {
    let mut v = version.trim();

    loop {
        let stripped = v.trim_start_matches(['^', '~', '=', '>', '<']).trim_start();
        if stripped == v {
            break;
        }
        v = stripped;
    }

    // "v1.2.3" -> "1.2.3", but keep names like "variable-reference" intact
    if let Some(rest) = v.strip_prefix('v') {
        if rest.starts_with(|c: char| c.is_ascii_digit()) {
            v = rest;
        }
    }

    if v.is_empty() {
        "latest".to_string()
    } else {
        v.to_string()
    }
}

fn dedupe_dependencies(deps: Vec<Dependency>) -> Vec<Dependency> {
    let mut seen = HashSet::new();
    deps.into_iter()
        .filter(|d| seen.insert(d.name.to_lowercase()))
        .collect()
}

fn dedupe_names(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty() && seen.insert(n.to_lowercase()))
        .collect()
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn render_year(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}
