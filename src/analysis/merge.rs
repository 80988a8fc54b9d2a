//! Session form state and analysis merging
//!
//! Holds everything the user has entered or accepted so far, and folds
//! analysis reports into it. Merges are additive and deduplicated; a report
//! never overwrites what the user already typed, it only fills gaps.

use super::response::normalize_version;
use super::types::{
    Dependency, Feature, ProjectInfo, ProjectLicense, ReadmeInput, TechStackEntry,
};
use std::collections::HashSet;

/// Fixed dependency-name → display-technology table, applied when folding
/// detected dependencies into the tech stack.
const TECH_MAPPING: &[(&str, &str)] = &[
    ("react", "React"),
    ("next", "Next.js"),
    ("typescript", "TypeScript"),
    ("express", "Express"),
    ("mongoose", "MongoDB"),
    ("pg", "PostgreSQL"),
    ("redis", "Redis"),
    ("jest", "Jest"),
    ("tailwindcss", "TailwindCSS"),
    ("graphql", "GraphQL"),
];

/// Looks up the display technology for a dependency name, if it maps to one.
pub fn tech_for_dependency(dependency_name: &str) -> Option<&'static str> {
    let normalized = dependency_name.to_lowercase();
    TECH_MAPPING
        .iter()
        .find(|(key, _)| normalized.contains(key))
        .map(|(_, display)| *display)
}

/// Validation failure for a submission attempt. Carries the offending field
/// identifiers so the front end can focus and scroll to the first one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub fields: Vec<&'static str>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Missing required fields: {}", self.fields.join(", "))
    }
}

impl std::error::Error for ValidationError {}

/// All session-scoped form data.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub project_info: ProjectInfo,
    /// Features the user accepted
    pub features: Vec<Feature>,
    /// AI-suggested features awaiting promotion
    pub suggested_features: Vec<Feature>,
    pub tech_stack: Vec<TechStackEntry>,
    pub dependencies: Vec<Dependency>,
    pub installation: Vec<String>,
    pub usage: Vec<String>,
    pub license: ProjectLicense,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds an analysis report into the form.
    ///
    /// Project name and description fill only when currently empty; detected
    /// tech stack, dependencies, installation and usage merge additively
    /// with case-insensitive deduplication. Detected features land in the
    /// suggested pool, not the accepted list.
    pub fn merge_analysis(&mut self, report: &super::types::AnalysisReport) {
        if self.project_info.name.trim().is_empty() {
            if let Some(name) = &report.project_name {
                self.project_info.name = name.clone();
            }
        }
        if self.project_info.detailed_description.trim().is_empty() {
            if let Some(description) = &report.description {
                self.project_info.detailed_description = description.clone();
            }
        }
        if self.project_info.short_description.trim().is_empty() {
            if let Some(description) = &report.description {
                self.project_info.short_description = description.clone();
            }
        }

        for name in &report.tech_stack {
            self.add_tech(TechStackEntry::new(name.clone()));
        }

        for dependency in &report.dependencies {
            self.add_dependency(dependency.clone());
            // Well-known dependencies imply a stack technology
            if let Some(tech) = tech_for_dependency(&dependency.name) {
                self.add_tech(TechStackEntry::new(tech));
            }
        }

        for title in &report.features {
            self.suggest_feature(Feature::titled(title.clone()));
        }

        merge_commands(&mut self.installation, &report.installation);
        merge_commands(&mut self.usage, &report.usage);

        if let Some(license) = &report.license {
            if self.license.author.trim().is_empty() && self.license.year.trim().is_empty() {
                self.license = license.clone();
            }
        }
    }

    /// Adds a tech stack entry unless one with the same normalized name
    /// already exists. Returns whether the entry was added.
    pub fn add_tech(&mut self, entry: TechStackEntry) -> bool {
        let normalized = entry.normalized_name();
        if normalized.is_empty()
            || self
                .tech_stack
                .iter()
                .any(|existing| existing.normalized_name() == normalized)
        {
            return false;
        }
        self.tech_stack.push(TechStackEntry {
            version: normalize_version(&entry.version),
            ..entry
        });
        true
    }

    /// Adds a dependency unless one with the same name (case-insensitive)
    /// already exists. Returns whether the entry was added.
    pub fn add_dependency(&mut self, dependency: Dependency) -> bool {
        let normalized = dependency.name.trim().to_lowercase();
        if normalized.is_empty()
            || self
                .dependencies
                .iter()
                .any(|existing| existing.name.trim().to_lowercase() == normalized)
        {
            return false;
        }
        self.dependencies.push(dependency);
        true
    }

    /// Adds a feature to the accepted list, refusing duplicate titles.
    pub fn add_feature(&mut self, feature: Feature) -> bool {
        if self.has_feature_titled(&feature.title) {
            return false;
        }
        self.features.push(feature);
        true
    }

    /// Adds a feature to the suggested pool, refusing titles already
    /// accepted or already suggested.
    pub fn suggest_feature(&mut self, feature: Feature) -> bool {
        let normalized = feature.title.trim().to_lowercase();
        if normalized.is_empty()
            || self.has_feature_titled(&feature.title)
            || self
                .suggested_features
                .iter()
                .any(|f| f.title.trim().to_lowercase() == normalized)
        {
            return false;
        }
        self.suggested_features.push(feature);
        true
    }

    /// Promotes a suggested feature into the accepted list. Returns false
    /// when the title is not in the pool or is already accepted.
    pub fn promote_feature(&mut self, title: &str) -> bool {
        let normalized = title.trim().to_lowercase();
        let Some(index) = self
            .suggested_features
            .iter()
            .position(|f| f.title.trim().to_lowercase() == normalized)
        else {
            return false;
        };

        if self.has_feature_titled(title) {
            return false;
        }

        let feature = self.suggested_features.remove(index);
        self.features.push(feature);
        true
    }

    fn has_feature_titled(&self, title: &str) -> bool {
        let normalized = title.trim().to_lowercase();
        self.features
            .iter()
            .any(|f| f.title.trim().to_lowercase() == normalized)
    }

    /// Builds the generation input, validating required fields.
    pub fn to_readme_input(&self) -> Result<ReadmeInput, ValidationError> {
        let mut missing = Vec::new();
        if self.project_info.name.trim().is_empty() {
            missing.push("projectName");
        }
        if self.project_info.detailed_description.trim().is_empty() {
            missing.push("description");
        }
        if !missing.is_empty() {
            return Err(ValidationError { fields: missing });
        }

        Ok(ReadmeInput {
            project_info: self.project_info.clone(),
            features: self.features.clone(),
            tech_stack: self.tech_stack.clone(),
            license: self.license.clone(),
            dependencies: self.dependencies.clone(),
            installation: self.installation.clone(),
            usage: self.usage.clone(),
        })
    }
}

fn merge_commands(existing: &mut Vec<String>, detected: &[String]) {
    let mut seen: HashSet<String> = existing.iter().map(|c| c.trim().to_string()).collect();
    for command in detected {
        let trimmed = command.trim().to_string();
        if !trimmed.is_empty() && seen.insert(trimmed.clone()) {
            existing.push(trimmed);
        }
    }
}
