//! README generation prompt assembly
//!
//! Builds the prompt that instructs the model to emit a markdown document
//! using only the supplied fields. Sections whose backing data is empty are
//! left out of the skeleton entirely and the closing instructions forbid
//! inventing content for them.

use crate::analysis::{LicenseKind, ReadmeInput, TechStackEntry};
use std::fmt::Write;

/// Builds the README generation prompt for the given input.
pub fn build_readme_prompt(input: &ReadmeInput) -> String {
    let mut prompt = String::new();
    let info = &input.project_info;

    let _ = writeln!(
        prompt,
        "Create a professional README.md file for {} using the following format and STRICTLY using ONLY the information provided below:",
        info.name
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "# {}", info.name);
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "{}", info.detailed_description);

    if !input.tech_stack.is_empty() {
        let _ = writeln!(prompt);
        for entry in &input.tech_stack {
            let _ = writeln!(prompt, "{}", badge(entry));
        }
    }

    if !input.features.is_empty() {
        let _ = writeln!(prompt);
        let _ = writeln!(prompt, "## Features");
        for feature in &input.features {
            let _ = writeln!(prompt, "- {}", feature.title);
            if !feature.description.trim().is_empty() {
                let _ = writeln!(prompt, "  {}", feature.description);
            }
            if let Some(example) = &feature.example {
                let _ = writeln!(prompt, "  Example: {}", example);
            }
        }
    }

    if !input.dependencies.is_empty() {
        let _ = writeln!(prompt);
        let _ = writeln!(prompt, "## Dependencies");
        let _ = writeln!(prompt);
        let _ = writeln!(prompt, "| Package | Version |");
        let _ = writeln!(prompt, "|---------|---------|");
        for dependency in &input.dependencies {
            let _ = writeln!(prompt, "| {} | {} |", dependency.name, dependency.version);
        }
    }

    if !input.installation.is_empty() {
        let _ = writeln!(prompt);
        let _ = writeln!(prompt, "## Installation");
        let _ = writeln!(prompt, "```bash");
        for step in &input.installation {
            let _ = writeln!(prompt, "{}", step);
        }
        let _ = writeln!(prompt, "```");
    }

    if !input.usage.is_empty() {
        let _ = writeln!(prompt);
        let _ = writeln!(prompt, "## Usage");
        let _ = writeln!(prompt, "```bash");
        for example in &input.usage {
            let _ = writeln!(prompt, "{}", example);
        }
        let _ = writeln!(prompt, "```");
    }

    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "## License");
    let _ = writeln!(prompt, "{}", input.license.kind.display_name());
    if input.license.kind != LicenseKind::Custom {
        let _ = writeln!(prompt, "{}", input.license.kind.url());
    }
    let _ = writeln!(prompt);
    let _ = writeln!(
        prompt,
        "Copyright (c) {} {}",
        input.license.year, input.license.author
    );
    if let Some(custom_text) = &input.license.custom_text {
        let _ = writeln!(prompt);
        let _ = writeln!(prompt, "{}", custom_text);
    }

    let _ = writeln!(prompt);
    let _ = write!(
        prompt,
        r#"IMPORTANT INSTRUCTIONS:
1. Generate README content using ONLY the information provided above
2. DO NOT invent or add any features, technologies, or information not explicitly provided
3. DO NOT include sections that have no content provided
4. If a section has empty data, omit that section entirely
5. Never add placeholders or examples if data is missing"#
    );

    prompt
}

/// Renders the shield badge for a tech stack entry, keyed by normalized
/// technology name. Well-known technologies carry their logo; everything
/// else gets a generic version badge.
pub fn badge(entry: &TechStackEntry) -> String {
    match entry.normalized_name().as_str() {
        "react" => "![React](https://img.shields.io/badge/React-blue?logo=react)".to_string(),
        "typescript" => {
            "![TypeScript](https://img.shields.io/badge/TypeScript-blue?logo=typescript)"
                .to_string()
        }
        "next.js" | "nextjs" | "next" => {
            "![Next.js](https://img.shields.io/badge/Next.js-black?logo=next.js)".to_string()
        }
        _ => format!(
            "![{}](https://img.shields.io/badge/{}-{}-blue)",
            entry.name,
            entry.name.replace('.', "%2E"),
            entry.version
        ),
    }
}
