//! Deterministic local preview rendering
//!
//! Renders the structured input straight to markdown with no model call, so
//! the front end can show a live preview while the user edits the form.

use crate::analysis::ReadmeInput;
use std::fmt::Write;

/// Renders a markdown preview of the given input.
pub fn render_preview(input: &ReadmeInput) -> String {
    let info = &input.project_info;
    let mut out = String::new();

    let _ = writeln!(out, "# {}", info.name);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", info.short_description);
    let _ = writeln!(out);
    let _ = writeln!(out, "## Overview");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", info.detailed_description);

    if !input.features.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Features");
        for feature in &input.features {
            let _ = writeln!(out);
            let _ = writeln!(out, "### {}", feature.title);
            let _ = writeln!(out, "{}", feature.description);
            if let Some(example) = &feature.example {
                let _ = writeln!(out);
                let _ = writeln!(out, "**Example:**");
                let _ = writeln!(out, "```");
                let _ = writeln!(out, "{}", example);
                let _ = writeln!(out, "```");
            }
        }
    }

    if !input.tech_stack.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Tech Stack");

        // group entries by category, preserving first-seen category order
        let mut categories: Vec<(&str, Vec<String>)> = Vec::new();
        for entry in &input.tech_stack {
            let category = entry.category.as_deref().unwrap_or("Other");
            let rendered = if entry.version == "latest" {
                entry.name.clone()
            } else {
                format!("{} ({})", entry.name, entry.version)
            };
            match categories.iter_mut().find(|(c, _)| *c == category) {
                Some((_, entries)) => entries.push(rendered),
                None => categories.push((category, vec![rendered])),
            }
        }

        for (category, entries) in categories {
            let _ = writeln!(out);
            let _ = writeln!(out, "### {}", category);
            for entry in entries {
                let _ = writeln!(out, "- {}", entry);
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "## License");
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} License © {} {}",
        input.license.kind, input.license.year, input.license.author
    );
    if let Some(custom_text) = &input.license.custom_text {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", custom_text);
    }

    out
}
