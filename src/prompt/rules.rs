//! Shared analysis rule blocks
//!
//! These blocks are included in every analysis prompt regardless of the
//! manifest dialect. Wording is load-bearing: the downstream model is held
//! to these rules by instruction only, so they are explicit about what must
//! never be invented.

/// License analysis rules: the closed type enum, where to look for
/// evidence, and the Custom fallback.
pub const LICENSE_RULES: &str = r#"1. License Analysis:
   Valid license types are strictly limited to:
   - MIT
   - Apache-2.0
   - GPL-3.0
   - BSD-3-Clause
   - ISC
   - Custom

   Look for license information in:
   - package.json license field
   - LICENSE or LICENSE.md files
   - README license sections
   - Source file headers

   If found, extract:
   - Exact license type (must match one of the above)
   - Copyright holder (author)
   - Copyright year
   - For ambiguous cases, use "Custom""#;

/// Feature phrasing rules: short, action-oriented, no filler.
pub const FEATURE_RULES: &str = r#"2. Feature analysis rules:
   Extract key functionality as brief phrases:
   GOOD:
   - "markdown rendering"
   - "file upload"
   - "user auth"
   - "data visualization"
   - "i18n support"

   BAD:
   - "implements markdown rendering functionality"
   - "provides user authentication system"
   - "handles file uploading mechanism"

3. Keep feature descriptions:
   - Maximum 2-3 words
   - Action-oriented
   - No articles (a, an, the)
   - No helper verbs
   - No technical details"#;

/// Dependency extraction rules: always name plus version, "latest" when
/// unresolvable, and an explicit warning against fabrication.
pub const DEPENDENCY_RULES: &str = r#"4. Dependencies and Installation:
   - For each dependency found, ALWAYS extract both name AND version
   - If version is not explicitly specified, use "latest" as the version
   - For dependencies with variable references, try to resolve the actual version value
   - Dependencies must always be returned in the format: { "name": "dependency-name", "version": "specific-version" }
   - NEVER invent dependencies that are not present in the file content
   - Installation as clear commands, only when explicitly defined in the file
   - Usage as example commands, only when explicit evidence exists"#;

/// Installation extraction rules shared by all dialects.
pub const INSTALLATION_RULES: &str = r#"5. Installation Instructions:
   - ONLY extract installation commands that are EXPLICITLY defined in the file
   - DO NOT infer or guess installation steps that aren't clearly specified
   - If no clear installation commands are found, return an empty array
   - Only include concrete commands, not explanatory text
   - Extract commands in the correct execution order"#;

/// Usage extraction rules shared by all dialects.
pub const USAGE_RULES: &str = r#"6. Usage Examples:
   - Extract only verifiable integration/linking examples for the library or project
   - For libraries, focus on how to include/link them in other projects
   - DO NOT guess or infer the API usage details without explicit evidence
   - Each command or code statement should be on its own line
   - If no clear integration instructions are found, return an empty array"#;

/// Closing compliance block reiterating the output contract.
pub const COMPLIANCE_RULES: &str = r#"IMPORTANT:
- License type must be exactly one of the specified values
- Keep features extremely concise
- Strip unnecessary words
- Do not fabricate dependencies, installation steps, or usage examples
- Maintain JSON format
- No additional text"#;
