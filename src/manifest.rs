//! Manifest file classification
//!
//! Maps an uploaded file name to one of the known manifest dialects so that
//! the analysis prompt can include extraction rules tailored to that format.
//! Classification is purely name-based: the file content is never inspected
//! here, and unknown names fall back to [`ManifestKind::Generic`].

use std::fmt;

/// A recognized manifest dialect.
///
/// Lock files classify to their ecosystem's dialect (a `yarn.lock` is
/// analyzed with the same rules as a `package.json`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ManifestKind {
    /// package.json and JavaScript lock files
    Npm,
    /// Cargo.toml / Cargo.lock
    Cargo,
    /// build.gradle, build.gradle.kts
    Gradle,
    /// pom.xml
    Maven,
    /// requirements.txt, setup.py, pyproject.toml
    Python,
    /// go.mod / go.sum
    Go,
    /// Gemfile / Gemfile.lock
    Ruby,
    /// composer.json / composer.lock
    Php,
    /// pubspec.yaml
    DartPub,
    /// project.clj
    Clojure,
    /// *.sbt build definitions
    Sbt,
    /// CMakeLists.txt, *.cmake
    CMake,
    /// Dockerfile
    Docker,
    /// Anything not matched above
    Generic,
}

impl ManifestKind {
    /// Human-readable dialect name, used in prompt text and logs.
    pub fn label(&self) -> &'static str {
        match self {
            ManifestKind::Npm => "npm package manifest",
            ManifestKind::Cargo => "Cargo manifest",
            ManifestKind::Gradle => "Gradle build script",
            ManifestKind::Maven => "Maven POM",
            ManifestKind::Python => "Python project file",
            ManifestKind::Go => "Go module file",
            ManifestKind::Ruby => "Ruby Gemfile",
            ManifestKind::Php => "Composer manifest",
            ManifestKind::DartPub => "Dart pubspec",
            ManifestKind::Clojure => "Leiningen project file",
            ManifestKind::Sbt => "SBT build definition",
            ManifestKind::CMake => "CMake build file",
            ManifestKind::Docker => "Dockerfile",
            ManifestKind::Generic => "project file",
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a file name into a [`ManifestKind`].
///
/// Matching is case-insensitive and total: any name that is not in the
/// known-dialect table classifies as [`ManifestKind::Generic`]. Paths are
/// accepted; only the final component is considered.
pub fn classify(file_name: &str) -> ManifestKind {
    let name = file_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(file_name)
        .to_lowercase();

    match name.as_str() {
        "package.json" | "package-lock.json" | "yarn.lock" | "pnpm-lock.yaml" | "bun.lockb" => {
            return ManifestKind::Npm;
        }
        "cargo.toml" | "cargo.lock" => return ManifestKind::Cargo,
        "pom.xml" => return ManifestKind::Maven,
        "requirements.txt" | "setup.py" | "pyproject.toml" => return ManifestKind::Python,
        "go.mod" | "go.sum" => return ManifestKind::Go,
        "gemfile" | "gemfile.lock" => return ManifestKind::Ruby,
        "composer.json" | "composer.lock" => return ManifestKind::Php,
        "pubspec.yaml" | "pubspec.yml" => return ManifestKind::DartPub,
        "project.clj" => return ManifestKind::Clojure,
        "sbt.build" => return ManifestKind::Sbt,
        "cmakelists.txt" => return ManifestKind::CMake,
        "dockerfile" => return ManifestKind::Docker,
        _ => {}
    }

    if name.ends_with(".gradle") || name.ends_with(".gradle.kts") {
        ManifestKind::Gradle
    } else if name.ends_with(".sbt") {
        ManifestKind::Sbt
    } else if name.ends_with(".cmake") {
        ManifestKind::CMake
    } else if name.ends_with(".dockerfile") {
        ManifestKind::Docker
    } else {
        ManifestKind::Generic
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yare::parameterized;

    #[parameterized(
        package_json = { "package.json", ManifestKind::Npm },
        package_lock = { "package-lock.json", ManifestKind::Npm },
        yarn_lock = { "yarn.lock", ManifestKind::Npm },
        pnpm_lock = { "pnpm-lock.yaml", ManifestKind::Npm },
        bun_lock = { "bun.lockb", ManifestKind::Npm },
        cargo_toml = { "Cargo.toml", ManifestKind::Cargo },
        cargo_lock = { "Cargo.lock", ManifestKind::Cargo },
        gradle = { "build.gradle", ManifestKind::Gradle },
        gradle_kts = { "build.gradle.kts", ManifestKind::Gradle },
        pom = { "pom.xml", ManifestKind::Maven },
        requirements = { "requirements.txt", ManifestKind::Python },
        setup_py = { "setup.py", ManifestKind::Python },
        pyproject = { "pyproject.toml", ManifestKind::Python },
        go_mod = { "go.mod", ManifestKind::Go },
        gemfile = { "Gemfile", ManifestKind::Ruby },
        composer = { "composer.json", ManifestKind::Php },
        pubspec = { "pubspec.yaml", ManifestKind::DartPub },
        project_clj = { "project.clj", ManifestKind::Clojure },
        sbt = { "build.sbt", ManifestKind::Sbt },
        cmake = { "CMakeLists.txt", ManifestKind::CMake },
        cmake_module = { "FindBoost.cmake", ManifestKind::CMake },
        dockerfile = { "Dockerfile", ManifestKind::Docker },
        readme = { "README.md", ManifestKind::Generic },
        source_file = { "main.rs", ManifestKind::Generic },
        empty = { "", ManifestKind::Generic },
    )]
    fn classifies(file_name: &str, expected: ManifestKind) {
        assert_eq!(classify(file_name), expected);
    }

    #[test]
    fn classification_is_case_insensitive() {
        assert_eq!(classify("PACKAGE.JSON"), ManifestKind::Npm);
        assert_eq!(classify("DOCKERFILE"), ManifestKind::Docker);
        assert_eq!(classify("GEMFILE"), ManifestKind::Ruby);
    }

    #[test]
    fn classification_uses_final_path_component() {
        assert_eq!(classify("backend/Cargo.toml"), ManifestKind::Cargo);
        assert_eq!(classify("app\\package.json"), ManifestKind::Npm);
        assert_eq!(classify("docker/app.dockerfile"), ManifestKind::Docker);
    }

    #[test]
    fn unknown_names_never_panic() {
        for name in ["...", "no extension", "☃.yaml", "a/b/c"] {
            let _ = classify(name);
        }
    }
}
