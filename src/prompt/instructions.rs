//! Dialect-specific extraction instructions
//!
//! Each manifest dialect defines its own syntax for declaring dependencies,
//! resolving version strings, and (where applicable) install/usage
//! commands. [`extraction_instructions`] is the single dispatch point: one
//! instruction block per [`ManifestKind`], with a generic fallback.

use crate::manifest::ManifestKind;

/// Returns the extraction instruction block for a classified manifest.
pub fn extraction_instructions(kind: ManifestKind) -> &'static str {
    match kind {
        ManifestKind::Npm => NPM_INSTRUCTIONS,
        ManifestKind::Cargo => CARGO_INSTRUCTIONS,
        ManifestKind::Gradle => GRADLE_INSTRUCTIONS,
        ManifestKind::Maven => MAVEN_INSTRUCTIONS,
        ManifestKind::Python => PYTHON_INSTRUCTIONS,
        ManifestKind::Go => GO_INSTRUCTIONS,
        ManifestKind::Ruby => RUBY_INSTRUCTIONS,
        ManifestKind::Php => PHP_INSTRUCTIONS,
        ManifestKind::DartPub => DART_INSTRUCTIONS,
        ManifestKind::Clojure => CLOJURE_INSTRUCTIONS,
        ManifestKind::Sbt => SBT_INSTRUCTIONS,
        ManifestKind::CMake => CMAKE_INSTRUCTIONS,
        ManifestKind::Docker => DOCKER_INSTRUCTIONS,
        ManifestKind::Generic => GENERIC_INSTRUCTIONS,
    }
}

const GENERIC_INSTRUCTIONS: &str = r#"GENERAL INSTRUCTIONS FOR ALL FILE TYPES:
When no specific file type is detected, follow these rules for dependency extraction:

1. Dependencies Detection:
   - Look for any import statements, require() calls, or library references
   - Extract library/package names and their versions if specified
   - Always include both name and version in the output
   - If version is not specified, use "latest" as the version

2. Version Pattern Recognition:
   - Look for version strings in formats like: X.Y.Z, vX.Y.Z, X.Y
   - Version might appear after symbols like @, =, >=, ~, ^
   - For semantic versioning with range specifiers, use the minimum allowed version"#;

const NPM_INSTRUCTIONS: &str = r#"SPECIFIC INSTRUCTIONS FOR NPM PROJECT:
When analyzing this package.json file, follow these specific rules:

1. Dependencies:
   - Extract all entries from the "dependencies" object
     Name: the key in the dependencies object
     Version: the version string value (e.g., "^1.2.3", "~2.0.0", "latest")
   - Extract entries from "devDependencies" and "peerDependencies" in the same format
   - For git repository dependencies, use the repository name and the commit hash or tag as the version

2. Version extraction:
   - Preserve the version from the manifest; range prefixes (^, ~, >=) resolve to the minimum allowed version
   - For repository URLs, extract the version from the URL fragment (#) if available

3. Installation commands:
   - Include "npm install"
   - If there's a build script in "scripts", include "npm run build"

4. Usage examples:
   - Extract from the "scripts" section (especially "start", "dev", "serve")
   - Format as "npm run [script-name]""#;

const CARGO_INSTRUCTIONS: &str = r#"SPECIFIC INSTRUCTIONS FOR RUST PROJECT:
When analyzing this Cargo.toml file, follow these specific rules:

1. Dependencies:
   - Extract from the [dependencies] section, listed as:
     - Simple version: package_name = "version"
     - Complex form: package_name = { version = "version", features = [...] }
   - Also check [dev-dependencies], [build-dependencies], and [workspace.dependencies]

2. Version extraction:
   - For simple version strings, use the version without range operators
   - For complex specifications, extract the "version" field
   - For git dependencies, use the branch, tag, or rev value; version-like tags ("v1.2.3") become "1.2.3"
   - For path dependencies, use "local" as the version

3. Installation commands:
   - Include "cargo build"
   - Include "cargo install --path ." if the manifest declares a binary target

4. Usage examples:
   - For binary crates: "cargo run"
   - For library crates: how to add the crate as a dependency"#;

const GRADLE_INSTRUCTIONS: &str = r#"SPECIFIC INSTRUCTIONS FOR GRADLE PROJECT:
When analyzing this Gradle build file, follow these specific rules:

1. Dependencies:
   - Extract from implementation(), api(), compile(), testImplementation() calls
   - Maven coordinates follow group:name:version
     Name: the middle part (e.g., 'retrofit' from 'com.squareup.retrofit2:retrofit:2.9.0')
     Version: the last part (e.g., '2.9.0')
   - For Kotlin DSL, look inside dependencies {} blocks; also check buildscript dependencies

2. Version extraction:
   - For version variables, look for ext declarations and version catalog references
   - If a version is a property reference that cannot be resolved, use "variable-reference"

3. Installation commands:
   - Include "./gradlew build" or "gradle build"

4. Usage examples:
   - Include "./gradlew run" if the 'application' plugin is applied"#;

const MAVEN_INSTRUCTIONS: &str = r#"SPECIFIC INSTRUCTIONS FOR MAVEN PROJECT:
When analyzing this Maven POM file, follow these specific rules:

1. Dependencies:
   - Extract from the <dependencies> section
   - For each <dependency> element:
     Name: value of <artifactId>
     Version: value of <version>
   - Check the <dependencyManagement> section as well

2. Version extraction:
   - For property references like ${version.library}, look up the <properties> section
     If the property is not found, use "property-reference"
   - For versions inherited from a parent POM, use "managed-version"

3. Installation commands:
   - Include "mvn clean install"
   - Include "mvn package" if <packaging> is jar or war

4. Usage examples:
   - Include "java -jar target/[artifactId]-[version].jar" if packaging is jar"#;

const PYTHON_INSTRUCTIONS: &str = r#"SPECIFIC INSTRUCTIONS FOR PYTHON PROJECT:
When analyzing this Python project file, follow these specific rules:

1. Dependencies:
   - For requirements.txt: each line is a package; name before any comparison
     operator, version after it
   - For setup.py: extract from install_requires and extras_require
   - For pyproject.toml: extract from [project.dependencies] or tool-specific
     dependency tables

2. Version extraction:
   - "requests==2.28.1" -> name: "requests", version: "2.28.1"
   - "flask>=2.0.0" -> name: "flask", version: "2.0.0"
   - "django" -> name: "django", version: "latest"
   - For multiple constraints, use the most restrictive version

3. Installation commands:
   - Include "pip install -r requirements.txt" for requirements files
   - Include "pip install ." or "pip install -e ." for setup.py

4. Usage examples:
   - Look for entry points or console scripts; if it's a package, include "import [package_name]""#;

const GO_INSTRUCTIONS: &str = r#"SPECIFIC INSTRUCTIONS FOR GO PROJECT:
When analyzing this go.mod file, follow these specific rules:

1. Dependencies:
   - Extract from "require" statements or blocks:
     require github.com/package/name v1.2.3
   - Use the full module path as the name
   - Check "replace" directives for substituted dependencies

2. Version extraction:
   - Versions are prefixed with 'v'; extract without the prefix ("v1.2.3" -> "1.2.3")
   - For pseudo-versions, extract as-is without the 'v'
   - Include dependencies marked // indirect as well

3. Installation commands:
   - Include "go mod download" and "go build"

4. Usage examples:
   - For executables: "go run ."
   - For packages: how to import the module path"#;

const RUBY_INSTRUCTIONS: &str = r#"SPECIFIC INSTRUCTIONS FOR RUBY PROJECT:
When analyzing this Gemfile, follow these specific rules:

1. Dependencies:
   - Extract from "gem" statements:
     gem 'name', 'version'  or  gem 'name', '>= 1.0', '< 2.0'
   - Note groups (development, test, production) but include all gems

2. Version extraction:
   - For constraints like '>= 1.0', use the version part ("1.0")
   - For multiple constraints, use the most restrictive version
   - For gems without a version, use "latest"
   - For git sources, use the branch/tag/ref; for path sources, use "local"

3. Installation commands:
   - Include "bundle install"

4. Usage examples:
   - For Rails apps: "bundle exec rails server"
   - For executables: "bundle exec [executable]""#;

const PHP_INSTRUCTIONS: &str = r#"SPECIFIC INSTRUCTIONS FOR PHP PROJECT:
When analyzing this composer.json file, follow these specific rules:

1. Dependencies:
   - Extract from the "require" object: "vendor/package": "version constraint"
   - Also check "require-dev"
   - Use vendor/package as the name

2. Version extraction:
   - For simple constraints, use the version part ("1.2.3" from "^1.2.3")
   - For range constraints, use the lower bound ("2.0" from ">=2.0 <3.0")
   - For dev-master or dev-branch, use "dev"

3. Installation commands:
   - Include "composer install"
   - Include scripts defined in the "scripts" section

4. Usage examples:
   - For applications: how the application is started
   - For libraries: how to require the package"#;

const DART_INSTRUCTIONS: &str = r#"SPECIFIC INSTRUCTIONS FOR DART/FLUTTER PROJECT:
When analyzing this pubspec.yaml file, follow these specific rules:

1. Dependencies:
   - Extract from the "dependencies:" section:
     package_name: ^1.2.3  or  package_name: {git: {url: ..., ref: ...}}
   - Also check "dev_dependencies:"

2. Version extraction:
   - For caret constraints, use the version without the caret ("1.2.3" from "^1.2.3")
   - For git packages, use the branch/tag/commit; for path packages, use "local"
   - For SDK packages, use the SDK constraint

3. Installation commands:
   - For Flutter: "flutter pub get"; for Dart: "dart pub get"

4. Usage examples:
   - For Flutter apps: "flutter run"; for Dart apps: "dart run""#;

const CLOJURE_INSTRUCTIONS: &str = r#"SPECIFIC INSTRUCTIONS FOR CLOJURE PROJECT:
When analyzing this project.clj file, follow these specific rules:

1. Dependencies:
   - Extract from the :dependencies vector: [org.package/name "version"]
   - Also check :dev-dependencies and :profiles/:dev/:dependencies
   - Use org.package/name as the name

2. Version extraction:
   - Use the exact version string; keep SNAPSHOT suffixes
   - For version ranges, use the lower bound

3. Installation commands:
   - Include "lein deps"; include "lein uberjar" for creating JARs

4. Usage examples:
   - For applications: "lein run"; for REPLs: "lein repl""#;

const SBT_INSTRUCTIONS: &str = r#"SPECIFIC INSTRUCTIONS FOR SCALA PROJECT:
When analyzing this SBT build file, follow these specific rules:

1. Dependencies:
   - Extract from "libraryDependencies":
     "org.package" %% "name" % "version"
   - Note configuration scopes (Test, Provided) but include all entries

2. Version extraction:
   - For version variables, look for val statements defining the version
   - For version ranges, use the lower bound

3. Installation commands:
   - Include "sbt update" and "sbt compile"

4. Usage examples:
   - For applications: "sbt run"; for tests: "sbt test""#;

const CMAKE_INSTRUCTIONS: &str = r#"SPECIFIC INSTRUCTIONS FOR CMAKE PROJECT:
When analyzing this CMake file, follow these specific rules:

1. Dependencies:
   - Extract from find_package() calls:
     find_package(<PackageName> [<version>] [REQUIRED] [COMPONENTS ...])
     The package name is the first argument; version is the second when specified
   - For find_package with NAMES (e.g., NAMES Qt6 Qt5), extract the package
     family base name and represent the listed versions as a range
   - Extract from FetchContent_Declare() calls (version from GIT_TAG)
   - Extract from ExternalProject_Add() calls (version from URL or GIT_TAG)
   - Extract library names from target_link_libraries(); for namespaced
     syntax (::), use the name before the ::

2. Version extraction:
   - For GIT_TAG with version tags, extract the version ("v1.2.3" -> "1.2.3")
   - For GIT_TAG with commit hashes, use the first 7 characters of the hash
   - For version ranges (1.65...1.72), use the minimum version
   - If no version is found, use "latest"

3. Installation commands:
   - Include the standard CMake build sequence only when the file defines
     install targets:
     cmake -B build -S .
     cmake --build build
     cmake --install build

4. Usage examples:
   - For library projects (add_library/install present), show how to
     find_package and target_link_libraries against the library
   - For executables, include ./build/[executable_name]"#;

const DOCKER_INSTRUCTIONS: &str = r#"SPECIFIC INSTRUCTIONS FOR DOCKERFILE:
When analyzing this Dockerfile, follow these specific rules:

1. Dependencies:
   - Extract base images from FROM statements (e.g., FROM node:14-alpine):
     name "node", version "14-alpine"
   - Extract packages installed via package managers:
     apt-get install, apk add, npm install, pip install
   - For multi-stage builds, extract dependencies from each stage

2. Version extraction:
   - For base images, use the tag; if no tag is given, use "latest"
   - For pinned packages (package=version, package@version, package==version),
     use the pinned version; otherwise "latest"

3. Installation commands:
   - Include "docker build -t imagename ."

4. Usage examples:
   - Include "docker run imagename", with exposed ports when declared
     (e.g., "docker run -p 8080:80 imagename")"#;
