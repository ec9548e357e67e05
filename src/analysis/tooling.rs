//! Tool and framework detection from the repository file tree.
//!
//! A static registry maps each known tool to one or more glob patterns. The
//! patterns are compiled once into a process-wide index; detection is then a
//! single pass over the tree paths. A pattern containing `/` matches the full
//! path, any other pattern matches the file name.

use glob::Pattern;
use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::LazyLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, strum::Display)]
pub enum ToolCategory {
    #[strum(serialize = "Package Managers")]
    #[serde(rename = "Package Managers")]
    PackageManagers,
    Frameworks,
    Testing,
    #[strum(serialize = "Linting & Formatting")]
    #[serde(rename = "Linting & Formatting")]
    Linting,
    Monorepo,
    #[strum(serialize = "CI/CD & Deployment")]
    #[serde(rename = "CI/CD & Deployment")]
    CiCd,
    #[strum(serialize = "IDEs")]
    #[serde(rename = "IDEs")]
    Ides,
    #[strum(serialize = "AI Tools")]
    #[serde(rename = "AI Tools")]
    AiTools,
    Languages,
}

struct ToolSpec {
    name: &'static str,
    category: ToolCategory,
    patterns: &'static [&'static str],
    url: Option<&'static str>,
}

const REGISTRY: &[ToolSpec] = &[
    // Package managers
    ToolSpec { name: "npm", category: ToolCategory::PackageManagers, patterns: &["package-lock.json"], url: Some("https://www.npmjs.com") },
    ToolSpec { name: "Yarn", category: ToolCategory::PackageManagers, patterns: &["yarn.lock", ".yarnrc.yml"], url: Some("https://yarnpkg.com") },
    ToolSpec { name: "pnpm", category: ToolCategory::PackageManagers, patterns: &["pnpm-lock.yaml"], url: Some("https://pnpm.io") },
    ToolSpec { name: "Bun", category: ToolCategory::PackageManagers, patterns: &["bun.lockb", "bun.lock"], url: Some("https://bun.sh") },
    ToolSpec { name: "Cargo", category: ToolCategory::PackageManagers, patterns: &["Cargo.toml"], url: Some("https://doc.rust-lang.org/cargo") },
    ToolSpec { name: "pip", category: ToolCategory::PackageManagers, patterns: &["requirements*.txt", "setup.py"], url: Some("https://pip.pypa.io") },
    ToolSpec { name: "Poetry", category: ToolCategory::PackageManagers, patterns: &["poetry.lock"], url: Some("https://python-poetry.org") },
    ToolSpec { name: "uv", category: ToolCategory::PackageManagers, patterns: &["uv.lock"], url: Some("https://docs.astral.sh/uv") },
    ToolSpec { name: "Bundler", category: ToolCategory::PackageManagers, patterns: &["Gemfile", "Gemfile.lock"], url: Some("https://bundler.io") },
    ToolSpec { name: "Composer", category: ToolCategory::PackageManagers, patterns: &["composer.json"], url: Some("https://getcomposer.org") },
    ToolSpec { name: "Go modules", category: ToolCategory::PackageManagers, patterns: &["go.mod"], url: Some("https://go.dev/ref/mod") },
    ToolSpec { name: "Maven", category: ToolCategory::PackageManagers, patterns: &["pom.xml"], url: Some("https://maven.apache.org") },
    ToolSpec { name: "Gradle", category: ToolCategory::PackageManagers, patterns: &["build.gradle", "build.gradle.kts"], url: Some("https://gradle.org") },
    // Frameworks
    ToolSpec { name: "Next.js", category: ToolCategory::Frameworks, patterns: &["next.config.js", "next.config.mjs", "next.config.ts"], url: Some("https://nextjs.org") },
    ToolSpec { name: "Nuxt", category: ToolCategory::Frameworks, patterns: &["nuxt.config.js", "nuxt.config.ts"], url: Some("https://nuxt.com") },
    ToolSpec { name: "Vite", category: ToolCategory::Frameworks, patterns: &["vite.config.js", "vite.config.mjs", "vite.config.ts"], url: Some("https://vitejs.dev") },
    ToolSpec { name: "Svelte", category: ToolCategory::Frameworks, patterns: &["svelte.config.js"], url: Some("https://svelte.dev") },
    ToolSpec { name: "Astro", category: ToolCategory::Frameworks, patterns: &["astro.config.mjs", "astro.config.ts"], url: Some("https://astro.build") },
    ToolSpec { name: "Angular", category: ToolCategory::Frameworks, patterns: &["angular.json"], url: Some("https://angular.dev") },
    ToolSpec { name: "Remix", category: ToolCategory::Frameworks, patterns: &["remix.config.js"], url: Some("https://remix.run") },
    ToolSpec { name: "Tailwind CSS", category: ToolCategory::Frameworks, patterns: &["tailwind.config.js", "tailwind.config.ts"], url: Some("https://tailwindcss.com") },
    ToolSpec { name: "Django", category: ToolCategory::Frameworks, patterns: &["manage.py"], url: Some("https://www.djangoproject.com") },
    ToolSpec { name: "Rails", category: ToolCategory::Frameworks, patterns: &["config/application.rb"], url: Some("https://rubyonrails.org") },
    // Testing
    ToolSpec { name: "Jest", category: ToolCategory::Testing, patterns: &["jest.config.js", "jest.config.ts", "jest.config.mjs"], url: Some("https://jestjs.io") },
    ToolSpec { name: "Vitest", category: ToolCategory::Testing, patterns: &["vitest.config.js", "vitest.config.ts", "vitest.config.mts"], url: Some("https://vitest.dev") },
    ToolSpec { name: "Playwright", category: ToolCategory::Testing, patterns: &["playwright.config.js", "playwright.config.ts"], url: Some("https://playwright.dev") },
    ToolSpec { name: "Cypress", category: ToolCategory::Testing, patterns: &["cypress.config.js", "cypress.config.ts", "cypress.json"], url: Some("https://www.cypress.io") },
    ToolSpec { name: "pytest", category: ToolCategory::Testing, patterns: &["pytest.ini", "conftest.py"], url: Some("https://pytest.org") },
    ToolSpec { name: "tox", category: ToolCategory::Testing, patterns: &["tox.ini"], url: Some("https://tox.wiki") },
    // Linting and formatting
    ToolSpec { name: "ESLint", category: ToolCategory::Linting, patterns: &[".eslintrc*", "eslint.config.js", "eslint.config.mjs"], url: Some("https://eslint.org") },
    ToolSpec { name: "Prettier", category: ToolCategory::Linting, patterns: &[".prettierrc*", "prettier.config.js"], url: Some("https://prettier.io") },
    ToolSpec { name: "Biome", category: ToolCategory::Linting, patterns: &["biome.json", "biome.jsonc"], url: Some("https://biomejs.dev") },
    ToolSpec { name: "Ruff", category: ToolCategory::Linting, patterns: &["ruff.toml", ".ruff.toml"], url: Some("https://docs.astral.sh/ruff") },
    ToolSpec { name: "Black", category: ToolCategory::Linting, patterns: &[".black.toml"], url: Some("https://black.readthedocs.io") },
    ToolSpec { name: "rustfmt", category: ToolCategory::Linting, patterns: &["rustfmt.toml", ".rustfmt.toml"], url: Some("https://github.com/rust-lang/rustfmt") },
    ToolSpec { name: "Clippy", category: ToolCategory::Linting, patterns: &["clippy.toml", ".clippy.toml"], url: Some("https://doc.rust-lang.org/clippy") },
    ToolSpec { name: "EditorConfig", category: ToolCategory::Linting, patterns: &[".editorconfig"], url: Some("https://editorconfig.org") },
    ToolSpec { name: "pre-commit", category: ToolCategory::Linting, patterns: &[".pre-commit-config.yaml"], url: Some("https://pre-commit.com") },
    ToolSpec { name: "Stylelint", category: ToolCategory::Linting, patterns: &[".stylelintrc*"], url: Some("https://stylelint.io") },
    // Monorepo
    ToolSpec { name: "Turborepo", category: ToolCategory::Monorepo, patterns: &["turbo.json"], url: Some("https://turbo.build") },
    ToolSpec { name: "Nx", category: ToolCategory::Monorepo, patterns: &["nx.json"], url: Some("https://nx.dev") },
    ToolSpec { name: "Lerna", category: ToolCategory::Monorepo, patterns: &["lerna.json"], url: Some("https://lerna.js.org") },
    ToolSpec { name: "pnpm workspaces", category: ToolCategory::Monorepo, patterns: &["pnpm-workspace.yaml"], url: Some("https://pnpm.io/workspaces") },
    ToolSpec { name: "Bazel", category: ToolCategory::Monorepo, patterns: &["WORKSPACE", "WORKSPACE.bazel", "MODULE.bazel"], url: Some("https://bazel.build") },
    // CI/CD and deployment
    ToolSpec { name: "GitHub Actions", category: ToolCategory::CiCd, patterns: &[".github/workflows/*.yml", ".github/workflows/*.yaml"], url: Some("https://github.com/features/actions") },
    ToolSpec { name: "GitLab CI", category: ToolCategory::CiCd, patterns: &[".gitlab-ci.yml"], url: Some("https://docs.gitlab.com/ee/ci") },
    ToolSpec { name: "CircleCI", category: ToolCategory::CiCd, patterns: &[".circleci/config.yml"], url: Some("https://circleci.com") },
    ToolSpec { name: "Travis CI", category: ToolCategory::CiCd, patterns: &[".travis.yml"], url: Some("https://www.travis-ci.com") },
    ToolSpec { name: "Azure Pipelines", category: ToolCategory::CiCd, patterns: &["azure-pipelines.yml"], url: Some("https://azure.microsoft.com/products/devops/pipelines") },
    ToolSpec { name: "Jenkins", category: ToolCategory::CiCd, patterns: &["Jenkinsfile"], url: Some("https://www.jenkins.io") },
    ToolSpec { name: "Docker", category: ToolCategory::CiCd, patterns: &["Dockerfile", "*.dockerfile", ".dockerignore"], url: Some("https://www.docker.com") },
    ToolSpec { name: "Docker Compose", category: ToolCategory::CiCd, patterns: &["docker-compose.yml", "docker-compose.yaml", "compose.yaml"], url: Some("https://docs.docker.com/compose") },
    ToolSpec { name: "Kubernetes", category: ToolCategory::CiCd, patterns: &["k8s/*.yaml", "kubernetes/*.yaml"], url: Some("https://kubernetes.io") },
    ToolSpec { name: "Helm", category: ToolCategory::CiCd, patterns: &["Chart.yaml"], url: Some("https://helm.sh") },
    ToolSpec { name: "Terraform", category: ToolCategory::CiCd, patterns: &["*.tf"], url: Some("https://www.terraform.io") },
    ToolSpec { name: "Vercel", category: ToolCategory::CiCd, patterns: &["vercel.json"], url: Some("https://vercel.com") },
    ToolSpec { name: "Netlify", category: ToolCategory::CiCd, patterns: &["netlify.toml"], url: Some("https://www.netlify.com") },
    ToolSpec { name: "Fly.io", category: ToolCategory::CiCd, patterns: &["fly.toml"], url: Some("https://fly.io") },
    // IDEs
    ToolSpec { name: "VS Code", category: ToolCategory::Ides, patterns: &[".vscode/*"], url: Some("https://code.visualstudio.com") },
    ToolSpec { name: "JetBrains", category: ToolCategory::Ides, patterns: &[".idea/*"], url: Some("https://www.jetbrains.com") },
    ToolSpec { name: "Dev Container", category: ToolCategory::Ides, patterns: &[".devcontainer/*", ".devcontainer.json"], url: Some("https://containers.dev") },
    // AI tools
    ToolSpec { name: "Copilot instructions", category: ToolCategory::AiTools, patterns: &[".github/copilot-instructions.md"], url: Some("https://github.com/features/copilot") },
    ToolSpec { name: "Claude instructions", category: ToolCategory::AiTools, patterns: &["CLAUDE.md", ".claude/*"], url: Some("https://claude.com") },
    ToolSpec { name: "Cursor rules", category: ToolCategory::AiTools, patterns: &[".cursorrules", ".cursor/*"], url: Some("https://cursor.com") },
    ToolSpec { name: "Windsurf rules", category: ToolCategory::AiTools, patterns: &[".windsurfrules"], url: Some("https://windsurf.com") },
    // Languages (configuration-level signals)
    ToolSpec { name: "TypeScript", category: ToolCategory::Languages, patterns: &["tsconfig.json", "tsconfig.*.json"], url: Some("https://www.typescriptlang.org") },
    ToolSpec { name: "Rust toolchain", category: ToolCategory::Languages, patterns: &["rust-toolchain.toml", "rust-toolchain"], url: Some("https://rustup.rs") },
    ToolSpec { name: "Python project", category: ToolCategory::Languages, patterns: &["pyproject.toml"], url: Some("https://www.python.org") },
    ToolSpec { name: "Node version", category: ToolCategory::Languages, patterns: &[".nvmrc", ".node-version"], url: Some("https://nodejs.org") },
];

struct CompiledTool {
    spec: &'static ToolSpec,
    patterns: Vec<Pattern>,
}

/// Patterns are compiled once; the registry is static so a bad pattern is a
/// programming error.
static INDEX: LazyLock<Vec<CompiledTool>> = LazyLock::new(|| {
    REGISTRY
        .iter()
        .map(|spec| CompiledTool {
            spec,
            patterns: spec
                .patterns
                .iter()
                .map(|p| Pattern::new(p).expect("invalid glob pattern"))
                .collect(),
        })
        .collect()
});

#[derive(Debug, Clone, Serialize)]
pub struct DetectedTool {
    pub name: String,
    pub category: ToolCategory,
    pub url: Option<String>,
    /// Tree paths that triggered the detection.
    pub paths: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ToolingAnalysis {
    pub tools: Vec<DetectedTool>,
    /// Distinct categories among the detected tools.
    pub categories: Vec<String>,
}

impl ToolingAnalysis {
    #[must_use]
    pub fn has_category(&self, category: ToolCategory) -> bool {
        self.tools.iter().any(|t| t.category == category)
    }

    /// Containerization signal for the health score.
    #[must_use]
    pub fn has_container_tooling(&self) -> bool {
        self.tools
            .iter()
            .any(|t| matches!(t.name.as_str(), "Docker" | "Docker Compose" | "Kubernetes" | "Helm"))
    }
}

fn matches(pattern: &Pattern, path: &str) -> bool {
    if pattern.as_str().contains('/') {
        pattern.matches(path)
    } else {
        let name = path.rsplit('/').next().unwrap_or(path);
        pattern.matches(name)
    }
}

/// Detect tools from a flat list of repository file paths.
#[must_use]
pub fn detect_tools<S: AsRef<str>>(paths: &[S]) -> ToolingAnalysis {
    let mut tools = Vec::new();
    let mut categories = BTreeSet::new();

    for tool in INDEX.iter() {
        let matched: Vec<String> = paths
            .iter()
            .map(AsRef::as_ref)
            .filter(|path| tool.patterns.iter().any(|p| matches(p, path)))
            .map(ToOwned::to_owned)
            .collect();

        if !matched.is_empty() {
            let _ = categories.insert(tool.spec.category);
            tools.push(DetectedTool {
                name: tool.spec.name.to_owned(),
                category: tool.spec.category,
                url: tool.spec.url.map(ToOwned::to_owned),
                paths: matched,
            });
        }
    }

    ToolingAnalysis {
        tools,
        categories: categories.into_iter().map(|c| c.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lockfile_detects_npm_only() {
        let analysis = detect_tools(&["package-lock.json"]);

        assert_eq!(analysis.tools.len(), 1);
        let tool = &analysis.tools[0];
        assert_eq!(tool.name, "npm");
        assert_eq!(tool.category, ToolCategory::PackageManagers);
        assert_eq!(tool.paths, ["package-lock.json"]);
        assert_eq!(analysis.categories, ["Package Managers"]);
    }

    #[test]
    fn test_basename_pattern_matches_nested_path() {
        let analysis = detect_tools(&["services/api/Dockerfile"]);
        assert!(analysis.tools.iter().any(|t| t.name == "Docker"));
    }

    #[test]
    fn test_path_pattern_requires_directory() {
        let analysis = detect_tools(&[".github/workflows/ci.yml"]);
        assert!(analysis.tools.iter().any(|t| t.name == "GitHub Actions"));

        // The same file name outside the workflows directory is not CI config.
        let analysis = detect_tools(&["docs/ci.yml"]);
        assert!(!analysis.tools.iter().any(|t| t.name == "GitHub Actions"));
    }

    #[test]
    fn test_multiple_paths_recorded() {
        let analysis = detect_tools(&["Dockerfile", "worker.dockerfile"]);
        let docker = analysis.tools.iter().find(|t| t.name == "Docker").unwrap();
        assert_eq!(docker.paths.len(), 2);
    }

    #[test]
    fn test_wildcard_pattern() {
        let analysis = detect_tools(&[".eslintrc.json"]);
        assert!(analysis.tools.iter().any(|t| t.name == "ESLint"));
    }

    #[test]
    fn test_categories_deduplicated() {
        let analysis = detect_tools(&["package-lock.json", "yarn.lock"]);
        assert_eq!(analysis.tools.len(), 2);
        assert_eq!(analysis.categories, ["Package Managers"]);
    }

    #[test]
    fn test_empty_tree() {
        let analysis = detect_tools::<&str>(&[]);
        assert!(analysis.tools.is_empty());
        assert!(analysis.categories.is_empty());
    }

    #[test]
    fn test_has_category() {
        let analysis = detect_tools(&["jest.config.js", ".eslintrc.json"]);
        assert!(analysis.has_category(ToolCategory::Testing));
        assert!(analysis.has_category(ToolCategory::Linting));
        assert!(!analysis.has_category(ToolCategory::CiCd));
    }

    #[test]
    fn test_container_tooling() {
        let analysis = detect_tools(&["docker-compose.yml"]);
        assert!(analysis.has_container_tooling());

        let analysis = detect_tools(&["vercel.json"]);
        assert!(!analysis.has_container_tooling());
    }

    #[test]
    fn test_category_display_names() {
        assert_eq!(ToolCategory::PackageManagers.to_string(), "Package Managers");
        assert_eq!(ToolCategory::CiCd.to_string(), "CI/CD & Deployment");
        assert_eq!(ToolCategory::Linting.to_string(), "Linting & Formatting");
    }

    #[test]
    fn test_all_registry_patterns_compile() {
        // Force the lazy index; a bad pattern panics here instead of mid-run.
        assert_eq!(INDEX.len(), REGISTRY.len());
    }
}
