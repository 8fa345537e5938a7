use std::collections::HashSet;
use crate::analysis::dependencies::{parse_npm_dependencies, RepositoryFiles, WellKnownFile};

/// Maps a dependency key or substring to a canonical technology key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub pattern: &'static str,
    pub technology: &'static str,
}

const fn rule(pattern: &'static str, technology: &'static str) -> Rule {
    Rule { pattern, technology }
}

/// Detection vocabulary of one technology category.
///
/// `npm_dependencies` rules match package.json dependency keys exactly and
/// case-sensitively. `requirements` and `env_template` rules are
/// case-insensitive substring matches over the whole file.
#[derive(Debug, Clone, Copy)]
pub struct TechnologyTable {
    pub npm_dependencies: &'static [Rule],
    pub requirements: &'static [Rule],
    pub env_template: &'static [Rule],
}

pub const FRAMEWORKS: TechnologyTable = TechnologyTable {
    npm_dependencies: &[
        rule("next", "nextjs"),
        rule("react", "react"),
        rule("vue", "vue"),
        rule("tailwindcss", "tailwind"),
        rule("d3", "d3js"),
    ],
    requirements: &[
        rule("fastapi", "fastapi"),
        rule("flask", "flask"),
        rule("django", "django"),
    ],
    env_template: &[],
};

pub const APIS: TechnologyTable = TechnologyTable {
    npm_dependencies: &[
        rule("@supabase/supabase-js", "supabase-api"),
        rule("stripe", "stripe-api"),
    ],
    requirements: &[
        rule("openai", "openai-api"),
        rule("anthropic", "claude-api"),
    ],
    env_template: &[
        rule("openai", "openai-api"),
        rule("anthropic", "claude-api"),
        rule("supabase", "supabase-api"),
        rule("stripe", "stripe-api"),
    ],
};

pub const DATABASES: TechnologyTable = TechnologyTable {
    npm_dependencies: &[
        rule("pg", "postgresql"),
        rule("postgres", "postgresql"),
        rule("redis", "redis"),
        rule("mongodb", "mongodb"),
    ],
    requirements: &[
        rule("psycopg", "postgresql"),
        rule("redis", "redis"),
    ],
    env_template: &[],
};

/// The well-known files of a repository, prepared once for all matchers
#[derive(Debug, Clone, Default)]
pub struct DetectionSources {
    npm_dependencies: HashSet<String>,
    requirements: Option<String>,
    env_template: Option<String>,
}

impl DetectionSources {
    pub fn from_files(files: &RepositoryFiles) -> Self {
        let npm_dependencies = match files.get(WellKnownFile::PackageJson) {
            Some(content) => match parse_npm_dependencies(content) {
                Ok(names) => names.into_iter().collect(),
                Err(e) => {
                    log::debug!("Ignoring {}: {}", WellKnownFile::PackageJson.path(), e);
                    HashSet::new()
                }
            },
            None => HashSet::new(),
        };

        DetectionSources {
            npm_dependencies,
            requirements: files.get(WellKnownFile::RequirementsTxt).map(str::to_lowercase),
            env_template: files.get(WellKnownFile::EnvExample).map(str::to_lowercase),
        }
    }
}

pub struct TechnologyMatcher {
    table: &'static TechnologyTable,
}

impl TechnologyMatcher {
    pub fn new(table: &'static TechnologyTable) -> Self {
        TechnologyMatcher { table }
    }

    pub fn frameworks() -> Self {
        Self::new(&FRAMEWORKS)
    }

    pub fn apis() -> Self {
        Self::new(&APIS)
    }

    pub fn databases() -> Self {
        Self::new(&DATABASES)
    }

    /// Canonical keys signalled by any source, each at most once, in table
    /// order per source (package.json, requirements.txt, .env.example)
    pub fn detect(&self, sources: &DetectionSources) -> Vec<String> {
        let mut detected: Vec<String> = Vec::new();
        let mut add = |technology: &str| {
            if !detected.iter().any(|t| t == technology) {
                detected.push(technology.to_string());
            }
        };

        for rule in self.table.npm_dependencies {
            if sources.npm_dependencies.contains(rule.pattern) {
                add(rule.technology);
            }
        }

        for (text, rules) in [
            (&sources.requirements, self.table.requirements),
            (&sources.env_template, self.table.env_template),
        ] {
            if let Some(text) = text {
                for rule in rules {
                    if text.contains(rule.pattern) {
                        add(rule.technology);
                    }
                }
            }
        }

        detected
    }
}

pub fn detect_frameworks(files: &RepositoryFiles) -> Vec<String> {
    TechnologyMatcher::frameworks().detect(&DetectionSources::from_files(files))
}

pub fn detect_apis(files: &RepositoryFiles) -> Vec<String> {
    TechnologyMatcher::apis().detect(&DetectionSources::from_files(files))
}

pub fn detect_databases(files: &RepositoryFiles) -> Vec<String> {
    TechnologyMatcher::databases().detect(&DetectionSources::from_files(files))
}
