use serde::{Deserialize, Serialize};
use crate::analysis::dependencies::RepositoryFiles;
use crate::analysis::matchers::{DetectionSources, TechnologyMatcher};

/// Repository metadata as reported by the code host
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RepoMetadata {
    pub name: String,
    pub description: String,
    pub url: String,
    pub popularity: u64,
}

/// Normalized technology signals of one repository
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectSignals {
    pub id: String,
    pub name: String,
    pub description: String,
    pub url: String,
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub apis: Vec<String>,
    pub databases: Vec<String>,
    #[serde(rename = "stars")]
    pub popularity: u64,
}

/// Graph-safe slug: lowercase, anything outside `[a-z0-9-]` becomes `-`.
///
/// Names differing only in case or punctuation collide.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' { c } else { '-' })
        .collect()
}

pub struct SignalExtractor {
    frameworks: TechnologyMatcher,
    apis: TechnologyMatcher,
    databases: TechnologyMatcher,
}

impl SignalExtractor {
    pub fn new() -> Self {
        SignalExtractor {
            frameworks: TechnologyMatcher::frameworks(),
            apis: TechnologyMatcher::apis(),
            databases: TechnologyMatcher::databases(),
        }
    }

    pub fn extract(
        &self,
        metadata: &RepoMetadata,
        languages: &[String],
        files: &RepositoryFiles,
    ) -> ProjectSignals {
        let sources = DetectionSources::from_files(files);

        let mut normalized: Vec<String> = Vec::with_capacity(languages.len());
        for language in languages {
            let language = language.to_lowercase();
            if !normalized.contains(&language) {
                normalized.push(language);
            }
        }

        ProjectSignals {
            id: slugify(&metadata.name),
            name: metadata.name.clone(),
            description: metadata.description.clone(),
            url: metadata.url.clone(),
            languages: normalized,
            frameworks: self.frameworks.detect(&sources),
            apis: self.apis.detect(&sources),
            databases: self.databases.detect(&sources),
            popularity: metadata.popularity,
        }
    }
}

impl Default for SignalExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::dependencies::WellKnownFile;

    fn metadata(name: &str) -> RepoMetadata {
        RepoMetadata {
            name: name.to_string(),
            description: "Storefront".to_string(),
            url: format!("https://github.com/acme/{}", name),
            popularity: 42,
        }
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("My_Repo.v2"), "my-repo-v2");
        assert_eq!(slugify("already-fine-123"), "already-fine-123");
        assert_eq!(slugify("Héllo World"), "h-llo-world");
        // One dash per character, astral ones included
        assert_eq!(slugify("rocket🚀app"), "rocket-app");
        // Collisions are accepted
        assert_eq!(slugify("a.b"), slugify("A_B"));
    }

    #[test]
    fn test_extract_full_signals() {
        let files = RepositoryFiles::new()
            .with(WellKnownFile::PackageJson, r#"{
                "dependencies": { "next": "14.1.0", "react": "18.2.0", "@supabase/supabase-js": "2.39.0", "pg": "8.11.0" },
                "devDependencies": { "tailwindcss": "3.4.1" }
            }"#)
            .with(WellKnownFile::EnvExample, "STRIPE_SECRET_KEY=\n");
        let languages = vec!["TypeScript".to_string(), "CSS".to_string(), "JavaScript".to_string()];

        let signals = SignalExtractor::new().extract(&metadata("Web.Store"), &languages, &files);

        assert_eq!(signals.id, "web-store");
        assert_eq!(signals.name, "Web.Store");
        assert_eq!(signals.description, "Storefront");
        assert_eq!(signals.url, "https://github.com/acme/Web.Store");
        assert_eq!(signals.popularity, 42);
        assert_eq!(signals.languages, vec!["typescript", "css", "javascript"]);
        assert_eq!(signals.frameworks, vec!["nextjs", "react", "tailwind"]);
        assert_eq!(signals.apis, vec!["supabase-api", "stripe-api"]);
        assert_eq!(signals.databases, vec!["postgresql"]);
    }

    #[test]
    fn test_extract_with_no_files() {
        let signals = SignalExtractor::new().extract(&metadata("empty"), &[], &RepositoryFiles::new());

        assert_eq!(signals.id, "empty");
        assert!(signals.languages.is_empty());
        assert!(signals.frameworks.is_empty());
        assert!(signals.apis.is_empty());
        assert!(signals.databases.is_empty());
    }

    #[test]
    fn test_malformed_manifest_degrades_to_other_signals() {
        let files = RepositoryFiles::new()
            .with(WellKnownFile::PackageJson, "{\"dependencies\": {\"react\": ")
            .with(WellKnownFile::RequirementsTxt, "flask==3.0\nanthropic==0.18\nredis\n");
        let languages = vec!["Python".to_string()];

        let signals = SignalExtractor::new().extract(&metadata("api"), &languages, &files);

        assert_eq!(signals.languages, vec!["python"]);
        assert_eq!(signals.frameworks, vec!["flask"]);
        assert_eq!(signals.apis, vec!["claude-api"]);
        assert_eq!(signals.databases, vec!["redis"]);
    }

    #[test]
    fn test_languages_collapse_after_lowercasing() {
        let languages = vec!["Go".to_string(), "GO".to_string(), "Shell".to_string()];
        let signals = SignalExtractor::new().extract(&metadata("svc"), &languages, &RepositoryFiles::new());
        assert_eq!(signals.languages, vec!["go", "shell"]);
    }

    #[test]
    fn test_popularity_serializes_as_stars() {
        let signals = SignalExtractor::new().extract(&metadata("svc"), &[], &RepositoryFiles::new());
        let json = serde_json::to_value(&signals).unwrap();
        assert_eq!(json["stars"], 42);
        assert!(json.get("popularity").is_none());
    }
}
