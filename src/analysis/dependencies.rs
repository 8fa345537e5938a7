use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Files fetched from every repository. Adding an ecosystem means adding a
/// variant here and rows to the matcher tables.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WellKnownFile {
    PackageJson,
    RequirementsTxt,
    EnvExample,
}

impl WellKnownFile {
    pub const ALL: [WellKnownFile; 3] = [
        WellKnownFile::PackageJson,
        WellKnownFile::RequirementsTxt,
        WellKnownFile::EnvExample,
    ];

    /// Path of the file relative to the repository root
    pub fn path(&self) -> &'static str {
        match self {
            WellKnownFile::PackageJson => "package.json",
            WellKnownFile::RequirementsTxt => "requirements.txt",
            WellKnownFile::EnvExample => ".env.example",
        }
    }
}

/// Contents of the well-known files of one repository. A file missing from
/// the map is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryFiles {
    contents: HashMap<WellKnownFile, String>,
}

impl RepositoryFiles {
    pub fn new() -> Self {
        RepositoryFiles::default()
    }

    pub fn with(mut self, file: WellKnownFile, content: impl Into<String>) -> Self {
        self.contents.insert(file, content.into());
        self
    }

    /// Record a fetch result; `None` marks the file absent
    pub fn insert(&mut self, file: WellKnownFile, content: Option<String>) {
        match content {
            Some(content) => {
                self.contents.insert(file, content);
            }
            None => {
                self.contents.remove(&file);
            }
        }
    }

    pub fn get(&self, file: WellKnownFile) -> Option<&str> {
        self.contents.get(&file).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("malformed package manifest: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("package manifest is not a JSON object")]
    NotAnObject,
}

/// Dependency names declared by package.json, runtime section first, then
/// dev. Non-object sections contribute nothing.
pub fn parse_npm_dependencies(content: &str) -> Result<Vec<String>, ManifestError> {
    let json: serde_json::Value = serde_json::from_str(content)?;
    let manifest = json.as_object().ok_or(ManifestError::NotAnObject)?;

    let mut names: Vec<String> = Vec::new();
    for section in ["dependencies", "devDependencies"] {
        if let Some(deps) = manifest.get(section).and_then(|v| v.as_object()) {
            for name in deps.keys() {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }
    }

    Ok(names)
}
