pub mod dependencies;
pub mod matchers;
pub mod signals;

pub use dependencies::{ManifestError, RepositoryFiles, WellKnownFile, parse_npm_dependencies};
pub use matchers::{
    DetectionSources, Rule, TechnologyMatcher, TechnologyTable, APIS, DATABASES, FRAMEWORKS,
    detect_apis, detect_databases, detect_frameworks,
};
pub use signals::{ProjectSignals, RepoMetadata, SignalExtractor, slugify};
