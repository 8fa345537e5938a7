pub mod github;
pub mod scanner;

pub use github::{GitHubClient, GitHubRepository, RepositorySnapshot, decode_content};
pub use scanner::RepositoryScanner;
