use anyhow::{anyhow, Result};
use base64::{Engine as _, engine::general_purpose};
use reqwest::header::ACCEPT;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::task::JoinSet;
use crate::analysis::{RepoMetadata, RepositoryFiles, WellKnownFile};
use crate::config::GitHubConfig;

const GITHUB_MEDIA_TYPE: &str = "application/vnd.github.v3+json";

/// Repository as listed by `GET /user/repos`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubRepository {
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u64,
}

impl GitHubRepository {
    pub fn metadata(&self) -> RepoMetadata {
        RepoMetadata {
            name: self.name.clone(),
            description: self.description.clone().unwrap_or_default(),
            url: self.html_url.clone(),
            popularity: self.stargazers_count,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    content: Option<String>,
}

/// Everything the signal extractor needs from one repository
#[derive(Debug, Clone)]
pub struct RepositorySnapshot {
    pub metadata: RepoMetadata,
    pub languages: Vec<String>,
    pub files: RepositoryFiles,
}

/// Thin client over the GitHub REST API. The bearer token is passed through
/// untouched.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_url: String,
    repos_per_page: u32,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(GitHubClient {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            repos_per_page: config.repos_per_page,
        })
    }

    fn get(&self, token: &str, path: &str) -> reqwest::RequestBuilder {
        self.http
            .get(format!("{}{}", self.api_url, path))
            .bearer_auth(token)
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
    }

    /// List the repositories visible to the token holder
    pub async fn list_repositories(&self, token: &str) -> Result<Vec<GitHubRepository>> {
        let path = format!("/user/repos?per_page={}", self.repos_per_page);
        let response = self.get(token, &path).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!("Failed to fetch repos: GitHub returned {}", response.status()));
        }

        Ok(response.json().await?)
    }

    /// Language names in the order GitHub reports them. Failures yield an
    /// empty list.
    pub async fn fetch_languages(&self, token: &str, full_name: &str) -> Vec<String> {
        match self.try_fetch_languages(token, full_name).await {
            Ok(languages) => languages,
            Err(e) => {
                log::warn!("Could not fetch languages for {}: {}", full_name, e);
                Vec::new()
            }
        }
    }

    async fn try_fetch_languages(&self, token: &str, full_name: &str) -> Result<Vec<String>> {
        let response = self
            .get(token, &format!("/repos/{}/languages", full_name))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!("GitHub returned {}", response.status()));
        }

        let languages: serde_json::Map<String, serde_json::Value> = response.json().await?;
        Ok(languages.keys().cloned().collect())
    }

    /// Decoded content of a well-known file, `None` when absent or unreadable
    pub async fn fetch_file(&self, token: &str, full_name: &str, file: WellKnownFile) -> Option<String> {
        match self.try_fetch_file(token, full_name, file).await {
            Ok(content) => content,
            Err(e) => {
                log::warn!("Could not fetch {} for {}: {}", file.path(), full_name, e);
                None
            }
        }
    }

    async fn try_fetch_file(&self, token: &str, full_name: &str, file: WellKnownFile) -> Result<Option<String>> {
        let response = self
            .get(token, &format!("/repos/{}/contents/{}", full_name, file.path()))
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(anyhow!("GitHub returned {}", response.status()));
        }

        let body: ContentResponse = response.json().await?;
        match body.content {
            Some(encoded) => decode_content(&encoded).map(Some),
            None => Ok(None),
        }
    }

    /// Fetch every well-known file concurrently
    pub async fn fetch_files(&self, token: &str, full_name: &str) -> RepositoryFiles {
        let mut tasks = JoinSet::new();
        for file in WellKnownFile::ALL {
            let client = self.clone();
            let token = token.to_string();
            let full_name = full_name.to_string();
            tasks.spawn(async move {
                let content = client.fetch_file(&token, &full_name, file).await;
                (file, content)
            });
        }

        let mut files = RepositoryFiles::new();
        while let Some(result) = tasks.join_next().await {
            match result {
                Ok((file, content)) => files.insert(file, content),
                Err(e) => log::warn!("File fetch task for {} failed: {}", full_name, e),
            }
        }
        files
    }

    pub async fn fetch_snapshot(&self, token: &str, repo: &GitHubRepository) -> RepositorySnapshot {
        let (languages, files) = tokio::join!(
            self.fetch_languages(token, &repo.full_name),
            self.fetch_files(token, &repo.full_name),
        );

        RepositorySnapshot {
            metadata: repo.metadata(),
            languages,
            files,
        }
    }
}

/// GitHub wraps base64 content at 60 columns
pub fn decode_content(encoded: &str) -> Result<String> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = general_purpose::STANDARD.decode(compact)?;
    Ok(String::from_utf8(bytes)?)
}
