use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub github: GitHubConfig,
    pub scan: ScanConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    /// Page the OAuth callback redirects to once a token is obtained
    pub map_page: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub api_url: String,
    pub oauth_url: String,
    pub user_agent: String,
    pub repos_per_page: u32,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    pub concurrency: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub log_level: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        GitHubConfig {
            client_id: None,
            client_secret: None,
            api_url: "https://api.github.com".to_string(),
            oauth_url: "https://github.com".to_string(),
            user_agent: "MIOS-Map".to_string(),
            repos_per_page: 100,
            timeout_secs: 30,
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig { concurrency: 8 }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        // Load .env.local first (local overrides), then .env
        dotenv::from_filename(".env.local").ok();
        dotenv::dotenv().ok();

        let github_defaults = GitHubConfig::default();
        let scan_defaults = ScanConfig::default();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_var("PORT", 8080),
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                map_page: env::var("MAP_PAGE").unwrap_or_else(|_| "index-v2.html".to_string()),
            },
            github: GitHubConfig {
                client_id: non_empty_var("GITHUB_CLIENT_ID"),
                client_secret: non_empty_var("GITHUB_CLIENT_SECRET"),
                api_url: env::var("GITHUB_API_URL").unwrap_or(github_defaults.api_url),
                oauth_url: env::var("GITHUB_OAUTH_URL").unwrap_or(github_defaults.oauth_url),
                user_agent: env::var("GITHUB_USER_AGENT").unwrap_or(github_defaults.user_agent),
                repos_per_page: parse_var("GITHUB_REPOS_PER_PAGE", github_defaults.repos_per_page),
                timeout_secs: parse_var("HTTP_TIMEOUT_SECS", github_defaults.timeout_secs),
            },
            scan: ScanConfig {
                concurrency: parse_var("SCAN_CONCURRENCY", scan_defaults.concurrency).max(1),
            },
            logging: LoggingConfig {
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            },
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
