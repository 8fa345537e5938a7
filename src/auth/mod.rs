use reqwest::header::ACCEPT;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use crate::config::GitHubConfig;

#[derive(Debug, Error)]
pub enum OAuthError {
    #[error("GitHub OAuth client credentials are not configured")]
    NotConfigured,
    #[error("GitHub rejected the authorization code: {0}")]
    Rejected(String),
    #[error("token exchange failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid OAuth URL: {0}")]
    InvalidUrl(String),
}

#[derive(Debug, Serialize)]
struct TokenRequest<'a> {
    client_id: &'a str,
    client_secret: &'a str,
    code: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

/// GitHub App web flow: redirect to GitHub, then trade the returned code for
/// an access token
#[derive(Debug, Clone)]
pub struct OAuthClient {
    http: reqwest::Client,
    oauth_url: String,
    client_id: Option<String>,
    client_secret: Option<String>,
}

impl OAuthClient {
    pub fn new(config: &GitHubConfig) -> Result<Self, OAuthError> {
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(OAuthClient {
            http,
            oauth_url: config.oauth_url.trim_end_matches('/').to_string(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        })
    }

    fn credentials(&self) -> Result<(&str, &str), OAuthError> {
        match (&self.client_id, &self.client_secret) {
            (Some(id), Some(secret)) => Ok((id.as_str(), secret.as_str())),
            _ => Err(OAuthError::NotConfigured),
        }
    }

    /// Permissions come from the GitHub App settings, so no scope is requested
    pub fn authorize_url(&self, redirect_uri: &str) -> Result<String, OAuthError> {
        let client_id = self.client_id.as_deref().ok_or(OAuthError::NotConfigured)?;
        let url = Url::parse_with_params(
            &format!("{}/login/oauth/authorize", self.oauth_url),
            &[("client_id", client_id), ("redirect_uri", redirect_uri)],
        )
        .map_err(|e| OAuthError::InvalidUrl(e.to_string()))?;
        Ok(url.to_string())
    }

    pub async fn exchange_code(&self, code: &str) -> Result<String, OAuthError> {
        let (client_id, client_secret) = self.credentials()?;

        let response: TokenResponse = self
            .http
            .post(format!("{}/login/oauth/access_token", self.oauth_url))
            .header(ACCEPT, "application/json")
            .json(&TokenRequest { client_id, client_secret, code })
            .send()
            .await?
            .json()
            .await?;

        if let Some(error) = response.error {
            let detail = match response.error_description {
                Some(description) => format!("{} ({})", error, description),
                None => error,
            };
            return Err(OAuthError::Rejected(detail));
        }

        response
            .access_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| OAuthError::Rejected("no access token in response".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(client_id: Option<&str>, client_secret: Option<&str>) -> GitHubConfig {
        GitHubConfig {
            client_id: client_id.map(String::from),
            client_secret: client_secret.map(String::from),
            ..GitHubConfig::default()
        }
    }

    #[test]
    fn test_authorize_url_encodes_redirect() {
        let client = OAuthClient::new(&config(Some("Iv1.abc"), Some("shh"))).unwrap();
        let url = client.authorize_url("https://map.example.com/api/auth/callback").unwrap();

        assert_eq!(
            url,
            "https://github.com/login/oauth/authorize?client_id=Iv1.abc&redirect_uri=https%3A%2F%2Fmap.example.com%2Fapi%2Fauth%2Fcallback"
        );
    }

    #[test]
    fn test_missing_client_id_is_not_configured() {
        let client = OAuthClient::new(&config(None, None)).unwrap();
        assert!(matches!(
            client.authorize_url("http://localhost/api/auth/callback"),
            Err(OAuthError::NotConfigured)
        ));
    }
}
