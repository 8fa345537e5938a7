use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::{Deserialize, Serialize};
use crate::auth::OAuthClient;
use crate::config::Config;
use crate::ingestion::{GitHubClient, RepositoryScanner};

pub mod server;
pub mod auth;
pub mod scan;

pub struct ApiState {
    pub scanner: RepositoryScanner,
    pub oauth: OAuthClient,
    /// Page the OAuth callback hands the token to, relative to the origin
    pub map_page: String,
}

impl ApiState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = GitHubClient::new(&config.github)?;
        Ok(ApiState {
            scanner: RepositoryScanner::new(client, config.scan.concurrency),
            oauth: OAuthClient::new(&config.github)?,
            map_page: config.server.map_page.trim_start_matches('/').to_string(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Scheme and host the request was addressed to, e.g. `https://map.example.com`
pub fn request_origin(req: &HttpRequest) -> String {
    let info = req.connection_info();
    format!("{}://{}", info.scheme(), info.host())
}

/// Register every route on an app
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .service(
            web::scope("/api")
                .route("/auth/github", web::get().to(auth::start_oauth))
                .route("/auth/callback", web::get().to(auth::oauth_callback))
                .route("/scan", web::post().to(scan::scan_repositories))
                .route("/demo", web::get().to(scan::get_demo_graph))
                .route("/demo/stats", web::get().to(scan::get_demo_statistics)),
        );
}

// Health check endpoint
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "mios-map"
    }))
}

pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().body("Not Found")
}
