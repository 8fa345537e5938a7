use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use crate::api::{ApiState, ErrorResponse};
use crate::graph::demo_graph;

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub token: Option<String>,
}

/// Scan the token holder's repositories and return the synthesized map
pub async fn scan_repositories(
    state: web::Data<ApiState>,
    body: web::Json<ScanRequest>,
) -> impl Responder {
    let token = match body.into_inner().token.filter(|t| !t.trim().is_empty()) {
        Some(token) => token,
        None => {
            return HttpResponse::Unauthorized().json(ErrorResponse {
                error: "No token provided".to_string(),
            })
        }
    };

    match state.scanner.build_map(&token).await {
        Ok(graph) => HttpResponse::Ok().json(graph),
        Err(e) => {
            log::error!("Scan failed: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

pub async fn get_demo_graph() -> impl Responder {
    HttpResponse::Ok().json(demo_graph())
}

pub async fn get_demo_statistics() -> impl Responder {
    HttpResponse::Ok().json(demo_graph().get_statistics())
}
