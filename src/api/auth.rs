use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse, Responder};
use serde::Deserialize;
use crate::api::{request_origin, ApiState};
use crate::auth::OAuthError;

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
}

fn redirect(location: String) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn error_redirect(origin: &str, error: &str) -> HttpResponse {
    redirect(format!("{}/?error={}", origin, error))
}

/// Send the browser to GitHub's authorization page
pub async fn start_oauth(state: web::Data<ApiState>, req: HttpRequest) -> impl Responder {
    let origin = request_origin(&req);
    let redirect_uri = format!("{}/api/auth/callback", origin);

    match state.oauth.authorize_url(&redirect_uri) {
        Ok(url) => redirect(url),
        Err(e) => {
            log::error!("Cannot start OAuth flow: {}", e);
            error_redirect(&origin, "server_error")
        }
    }
}

/// Exchange the authorization code and hand the token to the map page
pub async fn oauth_callback(
    state: web::Data<ApiState>,
    req: HttpRequest,
    query: web::Query<CallbackQuery>,
) -> impl Responder {
    let origin = request_origin(&req);

    let code = match query.into_inner().code.filter(|c| !c.is_empty()) {
        Some(code) => code,
        None => return error_redirect(&origin, "no_code"),
    };

    match state.oauth.exchange_code(&code).await {
        Ok(token) => {
            log::info!("OAuth token obtained, redirecting to map");
            redirect(format!("{}/{}?token={}", origin, state.map_page, token))
        }
        Err(OAuthError::Rejected(reason)) => {
            log::warn!("OAuth code rejected: {}", reason);
            error_redirect(&origin, "auth_failed")
        }
        Err(e) => {
            log::error!("OAuth callback failed: {}", e);
            error_redirect(&origin, "server_error")
        }
    }
}
