use actix_cors::Cors;
use actix_web::http::{header, Method};
use actix_web::{web, App, HttpServer};
use std::io;
use crate::api::{configure, not_found, ApiState};
use crate::config::Config;

/// Any origin may call the API; only simple JSON requests are allowed
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_header(header::CONTENT_TYPE)
}

pub async fn start_server(config: Config) -> io::Result<()> {
    let state = ApiState::from_config(&config)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    let api_state = web::Data::new(state);

    log::info!(
        "Serving MIOS map API on {}:{} ({})",
        config.server.host,
        config.server.port,
        config.server.environment
    );

    HttpServer::new(move || {
        App::new()
            .wrap(cors())
            .app_data(api_state.clone())
            .configure(configure)
            .default_service(web::route().to(not_found))
    })
    .bind(format!("{}:{}", config.server.host, config.server.port))?
    .run()
    .await
}
