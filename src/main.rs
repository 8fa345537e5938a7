use log::info;
use mios_map::api::server::start_server;
use mios_map::config::Config;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Configuration first: it carries the default log level
    let config = Config::from_env()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.log_level.as_str()));

    info!("Starting MIOS Map...");
    info!("Server will start on {}:{}", config.server.host, config.server.port);

    start_server(config).await
}
