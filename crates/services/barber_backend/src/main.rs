// File: services/barber_backend/src/main.rs
use barber_backend::build_app;
use barber_common::logging::{self, level_from_str, log_error};
use barber_config::load_config;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() {
    let config = Arc::new(load_config().expect("Failed to load config"));
    logging::init_with_level(level_from_str(&config.logging.level));

    let app = match build_app(config.clone()) {
        Ok(app) => app,
        Err(e) => {
            log_error(e, "Failed to build router");
            std::process::exit(1);
        }
    };

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            log_error(e, &format!("Failed to bind {}", addr));
            std::process::exit(1);
        }
    };
    info!("Starting {} at http://{}", config.shop.name, addr);
    info!("API endpoints available at http://{}/api", addr);

    if let Err(e) = axum::serve(listener, app.into_make_service()).await {
        log_error(e, "Server error");
    }
}
