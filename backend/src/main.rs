mod config;
mod routes;
mod upstream;
mod validation;

use actix_cors::Cors;
use actix_web::{App, HttpServer, web};
use config::ServerConfig;
use routes::configure_routes;
use upstream::UpstreamService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env().map_err(|e| {
        log::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string())
    })?;

    let upstream = web::Data::new(UpstreamService::new(config.upstream_url.clone()));
    log::info!("Forwarding predictions to {}", upstream.url());
    log::info!("Serving frontend from {}", config.frontend_dir);

    let bind_address = config.bind_address();
    log::info!("Starting server on {}", bind_address);

    let frontend_dir = config.frontend_dir.clone();
    HttpServer::new(move || {
        App::new()
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allowed_methods(vec!["GET", "POST", "OPTIONS"])
                    .allowed_headers(vec![
                        actix_web::http::header::ACCEPT,
                        actix_web::http::header::CONTENT_TYPE,
                    ])
                    .max_age(3600),
            )
            .app_data(upstream.clone())
            .configure(|cfg| configure_routes::<UpstreamService>(cfg, frontend_dir.clone()))
    })
    .bind(&bind_address)?
    .run()
    .await
}
