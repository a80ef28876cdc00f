use actix_web::{App, HttpServer, middleware, web};

use sirena::config::AppConfig;
use sirena::handlers;
use sirena::registration::FormStore;
use sirena::session::session_middleware;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{e}");
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    let secret_key = config.cookie_key();
    let store = FormStore::new();
    let bind_addr = config.bind_addr.clone();

    log::info!(
        "Registration is {}",
        if config.registration_open { "open" } else { "closed" }
    );
    log::info!("Starting server at http://{bind_addr}");

    let config = web::Data::new(config);
    let store = web::Data::new(store);

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .app_data(store.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::home_handlers::not_found))
    })
    .bind(bind_addr)?
    .run()
    .await
}
