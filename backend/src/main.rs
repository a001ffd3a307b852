mod config;
mod error;
mod pages;
mod services;
mod session;
mod storage;

use crate::config::Config;
use crate::session::state::SessionsState;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = Config::load();
    storage::init(&config.database_path).expect("failed to initialize database schema");

    let sessions = SessionsState::new();

    info!("Server running at http://{}:{}", config.host, config.port);

    let bind_addr = (config.host.clone(), config.port);
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(sessions.clone()))
            .configure(services::accounts::configure_routes)
            .service(services::profile::configure_routes())
            .service(services::directory::configure_routes())
            .service(services::quiz::configure_routes())
            .default_service(web::route().to(pages::serve_embedded))
    })
    .bind(bind_addr)?
    .run()
    .await
}
