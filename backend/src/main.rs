mod config;
mod db;
mod error;
mod services;
mod session;
mod validation;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::info;

use crate::config::{AppConfig, RunsBackend};
use crate::db::Database;
use crate::services::ingredients::repository::IngredientRepository;
use crate::services::runs::repository::{
    InMemoryRunRepository, RunRepository, SqliteRunRepository,
};
use crate::session::SessionStore;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = AppConfig::load();

    let database = Database::new(&config.database_path);
    database.init_schema().map_err(std::io::Error::other)?;
    IngredientRepository::new(database.clone())
        .seed_catalog()
        .map_err(std::io::Error::other)?;

    let sessions = SessionStore::default();
    let runs_repo: Arc<dyn RunRepository> = match config.runs_backend {
        RunsBackend::Memory => Arc::new(InMemoryRunRepository::default()),
        RunsBackend::Sqlite => Arc::new(SqliteRunRepository::new(database.clone())),
    };

    info!(
        "Server running at http://{}:{} (database: {})",
        config.host, config.port, config.database_path
    );

    let host = config.host.clone();
    HttpServer::new(move || {
        App::new()
            .app_data(web::JsonConfig::default().limit(1024 * 1024)) // 1 MB
            .app_data(web::Data::new(database.clone()))
            .app_data(web::Data::new(sessions.clone()))
            .app_data(web::Data::from(runs_repo.clone()))
            .service(services::ingredients::configure_routes())
            .service(services::orders::configure_routes())
            .service(services::sessions::configure_routes())
            .service(services::tutorials::configure_routes())
            .service(services::articles::configure_routes())
            .service(services::runs::configure_routes())
    })
    .bind((host.as_str(), config.port))?
    .run()
    .await
}
