use actix_web::middleware::{Logger, NormalizePath};
use actix_web::{web, App, HttpServer};
use clap::Parser;
use qa_api::cli::Args;
use qa_api::config::ApiConfig;
use qa_api::helpers::database::initialize_database;
use qa_api::logging::init_tracing;
use qa_api::routes::{build_cors, configure_routes};
use qa_api::storage::{SharedStorage, SqliteQaStorage};
use std::sync::Arc;
use tracing::info;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = ApiConfig::load(args.config.as_deref())?;
    args.apply(&mut config);

    let _log_guard = init_tracing(&config.logging)?;

    let connection = initialize_database(&config.database.path)?;
    info!("Database initialized at {:?}", config.database.path);

    let storage: SharedStorage = Arc::new(SqliteQaStorage::new(connection));
    let storage = web::Data::new(storage);

    let bind_addr = config.bind_address();
    info!("Starting qa-api server at http://{}", bind_addr);

    let path_prefix = config.server.path_prefix.clone();
    let allowed_origins = config.cors.allowed_origins.clone();

    HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&allowed_origins))
            .wrap(NormalizePath::trim())
            .wrap(Logger::default())
            .app_data(storage.clone())
            .configure(|cfg| configure_routes(cfg, &path_prefix))
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    Ok(())
}
