use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use env_logger::Env;
use std::sync::Arc;
use survey_api::app_config::AppConfig;
use survey_api::clock::{Clock, SystemClock};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_lib_mods();

    let config = AppConfig::load().unwrap_or_else(|e| {
        log::warn!("Failed to load config file, using defaults: {}", e);
        AppConfig::default()
    });

    let db = survey_api::db::connect(&config.database)
        .await
        .context("failed to connect to the database")?;

    if config.database.create_schema {
        survey_api::db::create_schema(&db)
            .await
            .context("failed to create database tables")?;
    }

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let bind = config.server.bind_address();
    log::info!("Listening on {}:{}", bind.0, bind.1);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(Data::new(db.clone()))
            .app_data(Data::new(clock.clone()))
            .wrap(Logger::default())
            .configure(survey_api::web::configure)
    });

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .bind(bind)
        .context("failed to bind listener")?
        .run()
        .await?;

    Ok(())
}

/// Initialize third party crates we rely on but don't have control over.
fn init_lib_mods() {
    // A missing .env file is normal outside development.
    dotenv::dotenv().ok();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
