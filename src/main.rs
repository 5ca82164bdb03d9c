use std::sync::Arc;

use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use anyhow::Context;
use tracing::{error, info};
use tracing_appender::rolling;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
#[macro_use]
mod testing;

mod api;
mod auth;
mod config;
mod db;
mod docs;
mod error;
mod model;
mod models;
mod routes;
mod schema;
mod store;
mod utils;
mod views;

use crate::config::Config;
use crate::db::init_db;
use crate::docs::ApiDoc;
use crate::store::{HrStore, MySqlStore};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Rolling daily log
    let file_appender = rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .pretty()
        .init();

    info!("Server starting...");

    let result = run().await;
    if let Err(e) = &result {
        error!(error = ?e, "Server failed");
    }
    result
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let pool = init_db(&config).await?;
    let store: Arc<dyn HrStore> = Arc::new(MySqlStore::new(pool));

    auth::handlers::ensure_login_account(store.as_ref(), &config).await?;

    let server_addr = config.server_addr.clone();
    let app_store = Data::from(store.clone());
    let app_config = Data::new(config);

    info!(addr = %server_addr, "Listening");

    let served = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(app_store.clone())
            .app_data(app_config.clone())
            .configure(routes::configure)
    })
    .bind(&server_addr)
    .with_context(|| format!("Failed to bind {server_addr}"))?
    .run()
    .await;

    store.close().await;
    info!("Database pool closed");

    served.context("HTTP server error")
}
