use anyhow::{Context, Result};
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::{Connection, MySqlConnection, MySqlPool};
use tracing::info;

use crate::config::Config;
use crate::schema::ensure_schema;

/// Opens the application pool, creating the database and its tables first if
/// they are missing. Any failure here is fatal for startup.
pub async fn init_db(config: &Config) -> Result<MySqlPool> {
    let server = config.database.server_options();

    let mut conn = MySqlConnection::connect_with(&server)
        .await
        .with_context(|| format!("Failed to connect to MySQL at {}", config.database.host))?;

    // Identifier comes from a compile-time constant, not user input.
    sqlx::query(&format!(
        "CREATE DATABASE IF NOT EXISTS `{}`",
        config.database.name
    ))
    .execute(&mut conn)
    .await
    .context("Failed to create database")?;
    conn.close().await.ok();

    info!(database = %config.database.name, "Database ready");

    let pool = MySqlPoolOptions::new()
        .max_connections(config.database.max_connections)
        .connect_with(database_options(config))
        .await
        .context("Failed to connect to database")?;

    ensure_schema(&pool).await.context("Failed to create schema")?;

    Ok(pool)
}

fn database_options(config: &Config) -> MySqlConnectOptions {
    config.database.server_options().database(&config.database.name)
}
