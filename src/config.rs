use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::mysql::MySqlConnectOptions;
use tracing::warn;
use uuid::Uuid;

pub const DB_HOST: &str = "localhost";
pub const DB_NAME: &str = "hr";
pub const DB_USER: &str = "root";

#[derive(Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub name: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Connection options for the server itself, without selecting a database.
    pub fn server_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .username(&self.user)
            .password(&self.password)
    }
}

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,
    pub database: DatabaseConfig,

    /// HMAC key for the session and flash cookies.
    pub session_secret: String,
    pub session_ttl: usize,

    /// Account seeded at startup when no user with this name exists.
    pub login_username: String,
    pub login_password: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let session_secret = match lookup("SESSION_SECRET") {
            Some(secret) if !secret.is_empty() => secret,
            _ => {
                warn!("SESSION_SECRET not set, sessions will not survive a restart");
                format!("{}{}", Uuid::new_v4().to_simple(), Uuid::new_v4().to_simple())
            }
        };

        Ok(Self {
            server_addr: var("SERVER_ADDR", "127.0.0.1:5000"),
            database: DatabaseConfig {
                host: DB_HOST.to_string(),
                name: DB_NAME.to_string(),
                user: DB_USER.to_string(),
                password: var("MYSQL_ROOT_PASSWORD", "default_root_pass"),
                max_connections: parse(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            },
            session_secret,
            session_ttl: parse(&lookup, "SESSION_TTL", 8 * 60 * 60)?, // default 8 hours
            login_username: var("LOGIN_USERNAME", "user"),
            login_password: var("LOGIN_PASSWORD", "pass"),
        })
    }
}

fn parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a number, got {raw:?}")),
        None => Ok(default),
    }
}
