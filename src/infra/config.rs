//! Centralized configuration (environment variables + defaults).

use anyhow::{anyhow, Context, Result};
use sqlx::postgres::PgConnectOptions;
use std::env;

const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_POSTGRES_PORT: u16 = 5432;
const MISSING_DATABASE_VARS: &str = "set DATABASE_URL or the POSTGRES_* variables";

fn var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

fn required(name: &str) -> Result<String> {
    var(name).ok_or_else(|| anyhow!("{} must be set", name))
}

/// Connection options for the visitors database.
///
/// `DATABASE_URL` wins when present; otherwise the connection is assembled
/// from `POSTGRES_USER`, `POSTGRES_PASSWORD`, `POSTGRES_HOST`,
/// `POSTGRES_PORT` and `POSTGRES_DATABASE`.
pub fn database_options() -> Result<PgConnectOptions> {
    if let Some(url) = var("DATABASE_URL") {
        return url
            .parse::<PgConnectOptions>()
            .context("DATABASE_URL is not a valid Postgres connection string");
    }

    let user = required("POSTGRES_USER").context(MISSING_DATABASE_VARS)?;
    let host = required("POSTGRES_HOST").context(MISSING_DATABASE_VARS)?;
    let database = required("POSTGRES_DATABASE").context(MISSING_DATABASE_VARS)?;
    let port = match var("POSTGRES_PORT") {
        Some(p) => p
            .parse::<u16>()
            .with_context(|| format!("POSTGRES_PORT must be a valid port, got {}", p))?,
        None => DEFAULT_POSTGRES_PORT,
    };

    let mut options = PgConnectOptions::new()
        .host(&host)
        .port(port)
        .username(&user)
        .database(&database);
    if let Some(password) = var("POSTGRES_PASSWORD") {
        options = options.password(&password);
    }
    Ok(options)
}

/// Pool size (`DATABASE_MAX_CONNECTIONS`, default 5, at least 1).
pub fn max_connections() -> Result<u32> {
    match var("DATABASE_MAX_CONNECTIONS") {
        Some(v) => Ok(v
            .parse::<u32>()
            .with_context(|| format!("DATABASE_MAX_CONNECTIONS must be a valid u32, got {}", v))?
            .max(1)),
        None => Ok(DEFAULT_MAX_CONNECTIONS),
    }
}

/// HTTP listen address (`BIND_ADDR`).
pub fn bind_addr() -> String {
    var("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
}

/// Default log level when `RUST_LOG` is not set (`LOG_LEVEL`).
pub fn log_level() -> String {
    var("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}
