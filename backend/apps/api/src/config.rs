//! Process configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).
//! Every knob except `DATABASE_URL` has a default.

use std::env;
use std::time::Duration;

use anyhow::{Context, bail};
use platform::crypto;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";

/// Connection pool knobs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub idle_timeout: Duration,
    pub max_lifetime: Duration,
    pub acquire_timeout: Duration,
}

impl DatabaseConfig {
    fn with_url(url: String) -> Self {
        Self {
            url,
            max_connections: 10,
            min_connections: 0,
            idle_timeout: Duration::from_secs(300),
            max_lifetime: Duration::from_secs(1800),
            acquire_timeout: Duration::from_secs(10),
        }
    }
}

/// Server configuration
pub struct ServerConfig {
    pub port: u16,
    pub database: DatabaseConfig,
    pub frontend_origins: Vec<String>,
    pub password_pepper: Option<Vec<u8>>,
}

impl ServerConfig {
    /// Load from process environment
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let Some(url) = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) else {
            bail!("DATABASE_URL must be set");
        };

        let mut database = DatabaseConfig::with_url(url);
        if let Some(v) = parse_var(&lookup, "DB_MAX_CONNECTIONS")? {
            database.max_connections = v;
        }
        if let Some(v) = parse_var(&lookup, "DB_MIN_CONNECTIONS")? {
            database.min_connections = v;
        }
        if let Some(v) = parse_var(&lookup, "DB_IDLE_TIMEOUT_SECS")? {
            database.idle_timeout = Duration::from_secs(v);
        }
        if let Some(v) = parse_var(&lookup, "DB_MAX_LIFETIME_SECS")? {
            database.max_lifetime = Duration::from_secs(v);
        }
        if database.min_connections > database.max_connections {
            bail!("DB_MIN_CONNECTIONS must not exceed DB_MAX_CONNECTIONS");
        }

        let port = parse_var(&lookup, "SERVER_PORT")?.unwrap_or(DEFAULT_PORT);

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let password_pepper = match lookup("PASSWORD_PEPPER") {
            Some(b64) if !b64.trim().is_empty() => Some(
                crypto::from_base64(b64.trim()).context("PASSWORD_PEPPER must be valid base64")?,
            ),
            _ => None,
        };

        Ok(Self {
            port,
            database,
            frontend_origins,
            password_pepper,
        })
    }
}

fn parse_var<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> anyhow::Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    lookup(key)
        .map(|raw| raw.trim().parse::<T>())
        .transpose()
        .with_context(|| format!("{key} has an invalid value"))
}
