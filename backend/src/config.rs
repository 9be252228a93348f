use std::str::FromStr;
use std::time::Duration;

use anyhow::Context;

use crate::startup::RetryPolicy;

/// Bind address shared by both services.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Configuration for the SQL-backed `users-api`.
#[derive(Debug, Clone)]
pub struct UsersConfig {
    pub server: ServerConfig,
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub startup: RetryPolicy,
}

/// Configuration for the in-memory `providers-api`.
#[derive(Debug, Clone)]
pub struct ProvidersConfig {
    pub server: ServerConfig,
    /// Start with the default providers instead of an empty store.
    pub seed: bool,
}

impl UsersConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let retry = RetryPolicy::default();

        Ok(Self {
            server: server_config(&lookup, 8000)?,
            database_url: database_url(&lookup)?,
            max_connections: parse_or(&lookup, "DB_MAX_CONNECTIONS", 5)?,
            acquire_timeout: Duration::from_secs(parse_or(&lookup, "DB_ACQUIRE_TIMEOUT_SECS", 5)?),
            startup: RetryPolicy {
                max_attempts: parse_or(&lookup, "STARTUP_MAX_ATTEMPTS", retry.max_attempts)?,
                delay: Duration::from_secs(parse_or(
                    &lookup,
                    "STARTUP_RETRY_DELAY_SECS",
                    retry.delay.as_secs(),
                )?),
            },
        })
    }
}

impl ProvidersConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            server: server_config(&lookup, 5000)?,
            seed: parse_or(&lookup, "PROVIDERS_SEED", true)?,
        })
    }
}

fn server_config<F>(lookup: &F, default_port: u16) -> anyhow::Result<ServerConfig>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(ServerConfig {
        host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
        port: parse_or(lookup, "PORT", default_port)?,
    })
}

/// `DATABASE_URL` wins; otherwise the URL is composed from the `POSTGRES_*` variables.
fn database_url<F>(lookup: &F) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("DATABASE_URL") {
        return Ok(url);
    }

    let require = |key: &str| {
        lookup(key).with_context(|| format!("{key} must be set when DATABASE_URL is not"))
    };

    let user = require("POSTGRES_USER")?;
    let password = require("POSTGRES_PASSWORD")?;
    let host = require("POSTGRES_HOST")?;
    let db = require("POSTGRES_DB")?;

    Ok(format!("postgres://{}:{}@{}/{}", user, password, host, db))
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> anyhow::Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} has an invalid value: {raw:?}")),
        None => Ok(default),
    }
}
