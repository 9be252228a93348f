//! Store bring-up run once before the listener binds.
//!
//! PostgreSQL is often still booting when the pod starts, so connecting and
//! creating the schema is retried a bounded number of times with a fixed
//! delay. Exhausting the attempts is fatal for the process.

use std::future::Future;
use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{error, info, warn};

use crate::config::UsersConfig;
use crate::db;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first one. Zero behaves like one.
    pub max_attempts: u32,
    /// Fixed pause between attempts.
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(5),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("database unavailable after {attempts} attempt(s)")]
    StoreUnavailable {
        attempts: u32,
        #[source]
        source: sqlx::Error,
    },

    /// Not worth retrying: the connection settings themselves are unusable.
    #[error("invalid database configuration")]
    InvalidConfiguration(#[source] sqlx::Error),
}

/// Runs `op` until it succeeds or `policy.max_attempts` is reached.
pub async fn run_with_retry<T, F, Fut>(policy: RetryPolicy, mut op: F) -> Result<T, StartupError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, sqlx::Error>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        info!("Connecting to database (attempt {}/{})...", attempt, max_attempts);

        match op().await {
            Ok(value) => {
                info!(attempt, "Database ready.");
                return Ok(value);
            }
            Err(e @ sqlx::Error::Configuration(_)) => {
                error!(error = %e, "Database configuration rejected by driver");
                return Err(StartupError::InvalidConfiguration(e));
            }
            Err(e) if attempt >= max_attempts => {
                error!(error = %e, "Could not connect to database after {} attempts.", attempt);
                return Err(StartupError::StoreUnavailable {
                    attempts: attempt,
                    source: e,
                });
            }
            Err(e) => {
                warn!(
                    error = %e,
                    delay_secs = policy.delay.as_secs_f64(),
                    "Database not ready, retrying"
                );
                tokio::time::sleep(policy.delay).await;
                attempt += 1;
            }
        }
    }
}

/// Opens the connection pool and creates missing tables, retrying per `config.startup`.
pub async fn prepare_store(config: &UsersConfig) -> Result<PgPool, StartupError> {
    run_with_retry(config.startup, || async move {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect(&config.database_url)
            .await?;
        db::ensure_schema(&pool).await?;
        Ok(pool)
    })
    .await
}
