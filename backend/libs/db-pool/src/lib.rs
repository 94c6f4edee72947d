//! Database connection pool management
//!
//! Builds the PostgreSQL pool from `DB_*` environment variables, verifies
//! it at startup and applies the configured connect-failure policy.

pub mod env_utils;
mod metrics;

use env_utils::{env_or_default, parse_env_or_default, EnvVarError};
use metrics::{spawn_metrics_updater, update_pool_metrics};

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, error, info, warn};

/// What to do when the database cannot be reached at startup
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectFailurePolicy {
    /// Log the failure and keep serving; requests fail individually
    #[default]
    Degraded,
    /// Abort startup
    Exit,
}

impl FromStr for ConnectFailurePolicy {
    type Err = DbConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degraded" | "continue" => Ok(Self::Degraded),
            "exit" => Ok(Self::Exit),
            other => Err(DbConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for ConnectFailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degraded => f.write_str("degraded"),
            Self::Exit => f.write_str("exit"),
        }
    }
}

#[derive(Debug, Error)]
pub enum DbConfigError {
    #[error(transparent)]
    Env(#[from] EnvVarError),

    #[error("Unknown DB_CONNECT_FAILURE_POLICY '{0}' (expected 'degraded' or 'exit')")]
    UnknownPolicy(String),
}

/// Database connection pool configuration
#[derive(Clone)]
pub struct DbConfig {
    /// Service name for metrics labeling
    pub service_name: String,
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
    /// Maximum number of connections
    pub max_connections: u32,
    /// Minimum number of connections
    pub min_connections: u32,
    /// Startup verification timeout
    pub connect_timeout_secs: u64,
    /// Connection acquisition timeout (get connection from pool)
    pub acquire_timeout_secs: u64,
    /// Connection idle timeout
    pub idle_timeout_secs: u64,
    /// Connection maximum lifetime
    pub max_lifetime_secs: u64,
    pub on_connect_failure: ConnectFailurePolicy,
}

impl fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbConfig")
            .field("service_name", &self.service_name)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("database", &self.database)
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("connect_timeout_secs", &self.connect_timeout_secs)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .field("idle_timeout_secs", &self.idle_timeout_secs)
            .field("max_lifetime_secs", &self.max_lifetime_secs)
            .field("on_connect_failure", &self.on_connect_failure)
            .finish()
    }
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            service_name: String::from("unknown"),
            host: String::from("localhost"),
            port: 5432,
            username: String::from("postgres"),
            password: String::new(),
            database: String::from("posts"),
            max_connections: 10,
            min_connections: 0,
            connect_timeout_secs: 5,
            acquire_timeout_secs: 10,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
            on_connect_failure: ConnectFailurePolicy::Degraded,
        }
    }
}

impl DbConfig {
    /// Create a new DbConfig from environment variables
    pub fn from_env(service_name: &str) -> Result<Self, DbConfigError> {
        let defaults = Self::default();

        Ok(Self {
            service_name: service_name.to_string(),
            host: env_or_default("DB_HOST", &defaults.host),
            port: parse_env_or_default("DB_PORT", defaults.port)?,
            username: env_or_default("DB_USER", &defaults.username),
            password: env_or_default("DB_PASSWORD", &defaults.password),
            database: env_or_default("DB_NAME", &defaults.database),
            max_connections: parse_env_or_default("DB_MAX_CONNECTIONS", defaults.max_connections)?,
            min_connections: parse_env_or_default("DB_MIN_CONNECTIONS", defaults.min_connections)?,
            connect_timeout_secs: parse_env_or_default(
                "DB_CONNECT_TIMEOUT_SECS",
                defaults.connect_timeout_secs,
            )?,
            acquire_timeout_secs: parse_env_or_default(
                "DB_ACQUIRE_TIMEOUT_SECS",
                defaults.acquire_timeout_secs,
            )?,
            idle_timeout_secs: parse_env_or_default(
                "DB_IDLE_TIMEOUT_SECS",
                defaults.idle_timeout_secs,
            )?,
            max_lifetime_secs: parse_env_or_default(
                "DB_MAX_LIFETIME_SECS",
                defaults.max_lifetime_secs,
            )?,
            on_connect_failure: match std::env::var("DB_CONNECT_FAILURE_POLICY") {
                Ok(value) => value.parse()?,
                Err(_) => defaults.on_connect_failure,
            },
        })
    }

    /// Connection options; credentials are bound here, never formatted into a URL
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .password(&self.password)
            .database(&self.database)
    }

    /// Log pool configuration details
    pub fn log_config(&self) {
        info!(
            "Database Pool Configuration: \
             host={}:{}, database={}, max_connections={}, min_connections={}, \
             connect_timeout={}s, acquire_timeout={}s, idle_timeout={}s, max_lifetime={}s, \
             on_connect_failure={}",
            self.host,
            self.port,
            self.database,
            self.max_connections,
            self.min_connections,
            self.connect_timeout_secs,
            self.acquire_timeout_secs,
            self.idle_timeout_secs,
            self.max_lifetime_secs,
            self.on_connect_failure
        );
    }
}

/// Build the pool without opening any connection
pub fn create_pool(config: &DbConfig) -> PgPool {
    debug!(
        "Creating database pool: service={}, max={}, min={}, \
         acquire_timeout={}s, idle_timeout={}s",
        config.service_name,
        config.max_connections,
        config.min_connections,
        config.acquire_timeout_secs,
        config.idle_timeout_secs
    );

    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        // Timeout for acquiring a connection from the pool
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        // Close connections idle for longer than this
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        // Maximum lifetime of a connection (to handle stale connections)
        .max_lifetime(Duration::from_secs(config.max_lifetime_secs))
        .test_before_acquire(true)
        .connect_lazy_with(config.connect_options())
}

/// Run `SELECT 1` bounded by the connect timeout
pub async fn verify_pool(pool: &PgPool, config: &DbConfig) -> Result<(), sqlx::Error> {
    match tokio::time::timeout(
        Duration::from_secs(config.connect_timeout_secs),
        sqlx::query("SELECT 1").execute(pool),
    )
    .await
    {
        Ok(Ok(_)) => Ok(()),
        Ok(Err(e)) => Err(e),
        Err(_) => Err(sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::TimedOut,
            "Database verification timeout",
        ))),
    }
}

/// Create the pool, verify it, and apply the connect-failure policy
///
/// Under [`ConnectFailurePolicy::Degraded`] an unreachable database is only
/// logged; the returned pool keeps trying to connect on each acquire.
pub async fn connect(config: &DbConfig) -> Result<PgPool, sqlx::Error> {
    let pool = create_pool(config);

    match verify_pool(&pool, config).await {
        Ok(()) => {
            info!(
                service = %config.service_name,
                "Database pool created and verified successfully"
            );
        }
        Err(e) => match config.on_connect_failure {
            ConnectFailurePolicy::Exit => {
                error!(
                    service = %config.service_name,
                    error = %e,
                    "Error connecting to the database"
                );
                return Err(e);
            }
            ConnectFailurePolicy::Degraded => {
                warn!(
                    service = %config.service_name,
                    error = %e,
                    "Error connecting to the database; continuing in degraded mode"
                );
            }
        },
    }

    update_pool_metrics(&pool, &config.service_name);
    spawn_metrics_updater(pool.clone(), config.service_name.clone());

    Ok(pool)
}
