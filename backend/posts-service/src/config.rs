/// Configuration management for Posts Service
///
/// All settings come from environment variables (optionally seeded from a
/// `.env` file by the binary). Database settings are owned by `db-pool`.
use crate::error::{AppError, Result};
use db_pool::env_utils::{env_or_default, parse_env_or_default};
use db_pool::DbConfig;
use std::str::FromStr;

pub const SERVICE_NAME: &str = "posts-service";

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Handler behavior
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    /// Database configuration
    pub database: DbConfig,
}

/// Application settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
    /// Number of actix worker threads
    pub workers: usize,
}

/// CORS configuration
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// `*` or a comma-separated list of allowed origins
    pub allowed_origins: String,
}

#[derive(Debug, Clone, Default)]
pub struct ApiConfig {
    pub missing_row_policy: MissingRowPolicy,
}

#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

/// How update/delete respond when no row matched the id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingRowPolicy {
    /// Report success regardless of the affected row count
    #[default]
    Silent,
    /// Respond 404 when nothing was updated or deleted
    NotFound,
}

impl FromStr for MissingRowPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "silent" => Ok(Self::Silent),
            "not_found" | "not-found" | "404" => Ok(Self::NotFound),
            other => Err(AppError::Config(format!(
                "Unknown MISSING_ROW_POLICY '{}' (expected 'silent' or 'not_found')",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// Read `LOG_FORMAT`, falling back to pretty output when unset or unknown
    pub fn from_env_lenient() -> Self {
        std::env::var("LOG_FORMAT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default()
    }
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(AppError::Config(format!(
                "Unknown LOG_FORMAT '{}' (expected 'pretty' or 'json')",
                other
            ))),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let workers: usize = parse_env_or_default("HTTP_WORKERS", 4)?;
        if workers == 0 {
            return Err(AppError::Config(
                "HTTP_WORKERS must be at least 1".to_string(),
            ));
        }

        Ok(Config {
            app: AppConfig {
                env: env_or_default("APP_ENV", "development"),
                host: env_or_default("HOST", "0.0.0.0"),
                port: parse_env_or_default("PORT", 3000)?,
                workers,
            },
            cors: CorsConfig {
                allowed_origins: env_or_default("CORS_ALLOWED_ORIGINS", "*"),
            },
            api: ApiConfig {
                missing_row_policy: parse_optional("MISSING_ROW_POLICY")?.unwrap_or_default(),
            },
            logging: LoggingConfig {
                format: parse_optional("LOG_FORMAT")?.unwrap_or_default(),
            },
            database: DbConfig::from_env(SERVICE_NAME)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.app.host, self.app.port)
    }
}

fn parse_optional<T: FromStr<Err = AppError>>(key: &str) -> Result<Option<T>> {
    std::env::var(key).ok().map(|v| v.parse()).transpose()
}
