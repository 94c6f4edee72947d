/// Posts Service Library
///
/// A small HTTP API over two tables, posts and comments. Every endpoint runs
/// exactly one parameterized statement and answers with JSON.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers and the route table
/// - `models`: Row types and request/response bodies
/// - `db`: Repository functions, one statement each
/// - `error`: Error types and their HTTP mapping
/// - `config`: Configuration management
/// - `cors`: Cross-origin middleware
/// - `metrics`: Prometheus exposition
/// - `telemetry`: Tracing subscriber setup
pub mod config;
pub mod cors;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod telemetry;

pub use config::Config;
pub use error::{AppError, Result};
