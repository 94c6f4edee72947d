#![allow(dead_code)]
/// Test fixtures and utilities for integration tests
/// Provides pool setup, app construction, and cleanup
use actix_web::{test, web, App};
use db_pool::DbConfig;
use posts_service::config::{ApiConfig, MissingRowPolicy};
use posts_service::handlers;
use sqlx::PgPool;
use std::time::Duration;

/// A pool pointing at a port nothing listens on; every query fails fast
pub fn unreachable_pool() -> PgPool {
    db_pool::create_pool(&DbConfig {
        service_name: "posts-service-test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 1,
        acquire_timeout_secs: 1,
        connect_timeout_secs: 1,
        ..DbConfig::default()
    })
}

/// Create a test database pool with migrations
///
/// Reads the same `DB_*` variables as the service (defaults to a local
/// `postgres` user and `posts` database).
pub async fn create_test_pool() -> PgPool {
    let config = DbConfig::from_env("posts-service-test").expect("valid DB_* environment");
    eprintln!(
        "[tests] Connecting to PostgreSQL at {}:{}/{}",
        config.host, config.port, config.database
    );

    let pool = db_pool::create_pool(&config);

    let mut last_err: Option<anyhow::Error> = None;
    for attempt in 1..=10u32 {
        match db_pool::verify_pool(&pool, &config).await {
            Ok(()) => {
                eprintln!("[tests] PostgreSQL ready after {} attempts", attempt);
                sqlx::migrate!("./migrations")
                    .run(&pool)
                    .await
                    .expect("Failed to run migrations");
                return pool;
            }
            Err(e) => {
                last_err = Some(anyhow::anyhow!(e));
                tokio::time::sleep(Duration::from_secs(1)).await;
            }
        }
    }

    panic!("PostgreSQL not reachable: {:?}", last_err);
}

/// Remove all rows and reset id sequences
pub async fn cleanup_test_data(pool: &PgPool) {
    sqlx::query("TRUNCATE posts, comments RESTART IDENTITY")
        .execute(pool)
        .await
        .expect("Failed to truncate test tables");
}

/// Build the service with the production route table
pub async fn setup_test_app(
    pool: PgPool,
    missing_row_policy: MissingRowPolicy,
) -> impl actix_web::dev::Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(pool))
            .app_data(web::Data::new(ApiConfig { missing_row_policy }))
            .configure(handlers::configure),
    )
    .await
}
