//! Prometheus metrics for database connection pool
//!
//! Tracks pool size by state; refreshed by a background task

use prometheus::{register_int_gauge_vec, IntGaugeVec};
use sqlx::PgPool;
use std::time::Duration;

lazy_static::lazy_static! {
    /// Database connection pool size by state (idle/active/max)
    static ref DB_POOL_CONNECTIONS: IntGaugeVec = register_int_gauge_vec!(
        "db_pool_connections",
        "Database pool connection count by state",
        &["service", "state"]
    ).expect("Prometheus metrics registration should succeed at startup");
}

const METRICS_REFRESH_INTERVAL: Duration = Duration::from_secs(30);

/// Update connection pool metrics (called periodically)
pub(crate) fn update_pool_metrics(pool: &PgPool, service: &str) {
    let size = pool.size() as i64;
    let idle = pool.num_idle() as i64;
    let active = size - idle;

    DB_POOL_CONNECTIONS
        .with_label_values(&[service, "idle"])
        .set(idle);

    DB_POOL_CONNECTIONS
        .with_label_values(&[service, "active"])
        .set(active);

    DB_POOL_CONNECTIONS
        .with_label_values(&[service, "max"])
        .set(pool.options().get_max_connections() as i64);
}

/// Refresh pool gauges every 30 seconds until the pool is closed
pub(crate) fn spawn_metrics_updater(pool: PgPool, service: String) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(METRICS_REFRESH_INTERVAL);
        while !pool.is_closed() {
            interval.tick().await;
            update_pool_metrics(&pool, &service);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    #[tokio::test]
    async fn test_update_pool_metrics_on_lazy_pool() {
        let pool = PgPoolOptions::new()
            .max_connections(7)
            .connect_lazy("postgres://postgres@127.0.0.1:1/metrics_test")
            .expect("lazy pool");

        update_pool_metrics(&pool, "metrics-test");

        let max = DB_POOL_CONNECTIONS
            .with_label_values(&["metrics-test", "max"])
            .get();
        let active = DB_POOL_CONNECTIONS
            .with_label_values(&["metrics-test", "active"])
            .get();
        assert_eq!(max, 7);
        assert_eq!(active, 0);
    }
}
