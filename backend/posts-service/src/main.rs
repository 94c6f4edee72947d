use actix_web::{web, App, HttpServer};
use posts_service::config::{Config, LogFormat, SERVICE_NAME};
use posts_service::{cors, handlers, telemetry};
use std::io;
use tracing_actix_web::TracingLogger;

/// Posts Service
///
/// # Routes
///
/// - `GET|POST /posts`
/// - `GET|PUT|DELETE /posts/{id}`
/// - `GET|POST /posts/{id}/comments`
/// - `GET /health`, `GET /health/live`, `GET /metrics`
///
/// Configuration is read from the environment (see `Config::from_env`);
/// a `.env` file in the working directory is loaded first when present.
#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenvy::dotenv().ok();

    telemetry::init_tracing(LogFormat::from_env_lenient());

    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!("Configuration loading failed: {}", e);
            eprintln!("ERROR: Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting {} v{}", SERVICE_NAME, env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    config.database.log_config();
    let db_pool = match db_pool::connect(&config.database).await {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Database connection failed: {}", e);
            eprintln!("ERROR: Failed to connect to the database: {}", e);
            std::process::exit(1);
        }
    };

    let pool_data = web::Data::new(db_pool.clone());
    let api_data = web::Data::new(config.api.clone());
    let allowed_origins = config.cors.allowed_origins.clone();

    let http_bind_address = config.bind_address();
    tracing::info!("Server is running on {}", http_bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(pool_data.clone())
            .app_data(api_data.clone())
            .wrap(cors::build_cors(&allowed_origins))
            .wrap(TracingLogger::default())
            .configure(handlers::configure)
    })
    .bind(&http_bind_address)?
    .workers(config.app.workers)
    .run()
    .await?;

    tracing::info!("{} shutting down", SERVICE_NAME);
    db_pool.close().await;

    Ok(())
}
