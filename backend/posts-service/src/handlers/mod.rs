/// HTTP handlers for posts and comments
///
/// - Posts: list, get, create, update, delete
/// - Comments: list per post, create
/// - Health and metrics endpoints
pub mod comments;
pub mod health;
pub mod posts;

use crate::error::AppError;
use actix_web::web;

// Re-export handler functions at module level
pub use comments::{create_comment, get_post_comments};
pub use health::{health_summary, liveness_check};
pub use posts::{create_post, delete_post, get_post, list_posts, update_post};

/// Register extractor settings and the full route table
///
/// The database pool (`web::Data<PgPool>`) and `web::Data<ApiConfig>` are
/// registered by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(path_config())
        .route("/health", web::get().to(health_summary))
        .route("/health/live", web::get().to(liveness_check))
        .route("/metrics", web::get().to(crate::metrics::serve_metrics))
        .service(
            web::scope("/posts")
                .service(
                    web::resource("")
                        .route(web::get().to(list_posts))
                        .route(web::post().to(create_post)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(get_post))
                        .route(web::put().to(update_post))
                        .route(web::delete().to(delete_post)),
                )
                .service(
                    web::resource("/{id}/comments")
                        .route(web::get().to(get_post_comments))
                        .route(web::post().to(create_comment)),
                ),
        );
}

/// Undecodable bodies become `400 {"error": ...}`
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::BadRequest(err.to_string()).into()
    })
}

/// Id parsing for routes that take the raw segment
///
/// Those routes treat a non-integer id like an id that matches no row.
pub(crate) fn parse_post_id(raw: &str) -> Option<i64> {
    raw.parse().ok()
}

/// Rejections from typed `web::Path<i64>` extractors (single post, new comment)
fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        tracing::debug!(error = %err, "Rejected path parameter");
        AppError::post_not_found().into()
    })
}
