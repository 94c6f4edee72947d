/// Comment handlers - HTTP endpoints for comment operations
use super::parse_post_id;
use crate::db::comment_repo;
use crate::error::{Result, StorageResultExt};
use crate::models::{Comment, CreateCommentRequest, CreatedComment};
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// Get comments for a post
/// GET /posts/{id}/comments
///
/// Never 404: an unknown or non-integer id yields an empty list.
pub async fn get_post_comments(
    pool: web::Data<PgPool>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let Some(post_id) = parse_post_id(&post_id) else {
        return Ok(HttpResponse::Ok().json(Vec::<Comment>::new()));
    };

    let comments = comment_repo::list_comments_by_post(&pool, post_id)
        .await
        .storage_context("fetching comments")?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Create a new comment
/// POST /posts/{id}/comments
pub async fn create_comment(
    pool: web::Data<PgPool>,
    post_id: web::Path<i64>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    let post_id = post_id.into_inner();
    let req = req.into_inner();
    let id = comment_repo::create_comment(&pool, post_id, &req)
        .await
        .storage_context("inserting new comment")?;

    tracing::info!(post_id, comment_id = id, "Comment created");
    Ok(HttpResponse::Created().json(CreatedComment::new(id, post_id, req)))
}
