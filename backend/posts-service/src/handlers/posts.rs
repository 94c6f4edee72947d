/// Post handlers - HTTP endpoints for post operations
use super::parse_post_id;
use crate::config::{ApiConfig, MissingRowPolicy};
use crate::db::post_repo;
use crate::error::{AppError, Result, StorageResultExt};
use crate::models::{CreatePostRequest, CreatedPost, MessageResponse, UpdatePostRequest};
use actix_web::{web, HttpResponse};
use sqlx::PgPool;

/// List all posts
/// GET /posts
pub async fn list_posts(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let posts = post_repo::list_posts(&pool)
        .await
        .storage_context("fetching posts")?;

    Ok(HttpResponse::Ok().json(posts))
}

/// Get a post by ID
/// GET /posts/{id}
pub async fn get_post(pool: web::Data<PgPool>, post_id: web::Path<i64>) -> Result<HttpResponse> {
    let post = post_repo::find_post_by_id(&pool, *post_id)
        .await
        .storage_context("fetching post by ID")?;

    match post {
        Some(post) => Ok(HttpResponse::Ok().json(post)),
        None => Err(AppError::post_not_found()),
    }
}

/// Create a new post
/// POST /posts
pub async fn create_post(
    pool: web::Data<PgPool>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let req = req.into_inner();
    let id = post_repo::create_post(&pool, &req)
        .await
        .storage_context("inserting new post")?;

    tracing::info!(post_id = id, "Post created");
    Ok(HttpResponse::Created().json(CreatedPost::new(id, req)))
}

/// Update title, content and date of a post
/// PUT /posts/{id}
///
/// A non-integer id matches no row and is handled by the missing-row policy.
pub async fn update_post(
    pool: web::Data<PgPool>,
    api: web::Data<ApiConfig>,
    post_id: web::Path<String>,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let affected = match parse_post_id(&post_id) {
        Some(id) => post_repo::update_post(&pool, id, &req)
            .await
            .storage_context("updating post")?,
        None => 0,
    };

    check_affected(affected, &post_id, api.missing_row_policy)?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post updated successfully")))
}

/// Delete a post
/// DELETE /posts/{id}
pub async fn delete_post(
    pool: web::Data<PgPool>,
    api: web::Data<ApiConfig>,
    post_id: web::Path<String>,
) -> Result<HttpResponse> {
    let affected = match parse_post_id(&post_id) {
        Some(id) => post_repo::delete_post(&pool, id)
            .await
            .storage_context("deleting post")?,
        None => 0,
    };

    check_affected(affected, &post_id, api.missing_row_policy)?;
    Ok(HttpResponse::Ok().json(MessageResponse::new("Post deleted successfully")))
}

fn check_affected(affected: u64, post_id: &str, policy: MissingRowPolicy) -> Result<()> {
    if affected > 0 {
        return Ok(());
    }

    tracing::debug!(post_id, ?policy, "Statement matched no post");
    match policy {
        MissingRowPolicy::Silent => Ok(()),
        MissingRowPolicy::NotFound => Err(AppError::post_not_found()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_affected() {
        assert!(check_affected(1, "1", MissingRowPolicy::NotFound).is_ok());
        assert!(check_affected(0, "1", MissingRowPolicy::Silent).is_ok());
        assert!(check_affected(0, "abc", MissingRowPolicy::Silent).is_ok());
        assert!(matches!(
            check_affected(0, "1", MissingRowPolicy::NotFound),
            Err(AppError::NotFound(_))
        ));
    }
}
