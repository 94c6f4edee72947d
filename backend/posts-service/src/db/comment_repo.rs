use crate::models::{Comment, CreateCommentRequest};
use sqlx::PgPool;

/// Get all comments for a post, most recent `date` first
///
/// An unknown post id yields an empty list.
pub async fn list_comments_by_post(
    pool: &PgPool,
    post_id: i64,
) -> Result<Vec<Comment>, sqlx::Error> {
    let comments = sqlx::query_as::<_, Comment>(
        r#"
        SELECT id, post_id, author, "userId", date, content
        FROM comments
        WHERE post_id = $1
        ORDER BY date DESC
        "#,
    )
    .bind(post_id)
    .fetch_all(pool)
    .await?;

    Ok(comments)
}

/// Create a new comment on a post and return its generated id
///
/// The post is not checked for existence.
pub async fn create_comment(
    pool: &PgPool,
    post_id: i64,
    req: &CreateCommentRequest,
) -> Result<i64, sqlx::Error> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO comments (post_id, author, "userId", date, content)
        VALUES ($1, $2, $3, $4::timestamp, $5)
        RETURNING id
        "#,
    )
    .bind(post_id)
    .bind(req.author.as_deref())
    .bind(req.user_id)
    .bind(req.date.as_deref())
    .bind(req.content.as_deref())
    .fetch_one(pool)
    .await?;

    Ok(id)
}
