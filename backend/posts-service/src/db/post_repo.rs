use crate::models::{CreatePostRequest, Post, UpdatePostRequest};
use sqlx::PgPool;

/// List all posts, most recent `date` first
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author, "userId", date
        FROM posts
        ORDER BY date DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Find a post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: i64) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, title, content, author, "userId", date
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Insert a post and return its generated id
///
/// `date` is sent as text and cast by the database, so malformed values
/// come back as database errors.
pub async fn create_post(pool: &PgPool, req: &CreatePostRequest) -> Result<i64, sqlx::Error> {
    let id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO posts (title, content, author, "userId", date)
        VALUES ($1, $2, $3, $4, $5::timestamp)
        RETURNING id
        "#,
    )
    .bind(req.title.as_deref())
    .bind(req.content.as_deref())
    .bind(req.author.as_deref())
    .bind(req.user_id)
    .bind(req.date.as_deref())
    .fetch_one(pool)
    .await?;

    Ok(id)
}

/// Update title, content and date; returns the number of rows affected
pub async fn update_post(
    pool: &PgPool,
    post_id: i64,
    req: &UpdatePostRequest,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE posts
        SET title = $1, content = $2, date = $3::timestamp
        WHERE id = $4
        "#,
    )
    .bind(req.title.as_deref())
    .bind(req.content.as_deref())
    .bind(req.date.as_deref())
    .bind(post_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a post; returns the number of rows affected
///
/// Comments referencing the post are left in place.
pub async fn delete_post(pool: &PgPool, post_id: i64) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
