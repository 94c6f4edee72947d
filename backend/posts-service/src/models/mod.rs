/// Data models for posts-service
///
/// Row types mirror the table columns (`userId` keeps its camelCase column
/// name on the wire). Request bodies keep every field optional: missing
/// values are bound as NULL and left for the database to accept or reject.
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(rename = "userId")]
    #[sqlx(rename = "userId")]
    pub user_id: i64,
    pub date: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub author: String,
    #[serde(rename = "userId")]
    #[sqlx(rename = "userId")]
    pub user_id: i64,
    pub date: NaiveDateTime,
    pub content: String,
}

/// Request body for creating a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
    /// Passed to the database as text and cast there
    pub date: Option<String>,
}

/// Request body for updating a post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub date: Option<String>,
}

/// Request body for creating a comment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub author: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
    pub date: Option<String>,
    pub content: Option<String>,
}

/// Response for a created post: the generated id plus the submitted fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedPost {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
    pub date: Option<String>,
}

impl CreatedPost {
    pub fn new(id: i64, req: CreatePostRequest) -> Self {
        Self {
            id,
            title: req.title,
            content: req.content,
            author: req.author,
            user_id: req.user_id,
            date: req.date,
        }
    }
}

/// Response for a created comment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatedComment {
    pub id: i64,
    #[serde(rename = "postId")]
    pub post_id: i64,
    pub author: Option<String>,
    #[serde(rename = "userId")]
    pub user_id: Option<i64>,
    pub date: Option<String>,
    pub content: Option<String>,
}

impl CreatedComment {
    pub fn new(id: i64, post_id: i64, req: CreateCommentRequest) -> Self {
        Self {
            id,
            post_id,
            author: req.author,
            user_id: req.user_id,
            date: req.date,
            content: req.content,
        }
    }
}

/// `{"message": ...}` confirmation body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .expect("valid date")
    }

    #[test]
    fn test_post_wire_shape() {
        let post = Post {
            id: 7,
            title: "A".into(),
            content: "B".into(),
            author: "C".into(),
            user_id: 1,
            date: midnight(2024, 1, 1),
        };

        assert_eq!(
            serde_json::to_value(&post).unwrap(),
            json!({
                "id": 7,
                "title": "A",
                "content": "B",
                "author": "C",
                "userId": 1,
                "date": "2024-01-01T00:00:00"
            })
        );
    }

    #[test]
    fn test_comment_keeps_column_names() {
        let comment = Comment {
            id: 3,
            post_id: 7,
            author: "D".into(),
            user_id: 2,
            date: midnight(2024, 2, 1),
            content: "nice".into(),
        };

        let value = serde_json::to_value(&comment).unwrap();
        assert_eq!(value["post_id"], 7);
        assert_eq!(value["userId"], 2);
        assert!(value.get("postId").is_none());
    }

    #[test]
    fn test_created_post_echoes_request() {
        let req: CreatePostRequest = serde_json::from_value(json!({
            "title": "A",
            "content": "B",
            "author": "C",
            "userId": 1,
            "date": "2024-01-01"
        }))
        .unwrap();

        assert_eq!(
            serde_json::to_value(CreatedPost::new(42, req)).unwrap(),
            json!({
                "id": 42,
                "title": "A",
                "content": "B",
                "author": "C",
                "userId": 1,
                "date": "2024-01-01"
            })
        );
    }

    #[test]
    fn test_created_comment_uses_post_id_key() {
        let req = CreateCommentRequest {
            author: Some("E".into()),
            user_id: Some(5),
            date: Some("2024-03-01".into()),
            content: Some("hi".into()),
        };

        let value = serde_json::to_value(CreatedComment::new(9, 7, req)).unwrap();
        assert_eq!(value["postId"], 7);
        assert_eq!(value["id"], 9);
        assert!(value.get("post_id").is_none());
    }

    #[test]
    fn test_missing_fields_deserialize_as_none() {
        let req: CreatePostRequest = serde_json::from_value(json!({ "title": "only" })).unwrap();
        assert_eq!(req.title.as_deref(), Some("only"));
        assert!(req.content.is_none());
        assert!(req.user_id.is_none());
        assert!(req.date.is_none());

        let created = serde_json::to_value(CreatedPost::new(1, req)).unwrap();
        assert!(created["author"].is_null());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let result: Result<CreatePostRequest, _> =
            serde_json::from_value(json!({ "userId": "one" }));
        assert!(result.is_err());
    }
}
