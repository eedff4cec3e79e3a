use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct Comment {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub match_id: Uuid,
}

#[derive(Debug, FromRow, Serialize, Deserialize, Clone)]
pub struct CommentWithAuthor {
    pub id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub user_id: Uuid,
    pub username: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    pub text: String,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CommentValidationError {
    Empty,
    TooLong { max_length: usize },
}

impl CommentValidationError {
    pub fn message(&self) -> String {
        match self {
            CommentValidationError::Empty => "Comment text cannot be empty".to_string(),
            CommentValidationError::TooLong { max_length } => {
                format!("Comment text too long (max {} characters)", max_length)
            }
        }
    }
}

/// Length is counted in characters, not bytes.
pub fn validate_comment_text(text: &str, max_length: usize) -> Result<&str, CommentValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CommentValidationError::Empty);
    }
    if trimmed.chars().count() > max_length {
        return Err(CommentValidationError::TooLong { max_length });
    }
    Ok(trimmed)
}
