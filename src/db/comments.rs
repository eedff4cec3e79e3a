use sqlx::postgres::PgExecutor;
use uuid::Uuid;

use crate::models::comment::{Comment, CommentWithAuthor};

pub async fn create_comment<'e, E: PgExecutor<'e>>(
    executor: E,
    user_id: Uuid,
    match_id: Uuid,
    text: &str,
) -> Result<Comment, sqlx::Error> {
    sqlx::query_as::<_, Comment>(
        r#"
        INSERT INTO comments (id, text, user_id, match_id)
        VALUES ($1, $2, $3, $4)
        RETURNING id, text, created_at, user_id, match_id
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(text)
    .bind(user_id)
    .bind(match_id)
    .fetch_one(executor)
    .await
}

/// Oldest first, so a thread reads top to bottom.
pub async fn get_match_comments<'e, E: PgExecutor<'e>>(
    executor: E,
    match_id: Uuid,
) -> Result<Vec<CommentWithAuthor>, sqlx::Error> {
    sqlx::query_as::<_, CommentWithAuthor>(
        r#"
        SELECT c.id, c.text, c.created_at, c.user_id, u.username
        FROM comments c
        INNER JOIN users u ON u.id = c.user_id
        WHERE c.match_id = $1
        ORDER BY c.created_at ASC, c.id ASC
        "#,
    )
    .bind(match_id)
    .fetch_all(executor)
    .await
}
