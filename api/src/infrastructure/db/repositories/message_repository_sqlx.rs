use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::message_repository::MessageRepository;
use crate::domain::messages::message::{Message, MessageWithAuthor};
use crate::infrastructure::db::PgPool;

pub struct SqlxMessageRepository {
    pub pool: PgPool,
}

impl SqlxMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) fn with_author_from_row(r: &PgRow) -> MessageWithAuthor {
    MessageWithAuthor {
        id: r.get("id"),
        text: r.get("text"),
        timestamp: r.get("timestamp"),
        user_id: r.get("user_id"),
        username: r.get("username"),
        image_url: r.get("image_url"),
    }
}

#[async_trait]
impl MessageRepository for SqlxMessageRepository {
    async fn create(&self, user_id: i32, text: &str) -> anyhow::Result<Message> {
        let row = sqlx::query(
            r#"INSERT INTO messages (text, user_id) VALUES ($1, $2)
               RETURNING id, text, timestamp, user_id"#,
        )
        .bind(text)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(Message {
            id: row.get("id"),
            text: row.get("text"),
            timestamp: row.get("timestamp"),
            user_id: row.get("user_id"),
        })
    }

    async fn find_with_author(&self, id: i32) -> anyhow::Result<Option<MessageWithAuthor>> {
        let row = sqlx::query(
            r#"SELECT m.id, m.text, m.timestamp, m.user_id, u.username, u.image_url
               FROM messages m
               JOIN users u ON u.id = m.user_id
               WHERE m.id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(with_author_from_row))
    }

    async fn list_for_user(&self, user_id: i32) -> anyhow::Result<Vec<MessageWithAuthor>> {
        let rows = sqlx::query(
            r#"SELECT m.id, m.text, m.timestamp, m.user_id, u.username, u.image_url
               FROM messages m
               JOIN users u ON u.id = m.user_id
               WHERE m.user_id = $1
               ORDER BY m.timestamp DESC, m.id DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(with_author_from_row).collect())
    }

    async fn list_by_authors(
        &self,
        author_ids: &[i32],
        limit: i64,
    ) -> anyhow::Result<Vec<MessageWithAuthor>> {
        if author_ids.is_empty() {
            return Ok(Vec::new());
        }
        let rows = sqlx::query(
            r#"SELECT m.id, m.text, m.timestamp, m.user_id, u.username, u.image_url
               FROM messages m
               JOIN users u ON u.id = m.user_id
               WHERE m.user_id = ANY($1)
               ORDER BY m.timestamp DESC, m.id DESC
               LIMIT $2"#,
        )
        .bind(author_ids)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(with_author_from_row).collect())
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn delete_for_user(&self, user_id: i32) -> anyhow::Result<u64> {
        let res = sqlx::query("DELETE FROM messages WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected())
    }
}
