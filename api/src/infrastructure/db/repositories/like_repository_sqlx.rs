use std::collections::HashSet;

use async_trait::async_trait;

use crate::application::ports::like_repository::LikeRepository;
use crate::domain::messages::message::MessageWithAuthor;
use crate::infrastructure::db::PgPool;
use crate::infrastructure::db::repositories::message_repository_sqlx::with_author_from_row;

pub struct SqlxLikeRepository {
    pub pool: PgPool,
}

impl SqlxLikeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LikeRepository for SqlxLikeRepository {
    async fn is_liked(&self, user_id: i32, message_id: i32) -> anyhow::Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM likes WHERE user_id = $1 AND message_id = $2",
        )
        .bind(user_id)
        .bind(message_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    async fn like(&self, user_id: i32, message_id: i32) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO likes (user_id, message_id) VALUES ($1, $2) ON CONFLICT DO NOTHING",
        )
        .bind(user_id)
        .bind(message_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn unlike(&self, user_id: i32, message_id: i32) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM likes WHERE user_id = $1 AND message_id = $2")
            .bind(user_id)
            .bind(message_id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn liked_messages(&self, user_id: i32) -> anyhow::Result<Vec<MessageWithAuthor>> {
        let rows = sqlx::query(
            r#"SELECT m.id, m.text, m.timestamp, m.user_id, u.username, u.image_url
               FROM likes l
               JOIN messages m ON m.id = l.message_id
               JOIN users u ON u.id = m.user_id
               WHERE l.user_id = $1
               ORDER BY m.timestamp DESC, m.id DESC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(with_author_from_row).collect())
    }

    async fn liked_ids(&self, user_id: i32) -> anyhow::Result<HashSet<i32>> {
        let ids = sqlx::query_scalar::<_, i32>("SELECT message_id FROM likes WHERE user_id = $1")
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(ids.into_iter().collect())
    }
}
