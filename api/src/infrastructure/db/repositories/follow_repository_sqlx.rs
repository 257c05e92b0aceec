use async_trait::async_trait;
use sqlx::Row;

use crate::application::ports::follow_repository::FollowRepository;
use crate::domain::users::user::UserSummary;
use crate::infrastructure::db::PgPool;
use crate::infrastructure::db::repositories::user_repository_sqlx::summary_from_row;

pub struct SqlxFollowRepository {
    pub pool: PgPool,
}

impl SqlxFollowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FollowRepository for SqlxFollowRepository {
    async fn follow(&self, follower_id: i32, followed_id: i32) -> anyhow::Result<bool> {
        let res = sqlx::query(
            r#"INSERT INTO follows (user_being_followed_id, user_following_id)
               VALUES ($1, $2)
               ON CONFLICT DO NOTHING"#,
        )
        .bind(followed_id)
        .bind(follower_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn unfollow(&self, follower_id: i32, followed_id: i32) -> anyhow::Result<bool> {
        let res = sqlx::query(
            "DELETE FROM follows WHERE user_being_followed_id = $1 AND user_following_id = $2",
        )
        .bind(followed_id)
        .bind(follower_id)
        .execute(&self.pool)
        .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn is_following(&self, follower_id: i32, followed_id: i32) -> anyhow::Result<bool> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(1) FROM follows WHERE user_being_followed_id = $1 AND user_following_id = $2",
        )
        .bind(followed_id)
        .bind(follower_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count > 0)
    }

    async fn following(&self, user_id: i32) -> anyhow::Result<Vec<UserSummary>> {
        let rows = sqlx::query(
            r#"SELECT u.id, u.username, u.image_url, u.header_image_url, u.bio, u.location
               FROM follows f
               JOIN users u ON u.id = f.user_being_followed_id
               WHERE f.user_following_id = $1
               ORDER BY u.username ASC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(summary_from_row).collect())
    }

    async fn followers(&self, user_id: i32) -> anyhow::Result<Vec<UserSummary>> {
        let rows = sqlx::query(
            r#"SELECT u.id, u.username, u.image_url, u.header_image_url, u.bio, u.location
               FROM follows f
               JOIN users u ON u.id = f.user_following_id
               WHERE f.user_being_followed_id = $1
               ORDER BY u.username ASC"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.iter().map(summary_from_row).collect())
    }

    async fn following_ids(&self, user_id: i32) -> anyhow::Result<Vec<i32>> {
        let rows = sqlx::query(
            "SELECT user_being_followed_id AS id FROM follows WHERE user_following_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(|r| r.get("id")).collect())
    }
}
