use async_trait::async_trait;
use sqlx::Row;
use sqlx::postgres::PgRow;

use crate::application::ports::user_repository::{RepoError, UserRepository};
use crate::domain::users::user::{NewUser, ProfileStats, ProfileUpdate, User, UserSummary};
use crate::infrastructure::db::{PgPool, contains_pattern, repo_error};

const USER_COLUMNS: &str =
    "id, email, username, image_url, header_image_url, bio, location, password";

pub struct SqlxUserRepository {
    pub pool: PgPool,
}

impl SqlxUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

pub(crate) fn user_from_row(r: &PgRow) -> User {
    User {
        id: r.get("id"),
        email: r.get("email"),
        username: r.get("username"),
        image_url: r.get("image_url"),
        header_image_url: r.get("header_image_url"),
        bio: r.get("bio"),
        location: r.get("location"),
        password_hash: r.get("password"),
    }
}

pub(crate) fn summary_from_row(r: &PgRow) -> UserSummary {
    UserSummary {
        id: r.get("id"),
        username: r.get("username"),
        image_url: r.get("image_url"),
        header_image_url: r.get("header_image_url"),
        bio: r.get("bio"),
        location: r.get("location"),
    }
}

#[async_trait]
impl UserRepository for SqlxUserRepository {
    async fn create_user(&self, new_user: &NewUser) -> Result<User, RepoError> {
        let row = sqlx::query(&format!(
            r#"INSERT INTO users (username, email, password, image_url) VALUES ($1, $2, $3, $4)
               RETURNING {USER_COLUMNS}"#
        ))
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.password_hash)
        .bind(&new_user.image_url)
        .fetch_one(&self.pool)
        .await
        .map_err(repo_error)?;
        Ok(user_from_row(&row))
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<User>> {
        let row = sqlx::query(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.as_ref().map(user_from_row))
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        let row = sqlx::query(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.as_ref().map(user_from_row))
    }

    async fn list(&self, search: Option<&str>) -> anyhow::Result<Vec<UserSummary>> {
        let rows = if let Some(q) = search {
            sqlx::query(
                r#"SELECT id, username, image_url, header_image_url, bio, location
                   FROM users
                   WHERE username LIKE $1 ESCAPE '\'
                   ORDER BY username ASC"#,
            )
            .bind(contains_pattern(q))
            .fetch_all(&self.pool)
            .await?
        } else {
            sqlx::query(
                r#"SELECT id, username, image_url, header_image_url, bio, location
                   FROM users
                   ORDER BY username ASC"#,
            )
            .fetch_all(&self.pool)
            .await?
        };
        Ok(rows.iter().map(summary_from_row).collect())
    }

    async fn update_profile(
        &self,
        id: i32,
        update: &ProfileUpdate,
    ) -> Result<Option<User>, RepoError> {
        let row = sqlx::query(&format!(
            r#"UPDATE users
               SET username = $2, email = $3, image_url = $4, header_image_url = $5,
                   bio = $6, location = $7
               WHERE id = $1
               RETURNING {USER_COLUMNS}"#
        ))
        .bind(id)
        .bind(&update.username)
        .bind(&update.email)
        .bind(&update.image_url)
        .bind(&update.header_image_url)
        .bind(&update.bio)
        .bind(&update.location)
        .fetch_optional(&self.pool)
        .await
        .map_err(repo_error)?;
        Ok(row.as_ref().map(user_from_row))
    }

    async fn delete_user(&self, id: i32) -> anyhow::Result<bool> {
        let res = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn stats(&self, id: i32) -> anyhow::Result<ProfileStats> {
        let row = sqlx::query(
            r#"SELECT
                 (SELECT COUNT(*) FROM messages WHERE user_id = $1)::BIGINT AS messages,
                 (SELECT COUNT(*) FROM follows WHERE user_following_id = $1)::BIGINT AS following,
                 (SELECT COUNT(*) FROM follows WHERE user_being_followed_id = $1)::BIGINT AS followers,
                 (SELECT COUNT(*) FROM likes WHERE user_id = $1)::BIGINT AS likes"#,
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(ProfileStats {
            messages: row.get("messages"),
            following: row.get("following"),
            followers: row.get("followers"),
            likes: row.get("likes"),
        })
    }
}
