use async_trait::async_trait;

use crate::domain::users::user::{NewUser, ProfileStats, ProfileUpdate, User, UserSummary};

#[derive(thiserror::Error, Debug)]
pub enum RepoError {
    #[error("unique constraint violated: {0}")]
    Conflict(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create_user(&self, new_user: &NewUser) -> Result<User, RepoError>;
    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<User>>;
    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;
    /// Users whose username contains `search` literally, ordered by username.
    async fn list(&self, search: Option<&str>) -> anyhow::Result<Vec<UserSummary>>;
    async fn update_profile(
        &self,
        id: i32,
        update: &ProfileUpdate,
    ) -> Result<Option<User>, RepoError>;
    async fn delete_user(&self, id: i32) -> anyhow::Result<bool>;
    async fn stats(&self, id: i32) -> anyhow::Result<ProfileStats>;
}
