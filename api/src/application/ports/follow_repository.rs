use async_trait::async_trait;

use crate::domain::users::user::UserSummary;

#[async_trait]
pub trait FollowRepository: Send + Sync {
    /// Returns false when the follow already existed.
    async fn follow(&self, follower_id: i32, followed_id: i32) -> anyhow::Result<bool>;
    async fn unfollow(&self, follower_id: i32, followed_id: i32) -> anyhow::Result<bool>;
    async fn is_following(&self, follower_id: i32, followed_id: i32) -> anyhow::Result<bool>;
    async fn following(&self, user_id: i32) -> anyhow::Result<Vec<UserSummary>>;
    async fn followers(&self, user_id: i32) -> anyhow::Result<Vec<UserSummary>>;
    async fn following_ids(&self, user_id: i32) -> anyhow::Result<Vec<i32>>;
}
