use std::collections::HashSet;

use async_trait::async_trait;

use crate::domain::messages::message::MessageWithAuthor;

#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn is_liked(&self, user_id: i32, message_id: i32) -> anyhow::Result<bool>;
    async fn like(&self, user_id: i32, message_id: i32) -> anyhow::Result<()>;
    async fn unlike(&self, user_id: i32, message_id: i32) -> anyhow::Result<bool>;
    async fn liked_messages(&self, user_id: i32) -> anyhow::Result<Vec<MessageWithAuthor>>;
    async fn liked_ids(&self, user_id: i32) -> anyhow::Result<HashSet<i32>>;
}
