use async_trait::async_trait;

use crate::domain::messages::message::{Message, MessageWithAuthor};

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create(&self, user_id: i32, text: &str) -> anyhow::Result<Message>;
    async fn find_with_author(&self, id: i32) -> anyhow::Result<Option<MessageWithAuthor>>;
    /// Newest first.
    async fn list_for_user(&self, user_id: i32) -> anyhow::Result<Vec<MessageWithAuthor>>;
    /// Newest messages written by any of `author_ids`.
    async fn list_by_authors(
        &self,
        author_ids: &[i32],
        limit: i64,
    ) -> anyhow::Result<Vec<MessageWithAuthor>>;
    async fn delete(&self, id: i32) -> anyhow::Result<bool>;
    async fn delete_for_user(&self, user_id: i32) -> anyhow::Result<u64>;
}
