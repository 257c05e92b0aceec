use crate::application::ports::message_repository::MessageRepository;
use crate::domain::messages::message::{MAX_MESSAGE_LEN, Message};

pub struct CreateMessage<'a, R: MessageRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MessageRepository + ?Sized> CreateMessage<'a, R> {
    pub async fn execute(&self, user_id: i32, text: &str) -> anyhow::Result<Message> {
        let text = text.trim();
        anyhow::ensure!(!text.is_empty(), "message text is required");
        anyhow::ensure!(
            text.chars().count() <= MAX_MESSAGE_LEN,
            "message text exceeds {} characters",
            MAX_MESSAGE_LEN
        );
        self.repo.create(user_id, text).await
    }
}
