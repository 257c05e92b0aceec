use crate::application::access::{self, Actor, Capability};
use crate::application::ports::like_repository::LikeRepository;
use crate::application::ports::message_repository::MessageRepository;

#[derive(thiserror::Error, Debug)]
pub enum ToggleLikeError {
    #[error("message not found")]
    NotFound,
    #[error("authors cannot like their own messages")]
    OwnMessage,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeState {
    Liked,
    Unliked,
}

pub struct ToggleLike<'a, M, L>
where
    M: MessageRepository + ?Sized,
    L: LikeRepository + ?Sized,
{
    pub messages: &'a M,
    pub likes: &'a L,
}

impl<'a, M, L> ToggleLike<'a, M, L>
where
    M: MessageRepository + ?Sized,
    L: LikeRepository + ?Sized,
{
    pub async fn execute(&self, user_id: i32, message_id: i32) -> Result<LikeState, ToggleLikeError> {
        let message = self
            .messages
            .find_with_author(message_id)
            .await?
            .ok_or(ToggleLikeError::NotFound)?;
        if access::resolve_message(&Actor::User(user_id), &message) != Capability::Like {
            return Err(ToggleLikeError::OwnMessage);
        }
        if self.likes.is_liked(user_id, message_id).await? {
            self.likes.unlike(user_id, message_id).await?;
            Ok(LikeState::Unliked)
        } else {
            self.likes.like(user_id, message_id).await?;
            Ok(LikeState::Liked)
        }
    }
}
