use crate::application::dto::messages::MessageDetailDto;
use crate::application::ports::like_repository::LikeRepository;
use crate::application::ports::message_repository::MessageRepository;

pub struct GetMessage<'a, M, L>
where
    M: MessageRepository + ?Sized,
    L: LikeRepository + ?Sized,
{
    pub messages: &'a M,
    pub likes: &'a L,
}

impl<'a, M, L> GetMessage<'a, M, L>
where
    M: MessageRepository + ?Sized,
    L: LikeRepository + ?Sized,
{
    pub async fn execute(&self, viewer_id: i32, id: i32) -> anyhow::Result<Option<MessageDetailDto>> {
        let message = match self.messages.find_with_author(id).await? {
            Some(m) => m,
            None => return Ok(None),
        };
        let viewer_liked = self.likes.is_liked(viewer_id, id).await?;
        Ok(Some(MessageDetailDto {
            message,
            viewer_liked,
        }))
    }
}
