use crate::application::dto::messages::TimelineDto;
use crate::application::ports::follow_repository::FollowRepository;
use crate::application::ports::like_repository::LikeRepository;
use crate::application::ports::message_repository::MessageRepository;

pub const TIMELINE_LIMIT: i64 = 100;

pub struct HomeTimeline<'a, M, F, L>
where
    M: MessageRepository + ?Sized,
    F: FollowRepository + ?Sized,
    L: LikeRepository + ?Sized,
{
    pub messages: &'a M,
    pub follows: &'a F,
    pub likes: &'a L,
}

impl<'a, M, F, L> HomeTimeline<'a, M, F, L>
where
    M: MessageRepository + ?Sized,
    F: FollowRepository + ?Sized,
    L: LikeRepository + ?Sized,
{
    /// Most recent messages by the user and everyone they follow.
    pub async fn execute(&self, user_id: i32) -> anyhow::Result<TimelineDto> {
        let mut authors = self.follows.following_ids(user_id).await?;
        authors.push(user_id);
        let messages = self
            .messages
            .list_by_authors(&authors, TIMELINE_LIMIT)
            .await?;
        let viewer_liked_ids = self.likes.liked_ids(user_id).await?;
        Ok(TimelineDto {
            messages,
            viewer_liked_ids,
        })
    }
}
