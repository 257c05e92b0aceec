use crate::application::dto::users::ProfileDto;
use crate::application::ports::follow_repository::FollowRepository;
use crate::application::ports::like_repository::LikeRepository;
use crate::application::ports::message_repository::MessageRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::application::use_cases::users::profile_header::load_header;

pub struct GetProfile<'a, U, M, F, L>
where
    U: UserRepository + ?Sized,
    M: MessageRepository + ?Sized,
    F: FollowRepository + ?Sized,
    L: LikeRepository + ?Sized,
{
    pub users: &'a U,
    pub messages: &'a M,
    pub follows: &'a F,
    pub likes: &'a L,
}

impl<'a, U, M, F, L> GetProfile<'a, U, M, F, L>
where
    U: UserRepository + ?Sized,
    M: MessageRepository + ?Sized,
    F: FollowRepository + ?Sized,
    L: LikeRepository + ?Sized,
{
    pub async fn execute(&self, viewer_id: i32, user_id: i32) -> anyhow::Result<Option<ProfileDto>> {
        let header = match load_header(self.users, self.follows, viewer_id, user_id).await? {
            Some(h) => h,
            None => return Ok(None),
        };
        let messages = self.messages.list_for_user(user_id).await?;
        let viewer_liked_ids = self.likes.liked_ids(viewer_id).await?;
        Ok(Some(ProfileDto {
            header,
            messages,
            viewer_liked_ids,
        }))
    }
}
