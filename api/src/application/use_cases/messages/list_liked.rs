use crate::application::dto::messages::LikedMessagesDto;
use crate::application::ports::follow_repository::FollowRepository;
use crate::application::ports::like_repository::LikeRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::application::use_cases::users::profile_header::load_header;

pub struct ListLikedMessages<'a, U, F, L>
where
    U: UserRepository + ?Sized,
    F: FollowRepository + ?Sized,
    L: LikeRepository + ?Sized,
{
    pub users: &'a U,
    pub follows: &'a F,
    pub likes: &'a L,
}

impl<'a, U, F, L> ListLikedMessages<'a, U, F, L>
where
    U: UserRepository + ?Sized,
    F: FollowRepository + ?Sized,
    L: LikeRepository + ?Sized,
{
    pub async fn execute(
        &self,
        viewer_id: i32,
        user_id: i32,
    ) -> anyhow::Result<Option<LikedMessagesDto>> {
        let header = match load_header(self.users, self.follows, viewer_id, user_id).await? {
            Some(h) => h,
            None => return Ok(None),
        };
        let messages = self.likes.liked_messages(user_id).await?;
        let viewer_liked_ids = self.likes.liked_ids(viewer_id).await?;
        Ok(Some(LikedMessagesDto {
            header,
            messages,
            viewer_liked_ids,
        }))
    }
}
