use std::collections::HashSet;

use crate::application::dto::users::FollowListDto;
use crate::application::ports::follow_repository::FollowRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::application::use_cases::users::profile_header::load_header;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowDirection {
    /// People the user follows.
    Following,
    /// People who follow the user.
    Followers,
}

pub struct ListFollows<'a, U, F>
where
    U: UserRepository + ?Sized,
    F: FollowRepository + ?Sized,
{
    pub users: &'a U,
    pub follows: &'a F,
}

impl<'a, U, F> ListFollows<'a, U, F>
where
    U: UserRepository + ?Sized,
    F: FollowRepository + ?Sized,
{
    pub async fn execute(
        &self,
        viewer_id: i32,
        user_id: i32,
        direction: FollowDirection,
    ) -> anyhow::Result<Option<FollowListDto>> {
        let header = match load_header(self.users, self.follows, viewer_id, user_id).await? {
            Some(h) => h,
            None => return Ok(None),
        };
        let users = match direction {
            FollowDirection::Following => self.follows.following(user_id).await?,
            FollowDirection::Followers => self.follows.followers(user_id).await?,
        };
        let viewer_following_ids: HashSet<i32> = self
            .follows
            .following_ids(viewer_id)
            .await?
            .into_iter()
            .collect();
        Ok(Some(FollowListDto {
            header,
            users,
            viewer_following_ids,
        }))
    }
}
