use crate::application::access::{self, Actor};
use crate::application::ports::follow_repository::FollowRepository;
use crate::application::ports::user_repository::UserRepository;

#[derive(thiserror::Error, Debug)]
pub enum FollowError {
    #[error("user not found")]
    NotFound,
    #[error("users cannot follow themselves")]
    SelfFollow,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub struct FollowUser<'a, U, F>
where
    U: UserRepository + ?Sized,
    F: FollowRepository + ?Sized,
{
    pub users: &'a U,
    pub follows: &'a F,
}

impl<'a, U, F> FollowUser<'a, U, F>
where
    U: UserRepository + ?Sized,
    F: FollowRepository + ?Sized,
{
    /// Following someone already followed is a no-op.
    pub async fn follow(&self, follower_id: i32, target_id: i32) -> Result<(), FollowError> {
        self.ensure_target(target_id).await?;
        if !access::can_follow(&Actor::User(follower_id), target_id) {
            return Err(FollowError::SelfFollow);
        }
        let created = self.follows.follow(follower_id, target_id).await?;
        tracing::debug!(follower_id, target_id, created, "follow");
        Ok(())
    }

    /// Unfollowing someone not followed is a no-op.
    pub async fn unfollow(&self, follower_id: i32, target_id: i32) -> Result<(), FollowError> {
        self.ensure_target(target_id).await?;
        let removed = self.follows.unfollow(follower_id, target_id).await?;
        tracing::debug!(follower_id, target_id, removed, "unfollow");
        Ok(())
    }

    async fn ensure_target(&self, target_id: i32) -> Result<(), FollowError> {
        match self.users.find_by_id(target_id).await? {
            Some(_) => Ok(()),
            None => Err(FollowError::NotFound),
        }
    }
}
