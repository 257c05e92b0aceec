use crate::application::dto::users::ProfileHeaderDto;
use crate::application::ports::follow_repository::FollowRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::UserSummary;

pub async fn load_header<U, F>(
    users: &U,
    follows: &F,
    viewer_id: i32,
    user_id: i32,
) -> anyhow::Result<Option<ProfileHeaderDto>>
where
    U: UserRepository + ?Sized,
    F: FollowRepository + ?Sized,
{
    let user = match users.find_by_id(user_id).await? {
        Some(u) => u,
        None => return Ok(None),
    };
    let stats = users.stats(user_id).await?;
    let viewer_follows = viewer_id != user_id && follows.is_following(viewer_id, user_id).await?;
    Ok(Some(ProfileHeaderDto {
        user: UserSummary::from(&user),
        stats,
        viewer_follows,
    }))
}
