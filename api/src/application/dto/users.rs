use std::collections::HashSet;

use crate::domain::messages::message::MessageWithAuthor;
use crate::domain::users::user::{ProfileStats, UserSummary};

/// A user's profile header, shared by every per-user page.
#[derive(Debug, Clone)]
pub struct ProfileHeaderDto {
    pub user: UserSummary,
    pub stats: ProfileStats,
    /// Whether the viewer follows this user.
    pub viewer_follows: bool,
}

#[derive(Debug, Clone)]
pub struct ProfileDto {
    pub header: ProfileHeaderDto,
    pub messages: Vec<MessageWithAuthor>,
    pub viewer_liked_ids: HashSet<i32>,
}

#[derive(Debug, Clone)]
pub struct FollowListDto {
    pub header: ProfileHeaderDto,
    pub users: Vec<UserSummary>,
    /// Ids the viewer follows, for rendering follow/unfollow buttons on cards.
    pub viewer_following_ids: HashSet<i32>,
}
