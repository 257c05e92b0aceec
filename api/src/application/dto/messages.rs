use std::collections::HashSet;

use crate::application::dto::users::ProfileHeaderDto;
use crate::domain::messages::message::MessageWithAuthor;

#[derive(Debug, Clone)]
pub struct TimelineDto {
    pub messages: Vec<MessageWithAuthor>,
    pub viewer_liked_ids: HashSet<i32>,
}

#[derive(Debug, Clone)]
pub struct MessageDetailDto {
    pub message: MessageWithAuthor,
    pub viewer_liked: bool,
}

#[derive(Debug, Clone)]
pub struct LikedMessagesDto {
    pub header: ProfileHeaderDto,
    pub messages: Vec<MessageWithAuthor>,
    pub viewer_liked_ids: HashSet<i32>,
}
