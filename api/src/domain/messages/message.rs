use chrono::{DateTime, Utc};

pub const MAX_MESSAGE_LEN: usize = 140;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: i32,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageWithAuthor {
    pub id: i32,
    pub text: String,
    pub timestamp: DateTime<Utc>,
    pub user_id: i32,
    pub username: String,
    pub image_url: String,
}
