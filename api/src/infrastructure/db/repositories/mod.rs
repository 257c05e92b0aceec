pub mod follow_repository_sqlx;
pub mod like_repository_sqlx;
pub mod message_repository_sqlx;
pub mod user_repository_sqlx;
