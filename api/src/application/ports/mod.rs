pub mod follow_repository;
pub mod like_repository;
pub mod message_repository;
pub mod user_repository;
