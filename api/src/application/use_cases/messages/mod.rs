pub mod create_message;
pub mod delete_message;
pub mod get_message;
pub mod home_timeline;
pub mod list_liked;
pub mod toggle_like;
