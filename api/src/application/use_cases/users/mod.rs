pub mod follow;
pub mod get_profile;
pub mod list_follows;
pub mod list_users;
pub mod profile_header;
