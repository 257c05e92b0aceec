pub mod current_user;
pub mod delete_account;
pub mod login;
pub mod signup;
pub mod update_profile;
