use crate::application::ports::user_repository::UserRepository;
use crate::application::services::passwords::verify_password;
use crate::domain::users::user::User;

pub struct Login<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl<'a, R: UserRepository + ?Sized> Login<'a, R> {
    /// `None` for an unknown username or a wrong password.
    pub async fn execute(&self, req: &LoginRequest) -> anyhow::Result<Option<User>> {
        let row = match self.repo.find_by_username(&req.username).await? {
            Some(r) => r,
            None => return Ok(None),
        };
        if verify_password(&req.password, &row.password_hash) {
            Ok(Some(row))
        } else {
            Ok(None)
        }
    }
}
