use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::User;

pub struct GetCurrentUser<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> GetCurrentUser<'a, R> {
    pub async fn execute(&self, id: i32) -> anyhow::Result<Option<User>> {
        self.repo.find_by_id(id).await
    }
}
