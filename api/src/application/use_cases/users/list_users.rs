use crate::application::ports::user_repository::UserRepository;
use crate::domain::users::user::UserSummary;

pub struct ListUsers<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> ListUsers<'a, R> {
    pub async fn execute(&self, search: Option<String>) -> anyhow::Result<Vec<UserSummary>> {
        let search = search.filter(|s| !s.trim().is_empty());
        self.repo.list(search.as_deref()).await
    }
}
