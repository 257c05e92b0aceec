use crate::application::ports::message_repository::MessageRepository;
use crate::application::ports::user_repository::UserRepository;

pub struct DeleteAccount<'a, UR, MR>
where
    UR: UserRepository + ?Sized,
    MR: MessageRepository + ?Sized,
{
    pub user_repo: &'a UR,
    pub message_repo: &'a MR,
}

impl<'a, UR, MR> DeleteAccount<'a, UR, MR>
where
    UR: UserRepository + ?Sized,
    MR: MessageRepository + ?Sized,
{
    pub async fn execute(&self, user_id: i32) -> anyhow::Result<()> {
        let removed = self.message_repo.delete_for_user(user_id).await?;
        tracing::debug!(user_id, removed, "account_messages_deleted");

        let deleted = self.user_repo.delete_user(user_id).await?;
        anyhow::ensure!(deleted, "user not found");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryStore;

    #[tokio::test]
    async fn removes_user_messages_follows_and_likes() {
        let store = InMemoryStore::new();
        let u1 = store.seed_user("u1", "password");
        let u2 = store.seed_user("u2", "password");
        let m1 = store.seed_message(u1.id, "bye", 0);
        let m2 = store.seed_message(u2.id, "stay", 0);
        store.seed_follow(u1.id, u2.id);
        store.seed_follow(u2.id, u1.id);
        store.seed_like(u2.id, m1.id);
        store.seed_like(u1.id, m2.id);

        let uc = DeleteAccount {
            user_repo: &store,
            message_repo: &store,
        };
        uc.execute(u1.id).await.unwrap();

        assert!(store.user(u1.id).is_none());
        assert_eq!(store.message_count(), 1);
        assert!(!store.has_follow(u2.id, u1.id));
        assert!(!store.has_like(u2.id, m1.id));
        assert!(!store.has_like(u1.id, m2.id));
    }

    #[tokio::test]
    async fn missing_user_is_an_error() {
        let store = InMemoryStore::new();
        let uc = DeleteAccount {
            user_repo: &store,
            message_repo: &store,
        };
        assert!(uc.execute(42).await.is_err());
    }
}
