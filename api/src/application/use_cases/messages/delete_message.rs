use crate::application::access::{self, Actor};
use crate::application::ports::message_repository::MessageRepository;

#[derive(thiserror::Error, Debug)]
pub enum DeleteMessageError {
    #[error("message not found")]
    NotFound,
    #[error("only the author may delete a message")]
    Forbidden,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub struct DeleteMessage<'a, R: MessageRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: MessageRepository + ?Sized> DeleteMessage<'a, R> {
    /// Existence is checked before authorization, so a missing message is
    /// `NotFound` even for anonymous actors.
    pub async fn execute(&self, actor: &Actor, id: i32) -> Result<(), DeleteMessageError> {
        let message = self
            .repo
            .find_with_author(id)
            .await?
            .ok_or(DeleteMessageError::NotFound)?;
        access::require_owner(actor, &message).map_err(|_| DeleteMessageError::Forbidden)?;
        self.repo.delete(id).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryStore;

    #[tokio::test]
    async fn only_author_deletes() {
        let store = InMemoryStore::new();
        let u1 = store.seed_user("u1", "password");
        let u2 = store.seed_user("u2", "password");
        let m = store.seed_message(u1.id, "mine", 0);
        let uc = DeleteMessage { repo: &store };

        assert!(matches!(
            uc.execute(&Actor::User(u2.id), m.id).await,
            Err(DeleteMessageError::Forbidden)
        ));
        assert!(matches!(
            uc.execute(&Actor::Anonymous, m.id).await,
            Err(DeleteMessageError::Forbidden)
        ));
        uc.execute(&Actor::User(u1.id), m.id).await.unwrap();
        assert_eq!(store.message_count(), 0);
        assert!(matches!(
            uc.execute(&Actor::Anonymous, m.id).await,
            Err(DeleteMessageError::NotFound)
        ));
    }
}
