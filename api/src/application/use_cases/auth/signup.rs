use crate::application::ports::user_repository::{RepoError, UserRepository};
use crate::application::services::passwords::hash_password;
use crate::domain::users::user::{DEFAULT_IMAGE_URL, NewUser, User, image_or_default};

#[derive(thiserror::Error, Debug)]
pub enum SignupError {
    #[error("username or email already taken")]
    UsernameTaken,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub struct Signup<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub image_url: Option<String>,
}

impl<'a, R: UserRepository + ?Sized> Signup<'a, R> {
    pub async fn execute(&self, req: &SignupRequest) -> Result<User, SignupError> {
        let password_hash = hash_password(&req.password)?;
        let new_user = NewUser {
            username: req.username.trim().to_string(),
            email: req.email.trim().to_string(),
            password_hash,
            image_url: image_or_default(req.image_url.as_deref(), DEFAULT_IMAGE_URL),
        };
        match self.repo.create_user(&new_user).await {
            Ok(user) => Ok(user),
            Err(RepoError::Conflict(constraint)) => {
                tracing::debug!(%constraint, username = %new_user.username, "signup_conflict");
                Err(SignupError::UsernameTaken)
            }
            Err(RepoError::Other(e)) => Err(SignupError::Other(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryStore;

    fn req(username: &str, image_url: Option<&str>) -> SignupRequest {
        SignupRequest {
            username: username.into(),
            email: format!("{}@email.com", username),
            password: "password".into(),
            image_url: image_url.map(Into::into),
        }
    }

    #[tokio::test]
    async fn creates_user_with_default_image() {
        let store = InMemoryStore::new();
        let uc = Signup { repo: &store };
        let user = uc.execute(&req("u3", None)).await.unwrap();
        assert_eq!(user.username, "u3");
        assert_eq!(user.image_url, DEFAULT_IMAGE_URL);
        assert_ne!(user.password_hash, "password");
    }

    #[tokio::test]
    async fn duplicate_username_is_rejected() {
        let store = InMemoryStore::new();
        let uc = Signup { repo: &store };
        uc.execute(&req("u1", None)).await.unwrap();
        let err = uc.execute(&req("u1", None)).await.unwrap_err();
        assert!(matches!(err, SignupError::UsernameTaken));
        assert_eq!(store.user_count(), 1);
    }
}
