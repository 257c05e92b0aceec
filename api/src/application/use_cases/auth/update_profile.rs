use crate::application::ports::user_repository::{RepoError, UserRepository};
use crate::application::services::passwords::verify_password;
use crate::domain::users::user::{
    DEFAULT_HEADER_IMAGE_URL, DEFAULT_IMAGE_URL, ProfileUpdate, User, image_or_default,
};

#[derive(thiserror::Error, Debug)]
pub enum UpdateProfileError {
    #[error("password does not match")]
    BadPassword,
    #[error("username or email already taken")]
    UsernameTaken,
    #[error("user not found")]
    NotFound,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Debug, Clone)]
pub struct UpdateProfileRequest {
    pub username: String,
    pub email: String,
    pub image_url: Option<String>,
    pub header_image_url: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub password: String,
}

pub struct UpdateProfile<'a, R: UserRepository + ?Sized> {
    pub repo: &'a R,
}

impl<'a, R: UserRepository + ?Sized> UpdateProfile<'a, R> {
    /// Applies the edit only when `req.password` is the user's current password.
    pub async fn execute(
        &self,
        user: &User,
        req: &UpdateProfileRequest,
    ) -> Result<User, UpdateProfileError> {
        if !verify_password(&req.password, &user.password_hash) {
            return Err(UpdateProfileError::BadPassword);
        }
        let update = ProfileUpdate {
            username: req.username.trim().to_string(),
            email: req.email.trim().to_string(),
            image_url: image_or_default(req.image_url.as_deref(), DEFAULT_IMAGE_URL),
            header_image_url: image_or_default(
                req.header_image_url.as_deref(),
                DEFAULT_HEADER_IMAGE_URL,
            ),
            bio: req.bio.clone().unwrap_or_default(),
            location: req.location.clone().unwrap_or_default(),
        };
        match self.repo.update_profile(user.id, &update).await {
            Ok(Some(u)) => Ok(u),
            Ok(None) => Err(UpdateProfileError::NotFound),
            Err(RepoError::Conflict(_)) => Err(UpdateProfileError::UsernameTaken),
            Err(RepoError::Other(e)) => Err(UpdateProfileError::Other(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::InMemoryStore;

    fn req(username: &str, password: &str) -> UpdateProfileRequest {
        UpdateProfileRequest {
            username: username.into(),
            email: format!("{}@email.com", username),
            image_url: Some(String::new()),
            header_image_url: None,
            bio: Some("hello there".into()),
            location: Some("Oakland".into()),
            password: password.into(),
        }
    }

    #[tokio::test]
    async fn updates_with_correct_password() {
        let store = InMemoryStore::new();
        let u1 = store.seed_user("u1", "password");
        let uc = UpdateProfile { repo: &store };

        let updated = uc.execute(&u1, &req("renamed", "password")).await.unwrap();
        assert_eq!(updated.username, "renamed");
        assert_eq!(updated.bio, "hello there");
        assert_eq!(updated.image_url, DEFAULT_IMAGE_URL);
        assert_eq!(updated.header_image_url, DEFAULT_HEADER_IMAGE_URL);
    }

    #[tokio::test]
    async fn wrong_password_changes_nothing() {
        let store = InMemoryStore::new();
        let u1 = store.seed_user("u1", "password");
        let uc = UpdateProfile { repo: &store };

        let err = uc.execute(&u1, &req("renamed", "nope")).await.unwrap_err();
        assert!(matches!(err, UpdateProfileError::BadPassword));
        assert_eq!(store.user(u1.id).unwrap().username, "u1");
    }

    #[tokio::test]
    async fn taken_username_is_reported() {
        let store = InMemoryStore::new();
        let u1 = store.seed_user("u1", "password");
        store.seed_user("u2", "password");
        let uc = UpdateProfile { repo: &store };

        let err = uc.execute(&u1, &req("u2", "password")).await.unwrap_err();
        assert!(matches!(err, UpdateProfileError::UsernameTaken));
    }
}
