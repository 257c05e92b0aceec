use std::sync::Arc;

use crate::application::ports::follow_repository::FollowRepository;
use crate::application::ports::like_repository::LikeRepository;
use crate::application::ports::message_repository::MessageRepository;
use crate::application::ports::user_repository::UserRepository;
use crate::bootstrap::config::Config;

#[derive(Clone)]
pub struct AppContext {
    pub cfg: Config,
    services: Arc<AppServices>,
}

#[derive(Clone)]
pub struct AppServices {
    user_repo: Arc<dyn UserRepository>,
    message_repo: Arc<dyn MessageRepository>,
    follow_repo: Arc<dyn FollowRepository>,
    like_repo: Arc<dyn LikeRepository>,
}

impl AppServices {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        message_repo: Arc<dyn MessageRepository>,
        follow_repo: Arc<dyn FollowRepository>,
        like_repo: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            user_repo,
            message_repo,
            follow_repo,
            like_repo,
        }
    }
}

impl AppContext {
    pub fn new(cfg: Config, services: AppServices) -> Self {
        Self {
            cfg,
            services: Arc::new(services),
        }
    }

    pub fn user_repo(&self) -> Arc<dyn UserRepository> {
        self.services.user_repo.clone()
    }

    pub fn message_repo(&self) -> Arc<dyn MessageRepository> {
        self.services.message_repo.clone()
    }

    pub fn follow_repo(&self) -> Arc<dyn FollowRepository> {
        self.services.follow_repo.clone()
    }

    pub fn like_repo(&self) -> Arc<dyn LikeRepository> {
        self.services.like_repo.clone()
    }
}

#[cfg(test)]
impl AppContext {
    /// Context backed entirely by one in-memory store.
    pub fn in_memory(cfg: Config, store: crate::application::testing::InMemoryStore) -> Self {
        let store = Arc::new(store);
        Self::new(
            cfg,
            AppServices::new(store.clone(), store.clone(), store.clone(), store),
        )
    }
}
