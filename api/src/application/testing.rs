//! In-memory implementations of the repository ports, used by unit and route tests.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use once_cell::sync::Lazy;

use crate::application::ports::follow_repository::FollowRepository;
use crate::application::ports::like_repository::LikeRepository;
use crate::application::ports::message_repository::MessageRepository;
use crate::application::ports::user_repository::{RepoError, UserRepository};
use crate::application::services::passwords::hash_password;
use crate::domain::messages::message::{Message, MessageWithAuthor};
use crate::domain::users::user::{
    DEFAULT_HEADER_IMAGE_URL, DEFAULT_IMAGE_URL, NewUser, ProfileStats, ProfileUpdate, User,
    UserSummary,
};

// Argon2 is slow in debug builds; most fixtures share one password.
static PASSWORD_HASH: Lazy<String> = Lazy::new(|| hash_password("password").unwrap());

#[derive(Default)]
struct State {
    users: Vec<User>,
    messages: Vec<Message>,
    // (follower, followed)
    follows: HashSet<(i32, i32)>,
    // (user, message)
    likes: HashSet<(i32, i32)>,
    next_user_id: i32,
    next_message_id: i32,
}

impl State {
    fn with_author(&self, m: &Message) -> Option<MessageWithAuthor> {
        let author = self.users.iter().find(|u| u.id == m.user_id)?;
        Some(MessageWithAuthor {
            id: m.id,
            text: m.text.clone(),
            timestamp: m.timestamp,
            user_id: m.user_id,
            username: author.username.clone(),
            image_url: author.image_url.clone(),
        })
    }

    fn newest_first(&self, mut items: Vec<MessageWithAuthor>) -> Vec<MessageWithAuthor> {
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        items
    }

    fn summaries(&self, ids: impl Iterator<Item = i32>) -> Vec<UserSummary> {
        let ids: HashSet<i32> = ids.collect();
        let mut out: Vec<UserSummary> = self
            .users
            .iter()
            .filter(|u| ids.contains(&u.id))
            .map(UserSummary::from)
            .collect();
        out.sort_by(|a, b| a.username.cmp(&b.username));
        out
    }

    fn unique_taken(&self, username: &str, email: &str, except: Option<i32>) -> bool {
        self.users
            .iter()
            .filter(|u| Some(u.id) != except)
            .any(|u| u.username == username || u.email == email)
    }
}

#[derive(Clone, Default)]
pub struct InMemoryStore {
    inner: Arc<Mutex<State>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.inner.lock().unwrap()
    }

    /// Creates a user with the given password, bypassing the signup use case.
    pub fn seed_user(&self, username: &str, password: &str) -> User {
        let mut st = self.state();
        st.next_user_id += 1;
        let user = User {
            id: st.next_user_id,
            email: format!("{}@email.com", username),
            username: username.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
            header_image_url: DEFAULT_HEADER_IMAGE_URL.to_string(),
            bio: String::new(),
            location: String::new(),
            password_hash: if password == "password" {
                PASSWORD_HASH.clone()
            } else {
                hash_password(password).unwrap()
            },
        };
        st.users.push(user.clone());
        user
    }

    /// Inserts a message `age_secs` seconds in the past.
    pub fn seed_message(&self, user_id: i32, text: &str, age_secs: i64) -> Message {
        let mut st = self.state();
        st.next_message_id += 1;
        let msg = Message {
            id: st.next_message_id,
            text: text.to_string(),
            timestamp: Utc::now() - Duration::seconds(age_secs),
            user_id,
        };
        st.messages.push(msg.clone());
        msg
    }

    pub fn seed_follow(&self, follower_id: i32, followed_id: i32) {
        self.state().follows.insert((follower_id, followed_id));
    }

    pub fn seed_like(&self, user_id: i32, message_id: i32) {
        self.state().likes.insert((user_id, message_id));
    }

    pub fn user_count(&self) -> usize {
        self.state().users.len()
    }

    pub fn message_count(&self) -> usize {
        self.state().messages.len()
    }

    pub fn has_follow(&self, follower_id: i32, followed_id: i32) -> bool {
        self.state().follows.contains(&(follower_id, followed_id))
    }

    pub fn has_like(&self, user_id: i32, message_id: i32) -> bool {
        self.state().likes.contains(&(user_id, message_id))
    }

    pub fn user(&self, id: i32) -> Option<User> {
        self.state().users.iter().find(|u| u.id == id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create_user(&self, new_user: &NewUser) -> Result<User, RepoError> {
        let mut st = self.state();
        if st.unique_taken(&new_user.username, &new_user.email, None) {
            return Err(RepoError::Conflict("users_username_key".into()));
        }
        st.next_user_id += 1;
        let user = User {
            id: st.next_user_id,
            email: new_user.email.clone(),
            username: new_user.username.clone(),
            image_url: new_user.image_url.clone(),
            header_image_url: DEFAULT_HEADER_IMAGE_URL.to_string(),
            bio: String::new(),
            location: String::new(),
            password_hash: new_user.password_hash.clone(),
        };
        st.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: i32) -> anyhow::Result<Option<User>> {
        Ok(self.user(id))
    }

    async fn find_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        Ok(self
            .state()
            .users
            .iter()
            .find(|u| u.username == username)
            .cloned())
    }

    async fn list(&self, search: Option<&str>) -> anyhow::Result<Vec<UserSummary>> {
        let st = self.state();
        let ids = st
            .users
            .iter()
            .filter(|u| search.map(|q| u.username.contains(q)).unwrap_or(true))
            .map(|u| u.id);
        Ok(st.summaries(ids))
    }

    async fn update_profile(
        &self,
        id: i32,
        update: &ProfileUpdate,
    ) -> Result<Option<User>, RepoError> {
        let mut st = self.state();
        if st.unique_taken(&update.username, &update.email, Some(id)) {
            return Err(RepoError::Conflict("users_username_key".into()));
        }
        let Some(user) = st.users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };
        user.username = update.username.clone();
        user.email = update.email.clone();
        user.image_url = update.image_url.clone();
        user.header_image_url = update.header_image_url.clone();
        user.bio = update.bio.clone();
        user.location = update.location.clone();
        Ok(Some(user.clone()))
    }

    async fn delete_user(&self, id: i32) -> anyhow::Result<bool> {
        let mut st = self.state();
        let before = st.users.len();
        st.users.retain(|u| u.id != id);
        if st.users.len() == before {
            return Ok(false);
        }
        let own: HashSet<i32> = st
            .messages
            .iter()
            .filter(|m| m.user_id == id)
            .map(|m| m.id)
            .collect();
        st.messages.retain(|m| m.user_id != id);
        st.follows.retain(|(a, b)| *a != id && *b != id);
        st.likes.retain(|(u, m)| *u != id && !own.contains(m));
        Ok(true)
    }

    async fn stats(&self, id: i32) -> anyhow::Result<ProfileStats> {
        let st = self.state();
        Ok(ProfileStats {
            messages: st.messages.iter().filter(|m| m.user_id == id).count() as i64,
            following: st.follows.iter().filter(|(a, _)| *a == id).count() as i64,
            followers: st.follows.iter().filter(|(_, b)| *b == id).count() as i64,
            likes: st.likes.iter().filter(|(u, _)| *u == id).count() as i64,
        })
    }
}

#[async_trait]
impl MessageRepository for InMemoryStore {
    async fn create(&self, user_id: i32, text: &str) -> anyhow::Result<Message> {
        Ok(self.seed_message(user_id, text, 0))
    }

    async fn find_with_author(&self, id: i32) -> anyhow::Result<Option<MessageWithAuthor>> {
        let st = self.state();
        Ok(st
            .messages
            .iter()
            .find(|m| m.id == id)
            .and_then(|m| st.with_author(m)))
    }

    async fn list_for_user(&self, user_id: i32) -> anyhow::Result<Vec<MessageWithAuthor>> {
        self.list_by_authors(&[user_id], i64::MAX).await
    }

    async fn list_by_authors(
        &self,
        author_ids: &[i32],
        limit: i64,
    ) -> anyhow::Result<Vec<MessageWithAuthor>> {
        let st = self.state();
        let items = st
            .messages
            .iter()
            .filter(|m| author_ids.contains(&m.user_id))
            .filter_map(|m| st.with_author(m))
            .collect();
        let mut out = st.newest_first(items);
        out.truncate(limit.max(0) as usize);
        Ok(out)
    }

    async fn delete(&self, id: i32) -> anyhow::Result<bool> {
        let mut st = self.state();
        let before = st.messages.len();
        st.messages.retain(|m| m.id != id);
        st.likes.retain(|(_, m)| *m != id);
        Ok(st.messages.len() != before)
    }

    async fn delete_for_user(&self, user_id: i32) -> anyhow::Result<u64> {
        let mut st = self.state();
        let ids: HashSet<i32> = st
            .messages
            .iter()
            .filter(|m| m.user_id == user_id)
            .map(|m| m.id)
            .collect();
        st.messages.retain(|m| m.user_id != user_id);
        st.likes.retain(|(_, m)| !ids.contains(m));
        Ok(ids.len() as u64)
    }
}

#[async_trait]
impl FollowRepository for InMemoryStore {
    async fn follow(&self, follower_id: i32, followed_id: i32) -> anyhow::Result<bool> {
        Ok(self.state().follows.insert((follower_id, followed_id)))
    }

    async fn unfollow(&self, follower_id: i32, followed_id: i32) -> anyhow::Result<bool> {
        Ok(self.state().follows.remove(&(follower_id, followed_id)))
    }

    async fn is_following(&self, follower_id: i32, followed_id: i32) -> anyhow::Result<bool> {
        Ok(self.has_follow(follower_id, followed_id))
    }

    async fn following(&self, user_id: i32) -> anyhow::Result<Vec<UserSummary>> {
        let st = self.state();
        let ids = st
            .follows
            .iter()
            .filter(|(a, _)| *a == user_id)
            .map(|(_, b)| *b);
        Ok(st.summaries(ids))
    }

    async fn followers(&self, user_id: i32) -> anyhow::Result<Vec<UserSummary>> {
        let st = self.state();
        let ids = st
            .follows
            .iter()
            .filter(|(_, b)| *b == user_id)
            .map(|(a, _)| *a);
        Ok(st.summaries(ids))
    }

    async fn following_ids(&self, user_id: i32) -> anyhow::Result<Vec<i32>> {
        let st = self.state();
        Ok(st
            .follows
            .iter()
            .filter(|(a, _)| *a == user_id)
            .map(|(_, b)| *b)
            .collect())
    }
}

#[async_trait]
impl LikeRepository for InMemoryStore {
    async fn is_liked(&self, user_id: i32, message_id: i32) -> anyhow::Result<bool> {
        Ok(self.has_like(user_id, message_id))
    }

    async fn like(&self, user_id: i32, message_id: i32) -> anyhow::Result<()> {
        self.state().likes.insert((user_id, message_id));
        Ok(())
    }

    async fn unlike(&self, user_id: i32, message_id: i32) -> anyhow::Result<bool> {
        Ok(self.state().likes.remove(&(user_id, message_id)))
    }

    async fn liked_messages(&self, user_id: i32) -> anyhow::Result<Vec<MessageWithAuthor>> {
        let st = self.state();
        let items = st
            .messages
            .iter()
            .filter(|m| st.likes.contains(&(user_id, m.id)))
            .filter_map(|m| st.with_author(m))
            .collect();
        Ok(st.newest_first(items))
    }

    async fn liked_ids(&self, user_id: i32) -> anyhow::Result<HashSet<i32>> {
        Ok(self
            .state()
            .likes
            .iter()
            .filter(|(u, _)| *u == user_id)
            .map(|(_, m)| *m)
            .collect())
    }
}
