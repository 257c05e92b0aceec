use axum::extract::FromRequestParts;
use axum::http::StatusCode;
use axum::http::request::Parts;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::application::access::Actor;
use crate::application::use_cases::auth::current_user::GetCurrentUser;
use crate::bootstrap::app_context::AppContext;
use crate::bootstrap::config::Config;
use crate::domain::users::user::User;
use crate::infrastructure::crypto;
use crate::presentation::http::errors::AppError;
use crate::presentation::http::reply::Reply;
use crate::presentation::views::layout::{self, LayoutContext};

pub const SESSION_COOKIE: &str = "warbler_session";
pub const FLASH_COOKIE: &str = "warbler_flash";
/// Random per-visitor id that anonymous CSRF tokens are bound to.
pub const VISITOR_COOKIE: &str = "warbler_visitor";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub category: String,
    pub message: String,
}

#[derive(Debug)]
enum SessionChange {
    Keep,
    Set(String),
    Clear,
}

/// Per-request session state: the logged-in user (if any), flash messages
/// carried over from the previous response, and pending cookie changes.
pub struct Session {
    cfg: Config,
    user: Option<User>,
    token: Option<String>,
    visitor_id: String,
    visitor_is_new: bool,
    incoming: Vec<Flash>,
    pending: Vec<Flash>,
    change: SessionChange,
}

impl Session {
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn actor(&self) -> Actor {
        match &self.user {
            Some(u) => Actor::User(u.id),
            None => Actor::Anonymous,
        }
    }

    fn binding(&self) -> &str {
        self.token.as_deref().unwrap_or(&self.visitor_id)
    }

    pub fn csrf_token(&self) -> String {
        crypto::csrf_token(&self.cfg.secret_key, self.binding())
    }

    pub fn csrf_ok(&self, presented: &str) -> bool {
        if !self.cfg.csrf_enabled {
            return true;
        }
        crypto::verify_csrf_token(&self.cfg.secret_key, self.binding(), presented)
    }

    pub fn flash(&mut self, category: &str, message: impl Into<String>) {
        self.pending.push(Flash {
            category: category.to_string(),
            message: message.into(),
        });
    }

    pub fn login(&mut self, user: &User) -> anyhow::Result<()> {
        let token = issue_token(&self.cfg, user.id)?;
        tracing::info!(user_id = user.id, "session_login");
        self.token = Some(token.clone());
        self.user = Some(user.clone());
        self.change = SessionChange::Set(token);
        Ok(())
    }

    /// Returns whether someone was logged in; flashes "Logged out" when so.
    pub fn logout(&mut self) -> bool {
        let was_logged_in = self.user.is_some();
        if was_logged_in {
            self.flash("info", "Logged out");
        }
        if self.token.is_some() || was_logged_in {
            self.change = SessionChange::Clear;
        }
        self.user = None;
        self.token = None;
        was_logged_in
    }

    pub fn redirect(self, to: impl Into<String>) -> Reply {
        let mut carry = self.incoming.clone();
        carry.extend(self.pending.iter().cloned());
        let mut cookies = self.session_cookies();
        if !carry.is_empty() {
            cookies.push(flash_cookie(&self.cfg, &carry));
        }
        Reply::redirect(to, cookies)
    }

    /// Renders `body` inside the site layout; all flashes are shown and consumed.
    pub fn page(self, title: &str, body: &str) -> Reply {
        self.page_with_status(StatusCode::OK, title, body)
    }

    pub fn page_with_status(self, status: StatusCode, title: &str, body: &str) -> Reply {
        let mut flashes = self.incoming.clone();
        flashes.extend(self.pending.iter().cloned());
        let csrf = self.csrf_token();
        let html = layout::render(
            &LayoutContext {
                user: self.user.as_ref(),
                csrf_token: &csrf,
                flashes: &flashes,
            },
            title,
            body,
        );
        let mut cookies = self.session_cookies();
        if !self.incoming.is_empty() {
            cookies.push(clear_cookie(&self.cfg, FLASH_COOKIE));
        }
        Reply::html(status, html, cookies)
    }

    fn session_cookies(&self) -> Vec<String> {
        let mut cookies = match &self.change {
            SessionChange::Keep => Vec::new(),
            SessionChange::Set(token) => vec![build_cookie(
                &self.cfg,
                SESSION_COOKIE,
                token,
                self.cfg.session_ttl_secs,
            )],
            SessionChange::Clear => vec![clear_cookie(&self.cfg, SESSION_COOKIE)],
        };
        if self.visitor_is_new && self.token.is_none() {
            cookies.push(build_cookie(
                &self.cfg,
                VISITOR_COOKIE,
                &self.visitor_id,
                self.cfg.session_ttl_secs,
            ));
        }
        cookies
    }

    async fn load(parts: &Parts, ctx: &AppContext) -> Result<Self, AppError> {
        let cookie_hdr = parts
            .headers
            .get(axum::http::header::COOKIE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");
        let incoming = get_cookie(cookie_hdr, FLASH_COOKIE)
            .map(|v| decode_flashes(&v))
            .unwrap_or_default();
        let (visitor_id, visitor_is_new) = match get_cookie(cookie_hdr, VISITOR_COOKIE) {
            Some(id) if !id.is_empty() => (id, false),
            _ => (crypto::random_id(), true),
        };
        let mut session = Session {
            cfg: ctx.cfg.clone(),
            user: None,
            token: None,
            visitor_id,
            visitor_is_new,
            incoming,
            pending: Vec::new(),
            change: SessionChange::Keep,
        };

        let Some(token) = get_cookie(cookie_hdr, SESSION_COOKIE) else {
            return Ok(session);
        };
        let user_id = match validate_token(&ctx.cfg, &token) {
            Some(id) => id,
            None => {
                session.change = SessionChange::Clear;
                return Ok(session);
            }
        };
        let repo = ctx.user_repo();
        let uc = GetCurrentUser {
            repo: repo.as_ref(),
        };
        match uc.execute(user_id).await? {
            Some(user) => {
                session.user = Some(user);
                session.token = Some(token);
            }
            None => {
                tracing::debug!(user_id, "session_user_missing");
                session.change = SessionChange::Clear;
            }
        }
        Ok(session)
    }
}

#[axum::async_trait]
impl FromRequestParts<AppContext> for Session {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        Session::load(parts, ctx).await
    }
}

/// A session with a logged-in user. Anonymous requests are redirected home
/// with an "Access unauthorized." flash.
pub struct LoggedIn {
    pub user: User,
    pub session: Session,
}

impl LoggedIn {
    pub fn id(&self) -> i32 {
        self.user.id
    }
}

#[axum::async_trait]
impl FromRequestParts<AppContext> for LoggedIn {
    type Rejection = axum::response::Response;

    async fn from_request_parts(
        parts: &mut Parts,
        ctx: &AppContext,
    ) -> Result<Self, Self::Rejection> {
        use axum::response::IntoResponse;

        let session = Session::load(parts, ctx)
            .await
            .map_err(IntoResponse::into_response)?;
        match session.user.clone() {
            Some(user) => Ok(LoggedIn { user, session }),
            None => Err(unauthorized(session).into_response()),
        }
    }
}

pub fn unauthorized(mut session: Session) -> Reply {
    session.flash("danger", "Access unauthorized.");
    session.redirect("/")
}

pub(crate) fn issue_token(cfg: &Config, user_id: i32) -> anyhow::Result<String> {
    let now = chrono::Utc::now().timestamp() as usize;
    let claims = Claims {
        sub: user_id.to_string(),
        exp: now + (cfg.session_ttl_secs.max(0) as usize),
    };
    let token = jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(cfg.secret_key.as_bytes()),
    )?;
    Ok(token)
}

fn validate_token(cfg: &Config, token: &str) -> Option<i32> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(cfg.secret_key.as_bytes()),
        &Validation::default(),
    )
    .ok()?;
    data.claims.sub.parse().ok()
}

// --- Cookie helpers ---

pub(crate) fn get_cookie(cookie_header: &str, name: &str) -> Option<String> {
    for part in cookie_header.split(';') {
        let kv = part.trim();
        if let Some((k, v)) = kv.split_once('=') {
            if k.trim() == name {
                return Some(v.trim().to_string());
            }
        }
    }
    None
}

fn build_cookie(cfg: &Config, name: &str, value: &str, max_age_secs: i64) -> String {
    let secure_attr = if cfg.cookies_secure() { "; Secure" } else { "" };
    format!(
        "{}={}; HttpOnly{}; Path=/; Max-Age={}; SameSite=Lax",
        name,
        value,
        secure_attr,
        max_age_secs.max(0)
    )
}

fn clear_cookie(cfg: &Config, name: &str) -> String {
    build_cookie(cfg, name, "", 0)
}

fn flash_cookie(cfg: &Config, flashes: &[Flash]) -> String {
    let raw = serde_json::to_vec(flashes).unwrap_or_default();
    build_cookie(cfg, FLASH_COOKIE, &crypto::encode_cookie_value(&raw), 300)
}

fn decode_flashes(value: &str) -> Vec<Flash> {
    crypto::decode_cookie_value(value)
        .ok()
        .and_then(|raw| serde_json::from_slice(&raw).ok())
        .unwrap_or_default()
}
