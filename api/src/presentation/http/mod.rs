pub mod auth;
pub mod errors;
pub mod forms;
pub mod health;
pub mod home;
pub mod messages;
pub mod reply;
pub mod session;
pub mod users;


use axum::Router;
use axum::http::{HeaderValue, StatusCode, Uri, header};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::bootstrap::app_context::AppContext;
use crate::domain::users::user::User;
use crate::presentation::http::reply::Reply;
use crate::presentation::http::session::Session;
use crate::presentation::views;

/// All HTML routes plus the 404 fallback. Responses are never cached.
pub fn router(ctx: AppContext) -> Router {
    Router::new()
        .merge(home::routes(ctx.clone()))
        .merge(auth::routes(ctx.clone()))
        .merge(users::routes(ctx.clone()))
        .merge(messages::routes(ctx))
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
}

pub(crate) fn not_found(session: Session) -> Reply {
    session.page_with_status(
        StatusCode::NOT_FOUND,
        "Page Not Found",
        &views::errors::not_found(),
    )
}

/// The user behind a state-changing button form, provided the form's CSRF
/// token matches the session.
pub(crate) fn authorized_user(session: &Session, csrf_token: &str) -> Option<User> {
    let user = session.user()?;
    session.csrf_ok(csrf_token).then(|| user.clone())
}

pub(crate) fn return_url(uri: &Uri) -> String {
    uri.path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string())
}
