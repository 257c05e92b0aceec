use axum::{Router, extract::State, routing::get};

use crate::application::use_cases::messages::home_timeline::HomeTimeline;
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::errors::HandlerResult;
use crate::presentation::http::not_found;
use crate::presentation::http::reply::Reply;
use crate::presentation::http::session::Session;
use crate::presentation::views;

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/", get(homepage))
        .fallback(fallback)
        .with_state(ctx)
}

/// Anonymous visitors get the landing page; users get their timeline.
pub async fn homepage(State(ctx): State<AppContext>, session: Session) -> HandlerResult<Reply> {
    let Some(user) = session.user().cloned() else {
        return Ok(session.page("Warbler", &views::home::anonymous()));
    };
    let messages = ctx.message_repo();
    let follows = ctx.follow_repo();
    let likes = ctx.like_repo();
    let uc = HomeTimeline {
        messages: messages.as_ref(),
        follows: follows.as_ref(),
        likes: likes.as_ref(),
    };
    let timeline = uc.execute(user.id).await?;
    let stats = ctx.user_repo().stats(user.id).await?;
    let csrf = session.csrf_token();
    let body = views::home::timeline(&user, stats.messages, &timeline, &csrf);
    Ok(session.page("Home", &body))
}

pub async fn fallback(session: Session) -> Reply {
    not_found(session)
}
