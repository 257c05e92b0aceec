use axum::{
    Form, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use crate::application::access::Actor;
use crate::application::use_cases::messages::create_message::CreateMessage;
use crate::application::use_cases::messages::delete_message::{DeleteMessage, DeleteMessageError};
use crate::application::use_cases::messages::get_message::GetMessage;
use crate::application::use_cases::messages::toggle_like::{
    LikeState, ToggleLike, ToggleLikeError,
};
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::errors::HandlerResult;
use crate::presentation::http::forms::{
    ActionForm, FormErrors, MessageForm, local_redirect_target,
};
use crate::presentation::http::reply::Reply;
use crate::presentation::http::session::{LoggedIn, Session, unauthorized};
use crate::presentation::http::{authorized_user, not_found};
use crate::presentation::views;

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/messages/new", get(new_message_page).post(add_message))
        .route("/messages/:id", get(show_message))
        .route("/messages/:id/delete", post(delete_message))
        .route("/message/:id/like", post(toggle_like))
        .with_state(ctx)
}

fn render_new(session: Session, form: &MessageForm, errors: &FormErrors) -> Reply {
    let csrf = session.csrf_token();
    let body = views::messages::new_form(form, errors, &csrf);
    session.page("New Message", &body)
}

pub async fn new_message_page(LoggedIn { session, .. }: LoggedIn) -> Reply {
    render_new(session, &MessageForm::default(), &FormErrors::default())
}

pub async fn add_message(
    State(ctx): State<AppContext>,
    LoggedIn { user, mut session }: LoggedIn,
    Form(form): Form<MessageForm>,
) -> HandlerResult<Reply> {
    let errors = form.validate();
    if !session.csrf_ok(&form.csrf_token) {
        session.flash("danger", "The CSRF token is invalid.");
        return Ok(render_new(session, &form, &errors));
    }
    if !errors.is_empty() {
        return Ok(render_new(session, &form, &errors));
    }
    let repo = ctx.message_repo();
    let uc = CreateMessage {
        repo: repo.as_ref(),
    };
    let message = uc.execute(user.id, &form.text).await?;
    tracing::debug!(user_id = user.id, message_id = message.id, "message_created");
    Ok(session.redirect(format!("/users/{}", user.id)))
}

pub async fn show_message(
    State(ctx): State<AppContext>,
    Path(message_id): Path<i32>,
    LoggedIn { user, session }: LoggedIn,
) -> HandlerResult<Reply> {
    let messages = ctx.message_repo();
    let likes = ctx.like_repo();
    let uc = GetMessage {
        messages: messages.as_ref(),
        likes: likes.as_ref(),
    };
    let Some(detail) = uc.execute(user.id, message_id).await? else {
        return Ok(not_found(session));
    };
    let csrf = session.csrf_token();
    let body = views::messages::show(&detail, &session.actor(), &csrf);
    Ok(session.page("Message", &body))
}

pub async fn delete_message(
    State(ctx): State<AppContext>,
    Path(message_id): Path<i32>,
    session: Session,
    Form(form): Form<ActionForm>,
) -> HandlerResult<Reply> {
    let actor = match authorized_user(&session, &form.csrf_token) {
        Some(me) => Actor::User(me.id),
        None => Actor::Anonymous,
    };
    let repo = ctx.message_repo();
    let uc = DeleteMessage {
        repo: repo.as_ref(),
    };
    match uc.execute(&actor, message_id).await {
        Ok(()) => {
            let me = actor.user_id().unwrap_or_default();
            tracing::debug!(user_id = me, message_id, "message_deleted");
            Ok(session.redirect(format!("/users/{}", me)))
        }
        Err(DeleteMessageError::NotFound) => Ok(not_found(session)),
        Err(DeleteMessageError::Forbidden) => Ok(unauthorized(session)),
        Err(DeleteMessageError::Other(e)) => Err(e.into()),
    }
}

pub async fn toggle_like(
    State(ctx): State<AppContext>,
    Path(message_id): Path<i32>,
    session: Session,
    Form(form): Form<ActionForm>,
) -> HandlerResult<Reply> {
    let Some(me) = authorized_user(&session, &form.csrf_token) else {
        return Ok(unauthorized(session));
    };
    let messages = ctx.message_repo();
    let likes = ctx.like_repo();
    let uc = ToggleLike {
        messages: messages.as_ref(),
        likes: likes.as_ref(),
    };
    match uc.execute(me.id, message_id).await {
        Ok(state) => {
            tracing::debug!(
                user_id = me.id,
                message_id,
                liked = matches!(state, LikeState::Liked),
                "like_toggled"
            );
            let to = local_redirect_target(form.url.as_deref()).unwrap_or_else(|| "/".into());
            Ok(session.redirect(to))
        }
        Err(ToggleLikeError::NotFound) => Ok(not_found(session)),
        Err(ToggleLikeError::OwnMessage) => Ok(session.page_with_status(
            StatusCode::FORBIDDEN,
            "Forbidden",
            &views::errors::forbidden(),
        )),
        Err(ToggleLikeError::Other(e)) => Err(e.into()),
    }
}
