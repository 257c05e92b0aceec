use std::collections::HashSet;

use axum::{
    Form, Router,
    extract::{OriginalUri, Path, Query, State},
    routing::{get, post},
};
use serde::Deserialize;

use crate::application::use_cases::auth::delete_account::DeleteAccount;
use crate::application::use_cases::auth::update_profile::{
    UpdateProfile, UpdateProfileError, UpdateProfileRequest,
};
use crate::application::use_cases::messages::list_liked::ListLikedMessages;
use crate::application::use_cases::users::follow::{FollowError, FollowUser};
use crate::application::use_cases::users::get_profile::GetProfile;
use crate::application::use_cases::users::list_follows::{FollowDirection, ListFollows};
use crate::application::use_cases::users::list_users::ListUsers;
use crate::bootstrap::app_context::AppContext;
use crate::domain::users::user::User;
use crate::presentation::http::errors::HandlerResult;
use crate::presentation::http::forms::{
    ActionForm, FormErrors, ProfileForm, local_redirect_target,
};
use crate::presentation::http::reply::Reply;
use crate::presentation::http::session::{LoggedIn, Session, unauthorized};
use crate::presentation::http::{authorized_user, not_found, return_url};
use crate::presentation::views;
use crate::presentation::views::users::ProfileTab;

#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/profile", get(edit_profile_page).post(edit_profile))
        .route("/users/delete", post(delete_user))
        .route("/users/follow/:id", post(start_following))
        .route("/users/stop-following/:id", post(stop_following))
        .route("/users/:id", get(show_user))
        .route("/users/:id/following", get(show_following))
        .route("/users/:id/followers", get(show_followers))
        .route("/users/:id/liked_messages", get(show_liked_messages))
        .with_state(ctx)
}

pub async fn list_users(
    State(ctx): State<AppContext>,
    OriginalUri(uri): OriginalUri,
    Query(query): Query<SearchQuery>,
    LoggedIn { user, session }: LoggedIn,
) -> HandlerResult<Reply> {
    let users_repo = ctx.user_repo();
    let uc = ListUsers {
        repo: users_repo.as_ref(),
    };
    let users = uc.execute(query.q).await?;
    let following: HashSet<i32> = ctx
        .follow_repo()
        .following_ids(user.id)
        .await?
        .into_iter()
        .collect();
    let csrf = session.csrf_token();
    let body = views::users::index(
        &users,
        &session.actor(),
        &following,
        &csrf,
        &return_url(&uri),
    );
    Ok(session.page("Users", &body))
}

pub async fn show_user(
    State(ctx): State<AppContext>,
    OriginalUri(uri): OriginalUri,
    Path(user_id): Path<i32>,
    LoggedIn { user, session }: LoggedIn,
) -> HandlerResult<Reply> {
    let users = ctx.user_repo();
    let messages = ctx.message_repo();
    let follows = ctx.follow_repo();
    let likes = ctx.like_repo();
    let uc = GetProfile {
        users: users.as_ref(),
        messages: messages.as_ref(),
        follows: follows.as_ref(),
        likes: likes.as_ref(),
    };
    let Some(profile) = uc.execute(user.id, user_id).await? else {
        return Ok(not_found(session));
    };
    let csrf = session.csrf_token();
    let body = views::users::show(&profile, &session.actor(), &csrf, &return_url(&uri));
    let title = format!("@{}", profile.header.user.username);
    Ok(session.page(&title, &body))
}

async fn follow_list(
    ctx: AppContext,
    uri: &axum::http::Uri,
    user: User,
    session: Session,
    user_id: i32,
    direction: FollowDirection,
) -> HandlerResult<Reply> {
    let users = ctx.user_repo();
    let follows = ctx.follow_repo();
    let uc = ListFollows {
        users: users.as_ref(),
        follows: follows.as_ref(),
    };
    let Some(dto) = uc.execute(user.id, user_id, direction).await? else {
        return Ok(not_found(session));
    };
    let (tab, title) = match direction {
        FollowDirection::Following => (ProfileTab::Following, "Following"),
        FollowDirection::Followers => (ProfileTab::Followers, "Followers"),
    };
    let csrf = session.csrf_token();
    let body = views::users::follow_list(&dto, &session.actor(), &csrf, &return_url(uri), tab);
    Ok(session.page(title, &body))
}

pub async fn show_following(
    State(ctx): State<AppContext>,
    OriginalUri(uri): OriginalUri,
    Path(user_id): Path<i32>,
    LoggedIn { user, session }: LoggedIn,
) -> HandlerResult<Reply> {
    follow_list(ctx, &uri, user, session, user_id, FollowDirection::Following).await
}

pub async fn show_followers(
    State(ctx): State<AppContext>,
    OriginalUri(uri): OriginalUri,
    Path(user_id): Path<i32>,
    LoggedIn { user, session }: LoggedIn,
) -> HandlerResult<Reply> {
    follow_list(ctx, &uri, user, session, user_id, FollowDirection::Followers).await
}

pub async fn show_liked_messages(
    State(ctx): State<AppContext>,
    OriginalUri(uri): OriginalUri,
    Path(user_id): Path<i32>,
    LoggedIn { user, session }: LoggedIn,
) -> HandlerResult<Reply> {
    let users = ctx.user_repo();
    let follows = ctx.follow_repo();
    let likes = ctx.like_repo();
    let uc = ListLikedMessages {
        users: users.as_ref(),
        follows: follows.as_ref(),
        likes: likes.as_ref(),
    };
    let Some(dto) = uc.execute(user.id, user_id).await? else {
        return Ok(not_found(session));
    };
    let csrf = session.csrf_token();
    let body = views::users::liked(&dto, &session.actor(), &csrf, &return_url(&uri));
    Ok(session.page("Liked Messages", &body))
}

#[derive(Debug, Clone, Copy)]
enum FollowAction {
    Start,
    Stop,
}

async fn change_follow(
    ctx: AppContext,
    mut session: Session,
    target_id: i32,
    form: ActionForm,
    action: FollowAction,
) -> HandlerResult<Reply> {
    let Some(me) = authorized_user(&session, &form.csrf_token) else {
        return Ok(unauthorized(session));
    };
    let users = ctx.user_repo();
    let follows = ctx.follow_repo();
    let uc = FollowUser {
        users: users.as_ref(),
        follows: follows.as_ref(),
    };
    let result = match action {
        FollowAction::Start => uc.follow(me.id, target_id).await,
        FollowAction::Stop => uc.unfollow(me.id, target_id).await,
    };
    match result {
        Ok(()) => {}
        Err(FollowError::NotFound) => return Ok(not_found(session)),
        Err(FollowError::SelfFollow) => {
            session.flash("danger", "You cannot follow yourself.");
        }
        Err(FollowError::Other(e)) => return Err(e.into()),
    }
    let to = local_redirect_target(form.url.as_deref())
        .unwrap_or_else(|| format!("/users/{}/following", me.id));
    Ok(session.redirect(to))
}

pub async fn start_following(
    State(ctx): State<AppContext>,
    Path(target_id): Path<i32>,
    session: Session,
    Form(form): Form<ActionForm>,
) -> HandlerResult<Reply> {
    change_follow(ctx, session, target_id, form, FollowAction::Start).await
}

pub async fn stop_following(
    State(ctx): State<AppContext>,
    Path(target_id): Path<i32>,
    session: Session,
    Form(form): Form<ActionForm>,
) -> HandlerResult<Reply> {
    change_follow(ctx, session, target_id, form, FollowAction::Stop).await
}

fn profile_form_for(user: &User) -> ProfileForm {
    ProfileForm {
        username: user.username.clone(),
        email: user.email.clone(),
        image_url: user.image_url.clone(),
        header_image_url: user.header_image_url.clone(),
        bio: user.bio.clone(),
        location: user.location.clone(),
        ..Default::default()
    }
}

fn render_edit(session: Session, user_id: i32, form: &ProfileForm, errors: &FormErrors) -> Reply {
    let csrf = session.csrf_token();
    let body = views::users::edit_form(form, errors, &csrf, user_id);
    session.page("Edit Profile", &body)
}

pub async fn edit_profile_page(LoggedIn { user, session }: LoggedIn) -> Reply {
    render_edit(session, user.id, &profile_form_for(&user), &FormErrors::default())
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub async fn edit_profile(
    State(ctx): State<AppContext>,
    LoggedIn { user, mut session }: LoggedIn,
    Form(form): Form<ProfileForm>,
) -> HandlerResult<Reply> {
    let errors = form.validate();
    if !session.csrf_ok(&form.csrf_token) {
        session.flash("danger", "The CSRF token is invalid.");
        return Ok(render_edit(session, user.id, &form, &errors));
    }
    if !errors.is_empty() {
        return Ok(render_edit(session, user.id, &form, &errors));
    }

    let repo = ctx.user_repo();
    let uc = UpdateProfile {
        repo: repo.as_ref(),
    };
    let req = UpdateProfileRequest {
        username: form.username.clone(),
        email: form.email.clone(),
        image_url: optional(&form.image_url),
        header_image_url: optional(&form.header_image_url),
        bio: Some(form.bio.trim().to_string()),
        location: Some(form.location.trim().to_string()),
        password: form.password.clone(),
    };
    match uc.execute(&user, &req).await {
        Ok(updated) => {
            tracing::info!(user_id = updated.id, "profile_updated");
            Ok(session.redirect(format!("/users/{}", updated.id)))
        }
        Err(UpdateProfileError::BadPassword) => {
            session.flash("danger", "Please enter correct password to submit updates.");
            Ok(render_edit(session, user.id, &form, &errors))
        }
        Err(UpdateProfileError::UsernameTaken) => {
            session.flash("danger", "Username already taken");
            Ok(render_edit(session, user.id, &form, &errors))
        }
        Err(UpdateProfileError::NotFound) => Ok(not_found(session)),
        Err(UpdateProfileError::Other(e)) => Err(e.into()),
    }
}

pub async fn delete_user(
    State(ctx): State<AppContext>,
    mut session: Session,
    Form(form): Form<ActionForm>,
) -> HandlerResult<Reply> {
    let Some(me) = authorized_user(&session, &form.csrf_token) else {
        return Ok(unauthorized(session));
    };
    let users = ctx.user_repo();
    let messages = ctx.message_repo();
    let uc = DeleteAccount {
        user_repo: users.as_ref(),
        message_repo: messages.as_ref(),
    };
    uc.execute(me.id).await?;
    tracing::info!(user_id = me.id, "account_deleted");
    session.logout();
    Ok(session.redirect("/signup"))
}
