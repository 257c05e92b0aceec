use std::collections::HashSet;

use crate::application::access::{self, Actor};
use crate::application::dto::messages::LikedMessagesDto;
use crate::application::dto::users::{FollowListDto, ProfileDto, ProfileHeaderDto};
use crate::domain::users::user::UserSummary;
use crate::presentation::http::forms::{FormErrors, LoginForm, ProfileForm, SignupForm};
use crate::presentation::views::forms::{Field, input};
use crate::presentation::views::layout::{action_fields, csrf_field};
use crate::presentation::views::messages::{self, Viewer};
use crate::presentation::views::{attr, esc};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileTab {
    Messages,
    Following,
    Followers,
    Likes,
}

fn follow_button(actor: &Actor, target_id: i32, following: bool, csrf: &str, return_url: &str) -> String {
    if !access::can_follow(actor, target_id) {
        return String::new();
    }
    if following {
        format!(
            r#"<form method="POST" action="/users/stop-following/{id}">{fields}<button class="btn btn-primary btn-sm">Unfollow</button></form>"#,
            id = target_id,
            fields = action_fields(csrf, return_url),
        )
    } else {
        format!(
            r#"<form method="POST" action="/users/follow/{id}">{fields}<button class="btn btn-outline-primary btn-sm">Follow</button></form>"#,
            id = target_id,
            fields = action_fields(csrf, return_url),
        )
    }
}

pub fn card(
    user: &UserSummary,
    actor: &Actor,
    viewer_following: &HashSet<i32>,
    csrf: &str,
    return_url: &str,
) -> String {
    format!(
        r#"<div class="col-lg-4 col-md-6 col-12">
<div class="card user-card">
<div class="card-inner">
<div class="image-wrapper"><img src="{header}" alt="" class="card-hero"></div>
<div class="card-contents">
<a href="/users/{id}" class="card-link"><img src="{img}" alt="Image for {name_attr}" class="card-image"><p>@{name}</p></a>
{button}
</div>
<p class="card-bio">{bio}</p>
</div>
</div>
</div>
"#,
        header = attr(&user.header_image_url),
        id = user.id,
        img = attr(&user.image_url),
        name_attr = attr(&user.username),
        name = esc(&user.username),
        button = follow_button(
            actor,
            user.id,
            viewer_following.contains(&user.id),
            csrf,
            return_url
        ),
        bio = esc(&user.bio),
    )
}

pub fn index(
    users: &[UserSummary],
    actor: &Actor,
    viewer_following: &HashSet<i32>,
    csrf: &str,
    return_url: &str,
) -> String {
    if users.is_empty() {
        return "<h3>Sorry, no users found</h3>\n".to_string();
    }
    let cards: String = users
        .iter()
        .map(|u| card(u, actor, viewer_following, csrf, return_url))
        .collect();
    format!("<div class=\"row justify-content-end\">\n<div class=\"col-sm-9\">\n<div class=\"row\">\n{cards}</div>\n</div>\n</div>\n")
}

pub fn profile_header(
    header: &ProfileHeaderDto,
    actor: &Actor,
    csrf: &str,
    return_url: &str,
    tab: ProfileTab,
) -> String {
    let u = &header.user;
    let own = actor.user_id() == Some(u.id);
    let actions = if own {
        format!(
            r#"<a href="/users/profile" class="btn btn-outline-secondary">Edit Profile</a>
<form method="POST" action="/users/delete" class="form-inline">{csrf}<button class="btn btn-outline-danger ml-2">Delete Profile</button></form>"#,
            csrf = csrf_field(csrf),
        )
    } else {
        follow_button(actor, u.id, header.viewer_follows, csrf, return_url)
    };
    let tab_class = |t: ProfileTab| if t == tab { " active" } else { "" };
    format!(
        r#"<div id="warbler-hero" class="full-width"><img src="{header_img}" alt="" class="hero-image"></div>
<img src="{img}" alt="Image for {name_attr}" id="profile-avatar">
<div class="row full-width">
<div class="container">
<div class="row justify-content-end">
<div class="col-9">
<ul class="user-stats nav nav-pills">
<li class="stat{t_msg}"><p class="small">Messages</p><h4><a href="/users/{id}">{messages}</a></h4></li>
<li class="stat{t_following}"><p class="small">Following</p><h4><a href="/users/{id}/following">{following}</a></h4></li>
<li class="stat{t_followers}"><p class="small">Followers</p><h4><a href="/users/{id}/followers">{followers}</a></h4></li>
<li class="stat{t_likes}"><p class="small">Likes</p><h4><a href="/users/{id}/liked_messages">{likes}</a></h4></li>
<div class="ml-auto">{actions}</div>
</ul>
</div>
</div>
</div>
</div>
<div class="row">
<div class="col-sm-3">
<h4 id="sidebar-username">@{name}</h4>
<p>{bio}</p>
<p class="user-location"><span class="fa fa-map-marker"></span> {location}</p>
</div>
"#,
        header_img = attr(&u.header_image_url),
        img = attr(&u.image_url),
        name_attr = attr(&u.username),
        id = u.id,
        messages = header.stats.messages,
        following = header.stats.following,
        followers = header.stats.followers,
        likes = header.stats.likes,
        t_msg = tab_class(ProfileTab::Messages),
        t_following = tab_class(ProfileTab::Following),
        t_followers = tab_class(ProfileTab::Followers),
        t_likes = tab_class(ProfileTab::Likes),
        actions = actions,
        name = esc(&u.username),
        bio = esc(&u.bio),
        location = esc(&u.location),
    )
}

pub fn show(profile: &ProfileDto, actor: &Actor, csrf: &str, return_url: &str) -> String {
    let viewer = Viewer {
        actor: *actor,
        liked_ids: &profile.viewer_liked_ids,
        csrf_token: csrf,
        return_url,
    };
    format!(
        "{header}<div class=\"col-lg-6 col-md-8 col-sm-12\">\n{list}</div>\n</div>\n",
        header = profile_header(&profile.header, actor, csrf, return_url, ProfileTab::Messages),
        list = messages::list(&profile.messages, &viewer),
    )
}

pub fn follow_list(
    dto: &FollowListDto,
    actor: &Actor,
    csrf: &str,
    return_url: &str,
    tab: ProfileTab,
) -> String {
    let cards: String = dto
        .users
        .iter()
        .map(|u| card(u, actor, &dto.viewer_following_ids, csrf, return_url))
        .collect();
    let empty = if dto.users.is_empty() {
        match tab {
            ProfileTab::Followers => "<p class=\"text-muted\">No followers yet.</p>\n",
            _ => "<p class=\"text-muted\">Not following anyone yet.</p>\n",
        }
    } else {
        ""
    };
    format!(
        "{header}<div class=\"col-sm-9\">\n<div class=\"row\">\n{empty}{cards}</div>\n</div>\n</div>\n",
        header = profile_header(&dto.header, actor, csrf, return_url, tab),
    )
}

pub fn liked(dto: &LikedMessagesDto, actor: &Actor, csrf: &str, return_url: &str) -> String {
    let viewer = Viewer {
        actor: *actor,
        liked_ids: &dto.viewer_liked_ids,
        csrf_token: csrf,
        return_url,
    };
    format!(
        "{header}<div class=\"col-lg-6 col-md-8 col-sm-12\">\n{list}</div>\n</div>\n",
        header = profile_header(&dto.header, actor, csrf, return_url, ProfileTab::Likes),
        list = messages::list(&dto.messages, &viewer),
    )
}

pub fn signup_form(form: &SignupForm, errors: &FormErrors, csrf: &str) -> String {
    format!(
        r#"<div class="row justify-content-md-center">
<div class="col-md-7 col-lg-5">
<h2 class="join-message">Join Warbler today.</h2>
<form method="POST" action="/signup" id="user_form">
{csrf}
{username}{email}{password}{image}<button class="btn btn-primary btn-lg btn-block">Sign me up!</button>
</form>
</div>
</div>
"#,
        csrf = csrf_field(csrf),
        username = input(&Field::text("username", "Username", &form.username), errors),
        email = input(&Field::text("email", "E-mail", &form.email).kind("email"), errors),
        password = input(&Field::password("password", "Password"), errors),
        image = input(
            &Field::text("image_url", "(Optional) Image URL", &form.image_url),
            errors
        ),
    )
}

pub fn login_form(form: &LoginForm, errors: &FormErrors, csrf: &str) -> String {
    format!(
        r#"<div class="row justify-content-md-center">
<div class="col-md-7 col-lg-5">
<h2 class="join-message">Welcome back.</h2>
<form method="POST" action="/login" id="user_form">
{csrf}
{username}{password}<button class="btn btn-primary btn-block btn-lg">Log in</button>
</form>
</div>
</div>
"#,
        csrf = csrf_field(csrf),
        username = input(&Field::text("username", "Username", &form.username), errors),
        password = input(&Field::password("password", "Password"), errors),
    )
}

pub fn edit_form(form: &ProfileForm, errors: &FormErrors, csrf: &str, user_id: i32) -> String {
    format!(
        r#"<div class="row justify-content-md-center">
<div class="col-md-7 col-lg-5">
<h2 class="join-message">Edit Your Profile.</h2>
<form method="POST" action="/users/profile" id="user_form">
{csrf}
{username}{email}{image}{header}{bio}{location}<p>To confirm changes, enter your password:</p>
{password}<div class="edit-btn-area">
<button class="btn btn-success">Edit this user!</button>
<a href="/users/{user_id}" class="btn btn-outline-secondary">Cancel</a>
</div>
</form>
</div>
</div>
"#,
        csrf = csrf_field(csrf),
        username = input(&Field::text("username", "Username", &form.username), errors),
        email = input(&Field::text("email", "E-mail", &form.email).kind("email"), errors),
        image = input(&Field::text("image_url", "(Optional) Image URL", &form.image_url), errors),
        header = input(
            &Field::text("header_image_url", "(Optional) Header Image URL", &form.header_image_url),
            errors
        ),
        bio = input(&Field::text("bio", "(Optional) Tell us about yourself", &form.bio).kind("textarea"), errors),
        location = input(&Field::text("location", "(Optional) Location", &form.location), errors),
        password = input(&Field::password("password", "Password"), errors),
        user_id = user_id,
    )
}
