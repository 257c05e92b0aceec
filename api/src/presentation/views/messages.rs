use std::collections::HashSet;

use crate::application::access::{self, Actor, Capability};
use crate::application::dto::messages::MessageDetailDto;
use crate::domain::messages::message::MessageWithAuthor;
use crate::presentation::http::forms::{FormErrors, MessageForm};
use crate::presentation::views::forms::{Field, input};
use crate::presentation::views::layout::{action_fields, csrf_field};
use crate::presentation::views::{attr, esc};

/// What a rendered message list needs to know about the viewer.
pub struct Viewer<'a> {
    pub actor: Actor,
    pub liked_ids: &'a HashSet<i32>,
    pub csrf_token: &'a str,
    pub return_url: &'a str,
}

fn like_button(m: &MessageWithAuthor, liked: bool, csrf: &str, return_url: &str) -> String {
    let (class, label) = if liked {
        ("btn-primary", "Unlike")
    } else {
        ("btn-secondary", "Like")
    };
    format!(
        r#"<form method="POST" action="/message/{id}/like" class="messages-like">{fields}<button class="btn btn-sm {class}" aria-label="{label}">&#9733; {label}</button></form>"#,
        id = m.id,
        fields = action_fields(csrf, return_url),
        class = class,
        label = label,
    )
}

pub fn item(m: &MessageWithAuthor, viewer: &Viewer<'_>) -> String {
    let like = match access::resolve_message(&viewer.actor, m) {
        Capability::Like => like_button(
            m,
            viewer.liked_ids.contains(&m.id),
            viewer.csrf_token,
            viewer.return_url,
        ),
        _ => String::new(),
    };
    format!(
        r#"<li class="list-group-item">
<a href="/messages/{id}" class="message-link"></a>
<a href="/users/{uid}"><img src="{img}" alt="user image" class="timeline-image"></a>
<div class="message-area">
<a href="/users/{uid}">@{username}</a>
<span class="text-muted">{ts}</span>
<p>{text}</p>
</div>
{like}
</li>
"#,
        id = m.id,
        uid = m.user_id,
        img = attr(&m.image_url),
        username = esc(&m.username),
        ts = m.timestamp.format("%d %B %Y"),
        text = esc(&m.text),
        like = like,
    )
}

pub fn list(messages: &[MessageWithAuthor], viewer: &Viewer<'_>) -> String {
    if messages.is_empty() {
        return "<p class=\"text-muted\">No messages yet.</p>\n".to_string();
    }
    let items: String = messages.iter().map(|m| item(m, viewer)).collect();
    format!("<ul class=\"list-group\" id=\"messages\">\n{items}</ul>\n")
}

pub fn show(detail: &MessageDetailDto, actor: &Actor, csrf: &str) -> String {
    let m = &detail.message;
    let return_url = format!("/messages/{}", m.id);
    let controls = match access::resolve_message(actor, m) {
        Capability::Own => format!(
            r#"<form method="POST" action="/messages/{id}/delete">{csrf}<button class="btn btn-outline-danger">Delete</button></form>"#,
            id = m.id,
            csrf = csrf_field(csrf),
        ),
        Capability::Like => like_button(m, detail.viewer_liked, csrf, &return_url),
        Capability::None => String::new(),
    };
    format!(
        r#"<div class="bg"></div>
<div class="row justify-content-center">
<div class="col-md-6">
<ul class="list-group no-hover" id="messages">
<li class="list-group-item">
<a href="/users/{uid}"><img src="{img}" alt="" class="timeline-image"></a>
<div class="message-area">
<div class="message-heading">
<a href="/users/{uid}">@{username}</a>
{controls}
</div>
<p class="single-message">{text}</p>
<span class="text-muted">{ts}</span>
</div>
</li>
</ul>
</div>
</div>
"#,
        uid = m.user_id,
        img = attr(&m.image_url),
        username = esc(&m.username),
        controls = controls,
        text = esc(&m.text),
        ts = m.timestamp.format("%d %B %Y"),
    )
}

pub fn new_form(form: &MessageForm, errors: &FormErrors, csrf: &str) -> String {
    format!(
        r#"<div class="row justify-content-md-center">
<div class="col-md-7 col-lg-5">
<h2 class="join-message">Add a message</h2>
<form method="POST" action="/messages/new" id="message-form">
{csrf}
{text}<button class="btn btn-outline-success">Add my message!</button>
</form>
</div>
</div>
"#,
        csrf = csrf_field(csrf),
        text = input(
            &Field::text("text", "What's happening?", &form.text).kind("textarea"),
            errors
        ),
    )
}
