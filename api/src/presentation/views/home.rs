use crate::application::access::Actor;
use crate::application::dto::messages::TimelineDto;
use crate::domain::users::user::User;
use crate::presentation::views::messages::{self, Viewer};
use crate::presentation::views::{attr, esc};

pub fn anonymous() -> String {
    r#"<div class="home-hero">
<h1>What's Happening?</h1>
<h4>New to Warbler?</h4>
<a href="/signup" class="btn btn-primary">Sign up now</a>
<a href="/login" class="btn btn-outline-primary">Log in</a>
</div>
"#
    .to_string()
}

pub fn timeline(user: &User, stats_messages: i64, dto: &TimelineDto, csrf: &str) -> String {
    let viewer = Viewer {
        actor: Actor::User(user.id),
        liked_ids: &dto.viewer_liked_ids,
        csrf_token: csrf,
        return_url: "/",
    };
    format!(
        r#"<div class="row">
<aside class="col-md-4 col-lg-3 col-sm-12" id="home-aside">
<div class="card user-card">
<div class="image-wrapper"><img src="{header}" alt="" class="card-hero"></div>
<a href="/users/{id}" class="card-link"><img src="{img}" alt="Image for {name_attr}" class="card-image"><p>@{name}</p></a>
<ul class="user-stats nav nav-pills">
<li class="stat"><p class="small">Messages</p><h4><a href="/users/{id}">{messages}</a></h4></li>
</ul>
</div>
</aside>
<div class="col-lg-6 col-md-8 col-sm-12">
{list}</div>
</div>
"#,
        header = attr(&user.header_image_url),
        id = user.id,
        img = attr(&user.image_url),
        name_attr = attr(&user.username),
        name = esc(&user.username),
        messages = stats_messages,
        list = messages::list(&dto.messages, &viewer),
    )
}
