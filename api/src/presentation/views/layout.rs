use crate::domain::users::user::User;
use crate::presentation::http::session::Flash;
use crate::presentation::views::{attr, esc};

pub struct LayoutContext<'a> {
    pub user: Option<&'a User>,
    pub csrf_token: &'a str,
    pub flashes: &'a [Flash],
}

pub fn render(ctx: &LayoutContext<'_>, title: &str, body: &str) -> String {
    let nav = match ctx.user {
        Some(u) => format!(
            r#"<li><a href="/users/{id}"><img src="{img}" alt="{name}"></a></li>
<li><a href="/messages/new">New Message</a></li>
<li><form method="POST" action="/logout">{csrf}<button class="btn btn-link">Log out</button></form></li>"#,
            id = u.id,
            img = attr(&u.image_url),
            name = attr(&u.username),
            csrf = csrf_field(ctx.csrf_token),
        ),
        None => r#"<li><a href="/signup">Sign up</a></li>
<li><a href="/login">Log in</a></li>"#
            .to_string(),
    };
    let search = if ctx.user.is_some() {
        r#"<form class="navbar-form" action="/users">
<input name="q" class="form-control" placeholder="Search Warbler" aria-label="Search">
<button class="btn btn-default">Search</button>
</form>"#
    } else {
        ""
    };
    let flashes: String = ctx
        .flashes
        .iter()
        .map(|f| {
            format!(
                "<div class=\"alert alert-{}\">{}</div>\n",
                attr(&f.category),
                esc(&f.message)
            )
        })
        .collect();

    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\" />\n<title>{title}</title>\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n<link rel=\"stylesheet\" href=\"/static/stylesheets/style.css\" />\n</head>\n<body>\n<nav class=\"navbar\">\n<a href=\"/\" class=\"navbar-brand\"><span>Warbler</span></a>\n{search}\n<ul class=\"nav navbar-nav navbar-right\">\n{nav}\n</ul>\n</nav>\n<div class=\"container\">\n{flashes}{body}\n</div>\n</body>\n</html>\n",
        title = esc(title),
        search = search,
        nav = nav,
        flashes = flashes,
        body = body,
    )
}

pub fn csrf_field(token: &str) -> String {
    format!(
        "<input type=\"hidden\" name=\"csrf_token\" value=\"{}\">",
        attr(token)
    )
}

/// Hidden fields for a button form that returns to `return_url` afterwards.
pub fn action_fields(token: &str, return_url: &str) -> String {
    format!(
        "{}<input type=\"hidden\" name=\"url\" value=\"{}\">",
        csrf_field(token),
        attr(return_url)
    )
}
