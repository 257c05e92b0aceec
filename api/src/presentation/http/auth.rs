use axum::{
    Form, Router,
    extract::State,
    routing::{get, post},
};

use crate::application::use_cases::auth::login::{Login, LoginRequest};
use crate::application::use_cases::auth::signup::{Signup, SignupError, SignupRequest};
use crate::bootstrap::app_context::AppContext;
use crate::presentation::http::errors::HandlerResult;
use crate::presentation::http::forms::{ActionForm, FormErrors, LoginForm, SignupForm};
use crate::presentation::http::reply::Reply;
use crate::presentation::http::session::Session;
use crate::presentation::views;

const BAD_CSRF: &str = "The CSRF token is invalid.";

pub fn routes(ctx: AppContext) -> Router {
    Router::new()
        .route("/signup", get(signup_page).post(signup))
        .route("/login", get(login_page).post(login))
        .route("/logout", post(logout))
        .with_state(ctx)
}

fn render_signup(session: Session, form: &SignupForm, errors: &FormErrors) -> Reply {
    let csrf = session.csrf_token();
    let body = views::users::signup_form(form, errors, &csrf);
    session.page("Sign Up", &body)
}

fn render_login(session: Session, form: &LoginForm, errors: &FormErrors) -> Reply {
    let csrf = session.csrf_token();
    let body = views::users::login_form(form, errors, &csrf);
    session.page("Log In", &body)
}

pub async fn signup_page(mut session: Session) -> Reply {
    session.logout();
    render_signup(session, &SignupForm::default(), &FormErrors::default())
}

pub async fn signup(
    State(ctx): State<AppContext>,
    mut session: Session,
    Form(form): Form<SignupForm>,
) -> HandlerResult<Reply> {
    let csrf_valid = session.csrf_ok(&form.csrf_token);
    session.logout();

    let errors = form.validate();
    if !csrf_valid {
        session.flash("danger", BAD_CSRF);
    }
    if !csrf_valid || !errors.is_empty() {
        return Ok(render_signup(session, &form, &errors));
    }

    let repo = ctx.user_repo();
    let uc = Signup {
        repo: repo.as_ref(),
    };
    let req = SignupRequest {
        username: form.username.trim().to_string(),
        email: form.email.trim().to_string(),
        password: form.password.clone(),
        image_url: Some(form.image_url.clone()),
    };
    match uc.execute(&req).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, username = %user.username, "signup");
            session.login(&user)?;
            Ok(session.redirect("/"))
        }
        Err(SignupError::UsernameTaken) => {
            session.flash("danger", "Username already taken");
            Ok(render_signup(session, &form, &errors))
        }
        Err(SignupError::Other(e)) => Err(e.into()),
    }
}

pub async fn login_page(session: Session) -> Reply {
    render_login(session, &LoginForm::default(), &FormErrors::default())
}

pub async fn login(
    State(ctx): State<AppContext>,
    mut session: Session,
    Form(form): Form<LoginForm>,
) -> HandlerResult<Reply> {
    let errors = form.validate();
    if !session.csrf_ok(&form.csrf_token) {
        session.flash("danger", BAD_CSRF);
        return Ok(render_login(session, &form, &errors));
    }
    if !errors.is_empty() {
        return Ok(render_login(session, &form, &errors));
    }

    let repo = ctx.user_repo();
    let uc = Login {
        repo: repo.as_ref(),
    };
    let req = LoginRequest {
        username: form.username.trim().to_string(),
        password: form.password.clone(),
    };
    match uc.execute(&req).await? {
        Some(user) => {
            session.login(&user)?;
            session.flash("success", format!("Hello, {}!", user.username));
            Ok(session.redirect("/"))
        }
        None => {
            tracing::debug!(username = %req.username, "login_rejected");
            session.flash("danger", "Invalid credentials.");
            Ok(render_login(session, &form, &errors))
        }
    }
}

pub async fn logout(mut session: Session, Form(form): Form<ActionForm>) -> Reply {
    if session.user().is_none() || !session.csrf_ok(&form.csrf_token) {
        session.flash("info", "You were not logged in");
        return session.redirect("/");
    }
    session.logout();
    session.flash("success", "You have successfully logged out.");
    session.redirect("/login")
}
