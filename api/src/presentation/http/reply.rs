use axum::http::{HeaderValue, StatusCode, header};
use axum::response::{Html, IntoResponse, Response};

#[derive(Debug)]
enum ReplyBody {
    Html(String),
    Redirect(String),
}

/// An HTML page or a redirect, plus the cookies the session wants written.
#[derive(Debug)]
pub struct Reply {
    status: StatusCode,
    body: ReplyBody,
    cookies: Vec<String>,
}

impl Reply {
    pub(crate) fn html(status: StatusCode, html: String, cookies: Vec<String>) -> Self {
        Self {
            status,
            body: ReplyBody::Html(html),
            cookies,
        }
    }

    pub(crate) fn redirect(location: impl Into<String>, cookies: Vec<String>) -> Self {
        Self {
            status: StatusCode::FOUND,
            body: ReplyBody::Redirect(location.into()),
            cookies,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn location(&self) -> Option<&str> {
        match &self.body {
            ReplyBody::Redirect(to) => Some(to),
            ReplyBody::Html(_) => None,
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        let mut response = match self.body {
            ReplyBody::Html(html) => (self.status, Html(html)).into_response(),
            ReplyBody::Redirect(to) => {
                let mut r = self.status.into_response();
                match HeaderValue::from_str(&to) {
                    Ok(v) => {
                        r.headers_mut().insert(header::LOCATION, v);
                    }
                    Err(_) => {
                        tracing::warn!(location = %to, "redirect_location_invalid");
                        r.headers_mut()
                            .insert(header::LOCATION, HeaderValue::from_static("/"));
                    }
                }
                r
            }
        };
        for cookie in self.cookies {
            if let Ok(v) = HeaderValue::from_str(&cookie) {
                response.headers_mut().append(header::SET_COOKIE, v);
            }
        }
        response
    }
}
