use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::presentation::views::errors as error_views;

/// Unexpected failure inside a handler; logged and rendered as a bare 500 page.
#[derive(thiserror::Error, Debug)]
#[error("internal error: {0}")]
pub struct AppError(#[from] pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self.0, "request_failed");
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(error_views::internal_error_document()),
        )
            .into_response()
    }
}

pub type HandlerResult<T> = Result<T, AppError>;
