use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::http::templates;

/// An error rendered to the browser as an HTML error page.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let page = templates::error_page(self.status, &self.message);
        (self.status, Html(page)).into_response()
    }
}
