use axum::{routing::get, Router};

use crate::http::handlers;
use crate::AppState;

pub fn health() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health))
}

pub fn pages() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::index))
        .route("/index", get(handlers::index))
        .route(
            "/login",
            get(handlers::login_form).post(handlers::login_submit),
        )
}
