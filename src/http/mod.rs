use axum::Router;

use crate::AppState;

mod error;
mod flash;
mod forms;
mod handlers;
mod routes;
mod templates;

pub use error::AppError;
pub use forms::{LoginForm, LoginSubmission, REQUIRED_FIELD_ERROR};

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health())
        .merge(routes::pages())
        .fallback(handlers::not_found)
        .with_state(state)
}
