use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use axum_extra::extract::cookie::{CookieJar, SignedCookieJar};
use serde::Serialize;

use crate::http::flash;
use crate::http::forms::LoginSubmission;
use crate::http::templates::{self, PostView};
use crate::http::AppError;
use crate::AppState;

#[derive(Serialize)]
pub(crate) struct HealthResponse {
    status: &'static str,
}

pub(crate) async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let db = state.db.ping().await.is_ok();
    let status = if db { "ok" } else { "degraded" };

    Json(HealthResponse { status })
}

/// `GET /` and `GET /index`. The signed-in user and the posts are fixed
/// sample data until sessions and a real timeline land; nothing is read from
/// the store here.
pub async fn index(raw: CookieJar, jar: SignedCookieJar) -> (SignedCookieJar, Html<String>) {
    let (jar, flashes) = flash::take(&raw, jar);

    let nickname = "Miguel";
    let posts = [
        PostView {
            author: "John",
            body: "Beautiful day in Portland!",
        },
        PostView {
            author: "Susan",
            body: "The Avengers movie was so cool!",
        },
    ];

    (jar, Html(templates::index_page(nickname, &posts, &flashes)))
}

pub async fn login_form(
    State(state): State<AppState>,
    raw: CookieJar,
    jar: SignedCookieJar,
) -> (SignedCookieJar, Html<String>) {
    let (jar, flashes) = flash::take(&raw, jar);
    let page = templates::login_page("", false, &[], &state.openid_providers, &flashes);

    (jar, Html(page))
}

/// A valid submission queues a notice and redirects to the index; an invalid
/// one re-renders the form with its errors and the submitted values echoed
/// back. A body that does not parse as a form at all gets the error page.
pub async fn login_submit(
    State(state): State<AppState>,
    raw: CookieJar,
    jar: SignedCookieJar,
    submission: Result<Form<LoginSubmission>, FormRejection>,
) -> Response {
    let Form(submission) = match submission {
        Ok(form) => form,
        Err(rejection) => {
            return AppError::bad_request(rejection.body_text()).into_response();
        }
    };

    match submission.validate() {
        Ok(form) => {
            tracing::info!(openid = %form.openid, remember_me = form.remember_me, "login requested");
            let notice = format!(
                "Login requested for OpenID=\"{}\", remember_me={}",
                form.openid, form.remember_me
            );
            let jar = flash::push(jar, notice);

            (jar, Redirect::to("/index")).into_response()
        }
        Err(errors) => {
            let (jar, flashes) = flash::take(&raw, jar);
            let page = templates::login_page(
                submission.openid_value(),
                submission.remember_me_value(),
                &errors,
                &state.openid_providers,
                &flashes,
            );

            (jar, Html(page)).into_response()
        }
    }
}

pub async fn not_found() -> AppError {
    AppError::not_found("page not found")
}
