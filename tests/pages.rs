//! Page Tests
//!
//! Covers the index page, the login form flow, flash messages, and the
//! fallback and health endpoints.

mod common;

use axum::http::{Method, StatusCode};
use common::app;

// ===========================================================================
// Index page
// ===========================================================================

#[tokio::test]
async fn index_renders_sample_posts() {
    let app = app().await;

    let resp = app.get("/").await;

    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.text();
    assert!(body.contains("<title>Home - murmur</title>"));
    assert!(body.contains("Hi, Miguel!"));
    assert!(body.contains("John says:"));
    assert!(body.contains("Beautiful day in Portland!"));
    assert!(body.contains("Susan says:"));
    assert!(body.contains("The Avengers movie was so cool!"));
}

#[tokio::test]
async fn index_alias_renders_the_same_page() {
    let app = app().await;

    let root = app.get("/").await;
    let index = app.get("/index").await;

    assert_eq!(root.status, StatusCode::OK);
    assert_eq!(index.status, StatusCode::OK);
    assert_eq!(root.text(), index.text());
}

// ===========================================================================
// Login page
// ===========================================================================

#[tokio::test]
async fn login_page_lists_providers() {
    let app = app().await;

    let resp = app.get("/login").await;

    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.text();
    assert!(body.contains("<title>Login - murmur</title>"));
    assert!(body.contains("Sign In"));
    assert!(body.contains("name=\"openid\""));
    assert!(body.contains("name=\"remember_me\""));
    for name in ["Google", "Yahoo", "AOL", "Flickr", "MyOpenID"] {
        assert!(body.contains(name), "provider {} missing from page", name);
    }
    assert!(body.contains("https://me.yahoo.com"));
}

#[tokio::test]
async fn login_submit_redirects_to_index_with_flash() {
    let app = app().await;

    let resp = app
        .post_form(
            "/login",
            &[("openid", "https://me.yahoo.com"), ("remember_me", "on")],
        )
        .await;

    assert!(
        resp.status.is_redirection(),
        "expected a redirect, got {}",
        resp.status
    );
    assert_eq!(resp.location(), Some("/index"));
    let cookies = resp.set_cookies();
    assert!(
        cookies.iter().any(|cookie| cookie.starts_with("_flash=")),
        "flash cookie missing from redirect"
    );

    let resp = app.get_with_cookies("/index", &cookies).await;
    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.text();
    assert!(body.contains("Login requested for OpenID="));
    assert!(body.contains("https://me.yahoo.com"));
    assert!(body.contains("remember_me=true"));
}

#[tokio::test]
async fn unchecked_remember_me_reads_false() {
    let app = app().await;

    let resp = app
        .post_form("/login", &[("openid", "https://www.myopenid.com")])
        .await;
    let cookies = resp.set_cookies();

    let body = app.get_with_cookies("/index", &cookies).await.text();
    assert!(body.contains("remember_me=false"));
}

#[tokio::test]
async fn remember_me_false_values_read_unchecked() {
    let app = app().await;

    for value in ["false", "0"] {
        let resp = app
            .post_form(
                "/login",
                &[("openid", "https://me.yahoo.com"), ("remember_me", value)],
            )
            .await;
        let cookies = resp.set_cookies();

        let body = app.get_with_cookies("/index", &cookies).await.text();
        assert!(
            body.contains("remember_me=false"),
            "remember_me={} should read as unchecked",
            value
        );
    }
}

#[tokio::test]
async fn flash_is_consumed_after_one_view() {
    let app = app().await;

    let resp = app
        .post_form("/login", &[("openid", "https://www.myopenid.com")])
        .await;
    let cookies = resp.set_cookies();

    let first = app.get_with_cookies("/index", &cookies).await;
    assert!(first.text().contains("Login requested for OpenID="));

    // The render cleared the cookie; follow what the server sent back.
    let cleared = first.set_cookies();
    assert!(
        cleared.iter().any(|cookie| cookie.starts_with("_flash=")),
        "expected a removal cookie after the flash rendered"
    );
    let second = app.get_with_cookies("/index", &cleared).await;
    assert!(!second.text().contains("Login requested for OpenID="));
}

#[tokio::test]
async fn flash_escapes_markup() {
    let app = app().await;

    let resp = app
        .post_form("/login", &[("openid", "https://example.com/<script>")])
        .await;
    let cookies = resp.set_cookies();

    let body = app.get_with_cookies("/index", &cookies).await.text();
    assert!(body.contains("&lt;script&gt;"));
    assert!(!body.contains("<script>"));
}

#[tokio::test]
async fn invalid_flash_cookie_is_dropped_and_cleared() {
    let app = app().await;

    // A value the server never signed.
    let cookies = vec!["_flash=not-a-signed-value".to_string()];
    let resp = app.get_with_cookies("/index", &cookies).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(!resp.text().contains("Login requested"));
    assert!(
        resp.set_cookies()
            .iter()
            .any(|cookie| cookie.starts_with("_flash=")),
        "unverifiable flash cookie should be cleared"
    );
}

#[tokio::test]
async fn login_submit_requires_openid() {
    let app = app().await;

    let resp = app.post_form("/login", &[("openid", "   ")]).await;

    assert_eq!(resp.status, StatusCode::OK);
    let body = resp.text();
    assert!(body.contains("This field is required."));
    // The form re-renders in place with the provider list intact.
    assert!(body.contains("MyOpenID"));
    assert!(resp.location().is_none());
    assert!(resp.set_cookies().is_empty());
}

#[tokio::test]
async fn login_submit_handles_missing_fields() {
    let app = app().await;

    let resp = app.post_form("/login", &[]).await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.text().contains("This field is required."));
}

#[tokio::test]
async fn malformed_login_submission_renders_bad_request() {
    let app = app().await;

    let resp = app
        .request(
            Method::POST,
            "/login",
            Some(("application/json", "{}".to_string())),
            &[],
        )
        .await;

    assert_eq!(resp.status, StatusCode::BAD_REQUEST);
    assert!(resp.text().contains("Bad Request"));
}

// ===========================================================================
// Fallback and health
// ===========================================================================

#[tokio::test]
async fn unknown_route_renders_not_found_page() {
    let app = app().await;

    let resp = app.get("/no-such-page").await;

    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    let body = resp.text();
    assert!(body.contains("Not Found"));
    assert!(body.contains("page not found"));
}

#[tokio::test]
async fn health_reports_ok() {
    let app = app().await;

    let resp = app.get("/health").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert_eq!(resp.json()["status"], "ok");
}
