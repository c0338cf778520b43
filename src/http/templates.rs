//! Server-rendered HTML pages.
//!
//! Pages are plain strings assembled here so handlers stay free of markup.
//! Every interpolated value passes through [`escape`]; nothing user-supplied
//! reaches the page raw.

use axum::http::StatusCode;

use crate::config::OpenIdProvider;

/// A post as the index page displays it.
pub struct PostView<'a> {
    pub author: &'a str,
    pub body: &'a str,
}

/// The shared shell: title, navigation bar, pending flash messages, then the
/// page content.
fn layout(title: &str, flashes: &[String], content: &str) -> String {
    let mut page = String::new();
    page.push_str("<!doctype html>\n<html>\n  <head>\n");
    page.push_str(&format!("    <title>{} - murmur</title>\n", escape(title)));
    page.push_str("  </head>\n  <body>\n");
    page.push_str("    <div>Murmur: <a href=\"/index\">Home</a></div>\n");
    page.push_str("    <hr>\n");
    if !flashes.is_empty() {
        page.push_str("    <ul>\n");
        for message in flashes {
            page.push_str(&format!("      <li>{}</li>\n", escape(message)));
        }
        page.push_str("    </ul>\n");
    }
    page.push_str(content);
    page.push_str("  </body>\n</html>\n");
    page
}

pub fn index_page(nickname: &str, posts: &[PostView<'_>], flashes: &[String]) -> String {
    let mut content = String::new();
    content.push_str(&format!("    <h1>Hi, {}!</h1>\n", escape(nickname)));
    for post in posts {
        content.push_str(&format!(
            "    <div><p>{} says: <b>{}</b></p></div>\n",
            escape(post.author),
            escape(post.body),
        ));
    }
    layout("Home", flashes, &content)
}

pub fn login_page(
    openid: &str,
    remember_me: bool,
    errors: &[String],
    providers: &[OpenIdProvider],
    flashes: &[String],
) -> String {
    let mut content = String::new();
    content.push_str("    <h1>Sign In</h1>\n");
    content.push_str("    <form action=\"/login\" method=\"post\" name=\"login\">\n");
    content.push_str(
        "      <p>Please enter your OpenID, or select one of the providers below:</p>\n",
    );
    content.push_str(&format!(
        "      <p><input type=\"text\" name=\"openid\" size=\"80\" value=\"{}\"></p>\n",
        escape(openid),
    ));
    for error in errors {
        content.push_str(&format!(
            "      <span style=\"color: red;\">[{}]</span>\n",
            escape(error),
        ));
    }
    let checked = if remember_me { " checked" } else { "" };
    content.push_str(&format!(
        "      <p>remember me: <input type=\"checkbox\" name=\"remember_me\"{}></p>\n",
        checked,
    ));
    content.push_str("      <p><input type=\"submit\" value=\"Sign In\"></p>\n");
    content.push_str("    </form>\n");
    content.push_str("    <p>Providers:</p>\n    <ul>\n");
    for provider in providers {
        content.push_str(&format!(
            "      <li><a href=\"{}\">{}</a></li>\n",
            escape(&provider.url),
            escape(&provider.name),
        ));
    }
    content.push_str("    </ul>\n");
    layout("Login", flashes, &content)
}

pub fn error_page(status: StatusCode, message: &str) -> String {
    let reason = status.canonical_reason().unwrap_or("Error");
    let content = format!(
        "    <h1>{}</h1>\n    <p>{}</p>\n",
        escape(reason),
        escape(message),
    );
    layout(&status.to_string(), &[], &content)
}

/// Minimal HTML entity escaping for text and attribute positions.
fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
