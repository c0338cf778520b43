//! One-time notices carried across a redirect in a signed cookie.
//!
//! Messages queue as a JSON array, base64-encoded so the payload stays within
//! the cookie octet set. The jar signature covers the value, so a client
//! cannot forge or edit pending messages.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite, SignedCookieJar};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

const FLASH_COOKIE: &str = "_flash";

/// Queue `message` for the next rendered page, keeping anything already
/// pending.
pub fn push(jar: SignedCookieJar, message: String) -> SignedCookieJar {
    let mut messages = match jar.get(FLASH_COOKIE) {
        Some(cookie) => decode(cookie.value()),
        None => Vec::new(),
    };
    messages.push(message);

    let payload = match serde_json::to_vec(&messages) {
        Ok(bytes) => STANDARD.encode(bytes),
        Err(err) => {
            tracing::warn!(error = ?err, "failed to encode flash messages");
            return jar;
        }
    };

    jar.add(
        Cookie::build((FLASH_COOKIE, payload))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .build(),
    )
}

/// Remove and return every pending message. Rendering a page consumes the
/// queue even when it ignores the messages. `raw` carries the unverified
/// request cookies: a flash cookie whose signature does not verify is
/// dropped with a warning and cleared like any other consumed queue.
pub fn take(raw: &CookieJar, jar: SignedCookieJar) -> (SignedCookieJar, Vec<String>) {
    if raw.get(FLASH_COOKIE).is_none() {
        return (jar, Vec::new());
    }

    let messages = match jar.get(FLASH_COOKIE) {
        Some(cookie) => decode(cookie.value()),
        None => {
            tracing::warn!("flash cookie failed signature verification");
            Vec::new()
        }
    };

    let mut removal = Cookie::from(FLASH_COOKIE);
    removal.set_path("/");
    (jar.remove(removal), messages)
}

/// A payload that fails to decode is dropped; the signature already passed,
/// so this points at a stale format rather than tampering.
fn decode(value: &str) -> Vec<String> {
    let bytes = match STANDARD.decode(value) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!(error = ?err, "unreadable flash cookie payload");
            return Vec::new();
        }
    };
    match serde_json::from_slice(&bytes) {
        Ok(messages) => messages,
        Err(err) => {
            tracing::warn!(error = ?err, "unreadable flash cookie payload");
            Vec::new()
        }
    }
}
