pub mod app;
pub mod config;
pub mod domain;
pub mod http;
pub mod infra;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use crate::config::OpenIdProvider;
use crate::infra::db::Db;

#[derive(Clone)]
pub struct AppState {
    pub db: Db,
    pub cookie_key: Key,
    pub openid_providers: Vec<OpenIdProvider>,
}

// Lets SignedCookieJar pull its signing key straight out of the state.
impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Key {
        state.cookie_key.clone()
    }
}
