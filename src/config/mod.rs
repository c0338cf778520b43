use anyhow::{anyhow, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::str::FromStr;
use url::Url;

/// Identity providers offered on the login page. The defaults mirror the
/// classic public OpenID endpoints; `<username>` is a placeholder the user
/// substitutes themselves.
const DEFAULT_OPENID_PROVIDERS: &str = r#"[
    {"name": "Google", "url": "https://www.google.com/accounts/o8/id"},
    {"name": "Yahoo", "url": "https://me.yahoo.com"},
    {"name": "AOL", "url": "http://openid.aol.com/<username>"},
    {"name": "Flickr", "url": "http://www.flickr.com/<username>"},
    {"name": "MyOpenID", "url": "https://www.myopenid.com"}
]"#;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct OpenIdProvider {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub http_addr: String,
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_connect_timeout_seconds: u64,
    pub db_idle_timeout_seconds: u64,
    pub db_max_lifetime_seconds: u64,
    pub secret_key: [u8; 32],
    pub openid_providers: Vec<OpenIdProvider>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let http_addr = env_or("HTTP_ADDR", "0.0.0.0:8080");
        SocketAddr::from_str(&http_addr).map_err(|err| anyhow!("invalid HTTP_ADDR: {}", err))?;

        Ok(Self {
            http_addr,
            database_url: env_or_err("DATABASE_URL")?,
            db_max_connections: env_or_parse("DB_MAX_CONNECTIONS", "25")?,
            db_connect_timeout_seconds: env_or_parse("DB_CONNECT_TIMEOUT_SECONDS", "5")?,
            db_idle_timeout_seconds: env_or_parse("DB_IDLE_TIMEOUT_SECONDS", "300")?,
            db_max_lifetime_seconds: env_or_parse("DB_MAX_LIFETIME_SECONDS", "1800")?,
            secret_key: env_key_32("SECRET_KEY")?,
            openid_providers: env_openid_providers()?,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_or_err(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| anyhow!("missing required env var: {}", key))
}

fn env_or_parse<T>(key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: std::fmt::Display,
{
    let value = std::env::var(key).unwrap_or_else(|_| default.to_string());
    value
        .parse::<T>()
        .map_err(|err| anyhow!("invalid {}: {}", key, err))
}

fn env_key_32(key: &str) -> Result<[u8; 32]> {
    let value = env_or_err(key)?;
    let decoded = STANDARD
        .decode(value.as_bytes())
        .map_err(|err| anyhow!("invalid {}: {}", key, err))?;
    if decoded.len() != 32 {
        return Err(anyhow!("invalid {}: expected 32 bytes", key));
    }
    let mut key_bytes = [0u8; 32];
    key_bytes.copy_from_slice(&decoded);
    Ok(key_bytes)
}

fn env_openid_providers() -> Result<Vec<OpenIdProvider>> {
    let value = env_or("OPENID_PROVIDERS", DEFAULT_OPENID_PROVIDERS);
    let providers: Vec<OpenIdProvider> = serde_json::from_str(&value)
        .map_err(|err| anyhow!("invalid OPENID_PROVIDERS: {}", err))?;
    if providers.is_empty() {
        return Err(anyhow!("invalid OPENID_PROVIDERS: list is empty"));
    }
    for provider in &providers {
        Url::parse(&provider.url)
            .map_err(|err| anyhow!("invalid OPENID_PROVIDERS url {:?}: {}", provider.url, err))?;
        if provider.name.trim().is_empty() {
            return Err(anyhow!("invalid OPENID_PROVIDERS: provider name is empty"));
        }
    }
    Ok(providers)
}
