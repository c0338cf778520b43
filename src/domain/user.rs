use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub nickname: Option<String>,
    pub email: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created: OffsetDateTime,
}

impl User {
    /// Store-level field caps, matching the column types.
    pub const NICKNAME_MAX_CHARS: usize = 64;
    pub const EMAIL_MAX_CHARS: usize = 120;
}
