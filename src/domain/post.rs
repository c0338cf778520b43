use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    /// Subtype discriminator; plain posts carry [`Post::KIND_POST`].
    pub kind: String,
    pub body: String,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    /// References the author; the post does not own the user row.
    pub author_id: Uuid,
    pub author_nickname: Option<String>,
}

impl Post {
    pub const BODY_MAX_CHARS: usize = 140;
    pub const KIND_POST: &'static str = "post";
}
