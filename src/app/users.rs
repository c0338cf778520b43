use anyhow::{anyhow, Result};
use sqlx::Row;

use crate::domain::user::User;
use crate::infra::db::Db;

#[derive(Clone)]
pub struct UserService {
    db: Db,
}

impl UserService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Insert a new user. `created` is assigned by the store; email
    /// uniqueness is enforced by the unique constraint and surfaces as a
    /// database error (23505) rather than a pre-check.
    pub async fn create(&self, nickname: Option<String>, email: String) -> Result<User> {
        if email.trim().is_empty() {
            return Err(anyhow!("email is required"));
        }
        if email.chars().count() > User::EMAIL_MAX_CHARS {
            return Err(anyhow!(
                "email must be at most {} characters",
                User::EMAIL_MAX_CHARS
            ));
        }
        if let Some(nickname) = &nickname {
            if nickname.chars().count() > User::NICKNAME_MAX_CHARS {
                return Err(anyhow!(
                    "nickname must be at most {} characters",
                    User::NICKNAME_MAX_CHARS
                ));
            }
        }

        let row = sqlx::query(
            "INSERT INTO users (nickname, email) \
             VALUES ($1, $2) \
             RETURNING id, nickname, email, created",
        )
        .bind(nickname)
        .bind(email)
        .fetch_one(self.db.pool())
        .await?;

        Ok(User {
            id: row.get("id"),
            nickname: row.get("nickname"),
            email: row.get("email"),
            created: row.get("created"),
        })
    }

    /// Newest-first lookup over the (email, created DESC) index.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(
            "SELECT id, nickname, email, created \
             FROM users WHERE email = $1 \
             ORDER BY created DESC \
             LIMIT 1",
        )
        .bind(email)
        .fetch_optional(self.db.pool())
        .await?;

        let user = row.map(|row| User {
            id: row.get("id"),
            nickname: row.get("nickname"),
            email: row.get("email"),
            created: row.get("created"),
        });

        Ok(user)
    }
}
