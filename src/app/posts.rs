use anyhow::{anyhow, Result};
use sqlx::Row;
use uuid::Uuid;

use crate::domain::post::Post;
use crate::infra::db::Db;

#[derive(Clone)]
pub struct PostService {
    db: Db,
}

impl PostService {
    pub fn new(db: Db) -> Self {
        Self { db }
    }

    /// Insert a post for `author_id`. `timestamp` is assigned by the store;
    /// bodies over the 140-character cap are rejected here, with the
    /// VARCHAR(140) column as the backstop.
    pub async fn create(&self, author_id: Uuid, body: String) -> Result<Post> {
        if body.chars().count() > Post::BODY_MAX_CHARS {
            return Err(anyhow!(
                "body must be at most {} characters",
                Post::BODY_MAX_CHARS
            ));
        }

        let row = sqlx::query(
            "WITH inserted_post AS ( \
                INSERT INTO posts (kind, body, author_id) \
                VALUES ($1, $2, $3) \
                RETURNING id, kind, body, timestamp, author_id \
             ) \
             SELECT p.*, u.nickname AS author_nickname \
             FROM inserted_post p \
             JOIN users u ON p.author_id = u.id",
        )
        .bind(Post::KIND_POST)
        .bind(body)
        .bind(author_id)
        .fetch_one(self.db.pool())
        .await?;

        Ok(Post {
            id: row.get("id"),
            kind: row.get("kind"),
            body: row.get("body"),
            timestamp: row.get("timestamp"),
            author_id: row.get("author_id"),
            author_nickname: row.get("author_nickname"),
        })
    }

    pub async fn list_recent(&self, limit: i64) -> Result<Vec<Post>> {
        let rows = sqlx::query(
            "SELECT p.id, p.kind, p.body, p.timestamp, p.author_id, \
                    u.nickname AS author_nickname \
             FROM posts p \
             JOIN users u ON p.author_id = u.id \
             ORDER BY p.timestamp DESC, p.id DESC \
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(self.db.pool())
        .await?;

        let posts = rows
            .into_iter()
            .map(|row| Post {
                id: row.get("id"),
                kind: row.get("kind"),
                body: row.get("body"),
                timestamp: row.get("timestamp"),
                author_id: row.get("author_id"),
                author_nickname: row.get("author_nickname"),
            })
            .collect();

        Ok(posts)
    }

    pub async fn list_by_author(&self, author_id: Uuid, limit: i64) -> Result<Vec<Post>> {
        let rows = sqlx::query(
            "SELECT p.id, p.kind, p.body, p.timestamp, p.author_id, \
                    u.nickname AS author_nickname \
             FROM posts p \
             JOIN users u ON p.author_id = u.id \
             WHERE p.author_id = $1 \
             ORDER BY p.timestamp DESC, p.id DESC \
             LIMIT $2",
        )
        .bind(author_id)
        .bind(limit)
        .fetch_all(self.db.pool())
        .await?;

        let posts = rows
            .into_iter()
            .map(|row| Post {
                id: row.get("id"),
                kind: row.get("kind"),
                body: row.get("body"),
                timestamp: row.get("timestamp"),
                author_id: row.get("author_id"),
                author_nickname: row.get("author_nickname"),
            })
            .collect();

        Ok(posts)
    }
}
