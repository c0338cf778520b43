use anyhow::{anyhow, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::path::Path;
use std::time::Duration;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    pub async fn connect(config: &AppConfig) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_connect_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.db_idle_timeout_seconds))
            .max_lifetime(Duration::from_secs(config.db_max_lifetime_seconds))
            .connect(&config.database_url)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Apply every `.sql` file under `dir` in filename order. The statements
    /// use IF NOT EXISTS guards, so re-applying on an existing schema is a
    /// no-op.
    pub async fn apply_migrations(&self, dir: &Path) -> Result<()> {
        let mut files: Vec<_> = std::fs::read_dir(dir)
            .map_err(|err| anyhow!("cannot read migrations dir {}: {}", dir.display(), err))?
            .filter_map(Result::ok)
            .filter(|entry| entry.path().extension().map_or(false, |ext| ext == "sql"))
            .collect();
        files.sort_by_key(|entry| entry.file_name());

        for entry in &files {
            let sql = std::fs::read_to_string(entry.path())
                .map_err(|err| anyhow!("cannot read {}: {}", entry.path().display(), err))?;
            sqlx::raw_sql(&sql)
                .execute(&self.pool)
                .await
                .map_err(|err| anyhow!("migration {:?} failed: {}", entry.file_name(), err))?;
        }
        Ok(())
    }
}
