use std::time::Duration;

use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub mod entities;

pub type Db = SqlitePool;

const SCHEMA: &str = include_str!("schema.sql");

pub async fn connect(database_url: &str) -> sqlx::Result<Db> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url)
        .await
}

/// Creates any missing tables. All statements are `IF NOT EXISTS`, so running
/// this against an already-populated database leaves it untouched.
pub async fn migrate(db: &Db) -> sqlx::Result<()> {
    sqlx::raw_sql(SCHEMA).execute(db).await?;
    Ok(())
}
