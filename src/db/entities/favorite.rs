use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::db::Db;

/// A user's saved relationship to an art, carrying a free-text watch state
/// and a personal rating. The table's composite primary key guarantees at
/// most one row per (art, user) pair.
#[derive(Serialize, Deserialize, Debug, Clone, FromRow)]
pub struct Favorite {
    pub art_id: i64,
    pub user_id: i64,
    pub state: String,
    pub rating: i64,
}

impl Favorite {
    pub async fn get_by_user(user_id: i64, db: &Db) -> sqlx::Result<Vec<Favorite>> {
        sqlx::query_as::<_, Favorite>(
            "SELECT * FROM favorites WHERE user_id = ? ORDER BY art_id ASC",
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// Inserts this favorite as a single statement. `Ok(false)` means a row
    /// for the same (art, user) pair already exists; there is no prior read,
    /// so concurrent identical requests cannot both pass a check and insert.
    pub async fn insert(&self, db: &Db) -> sqlx::Result<bool> {
        let result = sqlx::query(
            "INSERT INTO favorites (art_id, user_id, state, rating) VALUES (?, ?, ?, ?)",
        )
        .bind(self.art_id)
        .bind(self.user_id)
        .bind(&self.state)
        .bind(self.rating)
        .execute(db)
        .await;
        match result {
            Ok(_) => Ok(true),
            Err(sqlx::Error::Database(e)) if e.is_unique_violation() => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Updates state and rating for this favorite's (art, user) pair.
    /// `Ok(false)` means no such pair exists.
    pub async fn update(&self, db: &Db) -> sqlx::Result<bool> {
        let result = sqlx::query(
            "UPDATE favorites SET state = ?, rating = ? WHERE art_id = ? AND user_id = ?",
        )
        .bind(&self.state)
        .bind(self.rating)
        .bind(self.art_id)
        .bind(self.user_id)
        .execute(db)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// `Ok(false)` means no such pair existed.
    pub async fn delete(art_id: i64, user_id: i64, db: &Db) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM favorites WHERE art_id = ? AND user_id = ?")
            .bind(art_id)
            .bind(user_id)
            .execute(db)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
