use serde::Serialize;
use sqlx::FromRow;

use crate::db::Db;

/// A third-party comment-and-rating record attached to an art.
#[derive(Serialize, Debug, Clone, FromRow)]
pub struct Critic {
    pub id: i64,
    pub author: String,
    pub art_id: i64,
    pub comment: String,
    pub rating: i64,
}

impl Critic {
    pub async fn get_by_art(art_id: i64, db: &Db) -> sqlx::Result<Vec<Critic>> {
        sqlx::query_as::<_, Critic>("SELECT * FROM critics WHERE art_id = ? ORDER BY id ASC")
            .bind(art_id)
            .fetch_all(db)
            .await
    }
}
