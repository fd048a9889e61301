use serde::Serialize;
use sqlx::FromRow;

use crate::db::Db;

#[derive(Serialize, Debug, Clone, FromRow)]
pub struct Artist {
    pub id: i64,
    pub name: String,
}

impl Artist {
    pub async fn get_by_id(id: i64, db: &Db) -> sqlx::Result<Option<Artist>> {
        sqlx::query_as::<_, Artist>("SELECT * FROM artists WHERE id = ?")
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// Artists credited on the given art, via the `art_artist` join table.
    pub async fn get_by_art(art_id: i64, db: &Db) -> sqlx::Result<Vec<Artist>> {
        sqlx::query_as::<_, Artist>(
            "SELECT a.id, a.name FROM artists a \
             JOIN art_artist aa ON aa.artist_id = a.id \
             WHERE aa.art_id = ? ORDER BY a.id ASC",
        )
        .bind(art_id)
        .fetch_all(db)
        .await
    }
}
