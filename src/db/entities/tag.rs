use serde::Serialize;
use sqlx::FromRow;

use crate::db::Db;

#[derive(Serialize, Debug, Clone, FromRow)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl Tag {
    pub async fn get_all(db: &Db) -> sqlx::Result<Vec<Tag>> {
        sqlx::query_as::<_, Tag>("SELECT * FROM tags ORDER BY id ASC")
            .fetch_all(db)
            .await
    }
}
