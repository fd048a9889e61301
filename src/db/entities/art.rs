use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

use crate::db::Db;

/// A cataloged media work (movie or show) with its descriptive and rating
/// metadata. `slug` is the natural key the HTTP surface looks arts up by.
#[derive(Serialize, Debug, Clone, FromRow)]
pub struct Art {
    pub id: i64,
    pub imdb_id: Option<String>,
    pub title: String,
    pub slug: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub kind: String,
    pub year: i64,
    pub release_date: NaiveDate,
    pub duration: i64,
    pub plot: String,
    pub user_rating: Option<f64>,
    pub imdb_rating: Option<f64>,
    pub director: String,
    pub video_link: Option<String>,
}

impl Art {
    pub async fn get_all(db: &Db) -> sqlx::Result<Vec<Art>> {
        sqlx::query_as::<_, Art>("SELECT * FROM arts ORDER BY id ASC")
            .fetch_all(db)
            .await
    }

    /// The ten most recently added arts, newest first.
    pub async fn get_last(db: &Db) -> sqlx::Result<Vec<Art>> {
        sqlx::query_as::<_, Art>("SELECT * FROM arts ORDER BY id DESC LIMIT 10")
            .fetch_all(db)
            .await
    }

    pub async fn get_by_slug(slug: &str, db: &Db) -> sqlx::Result<Option<Art>> {
        sqlx::query_as::<_, Art>("SELECT * FROM arts WHERE slug = ?")
            .bind(slug)
            .fetch_optional(db)
            .await
    }

    pub async fn get_by_tag(tag_id: i64, db: &Db) -> sqlx::Result<Vec<Art>> {
        sqlx::query_as::<_, Art>(
            "SELECT * FROM arts WHERE id IN (SELECT art_id FROM art_tag WHERE tag_id = ?)",
        )
        .bind(tag_id)
        .fetch_all(db)
        .await
    }
}
