use anyhow::Context;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use sqlx::FromRow;

use crate::db::Db;

/// Owner side of the polymorphic image association. The legacy discriminator
/// strings the `images` table stores only exist inside this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOwner {
    Art(i64),
    Artist(i64),
}

impl ImageOwner {
    pub fn id(&self) -> i64 {
        match self {
            Self::Art(id) | Self::Artist(id) => *id,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Self::Art(_) => "App\\Models\\Art",
            Self::Artist(_) => "App\\Models\\ActorActress",
        }
    }
}

/// An image row: base64 text content plus a data-URI style prefix in
/// `extension` that carries the MIME type, e.g. `data:image/png;base64,`.
#[derive(Debug, Clone, FromRow)]
pub struct ImageRecord {
    pub id: i64,
    pub owner_id: i64,
    pub owner_kind: String,
    pub content: String,
    pub extension: String,
}

impl ImageRecord {
    pub async fn get_by_owner(owner: ImageOwner, db: &Db) -> sqlx::Result<Option<ImageRecord>> {
        sqlx::query_as::<_, ImageRecord>(
            "SELECT * FROM images WHERE owner_id = ? AND owner_kind = ?",
        )
        .bind(owner.id())
        .bind(owner.kind())
        .fetch_optional(db)
        .await
    }

    /// Returns the decoded image bytes and the MIME type embedded in the
    /// stored data-URI prefix.
    pub fn decode(&self) -> anyhow::Result<(Vec<u8>, String)> {
        let mime = self
            .extension
            .trim_start_matches("data:")
            .trim_end_matches(";base64,")
            .to_string();
        let bytes = BASE64
            .decode(self.content.as_bytes())
            .context("stored image content is not valid base64")?;
        Ok((bytes, mime))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(content: &str, extension: &str) -> ImageRecord {
        ImageRecord {
            id: 1,
            owner_id: 1,
            owner_kind: "App\\Models\\Art".to_string(),
            content: content.to_string(),
            extension: extension.to_string(),
        }
    }

    #[test]
    fn decode_extracts_mime_and_bytes() {
        let encoded = BASE64.encode(b"fake png bytes");
        let record = record(&encoded, "data:image/png;base64,");
        let (bytes, mime) = record.decode().unwrap();
        assert_eq!(bytes, b"fake png bytes");
        assert_eq!(mime, "image/png");
    }

    #[test]
    fn decode_rejects_corrupt_content() {
        let record = record("not base64 at all!!!", "data:image/jpeg;base64,");
        assert!(record.decode().is_err());
    }

    #[test]
    fn owner_kinds_map_to_discriminator_strings() {
        assert_eq!(ImageOwner::Art(7).kind(), "App\\Models\\Art");
        assert_eq!(ImageOwner::Artist(7).kind(), "App\\Models\\ActorActress");
        assert_eq!(ImageOwner::Artist(7).id(), 7);
    }
}
