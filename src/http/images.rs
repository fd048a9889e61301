use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::db::entities::image::{ImageOwner, ImageRecord};
use crate::db::Db;
use crate::http::Result;

/// Responds with the stored image for `owner`, or with the placeholder at
/// `placeholder_url` when no image row exists. The whole buffer is written in
/// one piece; there is no streaming.
pub async fn respond(owner: ImageOwner, placeholder_url: &str, db: &Db) -> Result<Response> {
    match ImageRecord::get_by_owner(owner, db).await? {
        Some(record) => {
            let (bytes, mime) = record.decode()?;
            Ok(binary_response(bytes, &mime))
        }
        None => {
            let bytes = fetch_placeholder(placeholder_url).await?;
            Ok(binary_response(bytes, "image/jpeg"))
        }
    }
}

async fn fetch_placeholder(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::get(url).await?.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

fn binary_response(bytes: Vec<u8>, mime: &str) -> Response {
    ([(header::CONTENT_TYPE, mime.to_string())], bytes).into_response()
}
