use axum::extract::{Extension, Path};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};

use crate::db::entities::artist::Artist;
use crate::db::entities::image::ImageOwner;
use crate::db::Db;
use crate::http::{images, ApiContext, ApiError, Result};

pub fn router() -> Router {
    Router::new()
        .route("/api/artists/:id", get(get_artist))
        .route("/api/artists/:id/image", get(get_artist_image))
}

const NO_SUCH_ARTIST: &str = "Artist not found";

async fn get_artist(
    ctx: Extension<ApiContext>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Artist>>> {
    let id = parse_id(&id)?;
    let artist = resolve_artist(id, &ctx.db).await?;
    Ok(Json(vec![artist]))
}

async fn get_artist_image(
    ctx: Extension<ApiContext>,
    Path(id): Path<String>,
) -> Result<Response> {
    let id = parse_id(&id)?;
    let artist = resolve_artist(id, &ctx.db).await?;
    images::respond(
        ImageOwner::Artist(artist.id),
        &ctx.cfg.images.artist_placeholder_url,
        &ctx.db,
    )
    .await
}

// ids are parsed by hand so the 400 body keeps the structured shape
fn parse_id(raw: &str) -> Result<i64> {
    raw.parse()
        .map_err(|_| ApiError::bad_request("ID must be an Integer"))
}

async fn resolve_artist(id: i64, db: &Db) -> Result<Artist> {
    Artist::get_by_id(id, db)
        .await?
        .ok_or_else(|| ApiError::not_found(NO_SUCH_ARTIST))
}
