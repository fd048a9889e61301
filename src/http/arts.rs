use axum::extract::{Extension, Path};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};

use crate::db::entities::art::Art;
use crate::db::entities::artist::Artist;
use crate::db::entities::critic::Critic;
use crate::db::entities::image::ImageOwner;
use crate::db::Db;
use crate::http::{images, ApiContext, ApiError, Result};

pub fn router() -> Router {
    Router::new()
        .route("/api/arts", get(get_all_arts))
        .route("/api/last", get(get_last_arts))
        .route("/api/arts/:slug", get(get_art))
        .route("/api/arts/:slug/critics", get(get_art_critics))
        .route("/api/arts/:slug/artists", get(get_art_artists))
        .route("/api/arts/:slug/image", get(get_art_image))
        .route("/api/arts-tag/:tag", get(get_arts_by_tag))
}

const NO_SUCH_ART: &str = "No such art was found";

async fn get_all_arts(ctx: Extension<ApiContext>) -> Result<Json<Vec<Art>>> {
    let arts = Art::get_all(&ctx.db).await?;
    Ok(Json(arts))
}

async fn get_last_arts(ctx: Extension<ApiContext>) -> Result<Json<Vec<Art>>> {
    let arts = Art::get_last(&ctx.db).await?;
    Ok(Json(arts))
}

async fn get_art(
    ctx: Extension<ApiContext>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Art>>> {
    let art = resolve_art(&slug, &ctx.db).await?;
    // clients expect a one-element array rather than a bare object
    Ok(Json(vec![art]))
}

async fn get_art_critics(
    ctx: Extension<ApiContext>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Critic>>> {
    let art = resolve_art(&slug, &ctx.db).await?;
    let critics = Critic::get_by_art(art.id, &ctx.db).await?;
    Ok(Json(critics))
}

async fn get_art_artists(
    ctx: Extension<ApiContext>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<Artist>>> {
    let art = resolve_art(&slug, &ctx.db).await?;
    let artists = Artist::get_by_art(art.id, &ctx.db).await?;
    Ok(Json(artists))
}

async fn get_art_image(
    ctx: Extension<ApiContext>,
    Path(slug): Path<String>,
) -> Result<Response> {
    let art = resolve_art(&slug, &ctx.db).await?;
    images::respond(
        ImageOwner::Art(art.id),
        &ctx.cfg.images.art_placeholder_url,
        &ctx.db,
    )
    .await
}

async fn get_arts_by_tag(
    ctx: Extension<ApiContext>,
    Path(tag): Path<String>,
) -> Result<Json<Vec<Art>>> {
    let tag_id: i64 = tag
        .parse()
        .map_err(|_| ApiError::bad_request("tag of id must be an Integer"))?;
    let arts = Art::get_by_tag(tag_id, &ctx.db).await?;
    Ok(Json(arts))
}

async fn resolve_art(slug: &str, db: &Db) -> Result<Art> {
    Art::get_by_slug(slug, db)
        .await?
        .ok_or_else(|| ApiError::not_found(NO_SUCH_ART))
}
