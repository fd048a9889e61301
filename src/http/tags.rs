use axum::extract::Extension;
use axum::routing::get;
use axum::{Json, Router};

use crate::db::entities::tag::Tag;
use crate::http::{ApiContext, Result};

pub fn router() -> Router {
    Router::new().route("/api/tags", get(get_all_tags))
}

async fn get_all_tags(ctx: Extension<ApiContext>) -> Result<Json<Vec<Tag>>> {
    let tags = Tag::get_all(&ctx.db).await?;
    Ok(Json(tags))
}
