use std::sync::Arc;

use anyhow::Context;
use axum::routing::get;
use axum::{Extension, Router};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::db::Db;

mod artists;
mod arts;
mod error;
mod favorites;
mod images;
mod tags;

pub use error::{ApiError, FieldError};

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

#[derive(Clone)]
pub struct ApiContext {
    pub cfg: Arc<Config>,
    pub db: Db,
}

impl ApiContext {
    pub fn new(config: Config, db: Db) -> Self {
        Self {
            cfg: Arc::new(config),
            db,
        }
    }
}

pub async fn serve(ctx: ApiContext) -> anyhow::Result<()> {
    let addr = ctx.cfg.http.listen_addr.clone();
    let app = api_router(ctx);

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("listening on {}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("error running HTTP server")
}

pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/", get(welcome))
        .merge(arts::router())
        .merge(artists::router())
        .merge(tags::router())
        .merge(favorites::router())
        .layer(
            CorsLayer::new()
                .allow_methods(Any)
                .allow_headers(Any)
                .allow_origin(Any),
        )
        .layer(
            ServiceBuilder::new()
                .layer(Extension(ctx))
                .layer(TraceLayer::new_for_http()),
        )
}

async fn welcome() -> &'static str {
    "Welcome to the arteca API"
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
    }
}
