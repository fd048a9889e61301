use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use arteca::config::{Config, FlatConfig};
use arteca::db;
use arteca::http::{self, ApiContext};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "arteca=debug,tower_http=debug".into()),
        )
        .init();

    let config: Config = FlatConfig::parse().into();

    info!("connecting pool to DB...");
    let pool = db::connect(&config.db.database_url)
        .await
        .context("can't connect to database")?;
    db::migrate(&pool).await.context("schema bootstrap failed")?;
    info!("connected to DB");

    http::serve(ApiContext::new(config, pool.clone())).await?;

    pool.close().await;
    Ok(())
}
