mod cache;
mod classify;
mod config;
mod db;
mod errors;
mod models;
mod query;
mod slug;
mod sources;
mod store;
mod sync;
mod taxonomy;
#[cfg(test)]
mod testutil;

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cache::redis::RedisCache;
use crate::classify::Classifier;
use crate::config::Config;
use crate::db::create_pool;
use crate::query::CatalogQuery;
use crate::sources::linguist::{LinguistHttpSource, LinguistParser};
use crate::sources::tags::{StackExchangeTagSource, TagParser};
use crate::store::pg::PgCatalogStore;
use crate::sync::SyncOrchestrator;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting catalog sync v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL and apply pending migrations
    let db = create_pool(&config.database_url).await?;
    sqlx::migrate!().run(&db).await?;
    info!("Database migrations applied");

    // Initialize Redis
    let redis = redis::Client::open(config.redis_url.clone())?;
    info!("Redis client initialized");

    // Compose the pipeline: one classifier shared by both parsers,
    // Postgres store and Redis cache behind their seams.
    let classifier = Arc::new(Classifier::new());
    let linguist = LinguistParser::new(
        Arc::new(LinguistHttpSource::new(config.linguist_url.clone())),
        classifier.clone(),
    );
    let tags = TagParser::new(
        Arc::new(StackExchangeTagSource::new(
            config.tags_api_base.clone(),
            config.tags_site.clone(),
        )),
        classifier,
    );
    let store = Arc::new(PgCatalogStore::new(db));
    let cache = Arc::new(RedisCache::new(redis));

    let orchestrator = SyncOrchestrator::new(linguist, tags, store.clone(), cache.clone());
    let result = orchestrator.run().await;

    if !result.is_fully_successful() {
        for error in &result.errors {
            warn!("Sync stage error: {error}");
        }
    }

    // Warm the listing caches and report what the catalog now serves.
    let queries = CatalogQuery::new(store, cache);
    let languages = queries.list_languages().await?;
    let skills = queries.list_skills().await?;
    info!(
        "Catalog now serves {} languages and {} skills",
        languages.len(),
        skills.len()
    );

    println!("{}", serde_json::to_string_pretty(&result)?);

    Ok(())
}
