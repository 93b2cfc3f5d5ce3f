use thiserror::Error;

/// Error type shared by the sync pipeline and the read layer.
///
/// `SyncOrchestrator::run` never surfaces these to its caller — each stage
/// catches its own error and records the message in the result — but the
/// parsers, store and cache all propagate them with `?` internally.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("source returned status {status}: {url}")]
    Source { status: u16, url: String },

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),
}
