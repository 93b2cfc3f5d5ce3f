use std::time::Duration;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;

use crate::cache::CatalogCache;
use crate::errors::CatalogError;

/// Redis-backed cache used in production.
pub struct RedisCache {
    client: redis::Client,
}

impl RedisCache {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    async fn conn(&self) -> Result<MultiplexedConnection, CatalogError> {
        Ok(self.client.get_multiplexed_async_connection().await?)
    }
}

#[async_trait]
impl CatalogCache for RedisCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CatalogError> {
        let mut conn = self.conn().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CatalogError> {
        let mut conn = self.conn().await?;
        let _: () = conn.set_ex(key, value, ttl.as_secs()).await?;
        Ok(())
    }

    async fn delete(&self, keys: &[&str]) -> Result<(), CatalogError> {
        if keys.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn().await?;
        let _: () = conn.del(keys).await?;
        Ok(())
    }

    async fn delete_matching(&self, pattern: &str) -> Result<(), CatalogError> {
        let mut conn = self.conn().await?;
        let matched: Vec<String> = conn.keys(pattern).await?;
        if !matched.is_empty() {
            let _: () = conn.del(matched).await?;
        }
        Ok(())
    }
}
