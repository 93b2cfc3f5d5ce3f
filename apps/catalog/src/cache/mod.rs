//! Read-side cache: key scheme, TTL policy and the cache seam.

pub mod redis;

use std::time::Duration;

use async_trait::async_trait;
use sha2::{Digest, Sha256};

use crate::errors::CatalogError;
use crate::slug::normalize_query;

/// Taxonomy barely changes between syncs.
pub const TTL_TAXONOMY: Duration = Duration::from_secs(24 * 60 * 60);
/// Catalog listings refresh on sync; an hour bounds staleness in between.
pub const TTL_CATALOG: Duration = Duration::from_secs(60 * 60);
/// Search results are cheap to recompute and high-cardinality.
pub const TTL_SEARCH: Duration = Duration::from_secs(10 * 60);

/// Cache seam. Production uses Redis; tests use an in-memory map.
#[async_trait]
pub trait CatalogCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CatalogError>;
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CatalogError>;
    async fn delete(&self, keys: &[&str]) -> Result<(), CatalogError>;
    /// Deletes every key matching a glob pattern (wildcard sweep).
    async fn delete_matching(&self, pattern: &str) -> Result<(), CatalogError>;
}

pub mod keys {
    use super::*;

    pub const AREAS: &str = "tech:areas";
    pub const NICHES: &str = "tech:niches";
    pub const LANGUAGES: &str = "tech:languages";
    pub const SKILLS: &str = "tech:skills";

    pub const NICHES_BY_AREA_PATTERN: &str = "tech:niches:area:*";
    pub const SKILLS_BY_NICHE_PATTERN: &str = "tech:skills:niche:*";
    pub const SEARCH_PATTERN: &str = "tech:search:*";

    pub fn niches_by_area(area_type: &str) -> String {
        format!("tech:niches:area:{area_type}")
    }

    pub fn skills_by_niche(niche_slug: &str) -> String {
        format!("tech:skills:niche:{niche_slug}")
    }

    pub fn language_search(query: &str, limit: i64) -> String {
        format!("tech:search:languages:{}", search_digest(query, limit))
    }

    pub fn skill_search(query: &str, limit: i64) -> String {
        format!("tech:search:skills:{}", search_digest(query, limit))
    }

    /// SHA-256 of the normalized query (plus the limit, which changes the
    /// result set), truncated to 12 hex chars to bound key size.
    fn search_digest(query: &str, limit: i64) -> String {
        let normalized = normalize_query(query);
        let digest = Sha256::digest(format!("{normalized}:{limit}").as_bytes());
        let mut hex = String::with_capacity(12);
        for byte in digest.iter().take(6) {
            hex.push_str(&format!("{byte:02x}"));
        }
        hex
    }
}
