//! Sync orchestration: one linear pass over the four entity families,
//! then cache invalidation.
//!
//! No stage failure is fatal to the run. Each stage catches its own error,
//! records the message, and hands control to the next stage; the caller
//! always receives a `SyncResult` and inspects `errors` to tell a full
//! sync from a partial one. There is no overlap guard — two concurrent
//! runs can interleave upserts, so callers serialize invocations.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, warn};

use crate::cache::{keys, CatalogCache};
use crate::errors::CatalogError;
use crate::sources::linguist::LinguistParser;
use crate::sources::tags::TagParser;
use crate::store::{CatalogStore, UpsertOutcome};
use crate::taxonomy;

/// Outcome summary returned to the trigger. Ephemeral, never persisted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncResult {
    pub languages_inserted: u32,
    pub languages_updated: u32,
    pub skills_inserted: u32,
    pub skills_updated: u32,
    pub areas_created: u32,
    pub niches_created: u32,
    pub errors: Vec<String>,
}

impl SyncResult {
    pub fn is_fully_successful(&self) -> bool {
        self.errors.is_empty()
    }
}

pub struct SyncOrchestrator {
    linguist: LinguistParser,
    tags: TagParser,
    store: Arc<dyn CatalogStore>,
    cache: Arc<dyn CatalogCache>,
}

impl SyncOrchestrator {
    pub fn new(
        linguist: LinguistParser,
        tags: TagParser,
        store: Arc<dyn CatalogStore>,
        cache: Arc<dyn CatalogCache>,
    ) -> Self {
        Self { linguist, tags, store, cache }
    }

    /// Runs one full sync: areas → niches → languages → skills → cache
    /// invalidation. Never returns an error; partial completion is an
    /// expected outcome and shows up in `SyncResult.errors`.
    pub async fn run(&self) -> SyncResult {
        let mut result = SyncResult::default();
        info!("Catalog sync starting");

        if let Err(e) = self.sync_areas(&mut result).await {
            warn!("Areas stage failed: {e}");
            result.errors.push(format!("areas: {e}"));
        }
        if let Err(e) = self.sync_niches(&mut result).await {
            warn!("Niches stage failed: {e}");
            result.errors.push(format!("niches: {e}"));
        }
        if let Err(e) = self.sync_languages(&mut result).await {
            warn!("Languages stage failed: {e}");
            result.errors.push(format!("languages: {e}"));
        }
        if let Err(e) = self.sync_skills(&mut result).await {
            warn!("Skills stage failed: {e}");
            result.errors.push(format!("skills: {e}"));
        }
        // Runs after every data stage, including failed ones: a partial
        // write must still evict whatever the cache held before it.
        if let Err(e) = self.invalidate_cache().await {
            warn!("Cache invalidation failed: {e}");
            result.errors.push(format!("cache: {e}"));
        }

        info!(
            "Catalog sync finished: {}+{} languages, {}+{} skills, {} areas, {} niches, {} errors",
            result.languages_inserted,
            result.languages_updated,
            result.skills_inserted,
            result.skills_updated,
            result.areas_created,
            result.niches_created,
            result.errors.len()
        );
        result
    }

    async fn sync_areas(&self, result: &mut SyncResult) -> Result<(), CatalogError> {
        for area in taxonomy::AREAS {
            if self.store.upsert_area(area).await? == UpsertOutcome::Inserted {
                result.areas_created += 1;
            }
        }
        Ok(())
    }

    async fn sync_niches(&self, result: &mut SyncResult) -> Result<(), CatalogError> {
        for niche in taxonomy::NICHES {
            if self.store.upsert_niche(niche).await? == UpsertOutcome::Inserted {
                result.niches_created += 1;
            }
        }
        Ok(())
    }

    async fn sync_languages(&self, result: &mut SyncResult) -> Result<(), CatalogError> {
        let languages = self.linguist.fetch().await?;
        for language in &languages {
            match self.store.upsert_language(language).await? {
                UpsertOutcome::Inserted => result.languages_inserted += 1,
                UpsertOutcome::Updated => result.languages_updated += 1,
            }
        }
        Ok(())
    }

    async fn sync_skills(&self, result: &mut SyncResult) -> Result<(), CatalogError> {
        let skills = self.tags.fetch().await?;
        for skill in &skills {
            match self.store.upsert_skill(skill).await? {
                UpsertOutcome::Inserted => result.skills_inserted += 1,
                UpsertOutcome::Updated => result.skills_updated += 1,
            }
        }
        Ok(())
    }

    async fn invalidate_cache(&self) -> Result<(), CatalogError> {
        self.cache
            .delete(&[keys::AREAS, keys::NICHES, keys::LANGUAGES, keys::SKILLS])
            .await?;
        self.cache
            .delete_matching(keys::NICHES_BY_AREA_PATTERN)
            .await?;
        self.cache
            .delete_matching(keys::SKILLS_BY_NICHE_PATTERN)
            .await?;
        self.cache.delete_matching(keys::SEARCH_PATTERN).await?;
        Ok(())
    }
}
