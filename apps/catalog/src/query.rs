#![allow(dead_code)]

//! Read side of the catalog: cache-aside listings and free-text search.
//!
//! Every query shape has its own cache key and TTL. On a miss the store is
//! read in its natural order (popularity descending, or area order for
//! niches), rows are mapped to the public view shapes, and the cache is
//! populated before returning. Search matching runs in-process over the
//! active rows — the catalog is a few thousand rows, so fetching the
//! listing (itself cached) and filtering here keeps the matching logic a
//! pure, testable function instead of SQL.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::cache::{keys, CatalogCache, TTL_CATALOG, TTL_SEARCH, TTL_TAXONOMY};
use crate::errors::CatalogError;
use crate::models::{AreaView, LanguageView, NicheView, SkillType, SkillView};
use crate::slug::normalize_query;
use crate::store::CatalogStore;

pub const DEFAULT_SEARCH_LIMIT: i64 = 20;
pub const DEFAULT_TYPE_LIMIT: i64 = 50;

/// Combined search splits the caller's limit evenly across both families.
#[derive(Debug, Clone, Serialize)]
pub struct CombinedSearch {
    pub languages: Vec<LanguageView>,
    pub skills: Vec<SkillView>,
}

pub struct CatalogQuery {
    store: Arc<dyn CatalogStore>,
    cache: Arc<dyn CatalogCache>,
}

impl CatalogQuery {
    pub fn new(store: Arc<dyn CatalogStore>, cache: Arc<dyn CatalogCache>) -> Self {
        Self { store, cache }
    }

    pub async fn list_areas(&self) -> Result<Vec<AreaView>, CatalogError> {
        if let Some(hit) = self.cache_read(keys::AREAS).await? {
            return Ok(hit);
        }
        let views: Vec<AreaView> = self
            .store
            .list_areas()
            .await?
            .into_iter()
            .map(AreaView::from)
            .collect();
        self.cache_write(keys::AREAS, &views, TTL_TAXONOMY).await?;
        Ok(views)
    }

    pub async fn list_niches(&self) -> Result<Vec<NicheView>, CatalogError> {
        if let Some(hit) = self.cache_read(keys::NICHES).await? {
            return Ok(hit);
        }
        let views: Vec<NicheView> = self
            .store
            .list_niches()
            .await?
            .into_iter()
            .map(NicheView::from)
            .collect();
        self.cache_write(keys::NICHES, &views, TTL_TAXONOMY).await?;
        Ok(views)
    }

    pub async fn list_niches_by_area(
        &self,
        area_type: &str,
    ) -> Result<Vec<NicheView>, CatalogError> {
        let key = keys::niches_by_area(area_type);
        if let Some(hit) = self.cache_read(&key).await? {
            return Ok(hit);
        }
        let views: Vec<NicheView> = self
            .store
            .list_niches_by_area(area_type)
            .await?
            .into_iter()
            .map(NicheView::from)
            .collect();
        self.cache_write(&key, &views, TTL_TAXONOMY).await?;
        Ok(views)
    }

    pub async fn list_languages(&self) -> Result<Vec<LanguageView>, CatalogError> {
        if let Some(hit) = self.cache_read(keys::LANGUAGES).await? {
            return Ok(hit);
        }
        let views: Vec<LanguageView> = self
            .store
            .list_languages()
            .await?
            .into_iter()
            .map(LanguageView::from)
            .collect();
        self.cache_write(keys::LANGUAGES, &views, TTL_CATALOG).await?;
        Ok(views)
    }

    pub async fn list_skills(&self) -> Result<Vec<SkillView>, CatalogError> {
        if let Some(hit) = self.cache_read(keys::SKILLS).await? {
            return Ok(hit);
        }
        let views: Vec<SkillView> = self
            .store
            .list_skills()
            .await?
            .into_iter()
            .map(SkillView::from)
            .collect();
        self.cache_write(keys::SKILLS, &views, TTL_CATALOG).await?;
        Ok(views)
    }

    pub async fn list_skills_by_niche(
        &self,
        niche_slug: &str,
    ) -> Result<Vec<SkillView>, CatalogError> {
        let key = keys::skills_by_niche(niche_slug);
        if let Some(hit) = self.cache_read(&key).await? {
            return Ok(hit);
        }
        let views: Vec<SkillView> = self
            .store
            .list_skills_by_niche(niche_slug)
            .await?
            .into_iter()
            .map(SkillView::from)
            .collect();
        self.cache_write(&key, &views, TTL_CATALOG).await?;
        Ok(views)
    }

    /// Intentionally uncached: the type dimension is granular enough that
    /// caching it buys little. Tunable, not a hard rule.
    pub async fn list_skills_by_type(
        &self,
        skill_type: SkillType,
        limit: Option<i64>,
    ) -> Result<Vec<SkillView>, CatalogError> {
        let limit = limit.unwrap_or(DEFAULT_TYPE_LIMIT);
        let views = self
            .store
            .list_skills_by_type(skill_type, limit)
            .await?
            .into_iter()
            .map(SkillView::from)
            .collect();
        Ok(views)
    }

    pub async fn search_languages(
        &self,
        query: &str,
        limit: Option<i64>,
    ) -> Result<Vec<LanguageView>, CatalogError> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            return Ok(Vec::new());
        }

        let key = keys::language_search(&normalized, limit);
        if let Some(hit) = self.cache_read(&key).await? {
            return Ok(hit);
        }

        // Listing order is popularity-descending, so matches keep rank.
        let mut matches: Vec<LanguageView> = self
            .list_languages()
            .await?
            .into_iter()
            .filter(|view| language_matches(view, &normalized))
            .collect();
        matches.truncate(limit.max(0) as usize);

        self.cache_write(&key, &matches, TTL_SEARCH).await?;
        Ok(matches)
    }

    pub async fn search_skills(
        &self,
        query: &str,
        limit: Option<i64>,
    ) -> Result<Vec<SkillView>, CatalogError> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        let normalized = normalize_query(query);
        if normalized.is_empty() {
            return Ok(Vec::new());
        }

        let key = keys::skill_search(&normalized, limit);
        if let Some(hit) = self.cache_read(&key).await? {
            return Ok(hit);
        }

        let mut matches: Vec<SkillView> = self
            .list_skills()
            .await?
            .into_iter()
            .filter(|view| skill_matches(view, &normalized))
            .collect();
        matches.truncate(limit.max(0) as usize);

        self.cache_write(&key, &matches, TTL_SEARCH).await?;
        Ok(matches)
    }

    pub async fn search_all(
        &self,
        query: &str,
        limit: Option<i64>,
    ) -> Result<CombinedSearch, CatalogError> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        let per_family = (limit / 2).max(1);
        Ok(CombinedSearch {
            languages: self.search_languages(query, Some(per_family)).await?,
            skills: self.search_skills(query, Some(per_family)).await?,
        })
    }

    async fn cache_read<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Result<Option<Vec<T>>, CatalogError> {
        match self.cache.get(key).await? {
            Some(payload) => Ok(Some(serde_json::from_str(&payload)?)),
            None => Ok(None),
        }
    }

    async fn cache_write<T: Serialize>(
        &self,
        key: &str,
        rows: &[T],
        ttl: Duration,
    ) -> Result<(), CatalogError> {
        self.cache
            .set(key, &serde_json::to_string(rows)?, ttl)
            .await
    }
}

/// Accent-insensitive substring match on both display names, slug
/// substring (spaces become hyphens to match slug form), and exact
/// membership in the alias set.
fn language_matches(view: &LanguageView, normalized: &str) -> bool {
    let slug_form = normalized.replace(' ', "-");
    normalize_query(&view.name_en).contains(normalized)
        || normalize_query(&view.name_local).contains(normalized)
        || view.slug.contains(&slug_form)
        || view.aliases.iter().any(|a| normalize_query(a) == normalized)
}

/// Skills additionally match on keyword membership.
fn skill_matches(view: &SkillView, normalized: &str) -> bool {
    let slug_form = normalized.replace(' ', "-");
    normalize_query(&view.name_en).contains(normalized)
        || normalize_query(&view.name_local).contains(normalized)
        || view.slug.contains(&slug_form)
        || view.aliases.iter().any(|a| normalize_query(a) == normalized)
        || view.keywords.iter().any(|k| normalize_query(k) == normalized)
}
