//! In-memory doubles shared by the parser, sync and query tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::cache::CatalogCache;
use crate::errors::CatalogError;
use crate::models::{
    ParsedLanguage, ParsedSkill, ProgrammingLanguageRow, SkillType, TechAreaRow, TechNicheRow,
    TechSkillRow,
};
use crate::sources::linguist::LanguageSource;
use crate::sources::tags::{RawTag, TagPage, TagSource};
use crate::store::{CatalogStore, UpsertOutcome};
use crate::taxonomy::{AreaSeed, NicheSeed};

// ────────────────────────────────────────────────────────────────────────────
// Source doubles
// ────────────────────────────────────────────────────────────────────────────

pub struct StaticLanguageSource {
    yaml: String,
}

impl StaticLanguageSource {
    pub fn new(yaml: &str) -> Self {
        Self { yaml: yaml.to_string() }
    }
}

#[async_trait]
impl LanguageSource for StaticLanguageSource {
    async fn fetch_raw(&self) -> Result<String, CatalogError> {
        Ok(self.yaml.clone())
    }
}

pub struct FailingLanguageSource;

#[async_trait]
impl LanguageSource for FailingLanguageSource {
    async fn fetch_raw(&self) -> Result<String, CatalogError> {
        Err(CatalogError::Source {
            status: 500,
            url: "http://test/languages.yml".to_string(),
        })
    }
}

pub enum TagPageScript {
    Ok(TagPage),
    Fail,
}

/// Replays a scripted page sequence and counts requests. Pages past the
/// end of the script replay the last entry, which keeps "always has_more"
/// ceiling tests one-liners.
pub struct ScriptedTagSource {
    pages: Vec<TagPageScript>,
    calls: AtomicU32,
}

impl ScriptedTagSource {
    pub fn new(pages: Vec<TagPageScript>) -> Self {
        Self { pages, calls: AtomicU32::new(0) }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TagSource for ScriptedTagSource {
    async fn fetch_page(&self, page: u32) -> Result<TagPage, CatalogError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let idx = (page as usize - 1).min(self.pages.len() - 1);
        match &self.pages[idx] {
            TagPageScript::Ok(p) => Ok(p.clone()),
            TagPageScript::Fail => Err(CatalogError::Source {
                status: 502,
                url: format!("http://test/tags?page={page}"),
            }),
        }
    }
}

pub fn tag(name: &str, count: i64) -> RawTag {
    RawTag {
        name: name.to_string(),
        count,
        is_moderator_only: false,
        is_required: false,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Store double
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
struct MemoryInner {
    areas: HashMap<String, TechAreaRow>,
    niches: HashMap<String, TechNicheRow>,
    languages: HashMap<String, ProgrammingLanguageRow>,
    skills: HashMap<String, TechSkillRow>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<MemoryInner>,
    language_list_calls: AtomicU32,
    skill_list_calls: AtomicU32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language_list_calls(&self) -> u32 {
        self.language_list_calls.load(Ordering::SeqCst)
    }

    pub fn skill_list_calls(&self) -> u32 {
        self.skill_list_calls.load(Ordering::SeqCst)
    }

    pub fn language_count(&self) -> usize {
        self.inner.lock().unwrap().languages.len()
    }

    pub fn skill_count(&self) -> usize {
        self.inner.lock().unwrap().skills.len()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn upsert_area(&self, area: &AreaSeed) -> Result<UpsertOutcome, CatalogError> {
        let mut inner = self.inner.lock().unwrap();
        let now = Utc::now();
        match inner.areas.get_mut(area.area_type) {
            Some(existing) => {
                existing.name_en = area.name_en.to_string();
                existing.name_pt = area.name_pt.to_string();
                existing.icon = area.icon.to_string();
                existing.color = area.color.to_string();
                existing.sort_order = area.sort_order;
                existing.updated_at = now;
                Ok(UpsertOutcome::Updated)
            }
            None => {
                inner.areas.insert(
                    area.area_type.to_string(),
                    TechAreaRow {
                        id: Uuid::new_v4(),
                        area_type: area.area_type.to_string(),
                        name_en: area.name_en.to_string(),
                        name_pt: area.name_pt.to_string(),
                        icon: area.icon.to_string(),
                        color: area.color.to_string(),
                        sort_order: area.sort_order,
                        created_at: now,
                        updated_at: now,
                    },
                );
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    async fn upsert_niche(&self, niche: &NicheSeed) -> Result<UpsertOutcome, CatalogError> {
        let mut inner = self.inner.lock().unwrap();
        let now = Utc::now();
        match inner.niches.get_mut(niche.slug) {
            Some(existing) => {
                existing.area_type = niche.area_type.to_string();
                existing.name_en = niche.name_en.to_string();
                existing.name_pt = niche.name_pt.to_string();
                existing.icon = niche.icon.to_string();
                existing.sort_order = niche.sort_order;
                existing.updated_at = now;
                Ok(UpsertOutcome::Updated)
            }
            None => {
                inner.niches.insert(
                    niche.slug.to_string(),
                    TechNicheRow {
                        id: Uuid::new_v4(),
                        slug: niche.slug.to_string(),
                        area_type: niche.area_type.to_string(),
                        name_en: niche.name_en.to_string(),
                        name_pt: niche.name_pt.to_string(),
                        icon: niche.icon.to_string(),
                        sort_order: niche.sort_order,
                        created_at: now,
                        updated_at: now,
                    },
                );
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    async fn upsert_language(
        &self,
        language: &ParsedLanguage,
    ) -> Result<UpsertOutcome, CatalogError> {
        let mut inner = self.inner.lock().unwrap();
        let now = Utc::now();
        match inner.languages.get_mut(&language.slug) {
            Some(existing) => {
                existing.name_en = language.name_en.clone();
                existing.name_local = language.name_local.clone();
                existing.color = language.color.clone();
                existing.website = language.website.clone();
                existing.typing = language.typing.clone();
                existing.aliases = language.aliases.clone();
                existing.file_extensions = language.file_extensions.clone();
                existing.paradigms = language.paradigms.clone();
                existing.popularity = language.popularity;
                existing.updated_at = now;
                Ok(UpsertOutcome::Updated)
            }
            None => {
                inner.languages.insert(
                    language.slug.clone(),
                    ProgrammingLanguageRow {
                        id: Uuid::new_v4(),
                        slug: language.slug.clone(),
                        name_en: language.name_en.clone(),
                        name_local: language.name_local.clone(),
                        color: language.color.clone(),
                        website: language.website.clone(),
                        typing: language.typing.clone(),
                        aliases: language.aliases.clone(),
                        file_extensions: language.file_extensions.clone(),
                        paradigms: language.paradigms.clone(),
                        popularity: language.popularity,
                        is_active: true,
                        created_at: now,
                        updated_at: now,
                    },
                );
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    async fn upsert_skill(&self, skill: &ParsedSkill) -> Result<UpsertOutcome, CatalogError> {
        let mut inner = self.inner.lock().unwrap();
        let now = Utc::now();
        let niche_id = skill
            .niche_slug
            .as_ref()
            .and_then(|slug| inner.niches.get(slug))
            .map(|n| n.id);
        match inner.skills.get_mut(&skill.slug) {
            Some(existing) => {
                existing.name_en = skill.name_en.clone();
                existing.name_local = skill.name_local.clone();
                existing.skill_type = skill.skill_type.as_str().to_string();
                existing.niche_id = niche_id;
                existing.color = skill.color.clone();
                existing.aliases = skill.aliases.clone();
                existing.keywords = skill.keywords.clone();
                existing.popularity = skill.popularity;
                existing.updated_at = now;
                Ok(UpsertOutcome::Updated)
            }
            None => {
                inner.skills.insert(
                    skill.slug.clone(),
                    TechSkillRow {
                        id: Uuid::new_v4(),
                        slug: skill.slug.clone(),
                        name_en: skill.name_en.clone(),
                        name_local: skill.name_local.clone(),
                        skill_type: skill.skill_type.as_str().to_string(),
                        niche_id,
                        color: skill.color.clone(),
                        aliases: skill.aliases.clone(),
                        keywords: skill.keywords.clone(),
                        popularity: skill.popularity,
                        is_active: true,
                        created_at: now,
                        updated_at: now,
                    },
                );
                Ok(UpsertOutcome::Inserted)
            }
        }
    }

    async fn list_areas(&self) -> Result<Vec<TechAreaRow>, CatalogError> {
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<_> = inner.areas.values().cloned().collect();
        rows.sort_by_key(|r| r.sort_order);
        Ok(rows)
    }

    async fn list_niches(&self) -> Result<Vec<TechNicheRow>, CatalogError> {
        let inner = self.inner.lock().unwrap();
        let area_order: HashMap<&str, i32> = inner
            .areas
            .values()
            .map(|a| (a.area_type.as_str(), a.sort_order))
            .collect();
        let mut rows: Vec<_> = inner.niches.values().cloned().collect();
        rows.sort_by_key(|r| {
            (
                area_order.get(r.area_type.as_str()).copied().unwrap_or(0),
                r.sort_order,
            )
        });
        Ok(rows)
    }

    async fn list_niches_by_area(
        &self,
        area_type: &str,
    ) -> Result<Vec<TechNicheRow>, CatalogError> {
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<_> = inner
            .niches
            .values()
            .filter(|n| n.area_type == area_type)
            .cloned()
            .collect();
        rows.sort_by_key(|r| r.sort_order);
        Ok(rows)
    }

    async fn list_languages(&self) -> Result<Vec<ProgrammingLanguageRow>, CatalogError> {
        self.language_list_calls.fetch_add(1, Ordering::SeqCst);
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<_> = inner
            .languages
            .values()
            .filter(|l| l.is_active)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.popularity.cmp(&a.popularity).then(a.slug.cmp(&b.slug)));
        Ok(rows)
    }

    async fn list_skills(&self) -> Result<Vec<TechSkillRow>, CatalogError> {
        self.skill_list_calls.fetch_add(1, Ordering::SeqCst);
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<_> = inner
            .skills
            .values()
            .filter(|s| s.is_active)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.popularity.cmp(&a.popularity).then(a.slug.cmp(&b.slug)));
        Ok(rows)
    }

    async fn list_skills_by_niche(
        &self,
        niche_slug: &str,
    ) -> Result<Vec<TechSkillRow>, CatalogError> {
        let inner = self.inner.lock().unwrap();
        let niche_id = inner.niches.get(niche_slug).map(|n| n.id);
        let mut rows: Vec<_> = inner
            .skills
            .values()
            .filter(|s| s.is_active && s.niche_id.is_some() && s.niche_id == niche_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.popularity.cmp(&a.popularity).then(a.slug.cmp(&b.slug)));
        Ok(rows)
    }

    async fn list_skills_by_type(
        &self,
        skill_type: SkillType,
        limit: i64,
    ) -> Result<Vec<TechSkillRow>, CatalogError> {
        let inner = self.inner.lock().unwrap();
        let mut rows: Vec<_> = inner
            .skills
            .values()
            .filter(|s| s.is_active && s.skill_type == skill_type.as_str())
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.popularity.cmp(&a.popularity).then(a.slug.cmp(&b.slug)));
        rows.truncate(limit as usize);
        Ok(rows)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cache double
// ────────────────────────────────────────────────────────────────────────────

#[derive(Default)]
pub struct MemoryCache {
    inner: Mutex<HashMap<String, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.inner
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().unwrap().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }
}

#[async_trait]
impl CatalogCache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CatalogError> {
        Ok(self.inner.lock().unwrap().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str, _ttl: Duration) -> Result<(), CatalogError> {
        self.inner
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, keys: &[&str]) -> Result<(), CatalogError> {
        let mut inner = self.inner.lock().unwrap();
        for key in keys {
            inner.remove(*key);
        }
        Ok(())
    }

    async fn delete_matching(&self, pattern: &str) -> Result<(), CatalogError> {
        let prefix = pattern.trim_end_matches('*');
        self.inner
            .lock()
            .unwrap()
            .retain(|key, _| !key.starts_with(prefix));
        Ok(())
    }
}
