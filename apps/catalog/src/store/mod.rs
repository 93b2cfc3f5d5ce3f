//! Catalog persistence: idempotent slug-keyed upserts plus the ordered
//! reads the query layer consumes.

pub mod pg;

use async_trait::async_trait;

use crate::errors::CatalogError;
use crate::models::{
    ParsedLanguage, ParsedSkill, ProgrammingLanguageRow, SkillType, TechAreaRow, TechNicheRow,
    TechSkillRow,
};
use crate::taxonomy::{AreaSeed, NicheSeed};

/// What an upsert did. Repeating the same input converges: the second
/// application of identical data reports `Updated` and changes nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// Store seam. The orchestrator and query layer hold `Arc<dyn CatalogStore>`
/// so tests can swap in an in-memory implementation.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn upsert_area(&self, area: &AreaSeed) -> Result<UpsertOutcome, CatalogError>;
    async fn upsert_niche(&self, niche: &NicheSeed) -> Result<UpsertOutcome, CatalogError>;
    async fn upsert_language(&self, language: &ParsedLanguage)
        -> Result<UpsertOutcome, CatalogError>;
    /// Resolves `niche_slug` to a niche id at upsert time; a slug with no
    /// matching niche stores no reference rather than failing.
    async fn upsert_skill(&self, skill: &ParsedSkill) -> Result<UpsertOutcome, CatalogError>;

    /// Areas by their fixed sort order.
    async fn list_areas(&self) -> Result<Vec<TechAreaRow>, CatalogError>;
    /// Niches by area order, then their own order.
    async fn list_niches(&self) -> Result<Vec<TechNicheRow>, CatalogError>;
    async fn list_niches_by_area(&self, area_type: &str)
        -> Result<Vec<TechNicheRow>, CatalogError>;
    /// Active languages, popularity descending.
    async fn list_languages(&self) -> Result<Vec<ProgrammingLanguageRow>, CatalogError>;
    /// Active skills, popularity descending.
    async fn list_skills(&self) -> Result<Vec<TechSkillRow>, CatalogError>;
    async fn list_skills_by_niche(&self, niche_slug: &str)
        -> Result<Vec<TechSkillRow>, CatalogError>;
    async fn list_skills_by_type(
        &self,
        skill_type: SkillType,
        limit: i64,
    ) -> Result<Vec<TechSkillRow>, CatalogError>;
}
