//! PostgreSQL catalog store.
//!
//! Upserts are single-statement `INSERT … ON CONFLICT DO UPDATE` keyed on
//! the natural slug, with `RETURNING (xmax = 0)` distinguishing a fresh
//! insert (xmax is zero only for rows no transaction has touched) from an
//! overwrite. Non-key fields are fully overwritten; `is_active` is not —
//! deactivation is an operator action a sync must not silently undo.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::CatalogError;
use crate::models::{
    ParsedLanguage, ParsedSkill, ProgrammingLanguageRow, SkillType, TechAreaRow, TechNicheRow,
    TechSkillRow,
};
use crate::store::{CatalogStore, UpsertOutcome};
use crate::taxonomy::{AreaSeed, NicheSeed};

pub struct PgCatalogStore {
    pool: PgPool,
}

impl PgCatalogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn outcome(inserted: bool) -> UpsertOutcome {
    if inserted {
        UpsertOutcome::Inserted
    } else {
        UpsertOutcome::Updated
    }
}

#[async_trait]
impl CatalogStore for PgCatalogStore {
    async fn upsert_area(&self, area: &AreaSeed) -> Result<UpsertOutcome, CatalogError> {
        let inserted: bool = sqlx::query_scalar(
            r#"
            INSERT INTO tech_areas (id, area_type, name_en, name_pt, icon, color, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (area_type) DO UPDATE SET
                name_en = EXCLUDED.name_en,
                name_pt = EXCLUDED.name_pt,
                icon = EXCLUDED.icon,
                color = EXCLUDED.color,
                sort_order = EXCLUDED.sort_order,
                updated_at = now()
            RETURNING (xmax = 0)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(area.area_type)
        .bind(area.name_en)
        .bind(area.name_pt)
        .bind(area.icon)
        .bind(area.color)
        .bind(area.sort_order)
        .fetch_one(&self.pool)
        .await?;

        Ok(outcome(inserted))
    }

    async fn upsert_niche(&self, niche: &NicheSeed) -> Result<UpsertOutcome, CatalogError> {
        let inserted: bool = sqlx::query_scalar(
            r#"
            INSERT INTO tech_niches (id, slug, area_type, name_en, name_pt, icon, sort_order)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (slug) DO UPDATE SET
                area_type = EXCLUDED.area_type,
                name_en = EXCLUDED.name_en,
                name_pt = EXCLUDED.name_pt,
                icon = EXCLUDED.icon,
                sort_order = EXCLUDED.sort_order,
                updated_at = now()
            RETURNING (xmax = 0)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(niche.slug)
        .bind(niche.area_type)
        .bind(niche.name_en)
        .bind(niche.name_pt)
        .bind(niche.icon)
        .bind(niche.sort_order)
        .fetch_one(&self.pool)
        .await?;

        Ok(outcome(inserted))
    }

    async fn upsert_language(
        &self,
        language: &ParsedLanguage,
    ) -> Result<UpsertOutcome, CatalogError> {
        let inserted: bool = sqlx::query_scalar(
            r#"
            INSERT INTO programming_languages
                (id, slug, name_en, name_local, color, website, typing,
                 aliases, file_extensions, paradigms, popularity)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (slug) DO UPDATE SET
                name_en = EXCLUDED.name_en,
                name_local = EXCLUDED.name_local,
                color = EXCLUDED.color,
                website = EXCLUDED.website,
                typing = EXCLUDED.typing,
                aliases = EXCLUDED.aliases,
                file_extensions = EXCLUDED.file_extensions,
                paradigms = EXCLUDED.paradigms,
                popularity = EXCLUDED.popularity,
                updated_at = now()
            RETURNING (xmax = 0)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&language.slug)
        .bind(&language.name_en)
        .bind(&language.name_local)
        .bind(&language.color)
        .bind(&language.website)
        .bind(&language.typing)
        .bind(&language.aliases)
        .bind(&language.file_extensions)
        .bind(&language.paradigms)
        .bind(language.popularity)
        .fetch_one(&self.pool)
        .await?;

        Ok(outcome(inserted))
    }

    async fn upsert_skill(&self, skill: &ParsedSkill) -> Result<UpsertOutcome, CatalogError> {
        let niche_id: Option<Uuid> = match &skill.niche_slug {
            Some(slug) => {
                sqlx::query_scalar("SELECT id FROM tech_niches WHERE slug = $1")
                    .bind(slug)
                    .fetch_optional(&self.pool)
                    .await?
            }
            None => None,
        };

        let inserted: bool = sqlx::query_scalar(
            r#"
            INSERT INTO tech_skills
                (id, slug, name_en, name_local, skill_type, niche_id, color,
                 aliases, keywords, popularity)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (slug) DO UPDATE SET
                name_en = EXCLUDED.name_en,
                name_local = EXCLUDED.name_local,
                skill_type = EXCLUDED.skill_type,
                niche_id = EXCLUDED.niche_id,
                color = EXCLUDED.color,
                aliases = EXCLUDED.aliases,
                keywords = EXCLUDED.keywords,
                popularity = EXCLUDED.popularity,
                updated_at = now()
            RETURNING (xmax = 0)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&skill.slug)
        .bind(&skill.name_en)
        .bind(&skill.name_local)
        .bind(skill.skill_type.as_str())
        .bind(niche_id)
        .bind(&skill.color)
        .bind(&skill.aliases)
        .bind(&skill.keywords)
        .bind(skill.popularity)
        .fetch_one(&self.pool)
        .await?;

        Ok(outcome(inserted))
    }

    async fn list_areas(&self) -> Result<Vec<TechAreaRow>, CatalogError> {
        let rows = sqlx::query_as("SELECT * FROM tech_areas ORDER BY sort_order")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn list_niches(&self) -> Result<Vec<TechNicheRow>, CatalogError> {
        let rows = sqlx::query_as(
            r#"
            SELECT n.* FROM tech_niches n
            JOIN tech_areas a ON a.area_type = n.area_type
            ORDER BY a.sort_order, n.sort_order
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_niches_by_area(
        &self,
        area_type: &str,
    ) -> Result<Vec<TechNicheRow>, CatalogError> {
        let rows = sqlx::query_as(
            "SELECT * FROM tech_niches WHERE area_type = $1 ORDER BY sort_order",
        )
        .bind(area_type)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_languages(&self) -> Result<Vec<ProgrammingLanguageRow>, CatalogError> {
        let rows = sqlx::query_as(
            r#"
            SELECT * FROM programming_languages
            WHERE is_active
            ORDER BY popularity DESC, slug
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_skills(&self) -> Result<Vec<TechSkillRow>, CatalogError> {
        let rows = sqlx::query_as(
            r#"
            SELECT * FROM tech_skills
            WHERE is_active
            ORDER BY popularity DESC, slug
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_skills_by_niche(
        &self,
        niche_slug: &str,
    ) -> Result<Vec<TechSkillRow>, CatalogError> {
        let rows = sqlx::query_as(
            r#"
            SELECT s.* FROM tech_skills s
            JOIN tech_niches n ON n.id = s.niche_id
            WHERE n.slug = $1 AND s.is_active
            ORDER BY s.popularity DESC, s.slug
            "#,
        )
        .bind(niche_slug)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn list_skills_by_type(
        &self,
        skill_type: SkillType,
        limit: i64,
    ) -> Result<Vec<TechSkillRow>, CatalogError> {
        let rows = sqlx::query_as(
            r#"
            SELECT * FROM tech_skills
            WHERE skill_type = $1 AND is_active
            ORDER BY popularity DESC, slug
            LIMIT $2
            "#,
        )
        .bind(skill_type.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
