use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Classification category of a skill. Stored as TEXT in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SkillType {
    Framework,
    Library,
    Tool,
    Database,
    Platform,
    Methodology,
    Other,
}

impl SkillType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkillType::Framework => "FRAMEWORK",
            SkillType::Library => "LIBRARY",
            SkillType::Tool => "TOOL",
            SkillType::Database => "DATABASE",
            SkillType::Platform => "PLATFORM",
            SkillType::Methodology => "METHODOLOGY",
            SkillType::Other => "OTHER",
        }
    }

    /// Parses a stored TEXT value; unknown values fall back to `Other`
    /// rather than failing a read.
    pub fn from_str_or_other(s: &str) -> Self {
        match s {
            "FRAMEWORK" => SkillType::Framework,
            "LIBRARY" => SkillType::Library,
            "TOOL" => SkillType::Tool,
            "DATABASE" => SkillType::Database,
            "PLATFORM" => SkillType::Platform,
            "METHODOLOGY" => SkillType::Methodology,
            _ => SkillType::Other,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Database rows
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TechAreaRow {
    pub id: Uuid,
    pub area_type: String,
    pub name_en: String,
    pub name_pt: String,
    pub icon: String,
    pub color: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TechNicheRow {
    pub id: Uuid,
    pub slug: String,
    pub area_type: String,
    pub name_en: String,
    pub name_pt: String,
    pub icon: String,
    pub sort_order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProgrammingLanguageRow {
    pub id: Uuid,
    pub slug: String,
    pub name_en: String,
    pub name_local: String,
    pub color: Option<String>,
    pub website: Option<String>,
    pub typing: Option<String>,
    pub aliases: Vec<String>,
    pub file_extensions: Vec<String>,
    pub paradigms: Vec<String>,
    pub popularity: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TechSkillRow {
    pub id: Uuid,
    pub slug: String,
    pub name_en: String,
    pub name_local: String,
    pub skill_type: String,
    pub niche_id: Option<Uuid>,
    pub color: Option<String>,
    pub aliases: Vec<String>,
    pub keywords: Vec<String>,
    pub popularity: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ────────────────────────────────────────────────────────────────────────────
// Parser outputs (never persisted as-is; the store upserts from these)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedLanguage {
    pub slug: String,
    pub name_en: String,
    pub name_local: String,
    pub color: Option<String>,
    pub website: Option<String>,
    pub typing: Option<String>,
    pub aliases: Vec<String>,
    pub file_extensions: Vec<String>,
    pub paradigms: Vec<String>,
    pub popularity: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSkill {
    pub slug: String,
    pub name_en: String,
    pub name_local: String,
    pub skill_type: SkillType,
    /// Resolved to a `niche_id` by the store at upsert time; a slug that no
    /// longer matches a niche is stored as no reference, not an error.
    pub niche_slug: Option<String>,
    pub color: Option<String>,
    pub aliases: Vec<String>,
    pub keywords: Vec<String>,
    pub popularity: i32,
}

// ────────────────────────────────────────────────────────────────────────────
// Public read shapes (what the query layer caches and returns)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaView {
    pub area_type: String,
    pub name_en: String,
    pub name_pt: String,
    pub icon: String,
    pub color: String,
}

impl From<TechAreaRow> for AreaView {
    fn from(row: TechAreaRow) -> Self {
        AreaView {
            area_type: row.area_type,
            name_en: row.name_en,
            name_pt: row.name_pt,
            icon: row.icon,
            color: row.color,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NicheView {
    pub slug: String,
    pub area_type: String,
    pub name_en: String,
    pub name_pt: String,
    pub icon: String,
}

impl From<TechNicheRow> for NicheView {
    fn from(row: TechNicheRow) -> Self {
        NicheView {
            slug: row.slug,
            area_type: row.area_type,
            name_en: row.name_en,
            name_pt: row.name_pt,
            icon: row.icon,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageView {
    pub slug: String,
    pub name_en: String,
    pub name_local: String,
    pub color: Option<String>,
    pub website: Option<String>,
    pub typing: Option<String>,
    pub aliases: Vec<String>,
    pub file_extensions: Vec<String>,
    pub paradigms: Vec<String>,
    pub popularity: i32,
}

impl From<ProgrammingLanguageRow> for LanguageView {
    fn from(row: ProgrammingLanguageRow) -> Self {
        LanguageView {
            slug: row.slug,
            name_en: row.name_en,
            name_local: row.name_local,
            color: row.color,
            website: row.website,
            typing: row.typing,
            aliases: row.aliases,
            file_extensions: row.file_extensions,
            paradigms: row.paradigms,
            popularity: row.popularity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillView {
    pub slug: String,
    pub name_en: String,
    pub name_local: String,
    pub skill_type: SkillType,
    pub color: Option<String>,
    pub aliases: Vec<String>,
    pub keywords: Vec<String>,
    pub popularity: i32,
}

impl From<TechSkillRow> for SkillView {
    fn from(row: TechSkillRow) -> Self {
        SkillView {
            slug: row.slug,
            name_en: row.name_en,
            name_local: row.name_local,
            skill_type: SkillType::from_str_or_other(&row.skill_type),
            color: row.color,
            aliases: row.aliases,
            keywords: row.keywords,
            popularity: row.popularity,
        }
    }
}
