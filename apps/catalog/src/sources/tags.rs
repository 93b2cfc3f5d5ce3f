//! Skill ingestion from the tag-popularity API.
//!
//! Pages arrive in descending-popularity order, so the first occurrence of
//! a slug is always the most authoritative and later duplicates are
//! dropped. Pagination failures after the first page are not fatal: the
//! parser keeps what it already collected and ends the stage normally.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, warn};

use crate::classify::Classifier;
use crate::errors::CatalogError;
use crate::models::ParsedSkill;
use crate::slug::{format_tag_name, slugify};

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);
const PAGE_SIZE: u32 = 100;
/// Hard ceiling on pagination regardless of what the API reports.
const MAX_PAGES: u32 = 10;
/// Pause between page requests to respect the API's rate limits.
const PAGE_DELAY: Duration = Duration::from_millis(250);

/// Tags that pass the moderation flags but are not skills: language tags
/// (the languages family is owned by the linguist stage) and generic
/// programming concepts.
const EXCLUDED_TAGS: &[&str] = &[
    // languages — owned by the linguist stage
    "javascript", "python", "java", "c#", "c++", "c", "php", "typescript", "ruby", "swift",
    "kotlin", "go", "rust", "scala", "perl", "r", "dart", "lua", "haskell", "matlab",
    "powershell", "bash", "shell", "objective-c", "vba", "html", "css", "sql",
    // generic concepts, not skills
    "arrays", "string", "list", "dictionary", "function", "loops", "class", "object",
    "regex", "json", "xml", "csv", "date", "datetime", "performance", "algorithm",
    "sorting", "validation", "forms", "image", "file", "multithreading", "debugging",
    "error-handling", "user-interface", "database", "api", "web", "windows", "macos",
];

#[derive(Debug, Clone, Deserialize)]
pub struct TagPage {
    pub items: Vec<RawTag>,
    pub has_more: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawTag {
    pub name: String,
    pub count: i64,
    #[serde(default)]
    pub is_moderator_only: bool,
    #[serde(default)]
    pub is_required: bool,
}

/// Fetch edge for one page of tags, swappable in tests.
#[async_trait]
pub trait TagSource: Send + Sync {
    async fn fetch_page(&self, page: u32) -> Result<TagPage, CatalogError>;
}

/// Production source: GETs `/tags` from a Stack Exchange compatible API.
pub struct StackExchangeTagSource {
    client: reqwest::Client,
    base_url: String,
    site: String,
}

impl StackExchangeTagSource {
    pub fn new(base_url: String, site: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            site,
        }
    }
}

#[async_trait]
impl TagSource for StackExchangeTagSource {
    async fn fetch_page(&self, page: u32) -> Result<TagPage, CatalogError> {
        let url = format!("{}/tags", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("page", page.to_string()),
                ("pagesize", PAGE_SIZE.to_string()),
                ("order", "desc".to_string()),
                ("sort", "popular".to_string()),
                ("site", self.site.clone()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Source {
                status: status.as_u16(),
                url,
            });
        }

        Ok(response.json::<TagPage>().await?)
    }
}

pub struct TagParser {
    source: Arc<dyn TagSource>,
    classifier: Arc<Classifier>,
}

impl TagParser {
    pub fn new(source: Arc<dyn TagSource>, classifier: Arc<Classifier>) -> Self {
        Self { source, classifier }
    }

    /// Pages through the tag API and returns the deduplicated skill list.
    ///
    /// A failed first page fails the stage (there is nothing to keep); a
    /// failure on any later page keeps the pages already collected.
    pub async fn fetch(&self) -> Result<Vec<ParsedSkill>, CatalogError> {
        let mut skills: Vec<ParsedSkill> = Vec::new();
        let mut seen: HashSet<String> = HashSet::new();

        for page in 1..=MAX_PAGES {
            if page > 1 {
                tokio::time::sleep(PAGE_DELAY).await;
            }

            let tag_page = match self.source.fetch_page(page).await {
                Ok(p) => p,
                Err(e) if page == 1 => return Err(e),
                Err(e) => {
                    warn!(
                        "Tag page {page} failed ({e}); keeping the {} skills collected so far",
                        skills.len()
                    );
                    break;
                }
            };

            for tag in tag_page.items {
                if !should_include(&tag) {
                    continue;
                }
                let slug = slugify(&tag.name);
                // First occurrence wins: pages are popularity-descending.
                if !seen.insert(slug.clone()) {
                    continue;
                }
                skills.push(self.build_skill(&tag, slug));
            }

            if !tag_page.has_more {
                break;
            }
        }

        info!("Tag parse complete: {} skills", skills.len());
        Ok(skills)
    }

    fn build_skill(&self, tag: &RawTag, slug: String) -> ParsedSkill {
        let raw_lower = tag.name.to_lowercase();
        let classification = self.classifier.classify(&raw_lower, &slug);

        let name_en = self
            .classifier
            .display_name(&raw_lower, &slug)
            .map(str::to_string)
            .unwrap_or_else(|| format_tag_name(&raw_lower));
        let name_local = self
            .classifier
            .translate_skill(&raw_lower, &slug)
            .map(str::to_string)
            .unwrap_or_else(|| name_en.clone());

        ParsedSkill {
            name_en,
            name_local,
            skill_type: classification.skill_type,
            niche_slug: classification.niche_slug.map(str::to_string),
            color: self
                .classifier
                .skill_color(&raw_lower, &slug)
                .map(str::to_string),
            aliases: self.classifier.aliases_for(&slug),
            keywords: self.classifier.keywords_for(&slug),
            popularity: i32::try_from(tag.count.max(0)).unwrap_or(i32::MAX),
            slug,
        }
    }
}

fn should_include(tag: &RawTag) -> bool {
    !tag.is_moderator_only && !tag.is_required && !EXCLUDED_TAGS.contains(&tag.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillType;
    use crate::testutil::{tag, ScriptedTagSource, TagPageScript};

    fn parser_for(source: ScriptedTagSource) -> (TagParser, Arc<ScriptedTagSource>) {
        let source = Arc::new(source);
        let parser = TagParser::new(source.clone(), Arc::new(Classifier::new()));
        (parser, source)
    }

    fn page(items: Vec<RawTag>, has_more: bool) -> TagPageScript {
        TagPageScript::Ok(TagPage { items, has_more })
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_no_more_pages() {
        let (parser, source) = parser_for(ScriptedTagSource::new(vec![
            page(vec![tag("docker", 500)], true),
            page(vec![tag("kubernetes", 400)], true),
            page(vec![tag("terraform", 300)], false),
        ]));

        let skills = parser.fetch().await.unwrap();
        assert_eq!(source.calls(), 3);
        assert_eq!(skills.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_page_ceiling_is_enforced() {
        // Source always reports more pages; the ceiling stops the loop.
        let (parser, source) =
            parser_for(ScriptedTagSource::new(vec![page(vec![tag("docker", 500)], true)]));

        parser.fetch().await.unwrap();
        assert_eq!(source.calls(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_occurrence_wins_across_pages() {
        let (parser, _) = parser_for(ScriptedTagSource::new(vec![
            page(vec![tag("docker", 500)], true),
            page(vec![tag("docker", 10), tag("jenkins", 5)], false),
        ]));

        let skills = parser.fetch().await.unwrap();
        let docker = skills.iter().find(|s| s.slug == "docker").unwrap();
        assert_eq!(docker.popularity, 500);
        assert_eq!(skills.len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_later_page_failure_keeps_collected_pages() {
        let (parser, source) = parser_for(ScriptedTagSource::new(vec![
            page(vec![tag("docker", 500)], true),
            TagPageScript::Fail,
        ]));

        let skills = parser.fetch().await.unwrap();
        assert_eq!(source.calls(), 2);
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].slug, "docker");
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_page_failure_fails_the_stage() {
        let (parser, _) = parser_for(ScriptedTagSource::new(vec![TagPageScript::Fail]));
        assert!(parser.fetch().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_exclusion_predicate() {
        let mut moderator = tag("ops-heavy", 900);
        moderator.is_moderator_only = true;
        let mut required = tag("must-tag", 800);
        required.is_required = true;

        let (parser, _) = parser_for(ScriptedTagSource::new(vec![page(
            vec![moderator, required, tag("javascript", 700), tag("react", 600)],
            false,
        )]));

        let skills = parser.fetch().await.unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].slug, "react");
    }

    #[tokio::test(start_paused = true)]
    async fn test_classification_and_enrichment() {
        let (parser, _) = parser_for(ScriptedTagSource::new(vec![page(
            vec![tag("react", 600), tag("left-handed-scissors", 3)],
            false,
        )]));

        let skills = parser.fetch().await.unwrap();

        let react = skills.iter().find(|s| s.slug == "react").unwrap();
        assert_eq!(react.skill_type, SkillType::Framework);
        assert_eq!(react.niche_slug.as_deref(), Some("frontend"));
        assert_eq!(react.color.as_deref(), Some("#61DAFB"));
        assert!(react.aliases.contains(&"reactjs".to_string()));

        let unknown = skills.iter().find(|s| s.slug == "left-handed-scissors").unwrap();
        assert_eq!(unknown.skill_type, SkillType::Other);
        assert_eq!(unknown.niche_slug, None);
        assert_eq!(unknown.name_en, "Left Handed Scissors");
    }
}
