//! Language ingestion from the linguist classification dataset.
//!
//! The dataset is one YAML document mapping display names to metadata.
//! Unlike the tag API there is no pagination: the fetch either yields the
//! whole document or fails the stage.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::info;

use crate::classify::Classifier;
use crate::errors::CatalogError;
use crate::models::ParsedLanguage;
use crate::slug::slugify;

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch edge for the language dataset, swappable in tests.
#[async_trait]
pub trait LanguageSource: Send + Sync {
    async fn fetch_raw(&self) -> Result<String, CatalogError>;
}

/// Production source: GETs the linguist `languages.yml` document.
pub struct LinguistHttpSource {
    client: reqwest::Client,
    url: String,
}

impl LinguistHttpSource {
    pub fn new(url: String) -> Self {
        Self {
            client: reqwest::Client::builder()
                .timeout(FETCH_TIMEOUT)
                .build()
                .expect("Failed to build HTTP client"),
            url,
        }
    }
}

#[async_trait]
impl LanguageSource for LinguistHttpSource {
    async fn fetch_raw(&self) -> Result<String, CatalogError> {
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Source {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }
        Ok(response.text().await?)
    }
}

/// One entry of the linguist document. Only the fields the catalog uses
/// are modeled; everything else is ignored by serde.
#[derive(Debug, Deserialize)]
struct LinguistEntry {
    #[serde(rename = "type")]
    entry_type: Option<String>,
    color: Option<String>,
    extensions: Option<Vec<String>>,
    aliases: Option<Vec<String>>,
}

pub struct LinguistParser {
    source: Arc<dyn LanguageSource>,
    classifier: Arc<Classifier>,
}

impl LinguistParser {
    pub fn new(source: Arc<dyn LanguageSource>, classifier: Arc<Classifier>) -> Self {
        Self { source, classifier }
    }

    /// Fetches and normalizes the dataset. Only `type: programming`
    /// entries survive (markup, data and prose languages are dropped).
    /// The result is sorted by popularity descending as a convenience for
    /// read consumers; persistence does not depend on the order.
    pub async fn fetch(&self) -> Result<Vec<ParsedLanguage>, CatalogError> {
        let raw = self.source.fetch_raw().await?;
        let entries: BTreeMap<String, LinguistEntry> = serde_yaml::from_str(&raw)?;

        let mut languages: Vec<ParsedLanguage> = entries
            .into_iter()
            .filter(|(_, entry)| entry.entry_type.as_deref() == Some("programming"))
            .map(|(name, entry)| self.build_language(name, entry))
            .collect();

        languages.sort_by(|a, b| b.popularity.cmp(&a.popularity));

        info!("Linguist parse complete: {} programming languages", languages.len());
        Ok(languages)
    }

    fn build_language(&self, name: String, entry: LinguistEntry) -> ParsedLanguage {
        let slug = slugify(&name);
        let profile = self.classifier.language_profile(&name);

        ParsedLanguage {
            name_local: self
                .classifier
                .language_local_name(&name)
                .map(str::to_string)
                .unwrap_or_else(|| name.clone()),
            color: entry.color,
            website: profile.and_then(|p| p.website).map(str::to_string),
            typing: profile.and_then(|p| p.typing).map(str::to_string),
            paradigms: profile
                .map(|p| p.paradigms.iter().map(|s| s.to_string()).collect())
                .unwrap_or_default(),
            aliases: entry.aliases.unwrap_or_default(),
            file_extensions: entry.extensions.unwrap_or_default(),
            popularity: self.classifier.language_popularity(&name),
            name_en: name,
            slug,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{FailingLanguageSource, StaticLanguageSource};

    const SAMPLE_YAML: &str = r##"
C#:
  type: programming
  color: "#178600"
  extensions:
  - ".cs"
  aliases:
  - csharp
HTML:
  type: markup
  extensions:
  - ".html"
Python:
  type: programming
  color: "#3572A5"
  extensions:
  - ".py"
Brainfuck:
  type: programming
  extensions:
  - ".b"
"##;

    fn parser_for(yaml: &str) -> LinguistParser {
        LinguistParser::new(
            Arc::new(StaticLanguageSource::new(yaml)),
            Arc::new(Classifier::new()),
        )
    }

    #[tokio::test]
    async fn test_keeps_only_programming_languages() {
        let languages = parser_for(SAMPLE_YAML).fetch().await.unwrap();
        let slugs: Vec<&str> = languages.iter().map(|l| l.slug.as_str()).collect();
        assert!(slugs.contains(&"python"));
        assert!(slugs.contains(&"csharp"));
        assert!(!slugs.contains(&"html"));
    }

    #[tokio::test]
    async fn test_ranked_languages_sort_before_unranked() {
        let languages = parser_for(SAMPLE_YAML).fetch().await.unwrap();
        assert_eq!(languages[0].slug, "python");
        assert_eq!(languages[1].slug, "csharp");
        let brainfuck = languages.iter().find(|l| l.slug == "brainfuck").unwrap();
        assert_eq!(brainfuck.popularity, 0);
    }

    #[tokio::test]
    async fn test_carries_source_metadata_and_profile() {
        let languages = parser_for(SAMPLE_YAML).fetch().await.unwrap();
        let python = languages.iter().find(|l| l.slug == "python").unwrap();
        assert_eq!(python.color.as_deref(), Some("#3572A5"));
        assert_eq!(python.file_extensions, vec![".py"]);
        assert_eq!(python.typing.as_deref(), Some("dynamic"));
        assert_eq!(python.website.as_deref(), Some("https://www.python.org"));
        assert!(python.paradigms.contains(&"functional".to_string()));
        // No local translation registered: falls back to the source name.
        assert_eq!(python.name_local, "Python");
    }

    #[tokio::test]
    async fn test_missing_sets_default_empty() {
        let languages = parser_for(SAMPLE_YAML).fetch().await.unwrap();
        let brainfuck = languages.iter().find(|l| l.slug == "brainfuck").unwrap();
        assert!(brainfuck.aliases.is_empty());
        assert!(brainfuck.paradigms.is_empty());
        assert!(brainfuck.typing.is_none());
        assert!(brainfuck.color.is_none());
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let parser = LinguistParser::new(
            Arc::new(FailingLanguageSource),
            Arc::new(Classifier::new()),
        );
        let err = parser.fetch().await.unwrap_err();
        assert!(matches!(err, CatalogError::Source { status: 500, .. }));
    }

    #[tokio::test]
    async fn test_malformed_yaml_propagates() {
        let parser = parser_for("not: [valid: yaml");
        assert!(matches!(
            parser.fetch().await.unwrap_err(),
            CatalogError::Yaml(_)
        ));
    }
}
