use anyhow::{Context, Result};

const DEFAULT_LINGUIST_URL: &str =
    "https://raw.githubusercontent.com/github-linguist/linguist/master/lib/linguist/languages.yml";
const DEFAULT_TAGS_API_BASE: &str = "https://api.stackexchange.com/2.3";
const DEFAULT_TAGS_SITE: &str = "stackoverflow";

/// Application configuration loaded from environment variables.
/// Fails at startup if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub redis_url: String,
    /// URL of the linguist language-classification YAML document.
    pub linguist_url: String,
    /// Base URL of the tag-popularity API (Stack Exchange compatible).
    pub tags_api_base: String,
    /// `site` query parameter sent to the tag API.
    pub tags_site: String,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            redis_url: require_env("REDIS_URL")?,
            linguist_url: std::env::var("LINGUIST_URL")
                .unwrap_or_else(|_| DEFAULT_LINGUIST_URL.to_string()),
            tags_api_base: std::env::var("TAGS_API_BASE")
                .unwrap_or_else(|_| DEFAULT_TAGS_API_BASE.to_string()),
            tags_site: std::env::var("TAGS_SITE").unwrap_or_else(|_| DEFAULT_TAGS_SITE.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
