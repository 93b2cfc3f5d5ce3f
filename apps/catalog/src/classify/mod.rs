//! Deterministic classification over compiled-in lookup tables.
//!
//! One `Classifier` is built at startup and injected into both parsers.
//! Every lookup is a pure function of the tables, so classification of a
//! given tag never depends on call order or prior calls.

mod categories;
mod colors;
mod display;
mod keywords;
mod languages;

use std::collections::HashMap;

use crate::models::SkillType;

pub use languages::LanguageProfile;

/// Result of classifying a raw tag: category plus optional niche link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub skill_type: SkillType,
    pub niche_slug: Option<&'static str>,
}

pub struct Classifier {
    categories: HashMap<&'static str, Classification>,
    display_names: HashMap<&'static str, &'static str>,
    translations_pt: HashMap<&'static str, &'static str>,
    colors: HashMap<&'static str, &'static str>,
    aliases: HashMap<&'static str, &'static [&'static str]>,
    keywords: HashMap<&'static str, &'static [&'static str]>,
    language_profiles: HashMap<&'static str, &'static LanguageProfile>,
    language_names_pt: HashMap<&'static str, &'static str>,
    language_rank: HashMap<&'static str, usize>,
}

impl Classifier {
    pub fn new() -> Self {
        Classifier {
            categories: merge_first_wins(categories::ALL_IN_ORDER),
            display_names: display::DISPLAY_NAMES_EN.iter().copied().collect(),
            translations_pt: display::TRANSLATIONS_PT.iter().copied().collect(),
            colors: colors::SKILL_COLORS.iter().copied().collect(),
            aliases: keywords::SKILL_ALIASES.iter().copied().collect(),
            keywords: keywords::SKILL_KEYWORDS.iter().copied().collect(),
            language_profiles: languages::LANGUAGE_PROFILES
                .iter()
                .map(|(name, profile)| (*name, profile))
                .collect(),
            language_names_pt: languages::LANGUAGE_NAMES_PT.iter().copied().collect(),
            language_rank: languages::POPULARITY_ORDER
                .iter()
                .enumerate()
                .map(|(idx, name)| (*name, idx))
                .collect(),
        }
    }

    /// Classifies a tag: exact lowercased raw tag first, then the
    /// normalized slug, then the OTHER/no-niche default.
    pub fn classify(&self, raw_lower: &str, slug: &str) -> Classification {
        two_tier(&self.categories, raw_lower, slug)
            .copied()
            .unwrap_or(Classification {
                skill_type: SkillType::Other,
                niche_slug: None,
            })
    }

    /// English display name override, if one is registered.
    pub fn display_name(&self, raw_lower: &str, slug: &str) -> Option<&'static str> {
        two_tier(&self.display_names, raw_lower, slug).copied()
    }

    /// pt-BR translation, if one is registered.
    pub fn translate_skill(&self, raw_lower: &str, slug: &str) -> Option<&'static str> {
        two_tier(&self.translations_pt, raw_lower, slug).copied()
    }

    /// Brand color, if one is registered.
    pub fn skill_color(&self, raw_lower: &str, slug: &str) -> Option<&'static str> {
        two_tier(&self.colors, raw_lower, slug).copied()
    }

    pub fn aliases_for(&self, slug: &str) -> Vec<String> {
        self.aliases
            .get(slug)
            .map(|list| list.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default()
    }

    pub fn keywords_for(&self, slug: &str) -> Vec<String> {
        self.keywords
            .get(slug)
            .map(|list| list.iter().map(|s| s.to_string()).collect())
            .unwrap_or_default()
    }

    /// Paradigm/typing/website profile for a language, keyed by the
    /// linguist display name.
    pub fn language_profile(&self, name: &str) -> Option<&LanguageProfile> {
        self.language_profiles.get(name).copied()
    }

    pub fn language_local_name(&self, name: &str) -> Option<&'static str> {
        self.language_names_pt.get(name).copied()
    }

    /// `1000 - index` for ranked languages, 0 for everything else.
    pub fn language_popularity(&self, name: &str) -> i32 {
        match self.language_rank.get(name) {
            Some(idx) => 1000 - *idx as i32,
            None => 0,
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Exact raw-tag lookup first, normalized slug second.
fn two_tier<'a, V>(map: &'a HashMap<&'static str, V>, raw_lower: &str, slug: &str) -> Option<&'a V> {
    map.get(raw_lower).or_else(|| map.get(slug))
}

/// Flattens the sub-tables into one map. Earlier tables win on duplicate
/// keys; `or_insert` keeps the first registration.
fn merge_first_wins(
    tables: &[&[categories::CategoryEntry]],
) -> HashMap<&'static str, Classification> {
    let mut merged = HashMap::new();
    for table in tables {
        for (key, skill_type, niche_slug) in table.iter() {
            merged.entry(*key).or_insert(Classification {
                skill_type: *skill_type,
                niche_slug: *niche_slug,
            });
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy;
    use std::collections::HashSet;

    #[test]
    fn test_classify_known_tag_by_raw_name() {
        let classifier = Classifier::new();
        let c = classifier.classify("vue.js", "vue-js");
        assert_eq!(c.skill_type, SkillType::Framework);
        assert_eq!(c.niche_slug, Some("frontend"));
    }

    #[test]
    fn test_classify_falls_back_to_slug_tier() {
        let classifier = Classifier::new();
        // Raw form unknown, slug matches the registered key.
        let c = classifier.classify("Docker", "docker");
        assert_eq!(c.skill_type, SkillType::Tool);
        assert_eq!(c.niche_slug, Some("devops"));
    }

    #[test]
    fn test_classify_unknown_defaults_to_other() {
        let classifier = Classifier::new();
        let c = classifier.classify("left-handed-scissors", "left-handed-scissors");
        assert_eq!(c.skill_type, SkillType::Other);
        assert_eq!(c.niche_slug, None);
    }

    #[test]
    fn test_classify_is_deterministic_across_calls() {
        let classifier = Classifier::new();
        let first = classifier.classify("react", "react");
        for _ in 0..10 {
            classifier.classify("terraform", "terraform");
            assert_eq!(classifier.classify("react", "react"), first);
        }
    }

    #[test]
    fn test_merge_keeps_first_registration_on_collision() {
        let early: &[categories::CategoryEntry] =
            &[("dup", SkillType::Framework, Some("frontend"))];
        let late: &[categories::CategoryEntry] = &[("dup", SkillType::Tool, Some("devops"))];
        let merged = merge_first_wins(&[early, late]);
        let c = merged["dup"];
        assert_eq!(c.skill_type, SkillType::Framework);
        assert_eq!(c.niche_slug, Some("frontend"));
    }

    #[test]
    fn test_every_category_niche_exists_in_taxonomy() {
        let known: HashSet<_> = taxonomy::NICHES.iter().map(|n| n.slug).collect();
        for table in categories::ALL_IN_ORDER {
            for (key, _, niche) in table.iter() {
                if let Some(slug) = niche {
                    assert!(known.contains(slug), "{key} points at unknown niche {slug}");
                }
            }
        }
    }

    #[test]
    fn test_ranked_languages_strictly_ordered() {
        let classifier = Classifier::new();
        let order = languages::POPULARITY_ORDER;
        for pair in order.windows(2) {
            assert!(
                classifier.language_popularity(pair[0]) > classifier.language_popularity(pair[1]),
                "{} should outrank {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_unranked_language_scores_zero() {
        let classifier = Classifier::new();
        assert_eq!(classifier.language_popularity("Brainfuck"), 0);
    }

    #[test]
    fn test_translation_two_tier_fallback() {
        let classifier = Classifier::new();
        assert_eq!(
            classifier.translate_skill("machine-learning", "machine-learning"),
            Some("Aprendizado de Máquina")
        );
        assert_eq!(classifier.translate_skill("react", "react"), None);
    }

    #[test]
    fn test_color_lookup_with_fallback_none() {
        let classifier = Classifier::new();
        assert_eq!(classifier.skill_color("react", "react"), Some("#61DAFB"));
        assert_eq!(classifier.skill_color("scrum", "scrum"), None);
    }

    #[test]
    fn test_alias_and_keyword_defaults_are_empty() {
        let classifier = Classifier::new();
        assert_eq!(classifier.aliases_for("kubernetes"), vec!["k8s".to_string()]);
        assert!(classifier.aliases_for("scrum").is_empty());
        assert!(classifier.keywords_for("left-handed-scissors").is_empty());
    }
}
