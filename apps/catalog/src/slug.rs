//! Slug derivation and search-text normalization.
//!
//! Slugs are the natural keys of the catalog: every upsert matches on them,
//! so the derivation must be stable across syncs. Search normalization
//! shares the accent folding so that "reação" matches "reacao".

/// Names whose generic slug would collide or lose meaning.
/// "C#" and "C++" both reduce to "c" under the generic rules.
const SPECIAL_SLUGS: &[(&str, &str)] = &[
    ("c#", "csharp"),
    ("c++", "cpp"),
    ("f#", "fsharp"),
    ("f*", "fstar"),
    ("objective-c++", "objective-cpp"),
    (".net", "dotnet"),
];

/// Derives the normalized, URL-safe slug for a display name or raw tag.
///
/// Lowercase, accents folded to ASCII, runs of non-alphanumeric characters
/// collapsed to single hyphens, leading/trailing hyphens trimmed.
pub fn slugify(name: &str) -> String {
    let lowered = name.trim().to_lowercase();

    if let Some((_, slug)) = SPECIAL_SLUGS.iter().find(|(k, _)| *k == lowered) {
        return (*slug).to_string();
    }

    let mut out = String::with_capacity(lowered.len());
    let mut last_hyphen = true; // suppress a leading hyphen
    for c in lowered.chars() {
        let folded = fold_accent(c);
        if folded.is_ascii_alphanumeric() {
            out.push(folded);
            last_hyphen = false;
        } else if !last_hyphen {
            out.push('-');
            last_hyphen = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Normalizes free text for accent-insensitive substring matching:
/// lowercased, accents folded, whitespace collapsed to single spaces.
pub fn normalize_query(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_space = true;
    for c in text.trim().to_lowercase().chars() {
        let folded = fold_accent(c);
        if folded.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.push(folded);
            last_space = false;
        }
    }
    while out.ends_with(' ') {
        out.pop();
    }
    out
}

/// Folds Latin-1/Latin Extended accented characters to their ASCII base.
/// Anything outside the table passes through unchanged.
fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        _ => c,
    }
}

/// Title-cases a raw hyphenated tag for display: "react-native" → "React Native".
/// Known-brand spellings are handled upstream by the display-name table;
/// this is the fallback only.
pub fn format_tag_name(tag: &str) -> String {
    tag.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
