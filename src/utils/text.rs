//! Case conversion and English pluralization.

use regex::{Captures, Regex};
use std::sync::LazyLock;

static UNDERSCORE_LETTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_([A-Za-z])").unwrap());

static UPPERCASE_LETTER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z])").unwrap());

/// Nouns whose plural is the singular.
const PLURAL_NO_CHANGE: &[&str] = &["fish", "deer", "sheep", "bread"];

const PLURAL_IRREGULAR: &[(&str, &str)] = &[
    ("man", "men"),
    ("woman", "women"),
    ("child", "children"),
    ("tooth", "teeth"),
    ("person", "people"),
    ("mouse", "mice"),
];

/// `street_smarts` → `streetSmarts`. Strings without `_x` pass through.
pub fn to_camel_case(value: &str) -> String {
    UNDERSCORE_LETTER
        .replace_all(value, |caps: &Captures| caps[1].to_uppercase())
        .to_string()
}

/// `streetSmarts` → `street_smarts`. The result never starts with `_`.
pub fn to_underscore_case(value: &str) -> String {
    let underscored = UPPERCASE_LETTER
        .replace_all(value, |caps: &Captures| format!("_{}", caps[1].to_lowercase()))
        .to_string();

    if let Some(rest) = underscored.strip_prefix('_') {
        return rest.to_string();
    }
    underscored
}

/// Singular form for a count of one, otherwise `plural` or an English plural.
///
/// ```ignore
/// pluralize(3, "dog", None)               // "dogs"
/// pluralize(6, "moon", Some("moons ago")) // "moons ago"
/// pluralize(5, "deer", None)              // "deer"
/// ```
pub fn pluralize(count: i64, singular: &str, plural: Option<&str>) -> String {
    if count == 1 {
        return singular.to_string();
    }
    if let Some(plural) = plural {
        return plural.to_string();
    }
    if PLURAL_NO_CHANGE.contains(&singular) {
        return singular.to_string();
    }
    if let Some((_, irregular)) = PLURAL_IRREGULAR.iter().find(|(s, _)| *s == singular) {
        return irregular.to_string();
    }

    // sky => skies, half => halves, potato => potatoes
    if let Some(stem) = singular.strip_suffix('y') {
        return format!("{}ies", stem);
    }
    if let Some(stem) = singular.strip_suffix('f') {
        return format!("{}ves", stem);
    }
    if singular.ends_with('o') {
        return format!("{}es", singular);
    }

    // knife => knives, cactus => cacti, thesis => theses, criterion => criteria
    const SUFFIX_RULES: &[(&str, &str)] = &[("fe", "ves"), ("us", "i"), ("is", "es"), ("on", "a")];
    for (suffix, replacement) in SUFFIX_RULES {
        if let Some(stem) = singular.strip_suffix(suffix) {
            return format!("{}{}", stem, replacement);
        }
    }

    format!("{}s", singular)
}
