//! Translation lookup for presentation code.
//!
//! Translations are a nested JSON object addressed by dot-separated keys,
//! e.g. `projects.filter.all`. Loading translation files is left to the
//! caller; this module only resolves keys.

use serde_json::Value;
use tracing::warn;

/// A loaded translation table.
///
/// # Example
///
/// ```
/// use portfolio_stats::localization::Translations;
/// use serde_json::json;
///
/// let translations = Translations::new(json!({
///     "about": { "title": "About Me" }
/// }));
///
/// assert_eq!(translations.t("about.title"), "About Me");
/// assert_eq!(translations.t("about.missing"), "about.missing");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Translations {
    root: Value,
}

impl Translations {
    /// Wraps a translation tree.
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    /// Returns the value at `path`, if every segment exists.
    pub fn section(&self, path: &str) -> Option<&Value> {
        path.split('.')
            .try_fold(&self.root, |value, segment| value.as_object()?.get(segment))
    }

    /// Returns the string at `key`.
    ///
    /// Falls back to the key itself when a segment is missing or the leaf is
    /// not a string, so a gap in a translation file shows up as the raw key
    /// instead of blank text.
    pub fn t(&self, key: &str) -> String {
        match self.section(key).and_then(Value::as_str) {
            Some(text) => text.to_string(),
            None => {
                warn!(key = %key, "Translation key not found");
                key.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Translations {
        Translations::new(json!({
            "projects": {
                "filter": {
                    "all": "All",
                    "fullstack": "Full Stack"
                }
            },
            "stats": { "count": 4 }
        }))
    }

    #[test]
    fn test_nested_key_resolves() {
        assert_eq!(sample().t("projects.filter.fullstack"), "Full Stack");
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(sample().t("projects.filter.mobile"), "projects.filter.mobile");
        assert_eq!(sample().t("contact.title"), "contact.title");
    }

    #[test]
    fn test_non_string_leaf_falls_back_to_key() {
        assert_eq!(sample().t("stats.count"), "stats.count");
        assert_eq!(sample().t("projects.filter"), "projects.filter");
    }

    #[test]
    fn test_section_returns_nested_object() {
        let translations = sample();
        let filter = translations.section("projects.filter").unwrap();
        assert_eq!(filter["all"], "All");
        assert!(translations.section("projects.nope").is_none());
    }

    #[test]
    fn test_empty_table_returns_keys() {
        assert_eq!(Translations::default().t("hero.title"), "hero.title");
    }
}
