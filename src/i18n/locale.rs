//! Nested `key -> language -> string` table

use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};

use super::FallbackChain;
use crate::errors::{LifeTableError, Result};

/// Placeholder returned for a key that resolves to nothing
pub fn placeholder(key: &str) -> String {
    format!("_{key}_")
}

/// Localized strings addressed by dotted key paths (`table_text_details.header`)
///
/// Leaves are objects keyed by language code. Values are usually strings;
/// a few keys (`weekdays`, `months`) hold one list per language instead.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleTable {
    root: Map<String, Value>,
}

impl LocaleTable {
    /// Build from an already parsed JSON value; non-objects yield an empty table
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(root) => Self { root },
            _ => Self::default(),
        }
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        let root: Map<String, Value> = serde_json::from_str(json)?;
        Ok(Self { root })
    }

    /// Load `locales.json`
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LifeTableError::CatalogRead {
            path: path.to_path_buf(),
            message: Arc::new(e.to_string()),
        })?;
        Self::from_json_str(&content).map_err(|e| LifeTableError::CatalogParse {
            path: path.to_path_buf(),
            message: Arc::new(e.to_string()),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Walk a dotted path through nested objects
    pub fn node(&self, key: &str) -> Option<&Value> {
        let mut parts = key.split('.');
        let mut current = self.root.get(parts.next()?)?;
        for part in parts {
            current = current.as_object()?.get(part)?;
        }
        Some(current)
    }

    /// First string found along the chain, or `None`
    pub fn lookup(&self, key: &str, chain: &FallbackChain<'_>) -> Option<&str> {
        let per_lang = self.node(key)?.as_object()?;
        chain
            .languages()
            .find_map(|lang| per_lang.get(lang).and_then(Value::as_str))
    }

    /// Resolve a key along the chain, falling back to `_key_`
    pub fn resolve(&self, key: &str, chain: &FallbackChain<'_>) -> String {
        self.lookup(key, chain)
            .map_or_else(|| placeholder(key), str::to_string)
    }

    /// String list stored for exactly one language; empty when absent
    pub fn list(&self, key: &str, lang: &str) -> Vec<&str> {
        self.node(key)
            .and_then(Value::as_object)
            .and_then(|per_lang| per_lang.get(lang))
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// First non-empty list along the chain
    pub fn list_with_fallback(&self, key: &str, chain: &FallbackChain<'_>) -> Vec<&str> {
        chain
            .languages()
            .map(|lang| self.list(key, lang))
            .find(|items| !items.is_empty())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> LocaleTable {
        LocaleTable::from_value(json!({
            "image_title": {"uz": "Hayot jadvali", "en": "Life table"},
            "only_en": {"en": "English only"},
            "table_text_details": {
                "header": {"uz": "Sarlavha", "ru": "Заголовок"}
            },
            "flat": "not a language map",
            "weekdays": {
                "en": ["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"],
                "ru": []
            }
        }))
    }

    #[test]
    fn test_resolve_requested_language() {
        let t = table();
        assert_eq!(t.resolve("image_title", &FallbackChain::bot("en")), "Life table");
    }

    #[test]
    fn test_resolve_nested_key() {
        let t = table();
        assert_eq!(
            t.resolve("table_text_details.header", &FallbackChain::bot("ru")),
            "Заголовок"
        );
        assert_eq!(
            t.resolve("table_text_details.header", &FallbackChain::bot("xx")),
            "Sarlavha"
        );
    }

    #[test]
    fn test_resolve_falls_back_then_placeholder() {
        let t = table();
        assert_eq!(t.resolve("image_title", &FallbackChain::bot("xx")), "Hayot jadvali");
        assert_eq!(t.resolve("only_en", &FallbackChain::bot("xx")), "_only_en_");
        assert_eq!(t.resolve("only_en", &FallbackChain::image("xx")), "English only");
        assert_eq!(t.resolve("missing.key", &FallbackChain::image("en")), "_missing.key_");
    }

    #[test]
    fn test_resolve_non_object_leaf_is_placeholder() {
        let t = table();
        assert_eq!(t.resolve("flat", &FallbackChain::bot("uz")), "_flat_");
        assert_eq!(t.resolve("flat.deeper", &FallbackChain::bot("uz")), "_flat.deeper_");
    }

    #[test]
    fn test_list_fallback_skips_empty() {
        let t = table();
        assert!(t.list("weekdays", "ru").is_empty());
        let days = t.list_with_fallback("weekdays", &FallbackChain::image("ru"));
        assert_eq!(days.len(), 7);
        assert_eq!(days[0], "Monday");
    }

    #[test]
    fn test_non_object_root_is_empty() {
        assert!(LocaleTable::from_value(json!(["a", "b"])).is_empty());
    }
}
