//! Motivational quotes per language

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::FallbackChain;
use crate::errors::{LifeTableError, Result};

/// Printed on the image when no language in the chain has quotes
pub const DEFAULT_IMAGE_QUOTE: &str = "Your future is a blank canvas. Paint it well.";

/// Used in chat captions when no language in the chain has quotes
pub const DEFAULT_BOT_QUOTE: &str = "-";

/// `language -> quotes` as stored in `quotes.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteTable {
    by_lang: HashMap<String, Vec<String>>,
}

impl QuoteTable {
    pub fn new(by_lang: HashMap<String, Vec<String>>) -> Self {
        Self { by_lang }
    }

    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load `quotes.json`
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

    /// Quotes for the first language in the chain that has any
    pub fn candidates(&self, chain: &FallbackChain<'_>) -> Option<&[String]> {
        chain
            .languages()
            .filter_map(|lang| self.by_lang.get(lang))
            .find(|quotes| !quotes.is_empty())
            .map(Vec::as_slice)
    }

    /// Pick one quote uniformly at random, or `default` when none exist
    pub fn pick<R: Rng + ?Sized>(
        &self,
        chain: &FallbackChain<'_>,
        default: &str,
        rng: &mut R,
    ) -> String {
        match self.candidates(chain) {
            Some(quotes) => quotes[rng.random_range(0..quotes.len())].clone(),
            None => default.to_string(),
        }
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.by_lang.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn table() -> QuoteTable {
        QuoteTable::from_json_str(
            r#"{
                "en": ["One", "Two", "Three"],
                "uz": ["Bir"],
                "ru": []
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_pick_requested_language() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(table().pick(&FallbackChain::image("uz"), DEFAULT_IMAGE_QUOTE, &mut rng), "Bir");
    }

    #[test]
    fn test_pick_empty_list_falls_back() {
        let mut rng = StdRng::seed_from_u64(7);
        let quote = table().pick(&FallbackChain::image("ru"), DEFAULT_IMAGE_QUOTE, &mut rng);
        assert!(["One", "Two", "Three"].contains(&quote.as_str()));
    }

    #[test]
    fn test_pick_default_when_nothing_matches() {
        let mut rng = StdRng::seed_from_u64(7);
        let quotes = QuoteTable::default();
        assert_eq!(
            quotes.pick(&FallbackChain::image("xx"), DEFAULT_IMAGE_QUOTE, &mut rng),
            DEFAULT_IMAGE_QUOTE
        );
        assert_eq!(
            table().pick(&FallbackChain::bot("xx"), DEFAULT_BOT_QUOTE, &mut rng),
            "Bir"
        );
    }

    #[test]
    fn test_pick_is_reproducible_with_same_seed() {
        let quotes = table();
        let chain = FallbackChain::image("en");
        let a = quotes.pick(&chain, DEFAULT_IMAGE_QUOTE, &mut StdRng::seed_from_u64(42));
        let b = quotes.pick(&chain, DEFAULT_IMAGE_QUOTE, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
