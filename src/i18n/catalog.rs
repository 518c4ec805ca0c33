use std::path::Path;

use tracing::{debug, warn};

use super::{FallbackChain, LocaleTable, QuoteTable};
use crate::errors::Result;

/// Immutable string tables shared by every render and caption
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub locales: LocaleTable,
    pub quotes: QuoteTable,
}

impl Catalog {
    pub fn new(locales: LocaleTable, quotes: QuoteTable) -> Self {
        Self { locales, quotes }
    }

    /// Load both tables from disk
    pub fn load(locales_path: &Path, quotes_path: &Path) -> Result<Self> {
        let locales = LocaleTable::load(locales_path)?;
        let quotes = QuoteTable::load(quotes_path)?;

        if locales.is_empty() {
            warn!(
                "Locale table {} is empty, every label will be a placeholder",
                locales_path.display()
            );
        }
        debug!(
            "Loaded catalog: locales from {}, quotes for {} languages",
            locales_path.display(),
            quotes.languages().count()
        );

        Ok(Self { locales, quotes })
    }

    /// Shorthand for `locales.resolve`
    pub fn text(&self, key: &str, chain: &FallbackChain<'_>) -> String {
        self.locales.resolve(key, chain)
    }
}
