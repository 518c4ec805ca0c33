//! Localized string and quote tables
//!
//! Both tables are loaded once from JSON and then only read. Every lookup
//! goes through a [`FallbackChain`] so a missing language or key degrades to
//! another language, and finally to a `_key_` placeholder, instead of failing.

mod catalog;
mod locale;
mod quotes;

pub use catalog::Catalog;
pub use locale::{placeholder, LocaleTable};
pub use quotes::{QuoteTable, DEFAULT_BOT_QUOTE, DEFAULT_IMAGE_QUOTE};

/// Language every bot-facing message falls back to
pub const BOT_FALLBACK_LANG: &str = "uz";

/// Language the rendered image and list lookups fall back to
pub const IMAGE_FALLBACK_LANG: &str = "en";

/// Ordered language codes tried when resolving a localized value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackChain<'a> {
    requested: &'a str,
    fallback: &'a str,
}

impl<'a> FallbackChain<'a> {
    pub const fn new(requested: &'a str, fallback: &'a str) -> Self {
        Self { requested, fallback }
    }

    /// Chain used for chat messages: requested language, then `uz`
    pub const fn bot(requested: &'a str) -> Self {
        Self::new(requested, BOT_FALLBACK_LANG)
    }

    /// Only the requested language, used for quotes in chat captions
    pub const fn exact(requested: &'a str) -> Self {
        Self::new(requested, requested)
    }

    /// Chain used for image labels and quotes: requested language, then `en`
    pub const fn image(requested: &'a str) -> Self {
        Self::new(requested, IMAGE_FALLBACK_LANG)
    }

    /// Language codes in lookup order, without repeats
    pub fn languages(&self) -> impl Iterator<Item = &'a str> {
        let fallback = (self.fallback != self.requested).then_some(self.fallback);
        std::iter::once(self.requested).chain(fallback)
    }
}
