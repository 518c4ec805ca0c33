//! Application configuration
//!
//! Values are layered: defaults, then the config file, then `LIFE_TABLE_*`
//! environment variables. The binary applies its own flags last.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{LifeTableError, Result};
use crate::i18n::BOT_FALLBACK_LANG;
use crate::render::layout::DEFAULT_FOOTER;

pub const ENV_FONT: &str = "LIFE_TABLE_FONT";
pub const ENV_LOCALES: &str = "LIFE_TABLE_LOCALES";
pub const ENV_QUOTES: &str = "LIFE_TABLE_QUOTES";
pub const ENV_LANG: &str = "LIFE_TABLE_LANG";
pub const ENV_FOOTER: &str = "LIFE_TABLE_FOOTER";
pub const ENV_OUTPUT_DIR: &str = "LIFE_TABLE_OUTPUT_DIR";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// TrueType font used for every text role
    pub font_path: PathBuf,

    /// `locales.json`: dotted key -> language -> string
    pub locales_path: PathBuf,

    /// `quotes.json`: language -> list of quotes
    pub quotes_path: PathBuf,

    /// Language used when none is given on the command line
    pub default_lang: String,

    /// Text printed in the bottom-right corner
    pub footer: String,

    /// Where `batch` writes its images
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from("assets/NotoSans-Regular.ttf"),
            locales_path: PathBuf::from("locales.json"),
            quotes_path: PathBuf::from("quotes.json"),
            default_lang: BOT_FALLBACK_LANG.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
            output_dir: PathBuf::from("out"),
        }
    }
}

impl AppConfig {
    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "life-table", "life-table")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Default location of the config file
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.toml"))
    }

    /// Read a config file; `.toml` is parsed as TOML, anything else as JSON
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            LifeTableError::config(format!("Failed to read config {}: {e}", path.display()))
        })?;

        if path.extension().is_some_and(|e| e == "toml") {
            toml::from_str(&content)
                .map_err(|e| LifeTableError::config(format!("Invalid TOML config: {e}")))
        } else {
            serde_json::from_str(&content)
                .map_err(|e| LifeTableError::config(format!("Invalid JSON config: {e}")))
        }
    }

    /// Override fields from the process environment
    pub fn apply_env(&mut self) {
        self.apply_env_with(|name| env::var(name).ok());
    }

    /// Override fields from any variable source
    pub fn apply_env_with<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(font) = lookup(ENV_FONT) {
            self.font_path = PathBuf::from(font);
        }

        if let Some(locales) = lookup(ENV_LOCALES) {
            self.locales_path = PathBuf::from(locales);
        }

        if let Some(quotes) = lookup(ENV_QUOTES) {
            self.quotes_path = PathBuf::from(quotes);
        }

        if let Some(lang) = lookup(ENV_LANG) {
            self.default_lang = lang;
        }

        if let Some(footer) = lookup(ENV_FOOTER) {
            self.footer = footer;
        }

        if let Some(dir) = lookup(ENV_OUTPUT_DIR) {
            self.output_dir = PathBuf::from(dir);
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("font_path", &self.font_path),
            ("locales_path", &self.locales_path),
            ("quotes_path", &self.quotes_path),
            ("output_dir", &self.output_dir),
        ];
        for (name, path) in paths {
            if path.as_os_str().is_empty() {
                return Err(LifeTableError::config(format!("{name} cannot be empty")));
            }
        }

        if self.default_lang.trim().is_empty() {
            return Err(LifeTableError::config("default_lang cannot be empty"));
        }

        Ok(())
    }
}

/// Load the layered configuration
///
/// An explicit `path` must exist. Without one, the file in the user config
/// directory is used when present.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let mut config = match path {
        Some(path) => AppConfig::from_file(path)?,
        None => match AppConfig::config_path() {
            Some(default_path) if default_path.exists() => AppConfig::from_file(&default_path)?,
            _ => AppConfig::default(),
        },
    };

    config.apply_env();
    config.validate()?;
    debug!("Configuration: {:?}", config);
    Ok(config)
}
