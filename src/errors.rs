use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Errors that can occur while preparing or encoding a life table
#[derive(Error, Debug, Clone)]
pub enum LifeTableError {
    /// Birthdate text did not match any accepted format
    #[error("Invalid birthdate '{input}': expected YYYY-MM-DD, DD.MM.YYYY, DD/MM/YYYY or MM/DD/YYYY")]
    InvalidBirthdate { input: Arc<String> },

    /// Birthdate lies after the reference day
    #[error("Birthdate {birthdate} is in the future (today is {today})")]
    BirthdateInFuture {
        birthdate: chrono::NaiveDate,
        today: chrono::NaiveDate,
    },

    /// Error when a catalog file (locales or quotes) cannot be read
    #[error("Failed to read catalog file {path}: {message}")]
    CatalogRead { path: PathBuf, message: Arc<String> },

    /// Error when a catalog file is not valid JSON of the expected shape
    #[error("Invalid catalog file {path}: {message}")]
    CatalogParse { path: PathBuf, message: Arc<String> },

    /// Error when a subscriber list cannot be read or parsed
    #[error("Invalid subscriber list {path}: {message}")]
    SubscriberList { path: PathBuf, message: Arc<String> },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigurationError(Arc<String>),

    /// Error when the finished canvas cannot be encoded
    #[error("PNG encoding failed: {0}")]
    EncodeError(Arc<String>),

    /// Error when writing a rendered image
    #[error("Failed to write file {path}: {message}")]
    FileWriteError { path: PathBuf, message: Arc<String> },
}

impl LifeTableError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::ConfigurationError(Arc::new(message.into()))
    }
}

impl From<image::ImageError> for LifeTableError {
    fn from(error: image::ImageError) -> Self {
        LifeTableError::EncodeError(Arc::new(error.to_string()))
    }
}

/// Type alias for Result with `LifeTableError`
pub type Result<T> = std::result::Result<T, LifeTableError>;
