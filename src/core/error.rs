//! Error types shared by the catalog, dataset, advisor and report modules

use thiserror::Error;

/// Errors raised by the advisor library
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Underlying filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV input or failed CSV write
    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    /// Catalog file is not valid TOML for the expected schema
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] toml::de::Error),

    /// Catalog parsed but breaks one of its invariants
    #[error("Invalid catalog: {message}")]
    InvalidCatalog {
        /// Human-readable description of every violation found
        message: String,
    },

    /// Program dataset is unusable (e.g. required column missing)
    #[error("Dataset error: {message}")]
    Dataset {
        /// What is wrong with the dataset
        message: String,
    },

    /// Student selection rejected before scoring
    #[error("Validation error: {message}")]
    Validation {
        /// Why the selection was rejected
        message: String,
    },

    /// HTML report template failed to render
    #[error("Report rendering failed: {0}")]
    Template(#[from] askama::Error),
}

impl AdvisorError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub(crate) fn dataset(message: impl Into<String>) -> Self {
        Self::Dataset {
            message: message.into(),
        }
    }
}

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, AdvisorError>;
