//! Error types for oilfinder-core.
//!
//! [`LoadError`] describes why the source file could not become a dataset.
//! It is never fatal: the catalog falls back to its unavailable state.
//! [`CatalogError`] is what per-request query operations can return.

use std::path::PathBuf;

/// Why the source-of-truth file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("data file {} not found", path.display())]
    Missing { path: PathBuf },

    #[error("could not read data file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not decode data file {}: invalid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("root of data file is a JSON {found}, expected an object")]
    NotAMapping { found: &'static str },
}

/// Why a detail lookup produced nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotFoundReason {
    /// No entry for the model key.
    MissingModel,
    /// The model key exists but its value is not an object.
    MalformedModel,
    /// No entry for the year-range key under the model.
    MissingYearRange,
    /// The year-range key exists but its value is not an object.
    MalformedDetails,
}

impl std::fmt::Display for NotFoundReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotFoundReason::MissingModel => write!(f, "no such model"),
            NotFoundReason::MalformedModel => write!(f, "model entry is not an object"),
            NotFoundReason::MissingYearRange => write!(f, "no such year range"),
            NotFoundReason::MalformedDetails => write!(f, "details entry is not an object"),
        }
    }
}

/// Errors returned by [`Catalog`](crate::Catalog) query operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("details not found for {model_key:?} / {year_range:?}: {reason}")]
    NotFound {
        model_key: String,
        year_range: String,
        reason: NotFoundReason,
    },

    #[error("search query must not be empty")]
    EmptyQuery,
}

impl CatalogError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound { .. })
    }
}
