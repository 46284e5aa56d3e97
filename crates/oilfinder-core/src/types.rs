//! Core types for oilfinder-core.
//!
//! This module defines the fundamental data structures shared across the
//! engine: the [`DetailRecord`] leaf type, the [`Suggestions`] pair returned
//! by the suggestion engine, and the [`DataStatus`] describing whether the
//! dataset could be loaded.

use serde::Serialize;

/// A single fluid-spec record: field name → scalar value.
///
/// Values are kept as raw JSON so that records round-trip to clients exactly
/// as they are stored in the source file.
pub type DetailRecord = serde_json::Map<String, serde_json::Value>;

/// Result of a suggestion lookup. The two lists are never merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Suggestions {
    /// Categories (makes) whose name contains the query.
    pub categories: Vec<String>,
    /// `"<category> <model>"` strings whose model portion contains the query.
    pub models: Vec<String>,
}

impl Suggestions {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.models.is_empty()
    }
}

/// Load state of the dataset backing a [`Catalog`](crate::Catalog).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DataStatus {
    /// The source file was read and validated.
    Ready {
        /// Number of top-level compound keys.
        keys: usize,
        /// Number of derived categories.
        categories: usize,
        /// Where the data came from (file path, or `"memory"`).
        source: String,
        loaded_at: chrono::DateTime<chrono::Utc>,
    },
    /// Nothing could be loaded; every query degrades to an empty result.
    Unavailable {
        /// Human-readable cause, as logged at startup.
        reason: String,
    },
}

impl DataStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, DataStatus::Ready { .. })
    }
}

impl std::fmt::Display for DataStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataStatus::Ready {
                keys,
                categories,
                source,
                ..
            } => write!(f, "ready ({keys} keys, {categories} categories from {source})"),
            DataStatus::Unavailable { reason } => write!(f, "unavailable: {reason}"),
        }
    }
}
