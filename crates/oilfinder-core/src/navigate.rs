//! Leaf navigator: exact-key lookups below a compound key.

use crate::{
    dataset::{json_kind, Dataset},
    error::{CatalogError, NotFoundReason},
    types::DetailRecord,
};
use serde_json::Value;

/// Sorted year-range keys under `compound_key`. Empty if the key is absent or
/// its value is not an object.
pub fn year_ranges(dataset: &Dataset, compound_key: &str) -> Vec<String> {
    match dataset.get(compound_key) {
        Some(Value::Object(years)) => {
            let mut keys: Vec<String> = years.keys().cloned().collect();
            keys.sort();
            keys
        }
        Some(other) => {
            tracing::warn!(
                compound_key,
                found = json_kind(other),
                "model entry is not an object; cannot list year ranges"
            );
            Vec::new()
        }
        None => {
            tracing::debug!(compound_key, "no such model key");
            Vec::new()
        }
    }
}

/// The detail record stored at `compound_key` → `year_range`, as stored.
pub fn details<'a>(
    dataset: &'a Dataset,
    compound_key: &str,
    year_range: &str,
) -> Result<&'a DetailRecord, CatalogError> {
    let not_found = |reason: NotFoundReason| {
        tracing::debug!(compound_key, year_range, %reason, "details not found");
        CatalogError::NotFound {
            model_key: compound_key.to_string(),
            year_range: year_range.to_string(),
            reason,
        }
    };

    let years = match dataset.get(compound_key) {
        Some(Value::Object(years)) => years,
        Some(_) => return Err(not_found(NotFoundReason::MalformedModel)),
        None => return Err(not_found(NotFoundReason::MissingModel)),
    };
    match years.get(year_range) {
        Some(Value::Object(record)) => Ok(record),
        Some(_) => Err(not_found(NotFoundReason::MalformedDetails)),
        None => Err(not_found(NotFoundReason::MissingYearRange)),
    }
}
