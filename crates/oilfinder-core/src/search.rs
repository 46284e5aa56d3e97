//! Search engine: case-insensitive substring scan over every leaf record.
//!
//! Each leaf is described by the text `"<category> <compound key> <year
//! range>"` (the category is left out when the key has none). A record is a
//! hit when that text, lowercased, contains the lowercased query as one
//! contiguous substring. There is no tokenization: `"focus 2012"` and
//! `"2012 focus"` are different queries.

use crate::{
    category::category_of,
    dataset::{Dataset, Leaf},
    error::CatalogError,
};

/// Leaves whose synthesized text contains `query`, in dataset order.
///
/// The query is trimmed first; a blank query is rejected before scanning.
pub fn search<'a>(dataset: &'a Dataset, query: &str) -> Result<Vec<Leaf<'a>>, CatalogError> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Err(CatalogError::EmptyQuery);
    }

    let hits: Vec<Leaf<'a>> = dataset
        .leaves()
        .filter(|leaf| haystack(leaf).contains(&needle))
        .collect();
    tracing::debug!(query = %needle, hits = hits.len(), "search");
    Ok(hits)
}

/// Lowercased text a leaf is matched against.
pub fn haystack(leaf: &Leaf<'_>) -> String {
    let text = match category_of(leaf.compound_key) {
        Some(category) => format!("{category} {} {}", leaf.compound_key, leaf.year_range),
        None => format!("{} {}", leaf.compound_key, leaf.year_range),
    };
    text.to_lowercase()
}
