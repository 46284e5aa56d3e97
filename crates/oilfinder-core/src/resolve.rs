//! Child resolver: maps a category to the compound keys filed under it.
//!
//! Matching is by prefix on the uppercased key text:
//!
//! - A multi-word category (`"ALFA ROMEO"`) matches any key starting with it,
//!   except the bare category key itself.
//! - A single-word category (`"FORD"`) matches keys starting with `"FORD "`,
//!   plus a key exactly equal to `"FORD"`. The trailing space keeps
//!   `"FORDSON TRACTOR"` out.
//!
//! Keys that are only the category name are then dropped, unless doing so
//! would leave nothing.

use crate::dataset::Dataset;
use std::collections::BTreeSet;

/// Compound keys belonging to `category`, sorted and deduplicated, with their
/// original spelling.
pub fn resolve_children(dataset: &Dataset, category: &str) -> Vec<String> {
    let wanted = category.to_uppercase();
    let single_prefix = format!("{wanted} ");
    let multi_token = wanted.contains(' ');

    let matches: BTreeSet<&str> = dataset
        .keys()
        .filter(|key| {
            let key_upper = key.to_uppercase();
            if multi_token {
                key_upper.starts_with(&wanted) && key_upper != wanted
            } else {
                key_upper.starts_with(&single_prefix) || key_upper == wanted
            }
        })
        .collect();

    let filtered: BTreeSet<&str> = matches
        .iter()
        .copied()
        .filter(|key| key.trim().to_uppercase() != wanted)
        .collect();

    let chosen = if !filtered.is_empty() && filtered.len() < matches.len() {
        filtered
    } else {
        if !matches.is_empty() && filtered.is_empty() {
            tracing::warn!(
                category,
                ?matches,
                "only keys equal to the category matched; returning them as-is"
            );
        }
        matches
    };

    chosen.into_iter().map(str::to_owned).collect()
}
