//! Suggestion engine: type-ahead matches over makes and model names.
//!
//! Independent of the search engine: it looks at keys only, never at leaf
//! records. Both result lists are sorted and capped separately.

use crate::{category::split_category, dataset::Dataset, types::Suggestions};
use std::collections::BTreeSet;

/// Tuning knobs, normally taken from `[suggest]` in the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestOptions {
    /// Maximum entries per list.
    pub limit: usize,
    /// Shorter (trimmed) queries get no suggestions.
    pub min_query_len: usize,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            limit: 5,
            min_query_len: 2,
        }
    }
}

/// Categories and `"<category> <model>"` strings containing `query`.
pub fn suggest(
    dataset: &Dataset,
    categories: &[String],
    query: &str,
    options: SuggestOptions,
) -> Suggestions {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || needle.chars().count() < options.min_query_len {
        return Suggestions::default();
    }

    let matching_categories: BTreeSet<&str> = categories
        .iter()
        .filter(|c| c.to_lowercase().contains(&needle))
        .map(String::as_str)
        .collect();

    let matching_models: BTreeSet<String> = dataset
        .keys()
        .filter_map(split_category)
        .filter_map(|split| {
            let model = split.model();
            (!model.is_empty() && model.to_lowercase().contains(&needle))
                .then(|| format!("{} {model}", split.category))
        })
        .collect();

    let suggestions = Suggestions {
        categories: matching_categories
            .into_iter()
            .take(options.limit)
            .map(str::to_owned)
            .collect(),
        models: matching_models.into_iter().take(options.limit).collect(),
    };
    tracing::debug!(
        query = %needle,
        categories = suggestions.categories.len(),
        models = suggestions.models.len(),
        "suggest"
    );
    suggestions
}
