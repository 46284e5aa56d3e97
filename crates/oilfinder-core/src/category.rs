//! Category extractor: guesses top-level makes from raw compound keys.
//!
//! Compound keys look like `"<MAKE> <MODEL...>"`, but the make may itself be
//! two words (`"ALFA ROMEO GIULIA"`). The dataset does not say where the make
//! ends, so a category is derived from the leading tokens with a couple of
//! fixed lists.

use crate::dataset::Dataset;
use std::collections::BTreeSet;

/// Makes whose name is two words. Compared against uppercased tokens.
pub static TWO_TOKEN_CATEGORIES: phf::Set<&'static str> = phf::phf_set! {
    "ALFA ROMEO",
    "LAND ROVER",
    "ROLLS ROYCE",
    "ASTON MARTIN",
    "MERCEDES BENZ",
    "AUSTIN HEALEY",
};

/// Short make codes accepted despite failing the minimum-length check.
pub static SHORT_CATEGORY_CODES: phf::Set<&'static str> = phf::phf_set! {
    "AC",
    "MG",
};

const MIN_CATEGORY_LEN: usize = 2;

/// A compound key split into its derived category and the remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySplit<'a> {
    /// Uppercased category (one or two tokens).
    pub category: String,
    /// Remaining tokens of the original key, as stored.
    pub model_tokens: Vec<&'a str>,
}

impl CategorySplit<'_> {
    /// Remaining tokens joined by single spaces; empty if the key is only a
    /// category.
    pub fn model(&self) -> String {
        self.model_tokens.join(" ")
    }
}

/// Derive the category of one compound key, together with the tokens that
/// follow it. `None` when the key has no tokens or its first token is
/// rejected (all digits, or too short).
pub fn split_category(compound_key: &str) -> Option<CategorySplit<'_>> {
    let tokens: Vec<&str> = compound_key.split_whitespace().collect();
    let first = tokens.first()?.to_uppercase();

    if is_all_digits(&first)
        || (first.chars().count() < MIN_CATEGORY_LEN && !SHORT_CATEGORY_CODES.contains(first.as_str()))
    {
        return None;
    }

    if let Some(second) = tokens.get(1) {
        let two = format!("{first} {}", second.to_uppercase());
        if TWO_TOKEN_CATEGORIES.contains(two.as_str()) {
            return Some(CategorySplit {
                category: two,
                model_tokens: tokens[2..].to_vec(),
            });
        }
    }

    Some(CategorySplit {
        category: first,
        model_tokens: tokens[1..].to_vec(),
    })
}

/// Category of one compound key, if any.
pub fn category_of(compound_key: &str) -> Option<String> {
    split_category(compound_key).map(|split| split.category)
}

/// Sorted, deduplicated categories over every key in the dataset.
pub fn extract_categories(dataset: &Dataset) -> Vec<String> {
    let categories: BTreeSet<String> = dataset.keys().filter_map(category_of).collect();
    tracing::debug!(count = categories.len(), "derived categories");
    categories.into_iter().collect()
}

fn is_all_digits(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_numeric)
}
