//! Link normalization and product search links.
//!
//! The source data stores retailer links inconsistently: some with a scheme,
//! some bare (`"shop.example/xl30"`), some with a stray leading colon
//! (`"://shop.example"`), and some replaced by a "consult your dealer" note.
//! [`normalize_links`] fixes these up on a copy of a record at read time.

use crate::types::DetailRecord;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Detail fields that hold a URL.
pub static LINK_FIELDS: phf::OrderedSet<&'static str> = phf::phf_ordered_set! {
    "engine_oil_link",
    "gearbox_oil_link",
    "diff_oil_link",
    "pas_fluid_link",
    "brake_fluid_link",
    "coolant_link",
};

/// Scheme prepended to bare links.
pub const CANONICAL_SCHEME: &str = "https://";

/// Lowercase prefixes that mark a value as already usable.
const PASSTHROUGH_PREFIXES: [&str; 3] = ["http://", "https://", "consult"];

/// Return a copy of `record` with every known link field normalized.
pub fn normalize_links(record: &DetailRecord) -> DetailRecord {
    let mut corrected = record.clone();
    for field in LINK_FIELDS.iter() {
        let Some(Value::String(raw)) = corrected.get(*field) else {
            continue;
        };
        if let Some(fixed) = normalize_link(raw) {
            corrected.insert((*field).to_string(), Value::String(fixed));
        }
    }
    corrected
}

/// Normalized form of one link value, or `None` if it should stay as stored.
pub fn normalize_link(raw: &str) -> Option<String> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    let lower = value.to_lowercase();
    if PASSTHROUGH_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return None;
    }
    Some(format!(
        "{CANONICAL_SCHEME}{}",
        value.trim_start_matches(':')
    ))
}

/// Retailer search link for an oil type, e.g. `"XL20W50"` →
/// `"<base>XL%2020%20W%2050"`. `None` for empty values and consult notes.
pub fn product_search_link(oil_type: &str, base_url: &str) -> Option<String> {
    let oil_type = oil_type.trim();
    if oil_type.is_empty() || oil_type.to_lowercase().contains("consult") {
        return None;
    }
    let query = spaced_oil_type(oil_type);
    Some(format!("{base_url}{}", urlencoding::encode(&query)))
}

/// Insert a space at every letter/digit boundary: `"XL20W50"` → `"XL 20 W 50"`.
pub fn spaced_oil_type(oil_type: &str) -> String {
    static LETTER_DIGIT: OnceLock<Regex> = OnceLock::new();
    static DIGIT_LETTER: OnceLock<Regex> = OnceLock::new();
    let letter_digit =
        LETTER_DIGIT.get_or_init(|| Regex::new(r"([a-zA-Z])(\d)").expect("valid regex"));
    let digit_letter =
        DIGIT_LETTER.get_or_init(|| Regex::new(r"(\d)([a-zA-Z])").expect("valid regex"));

    let once = letter_digit.replace_all(oil_type, "${1} ${2}");
    digit_letter.replace_all(&once, "${1} ${2}").into_owned()
}
