//! Dataset: the immutable make/model → year range → details mapping.
//!
//! The dataset is a thin wrapper over the parsed JSON root object. Keys are
//! stored exactly as they appear in the source file; nothing here ever
//! normalizes or mutates them. Iteration follows the source file's order.

use crate::{error::LoadError, types::DetailRecord};
use serde_json::{Map, Value};

/// The loaded hierarchical mapping, validated to be an object at the root.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    entries: Map<String, Value>,
}

impl Dataset {
    /// An empty dataset. Used for the unavailable state.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate a parsed JSON document as a dataset root.
    ///
    /// Only the root shape is checked. Entries of the wrong shape further down
    /// are kept and skipped by whichever traversal meets them.
    pub fn from_value(value: Value) -> Result<Self, LoadError> {
        match value {
            Value::Object(entries) => Ok(Self { entries }),
            other => Err(LoadError::NotAMapping {
                found: json_kind(&other),
            }),
        }
    }

    /// Number of top-level compound keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Compound keys in file order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Raw value stored at a compound key, whatever its shape.
    pub fn get(&self, compound_key: &str) -> Option<&Value> {
        self.entries.get(compound_key)
    }

    /// Year-range mapping for a compound key, or `None` if absent or not an
    /// object.
    pub fn year_ranges(&self, compound_key: &str) -> Option<&Map<String, Value>> {
        self.entries.get(compound_key).and_then(Value::as_object)
    }

    /// Every well-formed `(compound key, year range, record)` leaf in file
    /// order. Non-object values at either level are skipped.
    pub fn leaves(&self) -> impl Iterator<Item = Leaf<'_>> {
        self.entries.iter().flat_map(|(key, years)| {
            years
                .as_object()
                .into_iter()
                .flat_map(move |years| {
                    years.iter().filter_map(move |(year_range, details)| {
                        details.as_object().map(|record| Leaf {
                            compound_key: key,
                            year_range,
                            record,
                        })
                    })
                })
        })
    }
}

/// One leaf of the dataset, borrowed from it.
#[derive(Debug, Clone, Copy)]
pub struct Leaf<'a> {
    pub compound_key: &'a str,
    pub year_range: &'a str,
    pub record: &'a DetailRecord,
}

/// JSON type name for diagnostics.
pub(crate) fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn non_object_root_is_rejected() {
        let err = Dataset::from_value(json!(["FORD FOCUS"])).unwrap_err();
        assert!(matches!(err, LoadError::NotAMapping { found: "array" }));
    }

    #[test]
    fn leaves_skip_malformed_entries() {
        let ds = Dataset::from_value(json!({
            "FORD FOCUS": { "2010-2015": { "engine_oil": "5W-30" }, "bad": 3 },
            "FORD KA": "not a mapping",
            "VW GOLF": { "2004-2008": { "engine_oil": "5W-40" } }
        }))
        .unwrap();

        let leaves: Vec<_> = ds
            .leaves()
            .map(|l| (l.compound_key, l.year_range))
            .collect();
        assert_eq!(
            leaves,
            vec![("FORD FOCUS", "2010-2015"), ("VW GOLF", "2004-2008")]
        );
    }

    #[test]
    fn keys_keep_file_order() {
        let ds = Dataset::from_value(json!({ "VW GOLF": {}, "AUDI A3": {}, "BMW 320": {} })).unwrap();
        assert_eq!(ds.keys().collect::<Vec<_>>(), vec!["VW GOLF", "AUDI A3", "BMW 320"]);
    }
}
