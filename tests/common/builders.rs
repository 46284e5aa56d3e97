//! Test builders: ergonomic constructors for `Dataset` and `Catalog`.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use oilfinder_core::{Catalog, CatalogOptions, Dataset};
use serde_json::{json, Map, Value};

// ---------------------------------------------------------------------------
// DatasetBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`Dataset`] test fixtures. Keys keep insertion order.
///
/// # Example
///
/// ```rust
/// let ds = DatasetBuilder::new()
///     .record("FORD FOCUS", "2010-2015", json!({ "engine_oil": "5W-20" }))
///     .raw("FORD KA", json!("not a mapping"))
///     .build();
/// ```
#[derive(Default)]
pub struct DatasetBuilder {
    root: Map<String, Value>,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a compound key with an empty year-range mapping (unless present).
    pub fn key(mut self, compound_key: &str) -> Self {
        self.root
            .entry(compound_key.to_string())
            .or_insert_with(|| json!({}));
        self
    }

    /// Add many keys at once.
    pub fn keys<'a>(self, keys: impl IntoIterator<Item = &'a str>) -> Self {
        keys.into_iter().fold(self, Self::key)
    }

    /// Add one leaf record under `compound_key` → `year_range`.
    pub fn record(mut self, compound_key: &str, year_range: &str, details: Value) -> Self {
        let years = self
            .root
            .entry(compound_key.to_string())
            .or_insert_with(|| json!({}));
        years
            .as_object_mut()
            .expect("record() on a key holding a non-object value")
            .insert(year_range.to_string(), details);
        self
    }

    /// Store an arbitrary value at a compound key (for malformed entries).
    pub fn raw(mut self, compound_key: &str, value: Value) -> Self {
        self.root.insert(compound_key.to_string(), value);
        self
    }

    pub fn build(self) -> Dataset {
        Dataset::from_value(Value::Object(self.root)).expect("builder root is always an object")
    }

    pub fn catalog(self) -> Catalog {
        self.catalog_with(CatalogOptions::default())
    }

    pub fn catalog_with(self, options: CatalogOptions) -> Catalog {
        Catalog::new(self.build(), "memory", options)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// A catalog whose keys all hold empty year mappings.
pub fn catalog_of_keys(keys: &[&str]) -> Catalog {
    DatasetBuilder::new().keys(keys.iter().copied()).catalog()
}

/// A detail record with one engine oil and optional extra fields.
pub fn details(engine_oil: &str, extra: &[(&str, &str)]) -> Value {
    let mut record = Map::new();
    record.insert("engine_oil".into(), json!(engine_oil));
    for (k, v) in extra {
        record.insert((*k).into(), json!(v));
    }
    Value::Object(record)
}

/// Build a synthetic dataset of `makes × models × years` leaves, for scale
/// and property tests. Keys look like `"MAKE3 MODEL7"`.
pub fn build_grid(makes: usize, models: usize, years: usize) -> Dataset {
    let mut builder = DatasetBuilder::new();
    for m in 0..makes {
        for n in 0..models {
            let key = format!("MAKE{m} MODEL{n}");
            for y in 0..years {
                let from = 1960 + y * 5;
                builder = builder.record(
                    &key,
                    &format!("{from}-{}", from + 4),
                    json!({ "engine_oil": format!("{}W-{}", 5 + y % 3 * 5, 30 + n % 3 * 10) }),
                );
            }
        }
    }
    builder.build()
}
