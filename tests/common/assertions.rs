//! Domain-specific assertion macros for oilfinder harnesses.
//!
//! These add context-rich failure messages that make it clear *which* lookup
//! rule was violated.

/// Assert that a detail record has a field with an expected value.
///
/// ```rust
/// assert_has_field!(record, "coolant_link", "https://acme.com/x");
/// ```
#[macro_export]
macro_rules! assert_has_field {
    ($record:expr, $key:expr, $value:tt) => {{
        let record: &oilfinder_core::DetailRecord = &$record;
        let key: &str = $key;
        let expected = serde_json::json!($value);
        match record.get(key) {
            Some(actual) if *actual == expected => {}
            Some(actual) => panic!(
                "assert_has_field! failed:\n  record[{:?}]\n  expected: {}\n  actual:   {}",
                key, expected, actual
            ),
            None => panic!(
                "assert_has_field! failed: field {:?} not found in record.\n  Available fields: {:?}",
                key,
                record.keys().collect::<Vec<_>>()
            ),
        }
    }};
}

/// Assert that a list of keys is sorted and free of duplicates.
#[macro_export]
macro_rules! assert_sorted_unique {
    ($list:expr) => {{
        let list: &[String] = &$list;
        for pair in list.windows(2) {
            if pair[0] >= pair[1] {
                panic!(
                    "assert_sorted_unique! failed: {:?} is not strictly before {:?}\n  list: {:?}",
                    pair[0], pair[1], list
                );
            }
        }
    }};
}

/// Assert that every record in a result set satisfies a predicate.
///
/// ```rust
/// assert_records_all!(hits, |r: &DetailRecord| r.contains_key("engine_oil"));
/// ```
#[macro_export]
macro_rules! assert_records_all {
    ($records:expr, $pred:expr) => {{
        let records: &[oilfinder_core::DetailRecord] = &$records;
        let pred = $pred;
        let failing: Vec<&oilfinder_core::DetailRecord> = records.iter().filter(|r| !pred(*r)).collect();
        if !failing.is_empty() {
            panic!(
                "assert_records_all! failed: {} of {} records did not satisfy predicate.\n  first: {:?}",
                failing.len(),
                records.len(),
                failing[0]
            );
        }
    }};
}

/// Model-year labels of a result set, for readable comparisons.
pub fn labels(records: &[oilfinder_core::DetailRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| {
            r.get("model_year_text")
                .and_then(|v| v.as_str())
                .unwrap_or("<unlabelled>")
                .to_string()
        })
        .collect()
}
