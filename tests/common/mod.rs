//! Shared test utilities for oilfinder integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file.

pub mod assertions;
pub mod builders;
pub mod fixtures;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;

use oilfinder_core::{Catalog, CatalogOptions, Dataset};

/// Catalog over [`sample_dataset`] with default options.
pub fn sample_catalog() -> Catalog {
    sample_catalog_with(CatalogOptions::default())
}

pub fn sample_catalog_with(options: CatalogOptions) -> Catalog {
    let dataset = Dataset::from_value(sample_dataset()).expect("sample dataset is an object");
    Catalog::new(dataset, "sample", options)
}
