//! oilfinder-core: key matching and search engine for oilfinder.
//!
//! This crate loads the static make/model → year range → details dataset and
//! answers every query the front ends expose. All query operations are pure
//! reads over an immutable [`Catalog`].
//!
//! # Architecture
//!
//! ```text
//! loader ──► Dataset ──► category ──► Catalog ◄── config
//!                 │                       │
//!                 └── resolve / navigate / search / suggest / links
//! ```
//!
//! The catalog is built once at startup and shared read-only by every
//! request; nothing is mutated afterwards.

pub mod catalog;
pub mod category;
pub mod config;
pub mod dataset;
pub mod error;
pub mod links;
pub mod loader;
pub mod navigate;
pub mod resolve;
pub mod search;
pub mod suggest;
pub mod types;

pub use catalog::{Catalog, CatalogOptions};
pub use dataset::{Dataset, Leaf};
pub use error::{CatalogError, LoadError, NotFoundReason};
pub use types::{DataStatus, DetailRecord, Suggestions};
