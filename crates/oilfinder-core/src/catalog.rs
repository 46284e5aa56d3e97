//! Catalog: the read-only query service built once at startup.
//!
//! A [`Catalog`] owns the [`Dataset`], the category list derived from it, and
//! the options every query needs. It is never mutated after construction, so
//! request handlers share one instance behind an `Arc` without locking.
//!
//! When the source file cannot be loaded the catalog is built in the
//! unavailable state: every list operation returns an empty list and every
//! detail lookup returns not found.

use crate::{
    category::extract_categories,
    config::Config,
    dataset::Dataset,
    error::CatalogError,
    links::{normalize_links, product_search_link},
    loader::load_dataset,
    navigate, resolve, search,
    suggest::{self, SuggestOptions},
    types::{DataStatus, DetailRecord, Suggestions},
};

/// Per-query behaviour, normally taken from [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogOptions {
    pub suggest: SuggestOptions,
    /// Normalize links in bulk search hits too.
    pub normalize_search_links: bool,
    pub product_search_url: String,
}

impl Default for CatalogOptions {
    fn default() -> Self {
        Self::from(&Config::defaults())
    }
}

impl From<&Config> for CatalogOptions {
    fn from(cfg: &Config) -> Self {
        Self {
            suggest: cfg.suggest_options(),
            normalize_search_links: cfg.search.normalize_links,
            product_search_url: cfg.links.product_search_url.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    dataset: Dataset,
    categories: Vec<String>,
    status: DataStatus,
    options: CatalogOptions,
}

impl Catalog {
    /// Build a ready catalog over an already-validated dataset.
    pub fn new(dataset: Dataset, source: impl Into<String>, options: CatalogOptions) -> Self {
        let categories = extract_categories(&dataset);
        let status = DataStatus::Ready {
            keys: dataset.len(),
            categories: categories.len(),
            source: source.into(),
            loaded_at: chrono::Utc::now(),
        };
        tracing::info!(%status, "catalog ready");
        Self {
            dataset,
            categories,
            status,
            options,
        }
    }

    /// A catalog with no data. Every query degrades to an empty result.
    pub fn unavailable(reason: impl Into<String>, options: CatalogOptions) -> Self {
        let reason = reason.into();
        tracing::error!(%reason, "dataset unavailable; serving empty results");
        Self {
            dataset: Dataset::empty(),
            categories: Vec::new(),
            status: DataStatus::Unavailable { reason },
            options,
        }
    }

    /// Load the configured data file. Load failures are logged and produce an
    /// unavailable catalog rather than an error.
    pub fn from_config(config: &Config) -> Self {
        let options = CatalogOptions::from(config);
        let path = &config.data.path;
        match load_dataset(path) {
            Ok(dataset) => Self::new(dataset, path.display().to_string(), options),
            Err(err) => Self::unavailable(err.to_string(), options),
        }
    }

    pub fn status(&self) -> &DataStatus {
        &self.status
    }

    pub fn options(&self) -> &CatalogOptions {
        &self.options
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Sorted, deduplicated categories, computed once at construction.
    pub fn list_categories(&self) -> &[String] {
        &self.categories
    }

    /// Compound keys filed under `category`.
    pub fn list_children(&self, category: &str) -> Vec<String> {
        resolve::resolve_children(&self.dataset, category)
    }

    /// Sorted year-range keys of a compound key (exact match).
    pub fn list_year_ranges(&self, compound_key: &str) -> Vec<String> {
        navigate::year_ranges(&self.dataset, compound_key)
    }

    /// One detail record with its link fields normalized. The stored record
    /// is left untouched.
    pub fn get_details(
        &self,
        compound_key: &str,
        year_range: &str,
    ) -> Result<DetailRecord, CatalogError> {
        navigate::details(&self.dataset, compound_key, year_range).map(normalize_links)
    }

    /// Every record whose key text contains `query`, in dataset order.
    ///
    /// Hits are returned as stored unless `normalize_search_links` is set.
    pub fn search(&self, query: &str) -> Result<Vec<DetailRecord>, CatalogError> {
        let hits = search::search(&self.dataset, query)?;
        Ok(hits
            .into_iter()
            .map(|leaf| {
                if self.options.normalize_search_links {
                    normalize_links(leaf.record)
                } else {
                    leaf.record.clone()
                }
            })
            .collect())
    }

    /// Type-ahead suggestions for makes and models.
    pub fn suggest(&self, query: &str) -> Suggestions {
        suggest::suggest(&self.dataset, &self.categories, query, self.options.suggest)
    }

    /// Retailer search link for an oil type.
    pub fn product_link(&self, oil_type: &str) -> Option<String> {
        product_search_link(oil_type, &self.options.product_search_url)
    }
}
