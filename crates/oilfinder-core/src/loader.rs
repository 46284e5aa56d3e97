//! Loader: reads the source-of-truth JSON file once at startup.

use crate::{dataset::Dataset, error::LoadError};
use std::path::Path;

/// Read and validate the dataset at `path`.
///
/// Every failure is classified into a [`LoadError`]; callers decide whether to
/// fall back to an unavailable catalog.
pub fn load_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let bytes = std::fs::read(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            LoadError::Missing {
                path: path.to_path_buf(),
            }
        } else {
            LoadError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let value = serde_json::from_slice(&bytes).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = Dataset::from_value(value)?;
    tracing::info!(
        path = %path.display(),
        keys = dataset.len(),
        "loaded top-level keys from data file"
    );
    Ok(dataset)
}
